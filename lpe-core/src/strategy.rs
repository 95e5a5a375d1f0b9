// Copyright 2025 Monotype Imaging Inc.
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

//! Strategy selector (C3): maps a [`FitAnalysis`] onto one of the four
//! layout strategies using a strict priority order.

use serde::{Deserialize, Serialize};

use crate::{analysis::FitAnalysis, config::EngineConfig};

/// The four layout strategies, in strict priority order (spec §4.3,
/// testable property 4): `None > FontScale > TextWrap > Hybrid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyType {
    /// The translation fits without any change.
    None,
    /// The font is scaled down to fit on a single line.
    FontScale,
    /// The text is wrapped across multiple lines at the original size.
    TextWrap,
    /// Both font scaling and wrapping are combined.
    Hybrid,
}

/// A chosen layout strategy and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutStrategy {
    /// Which of the four strategies was selected.
    pub strategy_type: StrategyType,
    /// Font scale factor to apply. `1.0` unless scaling.
    pub font_scale: f64,
    /// Number of lines to wrap into. `1` unless wrapping.
    pub wrap_lines: u32,
}

impl LayoutStrategy {
    fn none() -> Self {
        Self {
            strategy_type: StrategyType::None,
            font_scale: 1.0,
            wrap_lines: 1,
        }
    }

    fn font_scale(scale: f64) -> Self {
        Self {
            strategy_type: StrategyType::FontScale,
            font_scale: scale,
            wrap_lines: 1,
        }
    }

    fn text_wrap(wrap_lines: u32) -> Self {
        Self {
            strategy_type: StrategyType::TextWrap,
            font_scale: 1.0,
            wrap_lines,
        }
    }

    fn hybrid(scale: f64, wrap_lines: u32) -> Self {
        Self {
            strategy_type: StrategyType::Hybrid,
            font_scale: scale,
            wrap_lines,
        }
    }
}

/// Coarse step used when grid-searching for a hybrid scale (spec §4.3 step
/// 4, and Open Question 1: deterministic, no finer search required).
const HYBRID_SCALE_STEP: f64 = 0.01;

/// Selects a [`LayoutStrategy`] for `analysis`, following the strict
/// priority order `NONE -> FONT_SCALE -> TEXT_WRAP -> HYBRID`.
pub fn decide(
    analysis: &FitAnalysis,
    translated_len: usize,
    font_size: f64,
    bbox_width: f64,
    config: &EngineConfig,
) -> LayoutStrategy {
    let strategy = if analysis.can_fit_without_changes {
        LayoutStrategy::none()
    } else if analysis.can_scale_to_single_line {
        LayoutStrategy::font_scale(analysis.required_scale_for_single_line)
    } else if analysis.can_wrap_within_height {
        LayoutStrategy::text_wrap(analysis.lines_needed)
    } else {
        hybrid_strategy(analysis, translated_len, font_size, bbox_width, config)
    };
    tracing::debug!(?strategy, "strategy selected");
    strategy
}

/// Finds the largest scale in `[font_scale_min, 1.0]` (stepping by
/// [`HYBRID_SCALE_STEP`]) that brings `lines_needed` within `max_lines`,
/// falling back to plain wrapping at `max_lines` if no such scale exists.
fn hybrid_strategy(
    analysis: &FitAnalysis,
    translated_len: usize,
    font_size: f64,
    bbox_width: f64,
    config: &EngineConfig,
) -> LayoutStrategy {
    if bbox_width <= 0.0 || translated_len == 0 {
        return LayoutStrategy::text_wrap(analysis.max_lines);
    }

    let translated_len = translated_len as f64;
    let steps =
        ((1.0 - config.font_scale_min) / HYBRID_SCALE_STEP).round() as i64;
    for step in 0..=steps {
        let scale = 1.0 - (step as f64) * HYBRID_SCALE_STEP;
        if scale < config.font_scale_min {
            break;
        }
        let chars_per_line = ((bbox_width
            / (font_size * scale * config.average_char_width_em))
            .floor())
        .max(1.0);
        let lines_required =
            (translated_len / chars_per_line).ceil().max(1.0) as u32;
        tracing::trace!(
            scale,
            chars_per_line,
            lines_required,
            "hybrid grid search candidate"
        );
        if lines_required <= analysis.max_lines {
            return LayoutStrategy::hybrid(scale, lines_required);
        }
    }
    LayoutStrategy::text_wrap(analysis.max_lines)
}

#[cfg(test)]
#[path = "strategy_test.rs"]
mod tests;
