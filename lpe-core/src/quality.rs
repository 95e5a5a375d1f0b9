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

//! Quality scorer (C5): a scalar in `[0, 1]` summarizing how much a chosen
//! strategy cost in fidelity.

use crate::{
    analysis::FitAnalysis,
    config::EngineConfig,
    strategy::{LayoutStrategy, StrategyType},
};

/// Scores `strategy`, given the `analysis` it was selected from, starting at
/// `1.0` and applying the penalties/bonus below. `NONE` earns `none_bonus`
/// only when the translation is no longer than the original; a `NONE`
/// block whose translation expanded is penalized instead, so that a score
/// of `1.0` implies both `strategy = NONE` and `length_ratio <= 1`.
pub fn score(
    analysis: &FitAnalysis,
    strategy: &LayoutStrategy,
    config: &EngineConfig,
) -> f64 {
    let mut value = 1.0;

    if matches!(
        strategy.strategy_type,
        StrategyType::FontScale | StrategyType::Hybrid
    ) {
        value -= config.scale_penalty_weight * (1.0 - strategy.font_scale).abs();
    }

    if matches!(
        strategy.strategy_type,
        StrategyType::TextWrap | StrategyType::Hybrid
    ) {
        let excess = (strategy.wrap_lines as f64) - 1.0;
        let penalty = if analysis.max_lines > 1 {
            excess / ((analysis.max_lines as f64) - 1.0)
        } else {
            excess.clamp(0.0, 1.0)
        };
        value -= config.wrap_penalty_weight * penalty;
    }

    if strategy.strategy_type == StrategyType::None {
        if analysis.length_ratio > 1.0 {
            // An unmitigated NONE still fits the box by the fit analyzer's
            // own measure, but a translation longer than the original
            // shouldn't be scored as if nothing changed.
            value -= config.none_expansion_penalty_weight
                * (analysis.length_ratio - 1.0).min(1.0);
        } else {
            value += config.none_bonus;
        }
    }

    let clamped = value.clamp(0.0, 1.0);
    tracing::trace!(clamped, "layout quality scored");
    clamped
}

#[cfg(test)]
#[path = "quality_test.rs"]
mod tests;
