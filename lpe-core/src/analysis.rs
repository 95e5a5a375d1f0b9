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

//! Fit analyzer (C2): a deterministic, dependency-free summary of whether a
//! translated string fits a bounding box at a given font size.

use serde::{Deserialize, Serialize};

use crate::{config::EngineConfig, geometry::BoundingBox};

/// Deterministic summary of whether and how a translated string fits inside
/// a bounding box at a given font size.
///
/// This is a heuristic, not a real font-shaping measurement: the downstream
/// renderer performs precise measurement and may emit its own overflow
/// warnings (see [`crate::renderer_hints`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitAnalysis {
    /// `len(translated) / max(1, len(original))`.
    pub length_ratio: f64,
    /// Estimated single-line width of the translated text, in points.
    pub one_line_width: f64,
    /// `floor(bbox.height / (font.size * line_height_factor))`, clamped to
    /// `>= 1`.
    pub max_lines: u32,
    /// `ceil(one_line_width / bbox.width)`, clamped to `>= 1`.
    pub lines_needed: u32,
    /// Whether the translated text fits on a single line without any
    /// adjustment.
    pub can_fit_without_changes: bool,
    /// `clamp(bbox.width / one_line_width, 0, 1)`; `1.0` if
    /// `one_line_width == 0`.
    pub required_scale_for_single_line: f64,
    /// Whether `required_scale_for_single_line` lies within the configured
    /// font-scale bounds.
    pub can_scale_to_single_line: bool,
    /// Whether wrapping the translated text would fit within `max_lines`.
    pub can_wrap_within_height: bool,
}

/// Computes a [`FitAnalysis`] for `translated_text` against `original_text`,
/// `bbox`, and `font_size` (points).
///
/// `font_size` is passed separately from a full `FontInfo` because the
/// orchestrator always analyzes against the *original* font size -- scaling
/// decisions are expressed relative to it, not to any already-adjusted size.
pub fn analyze(
    original_text: &str,
    translated_text: &str,
    bbox: &BoundingBox,
    font_size: f64,
    config: &EngineConfig,
) -> FitAnalysis {
    let original_len = original_text.chars().count() as f64;
    let translated_len = translated_text.chars().count() as f64;
    let length_ratio = translated_len / original_len.max(1.0);

    let one_line_width =
        font_size * config.average_char_width_em * translated_len;
    let line_height = font_size * config.line_height_factor;
    let max_lines = ((bbox.height / line_height).floor() as u32).max(1);

    let (lines_needed, can_fit_without_changes) = if bbox.width <= 0.0 {
        (translated_len.max(1.0) as u32, false)
    } else {
        let needed = (one_line_width / bbox.width).ceil().max(1.0) as u32;
        (needed, one_line_width <= bbox.width)
    };

    let required_scale_for_single_line = if one_line_width == 0.0 {
        1.0
    } else {
        (bbox.width / one_line_width).clamp(0.0, 1.0)
    };
    let can_scale_to_single_line = required_scale_for_single_line
        >= config.font_scale_min
        && required_scale_for_single_line <= config.font_scale_max;
    // A degenerate height means there is no room to wrap into, regardless of
    // how few lines the text would otherwise need (spec §4.2 edge cases).
    let can_wrap_within_height =
        bbox.height > 0.0 && lines_needed <= max_lines;

    let analysis = FitAnalysis {
        length_ratio,
        one_line_width,
        max_lines,
        lines_needed,
        can_fit_without_changes,
        required_scale_for_single_line,
        can_scale_to_single_line,
        can_wrap_within_height,
    };
    tracing::trace!(?analysis, "computed fit analysis");
    analysis
}

#[cfg(test)]
#[path = "analysis_test.rs"]
mod tests;
