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

//! Boundary contract for the renderer (C9): this crate does not rasterize
//! anything, but it guarantees enough structure in
//! [`crate::result::TranslationResult`] for a renderer to do so correctly.
//!
//! - `adjusted_text` uses `\n` as the sole line separator; a renderer treats
//!   each segment as exactly one typeset line.
//! - `adjusted_font.size` is already clamped to `>= 1.0`; the family may not
//!   exist on the renderer, which must perform its own fallback and record
//!   a [`RendererWarning::FontFallback`].
//! - `adjusted_bbox` reflects only the vertical expansion this crate
//!   permits. A renderer positions lines starting at the box's top edge and
//!   advancing downward by [`line_advance`]; any line that would fall below
//!   the box bottom is dropped and reported via
//!   [`RendererWarning::LineOverflow`].

/// Warnings a renderer is expected to produce on its own side while
/// consuming a [`crate::result::TranslationResult`]. This crate never
/// constructs these -- they document the contract, they are not emitted by
/// the engine itself.
#[derive(Debug, Clone, PartialEq)]
pub enum RendererWarning {
    /// The requested font family was not available; the renderer fell back
    /// to a substitute, matching weight/style where possible.
    FontFallback {
        /// The family that could not be found.
        requested_family: String,
    },
    /// One or more trailing lines did not fit within the bounding box and
    /// were dropped.
    LineOverflow {
        /// How many lines were dropped.
        dropped_lines: usize,
    },
}

/// Splits `adjusted_text` into the lines a renderer should typeset, in
/// order. `adjusted_text` is expected to use `\n` as its sole separator.
pub fn lines(adjusted_text: &str) -> impl Iterator<Item = &str> {
    adjusted_text.split('\n')
}

/// Vertical distance between the baseline of one line and the next, given
/// the font size actually used and the configured line-height factor.
pub fn line_advance(font_size: f64, line_height_factor: f64) -> f64 {
    font_size * line_height_factor
}

/// How many of `total_lines` actually fit within `bbox_height`, advancing by
/// [`line_advance`] per line. Lines beyond this count are the renderer's to
/// drop and report via [`RendererWarning::LineOverflow`].
pub fn visible_line_count(
    total_lines: usize,
    bbox_height: f64,
    font_size: f64,
    line_height_factor: f64,
) -> usize {
    let advance = line_advance(font_size, line_height_factor);
    if advance <= 0.0 {
        return total_lines;
    }
    let fits = (bbox_height / advance).floor().max(0.0) as usize;
    fits.min(total_lines)
}

#[cfg(test)]
#[path = "renderer_hints_test.rs"]
mod tests;
