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

//! Adjustment applicator (C4): turns a chosen [`LayoutStrategy`] into
//! concrete adjusted text, font, and bounding box.

use crate::{
    config::EngineConfig,
    geometry::{BoundingBox, FontInfo},
    strategy::{LayoutStrategy, StrategyType},
};

/// Minimum font size the renderer is guaranteed to honor (spec §3,
/// `FontInfo` invariants).
const RENDERER_MIN_FONT_SIZE: f64 = 1.0;

/// Result of applying a [`LayoutStrategy`] to a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjustment {
    /// The text to render, with `\n` separating wrapped lines (spec §4.9:
    /// `\n` is the sole line separator a renderer should expect).
    pub adjusted_text: String,
    /// The font to render with, after any scaling.
    pub adjusted_font: FontInfo,
    /// The bounding box to render into, after any vertical expansion.
    pub adjusted_bbox: BoundingBox,
}

/// Applies `strategy` to `text`, producing adjusted text/font/bbox.
pub fn apply(
    text: &str,
    bbox: &BoundingBox,
    font: &FontInfo,
    strategy: &LayoutStrategy,
    config: &EngineConfig,
) -> Adjustment {
    if strategy.strategy_type == StrategyType::None {
        return Adjustment {
            adjusted_text: text.to_string(),
            adjusted_font: font.clone(),
            adjusted_bbox: *bbox,
        };
    }

    let scale = strategy
        .font_scale
        .clamp(config.font_scale_min, config.font_scale_max);
    let adjusted_size = (font.size * scale).max(RENDERER_MIN_FONT_SIZE);
    let adjusted_font = font.with_size(adjusted_size);

    let lines = match strategy.strategy_type {
        StrategyType::TextWrap | StrategyType::Hybrid => {
            wrap(text, bbox.width, adjusted_size, config.average_char_width_em)
        }
        StrategyType::None | StrategyType::FontScale => {
            vec![text.to_string()]
        }
    };

    let required_height =
        (lines.len() as f64) * adjusted_size * config.line_height_factor;
    let max_height = bbox.height * (1.0 + config.max_bbox_expansion);
    let adjusted_height = required_height.min(max_height);
    if required_height > max_height {
        tracing::warn!(
            required_height,
            max_height,
            "wrapped text exceeds permitted vertical expansion"
        );
    }

    Adjustment {
        adjusted_text: lines.join("\n"),
        adjusted_font,
        adjusted_bbox: bbox.with_height(adjusted_height),
    }
}

/// Greedily wraps `text` into lines of at most `chars_per_line` characters,
/// preserving whitespace-delimited token boundaries and hard-breaking
/// tokens that are themselves too long to fit on one line.
fn wrap(
    text: &str,
    bbox_width: f64,
    font_size: f64,
    average_char_width_em: f64,
) -> Vec<String> {
    let chars_per_line = ((bbox_width / (font_size * average_char_width_em))
        .floor() as usize)
        .max(1);

    let mut lines = Vec::new();
    let mut current = String::new();

    for token in text.split_whitespace() {
        push_token(token, chars_per_line, &mut current, &mut lines);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Appends `token` to the in-progress `current` line, starting new lines
/// (and hard-breaking `token` itself if necessary) as `chars_per_line`
/// requires.
fn push_token(
    token: &str,
    chars_per_line: usize,
    current: &mut String,
    lines: &mut Vec<String>,
) {
    let token_len = token.chars().count();

    if current.is_empty() {
        start_line_with(token, token_len, chars_per_line, current, lines);
        return;
    }

    let current_len = current.chars().count();
    if current_len + 1 + token_len <= chars_per_line {
        current.push(' ');
        current.push_str(token);
        return;
    }

    lines.push(std::mem::take(current));
    start_line_with(token, token_len, chars_per_line, current, lines);
}

/// Starts a fresh line with `token`, hard-breaking it into
/// `chars_per_line`-sized chunks first if it alone would overflow the line.
fn start_line_with(
    token: &str,
    token_len: usize,
    chars_per_line: usize,
    current: &mut String,
    lines: &mut Vec<String>,
) {
    if token_len <= chars_per_line {
        current.push_str(token);
        return;
    }

    let chars: Vec<char> = token.chars().collect();
    let mut chunks = chars.chunks(chars_per_line).peekable();
    while let Some(chunk) = chunks.next() {
        let chunk: String = chunk.iter().collect();
        if chunks.peek().is_some() {
            lines.push(chunk);
        } else {
            *current = chunk;
        }
    }
}

#[cfg(test)]
#[path = "adjust_test.rs"]
mod tests;
