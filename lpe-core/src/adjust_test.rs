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

//! Tests for the adjustment applicator.

use super::*;
use crate::geometry::{Color, FontStyle};

fn bbox(w: f64, h: f64) -> BoundingBox {
    BoundingBox::new(0.0, 0.0, w, h).unwrap()
}

fn font(size: f64) -> FontInfo {
    FontInfo::new(
        "Arial",
        size,
        "normal",
        FontStyle::Normal,
        Color { r: 0, g: 0, b: 0 },
    )
    .unwrap()
}

#[test]
fn none_strategy_returns_inputs_unchanged() {
    let config = EngineConfig::default();
    let b = bbox(100.0, 20.0);
    let f = font(12.0);
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::None,
        font_scale: 1.0,
        wrap_lines: 1,
    };
    let result = apply("Hola", &b, &f, &strategy, &config);
    assert_eq!(result.adjusted_text, "Hola");
    assert_eq!(result.adjusted_font, f);
    assert_eq!(result.adjusted_bbox, b);
}

#[test]
fn font_scale_reduces_size_and_keeps_one_line() {
    let config = EngineConfig::default();
    let b = bbox(100.0, 20.0);
    let f = font(12.0);
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::FontScale,
        font_scale: 0.8,
        wrap_lines: 1,
    };
    let result = apply("Hola mundo completo", &b, &f, &strategy, &config);
    assert_eq!(result.adjusted_font.size, 9.6);
    assert_eq!(result.adjusted_text, "Hola mundo completo");
    assert_eq!(result.adjusted_bbox.height, b.height);
}

#[test]
fn two_line_wrap_matches_spec_scenario() {
    let config = EngineConfig::builder()
        .line_height_factor(1.2)
        .average_char_width_em(0.5)
        .build()
        .unwrap();
    let b = bbox(60.0, 40.0);
    let f = font(10.0);
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::TextWrap,
        font_scale: 1.0,
        wrap_lines: 2,
    };
    let result =
        apply("one two three four", &b, &f, &strategy, &config);
    assert_eq!(result.adjusted_text, "one two\nthree four");
    assert_eq!(result.adjusted_bbox.height, 24.0);
}

#[test]
fn long_token_is_hard_broken_into_chunks() {
    let config = EngineConfig::builder()
        .average_char_width_em(0.5)
        .build()
        .unwrap();
    let b = bbox(60.0, 100.0);
    let f = font(10.0); // chars_per_line = 60 / (10 * 0.5) = 12
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::TextWrap,
        font_scale: 1.0,
        wrap_lines: 4,
    };
    let word = "Donaudampfschifffahrtsgesellschaftskapitan"; // 43 ASCII chars
    let result = apply(word, &b, &f, &strategy, &config);
    let lines: Vec<&str> = result.adjusted_text.split('\n').collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].chars().count(), 12);
    assert_eq!(lines[1].chars().count(), 12);
    assert_eq!(lines[2].chars().count(), 12);
    assert_eq!(lines[3].chars().count(), 7);
    assert_eq!(lines.concat(), word);
}

#[test]
fn hybrid_scales_and_wraps_together() {
    let config = EngineConfig::default();
    let b = bbox(40.0, 20.0);
    let f = font(12.0);
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::Hybrid,
        font_scale: 0.6,
        wrap_lines: 2,
    };
    let result = apply("hello world today", &b, &f, &strategy, &config);
    assert_eq!(result.adjusted_font.size, 7.2);
    assert!(result.adjusted_text.contains('\n'));
}

#[test]
fn vertical_expansion_is_capped_and_overflow_is_not_truncated() {
    let config = EngineConfig::default();
    let b = bbox(10.0, 10.0);
    let f = font(12.0);
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::TextWrap,
        font_scale: 1.0,
        wrap_lines: 1,
    };
    let result = apply("a b c d e f g h", &b, &f, &strategy, &config);
    assert_eq!(result.adjusted_bbox.height, 13.0); // 10 * 1.3
    assert_eq!(result.adjusted_text.split('\n').count(), 8);
}

#[test]
fn horizontal_dimensions_are_never_adjusted() {
    let config = EngineConfig::default();
    let b = bbox(10.0, 10.0);
    let f = font(12.0);
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::Hybrid,
        font_scale: 0.6,
        wrap_lines: 5,
    };
    let result = apply("some long translated text here", &b, &f, &strategy, &config);
    assert_eq!(result.adjusted_bbox.x, b.x);
    assert_eq!(result.adjusted_bbox.width, b.width);
}

#[test]
fn font_size_never_drops_below_renderer_minimum() {
    let config = EngineConfig::default();
    let b = bbox(100.0, 20.0);
    let f = font(1.0);
    let strategy = LayoutStrategy {
        strategy_type: StrategyType::FontScale,
        font_scale: 0.6,
        wrap_lines: 1,
    };
    let result = apply("x", &b, &f, &strategy, &config);
    assert!(result.adjusted_font.size >= 1.0);
}

#[test]
fn wrap_preserves_tokens_when_rejoined() {
    let chars_per_line = 12;
    let lines = wrap(
        "one two three four",
        (chars_per_line * 2) as f64,
        1.0,
        1.0,
    );
    let rejoined = lines.join(" ");
    assert_eq!(
        rejoined.split_whitespace().collect::<Vec<_>>(),
        "one two three four".split_whitespace().collect::<Vec<_>>()
    );
}

#[test]
fn wrap_of_empty_text_yields_single_empty_line() {
    let lines = wrap("", 100.0, 12.0, 0.5);
    assert_eq!(lines, vec![String::new()]);
}
