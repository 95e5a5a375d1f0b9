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

//! Tests for the fit analyzer.

use super::*;

fn bbox(w: f64, h: f64) -> BoundingBox {
    BoundingBox::new(0.0, 0.0, w, h).unwrap()
}

#[test]
fn tight_fit_no_change_needed() {
    let config = EngineConfig::default();
    let a = analyze("Hello", "Hola", &bbox(100.0, 20.0), 12.0, &config);
    assert!(a.can_fit_without_changes);
    assert_eq!(a.length_ratio, 4.0 / 5.0);
}

#[test]
fn empty_translation_fits_trivially() {
    let config = EngineConfig::default();
    let a = analyze("Hello", "", &bbox(100.0, 20.0), 12.0, &config);
    assert_eq!(a.one_line_width, 0.0);
    assert_eq!(a.lines_needed, 1);
    assert!(a.can_fit_without_changes);
    assert_eq!(a.required_scale_for_single_line, 1.0);
}

#[test]
fn zero_width_bbox_never_fits() {
    let config = EngineConfig::default();
    let a = analyze("Hello", "Hola", &bbox(0.0, 20.0), 12.0, &config);
    assert!(!a.can_fit_without_changes);
    assert!(!a.can_wrap_within_height);
    assert_eq!(a.lines_needed, 4);
}

#[test]
fn zero_height_bbox_cannot_wrap() {
    let config = EngineConfig::default();
    let a = analyze("Hi", "Hi", &bbox(100.0, 0.0), 12.0, &config);
    assert!(!a.can_wrap_within_height);
}

#[test]
fn two_line_wrap_scenario_from_spec() {
    let config = EngineConfig::builder()
        .line_height_factor(1.2)
        .average_char_width_em(0.5)
        .build()
        .unwrap();
    let a = analyze(
        "x",
        "one two three four",
        &bbox(60.0, 40.0),
        10.0,
        &config,
    );
    assert_eq!(a.one_line_width, 10.0 * 0.5 * 19.0);
    assert_eq!(a.max_lines, 3);
    assert!(!a.can_fit_without_changes);
}

#[test]
fn modest_scaling_scenario_from_spec() {
    // required_scale = 0.8 means one_line_width = bbox.width / 0.8
    let config = EngineConfig::default();
    let width = 96.0;
    let one_line_width = width / 0.8;
    // one_line_width = font_size * avg_char_width_em * len; 96 / 0.8 = 120,
    // and 120 / (12 * 0.5) = 20 exactly, so this divides cleanly.
    let len = one_line_width / (12.0 * config.average_char_width_em);
    let translated: String = "a".repeat(len.round() as usize);
    let a = analyze("x", &translated, &bbox(width, 20.0), 12.0, &config);
    assert!((a.required_scale_for_single_line - 0.8).abs() < 1e-6);
    assert!(a.can_scale_to_single_line);
}

#[test]
fn length_ratio_uses_char_counts_not_bytes() {
    let config = EngineConfig::default();
    // Multi-byte characters should count as one char each for the ratio.
    let a = analyze("ab", "日本語", &bbox(100.0, 20.0), 12.0, &config);
    assert_eq!(a.length_ratio, 3.0 / 2.0);
}

#[test]
fn original_empty_uses_divisor_of_one() {
    let config = EngineConfig::default();
    let a = analyze("", "abc", &bbox(100.0, 20.0), 12.0, &config);
    assert_eq!(a.length_ratio, 3.0);
}
