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

//! Tests for the quality validator.

use super::*;
use crate::{analysis::analyze, geometry::BoundingBox, strategy::decide};
use tracing_test::traced_test;

fn bbox(w: f64, h: f64) -> BoundingBox {
    BoundingBox::new(0.0, 0.0, w, h).unwrap()
}

#[test]
fn no_warnings_on_a_clean_fit() {
    let config = EngineConfig::default();
    let a = analyze("Hello", "Hola", &bbox(100.0, 20.0), 12.0, &config);
    let s = decide(&a, 4, 12.0, 100.0, &config);
    let report = assess(&a, &s, None, None, &config);
    assert!(report.warnings.is_empty());
    assert_eq!(report.strategy, StrategyType::None);
}

#[test]
fn large_expansion_without_adjustment_is_flagged() {
    let config = EngineConfig::builder()
        .large_expansion_threshold(1.5)
        .build()
        .unwrap();
    // Forcing a NONE strategy by hand: length_ratio high but bbox huge so it
    // still "fits" without any adjustment.
    let a = analyze("Hi", "Hi! Hi! Hi!", &bbox(1000.0, 1000.0), 12.0, &config);
    let s = decide(&a, 12, 12.0, 1000.0, &config);
    assert_eq!(s.strategy_type, StrategyType::None);
    assert!(a.length_ratio >= config.large_expansion_threshold);
    let report = assess(&a, &s, None, None, &config);
    assert_eq!(
        report.warnings,
        vec!["Large expansion without adjustments".to_string()]
    );
}

#[test]
fn wrap_overflow_is_flagged_in_order() {
    let config = EngineConfig::default();
    let translated = "a b c d e f g h";
    let a = analyze("x", translated, &bbox(10.0, 10.0), 12.0, &config);
    let s = decide(&a, translated.chars().count(), 12.0, 10.0, &config);
    assert!(s.wrap_lines > a.max_lines);
    let report = assess(&a, &s, None, None, &config);
    assert_eq!(
        report.warnings,
        vec!["Wrapping exceeds capacity; potential truncation".to_string()]
    );
}

#[test]
fn wrap_overflow_warning_can_be_disabled() {
    let config = EngineConfig::builder()
        .warn_on_wrap_overflow(false)
        .build()
        .unwrap();
    let translated = "a b c d e f g h";
    let a = analyze("x", translated, &bbox(10.0, 10.0), 12.0, &config);
    let s = decide(&a, translated.chars().count(), 12.0, 10.0, &config);
    let report = assess(&a, &s, None, None, &config);
    assert!(report.warnings.is_empty());
}

#[test]
fn missing_translation_confidence_falls_back_to_base_confidence() {
    let config = EngineConfig::default();
    let a = analyze("Hello", "Hola", &bbox(100.0, 20.0), 12.0, &config);
    let s = decide(&a, 4, 12.0, 100.0, &config);
    let report = assess(&a, &s, None, None, &config);
    assert_eq!(report.overall_score, (config.base_confidence * report.layout_quality).clamp(0.0, 1.0));
}

#[test]
fn explicit_translation_confidence_is_used_and_propagated() {
    let config = EngineConfig::default();
    let a = analyze("Hello", "Hola", &bbox(100.0, 20.0), 12.0, &config);
    let s = decide(&a, 4, 12.0, 100.0, &config);
    let report = assess(&a, &s, Some(0.5), Some(0.9), &config);
    assert_eq!(report.translation_confidence, Some(0.5));
    assert_eq!(report.ocr_confidence, Some(0.9));
    assert_eq!(report.overall_score, (0.5 * report.layout_quality).clamp(0.0, 1.0));
}

#[test]
#[traced_test]
fn warnings_are_logged_when_present() {
    let config = EngineConfig::default();
    let translated = "a b c d e f g h";
    let a = analyze("x", translated, &bbox(10.0, 10.0), 12.0, &config);
    let s = decide(&a, translated.chars().count(), 12.0, 10.0, &config);
    assess(&a, &s, None, None, &config);
    assert!(logs_contain("quality report carries warnings"));
}
