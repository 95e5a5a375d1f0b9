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

//! Quality validator (C6): combines layout quality with optional
//! translation/OCR confidences into a [`QualityReport`] and flags risky
//! outcomes as ordered warnings.

use serde::{Deserialize, Serialize};

use crate::{
    analysis::FitAnalysis,
    config::EngineConfig,
    quality,
    strategy::{LayoutStrategy, StrategyType},
};

/// Warning emitted when an unscaled block is judged to be expanding too far
/// to trust at face value.
const WARNING_LARGE_EXPANSION: &str = "Large expansion without adjustments";

/// Warning emitted when wrapping alone could not bring the block within its
/// bounding box height.
const WARNING_WRAP_OVERFLOW: &str =
    "Wrapping exceeds capacity; potential truncation";

/// A summary of layout fidelity for a single translated block, suitable for
/// surfacing to a caller or embedding in a [`crate::result::TranslationResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// `translation_confidence (or base_confidence) * layout_quality`.
    pub overall_score: f64,
    /// The fit analysis's `length_ratio`, carried through for convenience.
    pub text_length_ratio: f64,
    /// The layout-only quality score (see [`quality::score`]).
    pub layout_quality: f64,
    /// Confidence reported by the translator, if any.
    pub translation_confidence: Option<f64>,
    /// Confidence reported by the OCR layer, if any.
    pub ocr_confidence: Option<f64>,
    /// The strategy this report was computed from.
    pub strategy: StrategyType,
    /// Warnings, in a fixed emission order (never reordered or deduplicated).
    pub warnings: Vec<String>,
}

/// Assesses a block's layout outcome, producing a [`QualityReport`].
pub fn assess(
    analysis: &FitAnalysis,
    strategy: &LayoutStrategy,
    translation_confidence: Option<f64>,
    ocr_confidence: Option<f64>,
    config: &EngineConfig,
) -> QualityReport {
    let layout_quality = quality::score(analysis, strategy, config);
    let conf = translation_confidence.unwrap_or(config.base_confidence);
    let overall_score = (conf * layout_quality).clamp(0.0, 1.0);

    let mut warnings = Vec::new();
    if analysis.length_ratio >= config.large_expansion_threshold
        && strategy.strategy_type == StrategyType::None
    {
        warnings.push(WARNING_LARGE_EXPANSION.to_string());
    }
    if config.warn_on_wrap_overflow
        && matches!(
            strategy.strategy_type,
            StrategyType::TextWrap | StrategyType::Hybrid
        )
        && strategy.wrap_lines > analysis.max_lines
    {
        warnings.push(WARNING_WRAP_OVERFLOW.to_string());
    }

    let report = QualityReport {
        overall_score,
        text_length_ratio: analysis.length_ratio,
        layout_quality,
        translation_confidence,
        ocr_confidence,
        strategy: strategy.strategy_type,
        warnings,
    };
    if !report.warnings.is_empty() {
        tracing::warn!(warnings = ?report.warnings, "quality report carries warnings");
    }
    report
}

#[cfg(test)]
#[path = "validator_test.rs"]
mod tests;
