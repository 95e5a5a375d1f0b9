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

//! The orchestrator's per-block output type.

use serde::{Deserialize, Serialize};

use crate::{
    analysis::FitAnalysis,
    geometry::{BoundingBox, FontInfo},
    strategy::LayoutStrategy,
};

/// The full outcome of running one block through the engine: the original
/// and translated text, the chosen adjustments, and the quality they cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    /// The original-language text for this block.
    pub source_text: String,
    /// The translator's raw output, before normalization.
    pub raw_translation: String,
    /// The text to render, after normalization and wrapping. May contain
    /// `\n` as the sole line separator (see [`crate::renderer_hints`]).
    pub adjusted_text: String,
    /// The strategy selected for this block.
    pub strategy: LayoutStrategy,
    /// The fit analysis the strategy was selected from.
    pub analysis: FitAnalysis,
    /// The font to render with, after any scaling.
    pub adjusted_font: FontInfo,
    /// The bounding box to render into, after any vertical expansion.
    pub adjusted_bbox: BoundingBox,
    /// The layout-only quality score in `[0, 1]` (see [`crate::quality`]).
    pub quality_score: f64,
    /// Confidence reported by the OCR layer, if any.
    pub ocr_confidence: Option<f64>,
    /// Confidence reported by the translator, if any.
    pub translation_confidence: Option<f64>,
}
