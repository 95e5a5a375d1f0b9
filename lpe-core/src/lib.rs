// Copyright 2024-2025 Monotype Imaging Inc.
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

//! Layout preservation engine.
//!
//! Given an original text block's bounding box and font, and a candidate
//! translated string whose length may differ from the original, this crate
//! decides how to reflow the translation back into the block so that a
//! reconstructed document preserves its original visual layout as closely
//! as possible.
//!
//! The pipeline, leaf-first:
//!
//! 1. [`geometry`] -- immutable bounding box and font value types.
//! 2. [`normalize`] -- whitespace normalization applied before analysis.
//! 3. [`analysis`] -- deterministic fit metrics for a translated string.
//! 4. [`strategy`] -- selects `NONE`/`FONT_SCALE`/`TEXT_WRAP`/`HYBRID`.
//! 5. [`adjust`] -- applies the chosen strategy to produce adjusted text,
//!    font, and bounding box.
//! 6. [`quality`] -- scores the fidelity cost of the chosen strategy.
//! 7. [`validator`] -- combines quality with translation/OCR confidence
//!    into a reportable summary.
//!
//! [`orchestrator`] stitches these around an injected [`translator::Translator`]
//! to produce [`result::TranslationResult`] records; [`renderer_hints`]
//! documents the contract a downstream renderer relies on; [`config`] is the
//! validated, shared configuration every other module reads from.
//!
//! # Example
//! ```
//! use lpe_core::config::EngineConfig;
//! use lpe_core::geometry::{BoundingBox, Color, FontInfo, FontStyle};
//! use lpe_core::{adjust, analysis, quality, strategy};
//!
//! let config = EngineConfig::default();
//! let bbox = BoundingBox::new(0.0, 0.0, 100.0, 20.0)?;
//! let font = FontInfo::new(
//!     "Arial",
//!     12.0,
//!     "normal",
//!     FontStyle::Normal,
//!     Color { r: 0, g: 0, b: 0 },
//! )?;
//!
//! let fit = analysis::analyze("Hello", "Hola", &bbox, font.size, &config);
//! let chosen = strategy::decide(&fit, 4, font.size, bbox.width, &config);
//! let adjustment = adjust::apply("Hola", &bbox, &font, &chosen, &config);
//! let fidelity = quality::score(&fit, &chosen, &config);
//!
//! assert_eq!(adjustment.adjusted_text, "Hola");
//! assert!(fidelity > 0.9);
//! # Ok::<(), lpe_core::geometry::GeometryError>(())
//! ```

pub mod adjust;
pub mod analysis;
pub mod config;
pub mod geometry;
pub mod normalize;
pub mod orchestrator;
pub mod quality;
pub mod renderer_hints;
pub mod result;
pub mod strategy;
pub mod translator;
pub mod validator;
