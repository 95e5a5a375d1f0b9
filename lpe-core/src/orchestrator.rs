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

//! Orchestrator adapter (C8): the per-block driver that stitches the fit
//! analyzer, strategy selector, adjustment applicator, and quality scorer
//! around an injected [`Translator`].
//!
//! This is a pure function over its inputs plus one external capability; it
//! never touches a renderer or an OCR service directly.

use serde::{Deserialize, Serialize};

use crate::{
    analysis,
    config::EngineConfig,
    geometry::{BoundingBox, FontInfo, GeometryError},
    normalize,
    quality,
    result::TranslationResult,
    strategy,
    translator::{Translator, TranslatorError},
};

/// The layout context the orchestrator needs alongside the source text: the
/// bounding box and font the original block was rendered with, plus an
/// optional OCR confidence carried through to the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutContext {
    /// The original block's bounding box.
    pub bbox: BoundingBox,
    /// The original block's font.
    pub font: FontInfo,
    /// Confidence reported by the OCR layer for this block, if any.
    pub ocr_confidence: Option<f64>,
}

/// A cooperative cancellation signal for [`Engine::translate_batch`].
///
/// This only gates *submission* of further blocks: it is checked between
/// loop iterations, so it stops the next block from starting, but it does
/// not abort a translator call already in flight -- the `Translator` trait
/// takes no call-context parameter a cancelled token could be threaded
/// into. A caller that needs to abort an in-flight call must do so at its
/// own translator implementation (e.g. by racing the request against the
/// token with `tokio::select!`).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks this token (and every clone of it) as cancelled.
    pub fn cancel(&self) {
        self.cancelled
            .store(true, std::sync::atomic::Ordering::SeqCst);
    }

    /// Whether [`CancellationToken::cancel`] has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(std::sync::atomic::Ordering::SeqCst)
    }
}

/// Unifies the failure modes of a single [`Engine::translate_block`] call.
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// The injected bounding box or font was invalid.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The translator capability failed.
    #[error(transparent)]
    Translation(#[from] TranslatorError),
}

/// Error produced by a single failed block in [`Engine::translate_batch`],
/// carrying the partial successes already produced (spec §7: "no result is
/// fabricated for failed blocks").
#[derive(Debug, thiserror::Error)]
#[error("block {failed_index} failed to translate: {source}")]
pub struct BatchTranslationError {
    /// Results already produced for blocks before the failing one, in
    /// order.
    pub completed: Vec<TranslationResult>,
    /// Index of the block (in the original input order) that failed.
    pub failed_index: usize,
    /// The underlying cause.
    #[source]
    pub source: OrchestratorError,
}

/// Per-block driver over an injected [`Translator`] (C8).
///
/// Holds no mutable state beyond its [`EngineConfig`]; trivially shareable
/// across concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine driven by `config`.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine was constructed with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Translates and lays out a single block.
    pub async fn translate_block(
        &self,
        original_text: &str,
        source_lang: &str,
        target_lang: &str,
        context: &LayoutContext,
        translator: &dyn Translator,
    ) -> Result<TranslationResult, OrchestratorError> {
        let (raw_translation, translation_confidence) = translator
            .translate_with_confidence(original_text, source_lang, target_lang)
            .await?;
        Ok(self.layout_block(original_text, raw_translation, translation_confidence, context))
    }

    /// Runs the fit analyzer, strategy selector, adjustment applicator, and
    /// quality scorer over an already-translated block. Shared by
    /// [`Engine::translate_block`] and the batch path in
    /// [`Engine::translate_batch`] so both ways of obtaining a translation
    /// (single call, or a provider's batch call) produce identical layout.
    fn layout_block(
        &self,
        original_text: &str,
        raw_translation: String,
        translation_confidence: Option<f64>,
        context: &LayoutContext,
    ) -> TranslationResult {
        let normalized = normalize::normalize(&raw_translation);
        let analysis = analysis::analyze(
            original_text,
            &normalized,
            &context.bbox,
            context.font.size,
            &self.config,
        );
        let layout_strategy = strategy::decide(
            &analysis,
            normalized.chars().count(),
            context.font.size,
            context.bbox.width,
            &self.config,
        );
        let adjustment = crate::adjust::apply(
            &normalized,
            &context.bbox,
            &context.font,
            &layout_strategy,
            &self.config,
        );
        let quality_score = quality::score(&analysis, &layout_strategy, &self.config);

        tracing::debug!(
            strategy = ?layout_strategy.strategy_type,
            quality_score,
            "translated block"
        );

        TranslationResult {
            source_text: original_text.to_string(),
            raw_translation,
            adjusted_text: adjustment.adjusted_text,
            strategy: layout_strategy,
            analysis,
            adjusted_font: adjustment.adjusted_font,
            adjusted_bbox: adjustment.adjusted_bbox,
            quality_score,
            ocr_confidence: context.ocr_confidence,
            translation_confidence,
        }
    }

    /// Translates and lays out `blocks` in order, preferring the
    /// translator's batch operation (spec §4.8 step 1: "if the translator
    /// exposes a batch operation, the batch method is preferred") and
    /// falling back to per-block calls -- which alone can localize which
    /// index failed -- if the batch call itself errors.
    ///
    /// Stops at the first per-block failure, returning the partial
    /// successes already produced (spec §7, §8 testable property 9).
    /// `cancel`, if provided, is checked before the batch call and between
    /// per-block calls; a cancelled token stops submission of further work
    /// without treating the remainder as failed (the caller receives
    /// exactly the blocks completed so far).
    pub async fn translate_batch(
        &self,
        blocks: &[(String, LayoutContext)],
        source_lang: &str,
        target_lang: &str,
        translator: &dyn Translator,
        cancel: Option<&CancellationToken>,
    ) -> Result<Vec<TranslationResult>, BatchTranslationError> {
        let mut completed = Vec::with_capacity(blocks.len());
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            tracing::debug!("batch translation cancelled before it started");
            return Ok(completed);
        }

        let texts: Vec<String> = blocks.iter().map(|(text, _)| text.clone()).collect();
        match translator
            .translate_batch(&texts, source_lang, target_lang)
            .await
        {
            Ok(raw_translations) => {
                for ((text, context), raw_translation) in blocks.iter().zip(raw_translations) {
                    if cancel.is_some_and(CancellationToken::is_cancelled) {
                        tracing::debug!("batch translation cancelled mid-layout");
                        break;
                    }
                    completed.push(self.layout_block(text, raw_translation, None, context));
                }
                Ok(completed)
            }
            Err(batch_err) => {
                tracing::warn!(
                    %batch_err,
                    "translator batch call failed, falling back to per-block calls"
                );
                for (index, (text, context)) in blocks.iter().enumerate() {
                    if cancel.is_some_and(CancellationToken::is_cancelled) {
                        tracing::debug!(index, "batch translation cancelled");
                        break;
                    }
                    match self
                        .translate_block(text, source_lang, target_lang, context, translator)
                        .await
                    {
                        Ok(result) => completed.push(result),
                        Err(source) => {
                            tracing::warn!(index, %source, "batch translation failed");
                            return Err(BatchTranslationError {
                                completed,
                                failed_index: index,
                                source,
                            });
                        }
                    }
                }
                Ok(completed)
            }
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_test.rs"]
mod tests;
