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

//! The translator capability the orchestrator adapter (C8) consumes.
//!
//! This module describes a contract, not an implementation: no HTTP client
//! lives here. A caller supplies a [`Translator`] and the orchestrator drives
//! it; tests supply [`MockTranslator`].

use async_trait::async_trait;

/// Failure kinds a translator implementation may surface. These are
/// propagated by the orchestrator unchanged -- retry/backoff is the caller's
/// responsibility, not the engine's.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TranslatorError {
    /// The translator's rate limit was exceeded.
    #[error("translator rate limit exceeded")]
    RateLimited,
    /// The translator service is temporarily unavailable.
    #[error("translator service unavailable")]
    ServiceUnavailable,
    /// Authentication with the translator failed.
    #[error("translator authentication failed")]
    AuthFailure,
    /// The translator did not respond within its deadline.
    #[error("translator request timed out")]
    ServiceTimeout,
    /// The translator returned an error this crate does not classify more
    /// specifically; the message is carried through verbatim.
    #[error("translator provider error: {0}")]
    ProviderError(String),
}

/// Capability required by the orchestrator adapter to turn source text into
/// translated text.
///
/// Only [`Translator::translate`] is required. [`Translator::translate_batch`]
/// and [`Translator::translate_with_confidence`] have default
/// implementations so that simple translators need not implement them; an
/// implementation that can genuinely batch or report confidence should
/// override them for efficiency and fidelity respectively.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates a single block of text.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslatorError>;

    /// Translates many blocks of text, preserving order. The default
    /// implementation loops over [`Translator::translate`]; implementations
    /// backed by a batch-capable provider should override this.
    async fn translate_batch(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>, TranslatorError> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.translate(text, source_lang, target_lang).await?);
        }
        Ok(out)
    }

    /// Translates a single block of text along with the translator's
    /// confidence in that translation, `∈ [0, 1]`. The default
    /// implementation has no confidence signal to report and returns `None`.
    async fn translate_with_confidence(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<(String, Option<f64>), TranslatorError> {
        let translated = self.translate(text, source_lang, target_lang).await?;
        Ok((translated, None))
    }
}
