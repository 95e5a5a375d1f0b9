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

//! Centralized, validated configuration for every other component.
//!
//! `EngineConfig` is built once at startup, either through
//! [`EngineConfigBuilder`] or [`EngineConfig::from_env`], and then shared by
//! reference. There is no mutable global state; changing a parameter means
//! building a new `EngineConfig`.

use std::{env, str::FromStr};

/// Errors raised when an [`EngineConfig`] would violate one of its
/// invariants. The offending field and value are always named, per the
/// spec's error taxonomy (`ConfigInvalid`).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `font_scale_min` was not `> 0`.
    #[error("font_scale_min must be > 0, got {0}")]
    NonPositiveFontScaleMin(f64),
    /// `font_scale_max` was smaller than `font_scale_min`.
    #[error("font_scale_max ({max}) must be >= font_scale_min ({min})")]
    FontScaleMaxBelowMin {
        /// The configured minimum.
        min: f64,
        /// The configured maximum.
        max: f64,
    },
    /// `max_bbox_expansion` was negative.
    #[error("max_bbox_expansion must be >= 0, got {0}")]
    NegativeMaxBboxExpansion(f64),
    /// `average_char_width_em` was not `> 0`.
    #[error("average_char_width_em must be > 0, got {0}")]
    NonPositiveAverageCharWidthEm(f64),
    /// `line_height_factor` was not `> 0`.
    #[error("line_height_factor must be > 0, got {0}")]
    NonPositiveLineHeightFactor(f64),
    /// A quality weight fell outside `[0, 1]`.
    #[error("{field} must be in [0, 1], got {value}")]
    WeightOutOfRange {
        /// The name of the offending field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },
    /// `base_confidence` fell outside `[0, 1]`.
    #[error("base_confidence must be in [0, 1], got {0}")]
    BaseConfidenceOutOfRange(f64),
    /// An environment variable could not be parsed as the expected type.
    #[error("environment variable {key} has an invalid value {value:?}: {reason}")]
    InvalidEnvValue {
        /// The environment variable name.
        key: &'static str,
        /// The raw string value that failed to parse.
        value: String,
        /// Why parsing failed.
        reason: String,
    },
}

/// Validated, immutable configuration for every layout-preservation
/// component (C10).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Minimum font scale the selector/applicator may choose. Default `0.6`.
    pub font_scale_min: f64,
    /// Maximum font scale the selector/applicator may choose. Default `1.2`.
    pub font_scale_max: f64,
    /// Proportional upper bound on vertical bbox growth. Default `0.30`.
    pub max_bbox_expansion: f64,
    /// Width heuristic multiplier (fraction of an em per character).
    /// Default `0.5`.
    pub average_char_width_em: f64,
    /// Vertical spacing multiplier applied to font size. Default `1.2`.
    pub line_height_factor: f64,
    /// Quality penalty weight for scale deviation. Default `0.35`.
    pub scale_penalty_weight: f64,
    /// Quality penalty weight for wrap expansion. Default `0.25`.
    pub wrap_penalty_weight: f64,
    /// Quality bonus for leaving text unchanged. Default `0.05`.
    pub none_bonus: f64,
    /// Quality penalty weight for an unmitigated `NONE` strategy whose
    /// translation is longer than the original (`length_ratio > 1`).
    /// Default `0.5`. Without this, `quality_score = 1` could be reported
    /// for a `NONE` block that silently overflows its box, which violates
    /// the scorer's own range/iff contract (see `quality::score`).
    pub none_expansion_penalty_weight: f64,
    /// Confidence assumed when the translator does not report one.
    /// Default `0.80`.
    pub base_confidence: f64,
    /// Length-ratio threshold above which an unmitigated `NONE` strategy is
    /// flagged. Default `1.6`.
    pub large_expansion_threshold: f64,
    /// Whether wrap-overflow should be reported as a warning. Default
    /// `true`.
    pub warn_on_wrap_overflow: bool,
}

impl EngineConfig {
    const DEFAULT_FONT_SCALE_MIN: f64 = 0.6;
    const DEFAULT_FONT_SCALE_MAX: f64 = 1.2;
    const DEFAULT_MAX_BBOX_EXPANSION: f64 = 0.30;
    const DEFAULT_AVERAGE_CHAR_WIDTH_EM: f64 = 0.5;
    const DEFAULT_LINE_HEIGHT_FACTOR: f64 = 1.2;
    const DEFAULT_SCALE_PENALTY_WEIGHT: f64 = 0.35;
    const DEFAULT_WRAP_PENALTY_WEIGHT: f64 = 0.25;
    const DEFAULT_NONE_BONUS: f64 = 0.05;
    const DEFAULT_NONE_EXPANSION_PENALTY_WEIGHT: f64 = 0.5;
    const DEFAULT_BASE_CONFIDENCE: f64 = 0.80;
    const DEFAULT_LARGE_EXPANSION_THRESHOLD: f64 = 1.6;
    const DEFAULT_WARN_ON_WRAP_OVERFLOW: bool = true;

    /// Starts building a config from the library defaults.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Builds a config by reading the environment keys from spec §6.4,
    /// falling back to the library defaults for anything unset. Should be
    /// called once at process startup.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Some(v) = parse_env("FONT_SCALE_MIN")? {
            builder = builder.font_scale_min(v);
        }
        if let Some(v) = parse_env("FONT_SCALE_MAX")? {
            builder = builder.font_scale_max(v);
        }
        if let Some(v) = parse_env("MAX_BBOX_EXPANSION")? {
            builder = builder.max_bbox_expansion(v);
        }
        if let Some(v) = parse_env("AVG_CHAR_WIDTH_EM")? {
            builder = builder.average_char_width_em(v);
        }
        if let Some(v) = parse_env("LINE_HEIGHT_FACTOR")? {
            builder = builder.line_height_factor(v);
        }
        if let Some(v) = parse_env("QUALITY_SCALE_PENALTY")? {
            builder = builder.scale_penalty_weight(v);
        }
        if let Some(v) = parse_env("QUALITY_WRAP_PENALTY")? {
            builder = builder.wrap_penalty_weight(v);
        }
        if let Some(v) = parse_env("QUALITY_NONE_BONUS")? {
            builder = builder.none_bonus(v);
        }
        if let Some(v) = parse_env("QUALITY_NONE_EXPANSION_PENALTY")? {
            builder = builder.none_expansion_penalty_weight(v);
        }
        if let Some(v) = parse_env("QUALITY_BASE_CONFIDENCE")? {
            builder = builder.base_confidence(v);
        }
        if let Some(v) = parse_env("QUALITY_LARGE_EXPANSION_THRESHOLD")? {
            builder = builder.large_expansion_threshold(v);
        }
        if let Some(v) = parse_env("QUALITY_WARN_WRAP_OVERFLOW")? {
            builder = builder.warn_on_wrap_overflow(v);
        }
        let config = builder.build();
        tracing::debug!(?config, "engine config loaded from environment");
        config
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            font_scale_min: Self::DEFAULT_FONT_SCALE_MIN,
            font_scale_max: Self::DEFAULT_FONT_SCALE_MAX,
            max_bbox_expansion: Self::DEFAULT_MAX_BBOX_EXPANSION,
            average_char_width_em: Self::DEFAULT_AVERAGE_CHAR_WIDTH_EM,
            line_height_factor: Self::DEFAULT_LINE_HEIGHT_FACTOR,
            scale_penalty_weight: Self::DEFAULT_SCALE_PENALTY_WEIGHT,
            wrap_penalty_weight: Self::DEFAULT_WRAP_PENALTY_WEIGHT,
            none_bonus: Self::DEFAULT_NONE_BONUS,
            none_expansion_penalty_weight: Self::DEFAULT_NONE_EXPANSION_PENALTY_WEIGHT,
            base_confidence: Self::DEFAULT_BASE_CONFIDENCE,
            large_expansion_threshold: Self::DEFAULT_LARGE_EXPANSION_THRESHOLD,
            warn_on_wrap_overflow: Self::DEFAULT_WARN_ON_WRAP_OVERFLOW,
        }
    }
}

/// Reads an environment variable and parses it as `T`, returning `None` if
/// the variable is unset.
fn parse_env<T: FromStr>(
    key: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvValue {
                key,
                value: raw,
                reason: e.to_string(),
            }),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            Err(ConfigError::InvalidEnvValue {
                key,
                value: String::from("<non-unicode>"),
                reason: String::from("value is not valid unicode"),
            })
        }
    }
}

/// Builder for [`EngineConfig`], following the same "start from defaults,
/// override selectively" shape as `FontSystemConfigBuilder`.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Sets `font_scale_min`.
    pub fn font_scale_min(mut self, value: f64) -> Self {
        self.config.font_scale_min = value;
        self
    }

    /// Sets `font_scale_max`.
    pub fn font_scale_max(mut self, value: f64) -> Self {
        self.config.font_scale_max = value;
        self
    }

    /// Sets `max_bbox_expansion`.
    pub fn max_bbox_expansion(mut self, value: f64) -> Self {
        self.config.max_bbox_expansion = value;
        self
    }

    /// Sets `average_char_width_em`.
    pub fn average_char_width_em(mut self, value: f64) -> Self {
        self.config.average_char_width_em = value;
        self
    }

    /// Sets `line_height_factor`.
    pub fn line_height_factor(mut self, value: f64) -> Self {
        self.config.line_height_factor = value;
        self
    }

    /// Sets `scale_penalty_weight`.
    pub fn scale_penalty_weight(mut self, value: f64) -> Self {
        self.config.scale_penalty_weight = value;
        self
    }

    /// Sets `wrap_penalty_weight`.
    pub fn wrap_penalty_weight(mut self, value: f64) -> Self {
        self.config.wrap_penalty_weight = value;
        self
    }

    /// Sets `none_bonus`.
    pub fn none_bonus(mut self, value: f64) -> Self {
        self.config.none_bonus = value;
        self
    }

    /// Sets `none_expansion_penalty_weight`.
    pub fn none_expansion_penalty_weight(mut self, value: f64) -> Self {
        self.config.none_expansion_penalty_weight = value;
        self
    }

    /// Sets `base_confidence`.
    pub fn base_confidence(mut self, value: f64) -> Self {
        self.config.base_confidence = value;
        self
    }

    /// Sets `large_expansion_threshold`.
    pub fn large_expansion_threshold(mut self, value: f64) -> Self {
        self.config.large_expansion_threshold = value;
        self
    }

    /// Sets `warn_on_wrap_overflow`.
    pub fn warn_on_wrap_overflow(mut self, value: bool) -> Self {
        self.config.warn_on_wrap_overflow = value;
        self
    }

    /// Validates and produces the final [`EngineConfig`].
    ///
    /// # Errors
    /// Returns [`ConfigError`] naming the first invariant violated.
    pub fn build(self) -> Result<EngineConfig, ConfigError> {
        let c = self.config;
        if c.font_scale_min <= 0.0 {
            return Err(ConfigError::NonPositiveFontScaleMin(
                c.font_scale_min,
            ));
        }
        if c.font_scale_max < c.font_scale_min {
            return Err(ConfigError::FontScaleMaxBelowMin {
                min: c.font_scale_min,
                max: c.font_scale_max,
            });
        }
        if c.max_bbox_expansion < 0.0 {
            return Err(ConfigError::NegativeMaxBboxExpansion(
                c.max_bbox_expansion,
            ));
        }
        if c.average_char_width_em <= 0.0 {
            return Err(ConfigError::NonPositiveAverageCharWidthEm(
                c.average_char_width_em,
            ));
        }
        if c.line_height_factor <= 0.0 {
            return Err(ConfigError::NonPositiveLineHeightFactor(
                c.line_height_factor,
            ));
        }
        for (field, value) in [
            ("scale_penalty_weight", c.scale_penalty_weight),
            ("wrap_penalty_weight", c.wrap_penalty_weight),
            ("none_bonus", c.none_bonus),
            ("none_expansion_penalty_weight", c.none_expansion_penalty_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::WeightOutOfRange { field, value });
            }
        }
        if !(0.0..=1.0).contains(&c.base_confidence) {
            return Err(ConfigError::BaseConfidenceOutOfRange(
                c.base_confidence,
            ));
        }
        Ok(c)
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
