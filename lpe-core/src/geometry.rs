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

//! Immutable geometry and font value types shared by every other module.

use serde::{Deserialize, Serialize};

/// Errors raised when constructing a [`BoundingBox`] or [`FontInfo`] from
/// invalid values.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    /// A bounding box was constructed with a negative width.
    #[error("bounding box width must be >= 0, got {0}")]
    NegativeWidth(f64),
    /// A bounding box was constructed with a negative height.
    #[error("bounding box height must be >= 0, got {0}")]
    NegativeHeight(f64),
    /// A font was constructed with a non-positive size.
    #[error("font size must be > 0, got {0}")]
    NonPositiveFontSize(f64),
}

/// An axis-aligned rectangle in page coordinates (points) within which a
/// text block is rendered.
///
/// Coordinates may be any finite value; the engine does not assume a page
/// origin. Only `width` and `height` are validated to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge, in points.
    pub x: f64,
    /// Top edge, in points.
    pub y: f64,
    /// Width, in points. Always `>= 0`.
    pub width: f64,
    /// Height, in points. Always `>= 0`.
    pub height: f64,
}

impl BoundingBox {
    /// Creates a new bounding box, rejecting negative dimensions.
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<Self, GeometryError> {
        if width < 0.0 {
            return Err(GeometryError::NegativeWidth(width));
        }
        if height < 0.0 {
            return Err(GeometryError::NegativeHeight(height));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Returns a copy of this bounding box with `height` replaced.
    ///
    /// Used by the adjustment applicator (C4), which only ever grows a box
    /// vertically.
    pub(crate) fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }
}

/// Font weight, as a loose string-typed category (`"normal"`, `"bold"`, ...).
///
/// Kept as a string rather than an enum of named weights because renderer
/// hints (C9) pass this straight through to font-fallback logic that is
/// outside this crate's scope; constraining it here would just mean
/// duplicating whatever weight vocabulary the renderer understands.
pub type FontWeight = String;

/// Font slant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright.
    Normal,
    /// Italic.
    Italic,
    /// Oblique (slanted upright glyphs, not a true italic design).
    Oblique,
}

/// An sRGB color, each component in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// A font descriptor: family, size, weight, style, and color.
///
/// `size` is validated to be strictly positive at construction; the
/// renderer-side minimum of `1.0pt` is enforced later, by the adjustment
/// applicator (C4), not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontInfo {
    /// Font family name.
    pub family: String,
    /// Font size, in points. Always `> 0`.
    pub size: f64,
    /// Font weight.
    pub weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub style: FontStyle,
    /// Text color.
    pub color: Color,
}

impl FontInfo {
    /// Creates a new font descriptor, rejecting a non-positive size.
    pub fn new(
        family: impl Into<String>,
        size: f64,
        weight: impl Into<FontWeight>,
        style: FontStyle,
        color: Color,
    ) -> Result<Self, GeometryError> {
        if size <= 0.0 {
            return Err(GeometryError::NonPositiveFontSize(size));
        }
        Ok(Self {
            family: family.into(),
            size,
            weight: weight.into(),
            style,
            color,
        })
    }

    /// Returns a copy of this font with `size` replaced.
    pub(crate) fn with_size(&self, size: f64) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
