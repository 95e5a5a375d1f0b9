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

//! Example driving the engine over a single block from the command line,
//! using a stub translator that simply upper-cases its input. Real callers
//! supply their own [`Translator`] backed by an HTTP client.

use async_trait::async_trait;
use clap::Parser;
use lpe_core::{
    config::EngineConfig,
    geometry::{BoundingBox, Color, FontInfo, FontStyle},
    orchestrator::{Engine, LayoutContext},
    translator::{Translator, TranslatorError},
};

/// Lays out a single translated text block against a bounding box and
/// prints the resulting adjustment as JSON.
#[derive(Debug, Parser)]
struct Args {
    /// The original-language text.
    #[clap(short, long)]
    text: String,
    /// Bounding box width, in points.
    #[clap(long, default_value_t = 200.0)]
    width: f64,
    /// Bounding box height, in points.
    #[clap(long, default_value_t = 60.0)]
    height: f64,
    /// Font size, in points.
    #[clap(long, default_value_t = 12.0)]
    font_size: f64,
}

/// A translator stand-in: upper-cases the input instead of calling out to a
/// real translation service.
struct UppercaseTranslator;

#[async_trait]
impl Translator for UppercaseTranslator {
    async fn translate(
        &self,
        text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, TranslatorError> {
        Ok(text.to_uppercase())
    }
}

/// Main function for the translate_page example.
#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = EngineConfig::from_env()?;
    let engine = Engine::new(config);
    let context = LayoutContext {
        bbox: BoundingBox::new(0.0, 0.0, args.width, args.height)?,
        font: FontInfo::new(
            "Arial",
            args.font_size,
            "normal",
            FontStyle::Normal,
            Color { r: 0, g: 0, b: 0 },
        )?,
        ocr_confidence: None,
    };

    let result = engine
        .translate_block(&args.text, "en", "en", &context, &UppercaseTranslator)
        .await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
