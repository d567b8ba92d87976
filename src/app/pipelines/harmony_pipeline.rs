use crate::adapters::image_loader::load_pixel_buffer;
use crate::app::pipelines::save_and_export;
use crate::core::harmony::{generate_color_harmony, HarmonyScheme};
use crate::core::palette_store::PaletteStore;
use crate::core::sampler::PixelSampler;
use crate::core::{ColorInfo, ColorPalette, ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::{ColorError, Result};
use crate::utils::validation::validate_hex_color;
use std::path::PathBuf;

/// Where the base color of a harmony comes from.
#[derive(Debug, Clone)]
pub enum BaseColor {
    Hex(String),
    /// The most frequent color of the image.
    Image(PathBuf),
}

pub struct HarmonyPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) store: PaletteStore<S>,
    pub(crate) exports: S,
    pub(crate) config: C,
    pub(crate) base: BaseColor,
    pub(crate) scheme: String,
    pub(crate) name: Option<String>,
}

impl<S: Storage, C: ConfigProvider> HarmonyPipeline<S, C> {
    pub fn new(store: PaletteStore<S>, exports: S, config: C, base: BaseColor, scheme: &str) -> Self {
        Self {
            store,
            exports,
            config,
            base,
            scheme: scheme.to_string(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for HarmonyPipeline<S, C> {
    type Input = ColorInfo;

    async fn extract(&self) -> Result<ColorInfo> {
        match &self.base {
            BaseColor::Hex(hex) => {
                validate_hex_color("base", hex)?;
                Ok(ColorInfo::from_hex(hex.trim()))
            }
            BaseColor::Image(path) => {
                let settings = self.config.settings();
                let pixels = load_pixel_buffer(path, settings.max_image_dimension).await?;
                let top = PixelSampler::from_settings(&settings.sampling).extract_colors(
                    pixels.data(),
                    settings.sampling.stride_coarse,
                    1,
                );
                top.into_iter().next().ok_or_else(|| ColorError::ValidationError {
                    message: format!("No opaque colors found in {}", path.display()),
                })
            }
        }
    }

    async fn transform(&self, base: ColorInfo) -> Result<TransformResult> {
        if HarmonyScheme::parse(&self.scheme).is_none() {
            tracing::warn!(
                "⚠️  Unknown harmony '{}', palette will only hold the base color",
                self.scheme
            );
        }

        tracing::info!("🎨 Generating {} harmony from {}", self.scheme, base.hex);
        let colors = generate_color_harmony(&base, &self.scheme);
        let palette = ColorPalette::new(None, self.name.as_deref().unwrap_or(""), colors, &self.scheme);

        Ok(TransformResult {
            palettes: vec![palette],
            sample_count: 1,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        save_and_export(&self.store, &self.exports, &self.config, &result.palettes).await
    }
}
