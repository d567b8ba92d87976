use crate::adapters::image_loader::load_pixel_buffer;
use crate::app::pipelines::save_and_export;
use crate::core::categorizer::PaletteCategorizer;
use crate::core::palette_store::PaletteStore;
use crate::core::sampler::PixelSampler;
use crate::core::{ColorPalette, ConfigProvider, Pipeline, PixelBuffer, Storage, TransformResult};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Harmony tag of the frequency-ranked coarse extraction.
pub const EXTRACTED_TAG: &str = "extracted";

/// Image → one palette per non-empty category plus the coarse top colors.
pub struct ExtractionPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) store: PaletteStore<S>,
    pub(crate) exports: S,
    pub(crate) config: C,
    pub(crate) image_path: PathBuf,
}

impl<S: Storage, C: ConfigProvider> ExtractionPipeline<S, C> {
    pub fn new(store: PaletteStore<S>, exports: S, config: C, image_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            exports,
            config,
            image_path: image_path.into(),
        }
    }

    /// Categorizes an already decoded buffer.
    pub fn build_palettes(&self, pixels: &PixelBuffer) -> TransformResult {
        let settings = self.config.settings();
        let sampler = PixelSampler::from_settings(&settings.sampling);

        let samples = sampler.sample_colors(pixels.data(), settings.sampling.stride_fine);
        let set = PaletteCategorizer::new(settings.categories.clone()).categorize(&samples);
        let extracted = sampler.extract_colors(
            pixels.data(),
            settings.sampling.stride_coarse,
            settings.sampling.max_sampled_colors,
        );

        let base_id = ColorPalette::generate_id();
        let mut palettes = Vec::new();
        if !extracted.is_empty() {
            palettes.push(ColorPalette::new(
                Some(format!("{}_{}", base_id, EXTRACTED_TAG)),
                "",
                extracted,
                EXTRACTED_TAG,
            ));
        }
        for (category, colors) in set.iter() {
            if colors.is_empty() {
                tracing::debug!("Category '{}' is empty", category);
                continue;
            }
            palettes.push(ColorPalette::new(
                Some(format!("{}_{}", base_id, category)),
                "",
                colors.to_vec(),
                category.as_str(),
            ));
        }

        TransformResult {
            palettes,
            sample_count: samples.len(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExtractionPipeline<S, C> {
    type Input = PixelBuffer;

    async fn extract(&self) -> Result<PixelBuffer> {
        tracing::info!("🖼️  Loading image: {}", self.image_path.display());
        let pixels =
            load_pixel_buffer(&self.image_path, self.config.settings().max_image_dimension).await?;
        tracing::info!(
            "📐 Decoded {}x{} ({} pixels)",
            pixels.width(),
            pixels.height(),
            pixels.pixel_count()
        );
        Ok(pixels)
    }

    async fn transform(&self, pixels: PixelBuffer) -> Result<TransformResult> {
        let result = self.build_palettes(&pixels);
        if result.sample_count == 0 {
            tracing::warn!("📝 No opaque pixels were sampled, palettes are empty");
        }
        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        save_and_export(&self.store, &self.exports, &self.config, &result.palettes).await
    }
}
