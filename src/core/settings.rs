//! Tunable thresholds of the extraction engine.
//!
//! Every number the sampler, categorizer, store and image loader rely on is
//! named here. `EngineSettings::default()` reproduces the stock behavior; a
//! TOML file can override any subset of it.

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub mod defaults {
    /// Samples with alpha below this are treated as background.
    pub const ALPHA_CUTOFF: u8 = 125;

    /// Byte stride of the simple frequency extraction (every 5th pixel).
    pub const SAMPLE_STRIDE_COARSE: usize = 20;

    /// Byte stride used when sampling for categorization (every 4th pixel).
    pub const SAMPLE_STRIDE_FINE: usize = 16;

    pub const MAX_SAMPLED_COLORS: usize = 20;

    pub const DOMINANT_CAP: usize = 12;
    pub const VIBRANT_CAP: usize = 10;
    pub const MUTED_CAP: usize = 8;
    pub const LIGHT_CAP: usize = 8;
    pub const DARK_CAP: usize = 8;

    pub const MAX_SAVED_PALETTES: usize = 50;

    /// Longest image side before the loader downscales.
    pub const MAX_IMAGE_DIMENSION: u32 = 800;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    pub alpha_cutoff: u8,
    pub stride_coarse: usize,
    pub stride_fine: usize,
    pub max_sampled_colors: usize,
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            alpha_cutoff: defaults::ALPHA_CUTOFF,
            stride_coarse: defaults::SAMPLE_STRIDE_COARSE,
            stride_fine: defaults::SAMPLE_STRIDE_FINE,
            max_sampled_colors: defaults::MAX_SAMPLED_COLORS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCaps {
    pub dominant: usize,
    pub vibrant: usize,
    pub muted: usize,
    pub light: usize,
    pub dark: usize,
}

impl Default for CategoryCaps {
    fn default() -> Self {
        Self {
            dominant: defaults::DOMINANT_CAP,
            vibrant: defaults::VIBRANT_CAP,
            muted: defaults::MUTED_CAP,
            light: defaults::LIGHT_CAP,
            dark: defaults::DARK_CAP,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub sampling: SamplingSettings,
    pub categories: CategoryCaps,
    pub max_saved_palettes: usize,
    pub max_image_dimension: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            sampling: SamplingSettings::default(),
            categories: CategoryCaps::default(),
            max_saved_palettes: defaults::MAX_SAVED_PALETTES,
            max_image_dimension: defaults::MAX_IMAGE_DIMENSION,
        }
    }
}

impl Validate for EngineSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_pixel_stride("sampling.stride_coarse", self.sampling.stride_coarse)?;
        validation::validate_pixel_stride("sampling.stride_fine", self.sampling.stride_fine)?;
        validation::validate_positive_number(
            "sampling.max_sampled_colors",
            self.sampling.max_sampled_colors,
            1,
        )?;

        let caps = [
            ("categories.dominant", self.categories.dominant),
            ("categories.vibrant", self.categories.vibrant),
            ("categories.muted", self.categories.muted),
            ("categories.light", self.categories.light),
            ("categories.dark", self.categories.dark),
        ];
        for (field, cap) in caps {
            validation::validate_positive_number(field, cap, 1)?;
        }

        validation::validate_positive_number("storage.max_saved", self.max_saved_palettes, 1)?;
        validation::validate_range("image.max_dimension", self.max_image_dimension, 1, 16_384)?;
        Ok(())
    }
}
