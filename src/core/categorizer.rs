//! Splits sampled colors into dominant, vibrant, muted, light and dark.
//!
//! Only `dominant` is frequency ranked. The other categories are plain
//! filters that keep sampling order, may overlap, and may repeat a color that
//! was sampled more than once.

use crate::core::sampler::{rank_by_frequency, PixelSampler};
use crate::core::settings::{CategoryCaps, SamplingSettings};
use crate::domain::model::{Category, ColorInfo, Hsl, PaletteSet, PixelBuffer};

impl Category {
    /// Threshold rule of a filtered category. `Dominant` has none and accepts everything.
    pub fn matches(&self, hsl: &Hsl) -> bool {
        match self {
            Category::Dominant => true,
            Category::Vibrant => hsl.s > 60 && hsl.l > 20 && hsl.l < 80,
            Category::Muted => hsl.s < 50 && hsl.l > 30 && hsl.l < 70,
            Category::Light => hsl.l > 70,
            Category::Dark => hsl.l < 30,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaletteCategorizer {
    caps: CategoryCaps,
}

impl PaletteCategorizer {
    pub fn new(caps: CategoryCaps) -> Self {
        Self { caps }
    }

    pub fn cap(&self, category: Category) -> usize {
        match category {
            Category::Dominant => self.caps.dominant,
            Category::Vibrant => self.caps.vibrant,
            Category::Muted => self.caps.muted,
            Category::Light => self.caps.light,
            Category::Dark => self.caps.dark,
        }
    }

    pub fn categorize(&self, samples: &[ColorInfo]) -> PaletteSet {
        PaletteSet {
            dominant: self.top_colors(samples, self.caps.dominant),
            vibrant: self.filtered(samples, Category::Vibrant),
            muted: self.filtered(samples, Category::Muted),
            light: self.filtered(samples, Category::Light),
            dark: self.filtered(samples, Category::Dark),
        }
    }

    fn filtered(&self, samples: &[ColorInfo], category: Category) -> Vec<ColorInfo> {
        samples
            .iter()
            .filter(|color| category.matches(&color.hsl))
            .take(self.cap(category))
            .cloned()
            .collect()
    }

    fn top_colors(&self, samples: &[ColorInfo], count: usize) -> Vec<ColorInfo> {
        rank_by_frequency(samples.iter().map(|c| c.hex.clone()), count)
            .into_iter()
            .filter_map(|hex| samples.iter().find(|c| c.hex == hex).cloned())
            .collect()
    }
}

/// Fine-stride sampling followed by categorization.
pub fn extract_all_color_palettes(
    pixels: &PixelBuffer,
    sampling: &SamplingSettings,
    caps: &CategoryCaps,
) -> PaletteSet {
    let samples = PixelSampler::from_settings(sampling).sample_colors(pixels.data(), sampling.stride_fine);
    PaletteCategorizer::new(caps.clone()).categorize(&samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Rgb;

    fn color(r: u8, g: u8, b: u8) -> ColorInfo {
        ColorInfo::from_rgb(Rgb::new(r, g, b))
    }

    #[test]
    fn test_category_thresholds_are_strict() {
        assert!(Category::Vibrant.matches(&Hsl::new(0, 61, 50)));
        assert!(!Category::Vibrant.matches(&Hsl::new(0, 60, 50)));
        assert!(!Category::Vibrant.matches(&Hsl::new(0, 100, 20)));
        assert!(!Category::Vibrant.matches(&Hsl::new(0, 100, 80)));
        assert!(Category::Muted.matches(&Hsl::new(0, 49, 31)));
        assert!(!Category::Muted.matches(&Hsl::new(0, 50, 50)));
        assert!(!Category::Muted.matches(&Hsl::new(0, 10, 70)));
        assert!(Category::Light.matches(&Hsl::new(0, 0, 71)));
        assert!(!Category::Light.matches(&Hsl::new(0, 0, 70)));
        assert!(Category::Dark.matches(&Hsl::new(0, 0, 29)));
        assert!(!Category::Dark.matches(&Hsl::new(0, 0, 30)));
    }

    #[test]
    fn test_categories_overlap_and_keep_sampling_order() {
        let samples = vec![
            color(255, 0, 0),     // vibrant
            color(240, 240, 240), // light
            color(20, 20, 20),    // dark
            color(230, 50, 50),   // vibrant
            color(128, 120, 110), // muted
        ];
        let set = PaletteCategorizer::default().categorize(&samples);

        let vibrant: Vec<&str> = set.vibrant.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(vibrant, vec!["#ff0000", "#e63232"]);
        assert_eq!(set.light[0].hex, "#f0f0f0");
        assert_eq!(set.dark[0].hex, "#141414");
        assert_eq!(set.muted[0].hex, "#80786e");
        assert_eq!(set.dominant.len(), 5);
    }

    #[test]
    fn test_dominant_ranks_by_frequency() {
        let samples = vec![
            color(0, 0, 255),
            color(255, 0, 0),
            color(255, 0, 0),
            color(0, 0, 255),
            color(255, 0, 0),
        ];
        let set = PaletteCategorizer::default().categorize(&samples);
        let dominant: Vec<&str> = set.dominant.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(dominant, vec!["#ff0000", "#0000ff"]);
        // filtered categories keep duplicates
        assert_eq!(set.vibrant.len(), 5);
    }

    #[test]
    fn test_caps_are_applied_per_category() {
        let samples: Vec<ColorInfo> = (0..30u8).map(|i| color(i, i, i)).collect();
        let set = PaletteCategorizer::default().categorize(&samples);
        assert_eq!(set.dominant.len(), 12);
        assert_eq!(set.dark.len(), 8);
        assert!(set.vibrant.is_empty());
        assert!(set.light.is_empty());
    }

    #[test]
    fn test_transparent_image_gives_empty_categories() {
        let pixels = PixelBuffer::new(8, 8, [10u8, 200, 30, 0].repeat(64)).unwrap();
        let set = extract_all_color_palettes(&pixels, &SamplingSettings::default(), &CategoryCaps::default());
        assert!(set.is_empty());
        for (_, colors) in set.iter() {
            assert!(colors.is_empty());
        }
    }

    #[test]
    fn test_extract_all_uses_fine_stride() {
        // 8 opaque red pixels; fine stride samples pixels 0 and 4
        let pixels = PixelBuffer::new(8, 1, [255u8, 0, 0, 255].repeat(8)).unwrap();
        let set = extract_all_color_palettes(&pixels, &SamplingSettings::default(), &CategoryCaps::default());
        assert_eq!(set.dominant.len(), 1);
        assert_eq!(set.vibrant.len(), 2);
    }
}
