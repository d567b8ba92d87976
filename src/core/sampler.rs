//! Fixed-stride sampling over RGBA buffers.

use crate::core::conversion::rgb_to_hex;
use crate::core::settings::SamplingSettings;
use crate::domain::model::{ColorInfo, Rgb};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct PixelSampler {
    alpha_cutoff: u8,
}

impl Default for PixelSampler {
    fn default() -> Self {
        Self::new(crate::core::settings::defaults::ALPHA_CUTOFF)
    }
}

impl PixelSampler {
    pub fn new(alpha_cutoff: u8) -> Self {
        Self { alpha_cutoff }
    }

    pub fn from_settings(settings: &SamplingSettings) -> Self {
        Self::new(settings.alpha_cutoff)
    }

    /// Opaque-enough pixels at every `stride` bytes, in buffer order.
    ///
    /// A trailing partial pixel is skipped. `stride` must be non-zero.
    pub fn sample_rgb<'a>(&self, data: &'a [u8], stride: usize) -> impl Iterator<Item = Rgb> + 'a {
        let cutoff = self.alpha_cutoff;
        (0..data.len())
            .step_by(stride.max(1))
            .filter_map(move |i| data.get(i..i + 4))
            .filter(move |px| px[3] >= cutoff)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }

    /// Every retained sample as a full `ColorInfo`, duplicates included.
    pub fn sample_colors(&self, data: &[u8], stride: usize) -> Vec<ColorInfo> {
        self.sample_rgb(data, stride).map(ColorInfo::from_rgb).collect()
    }

    /// The `limit` most frequent distinct colors, most frequent first.
    pub fn extract_colors(&self, data: &[u8], stride: usize, limit: usize) -> Vec<ColorInfo> {
        let hexes = self.sample_rgb(data, stride).map(|rgb| rgb_to_hex(rgb.r, rgb.g, rgb.b));
        rank_by_frequency(hexes, limit)
            .into_iter()
            .map(|hex| ColorInfo::from_hex(&hex))
            .collect()
    }
}

/// Distinct values ordered by occurrence count, descending.
///
/// Equal counts keep the order in which the values were first seen.
pub fn rank_by_frequency<I>(values: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, value) in values.into_iter().enumerate() {
        counts.entry(value).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(value, (count, first_seen))| (value, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(limit);

    ranked.into_iter().map(|(value, _, _)| value).collect()
}
