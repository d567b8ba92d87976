//! Harmony schemes derived from a single base color.

use crate::domain::model::{ColorInfo, Hsl};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HarmonyScheme {
    /// 180° apart
    Complementary,
    /// 120° apart
    Triadic,
    /// four 30° steps
    Analogous,
    /// same hue, four lighter steps
    Monochromatic,
    /// 90° apart
    Tetradic,
}

impl HarmonyScheme {
    pub const ALL: [HarmonyScheme; 5] = [
        HarmonyScheme::Complementary,
        HarmonyScheme::Triadic,
        HarmonyScheme::Analogous,
        HarmonyScheme::Monochromatic,
        HarmonyScheme::Tetradic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Monochromatic => "monochromatic",
            HarmonyScheme::Tetradic => "tetradic",
        }
    }

    /// Exact lowercase match; anything else is `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.as_str() == name)
    }

    /// The derived colors, without the base.
    pub fn derive(&self, base: &Hsl) -> Vec<ColorInfo> {
        let Hsl { h, s, l } = *base;
        let rotate = |degrees: u16| ColorInfo::from_hsl(Hsl::new((h + degrees) % 360, s, l));

        match self {
            HarmonyScheme::Complementary => vec![rotate(180)],
            HarmonyScheme::Triadic => vec![rotate(120), rotate(240)],
            HarmonyScheme::Analogous => (1..=4).map(|i| rotate(i * 30)).collect(),
            HarmonyScheme::Monochromatic => (1..=4u8)
                .map(|i| {
                    let lightness = (u16::from(l) + u16::from(i) * 15).clamp(10, 90) as u8;
                    ColorInfo::from_hsl(Hsl::new(h, s, lightness))
                })
                .collect(),
            HarmonyScheme::Tetradic => vec![rotate(90), rotate(180), rotate(270)],
        }
    }

    /// Base color first, then the derived colors.
    pub fn generate(&self, base: &ColorInfo) -> Vec<ColorInfo> {
        let mut colors = vec![base.clone()];
        colors.extend(self.derive(&base.hsl));
        colors
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expands `base` with the named scheme.
///
/// An unrecognized scheme name returns just the base color.
pub fn generate_color_harmony(base: &ColorInfo, harmony_type: &str) -> Vec<ColorInfo> {
    match HarmonyScheme::parse(harmony_type) {
        Some(scheme) => scheme.generate(base),
        None => {
            tracing::debug!("Unknown harmony '{}', returning base color only", harmony_type);
            vec![base.clone()]
        }
    }
}
