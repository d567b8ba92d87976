use crate::utils::error::{ColorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }
}

/// One color in its hex, RGB and HSL views.
///
/// Build these through `ColorInfo::from_rgb`, `from_hex` or `from_hsl` so the
/// three views stay consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub id: String,
    pub name: String,
    pub colors: Vec<ColorInfo>,
    pub harmony: String,
    pub created_at: DateTime<Utc>,
}

impl ColorPalette {
    /// Creates a palette stamped with the current time.
    ///
    /// A missing id is generated, a blank name falls back to `"<harmony> Palette"`.
    pub fn new(id: Option<String>, name: &str, colors: Vec<ColorInfo>, harmony: &str) -> Self {
        let created_at = Utc::now();
        let id = id.unwrap_or_else(|| Self::generate_id_at(created_at));
        let name = if name.trim().is_empty() {
            Self::default_name(harmony)
        } else {
            name.trim().to_string()
        };

        Self {
            id,
            name,
            colors,
            harmony: harmony.to_string(),
            created_at,
        }
    }

    pub fn default_name(harmony: &str) -> String {
        format!("{} Palette", harmony)
    }

    pub fn generate_id() -> String {
        Self::generate_id_at(Utc::now())
    }

    fn generate_id_at(at: DateTime<Utc>) -> String {
        format!("palette_{}", at.timestamp_millis())
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dominant,
    Vibrant,
    Muted,
    Light,
    Dark,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Dominant,
        Category::Vibrant,
        Category::Muted,
        Category::Light,
        Category::Dark,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Dominant => "dominant",
            Category::Vibrant => "vibrant",
            Category::Muted => "muted",
            Category::Light => "light",
            Category::Dark => "dark",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ColorError::ValidationError {
                message: format!("Unknown palette category: {}", s),
            })
    }
}

/// Category name to color sequence, as produced by the categorizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSet {
    pub dominant: Vec<ColorInfo>,
    pub vibrant: Vec<ColorInfo>,
    pub muted: Vec<ColorInfo>,
    pub light: Vec<ColorInfo>,
    pub dark: Vec<ColorInfo>,
}

impl PaletteSet {
    pub fn get(&self, category: Category) -> &[ColorInfo] {
        match category {
            Category::Dominant => &self.dominant,
            Category::Vibrant => &self.vibrant,
            Category::Muted => &self.muted,
            Category::Light => &self.light,
            Category::Dark => &self.dark,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[ColorInfo])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, colors)| colors.is_empty())
    }
}

/// Decoded image: row-major, interleaved RGBA, 8 bits per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(ColorError::ValidationError {
                message: format!(
                    "Pixel buffer of {}x{} needs {} bytes, got {}",
                    width,
                    height,
                    expected,
                    data.len()
                ),
            });
        }
        Ok(Self { width, height, data })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub palettes: Vec<ColorPalette>,
    pub sample_count: usize,
}
