//! # colorcraft
//!
//! Extracts representative colors from images, groups them into dominant,
//! vibrant, muted, light and dark palettes, and derives color harmonies
//! (complementary, triadic, analogous, monochromatic, tetradic) from a base
//! color.
//!
//! The engine in [`core`](crate::core) is synchronous and works on decoded RGBA buffers.
//! Image decoding, palette persistence and the command line live behind the
//! ports in [`domain::ports`].
//!
//! ```
//! use colorcraft::{generate_color_harmony, ColorInfo};
//!
//! let red = ColorInfo::from_hex("#ff0000");
//! let colors = generate_color_harmony(&red, "complementary");
//! assert_eq!(colors[1].hex, "#00ffff");
//! ```

pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, MemoryStorage};
pub use app::pipelines::{BaseColor, ExtractionPipeline, HarmonyPipeline};
pub use config::toml_config::TomlConfig;
pub use crate::core::categorizer::extract_all_color_palettes;
pub use crate::core::conversion::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};
pub use crate::core::engine::{EngineOutput, PaletteEngine};
pub use crate::core::export::{export_filename, export_palette, ExportFormat};
pub use crate::core::harmony::{generate_color_harmony, HarmonyScheme};
pub use crate::core::palette_store::PaletteStore;
pub use crate::core::sampler::PixelSampler;
pub use domain::model::{Category, ColorInfo, ColorPalette, Hsl, PaletteSet, PixelBuffer, Rgb};
pub use utils::error::{ColorError, Result};
