pub mod categorizer;
pub mod conversion;
pub mod engine;
pub mod export;
pub mod harmony;
pub mod palette_store;
pub mod sampler;
pub mod settings;

pub use crate::domain::model::{ColorInfo, ColorPalette, PaletteSet, PixelBuffer, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
