pub mod extraction_pipeline;
pub mod harmony_pipeline;

pub use extraction_pipeline::ExtractionPipeline;
pub use harmony_pipeline::{BaseColor, HarmonyPipeline};

use crate::core::export::{export_filename, export_palette};
use crate::core::palette_store::PaletteStore;
use crate::core::{ColorPalette, ConfigProvider, Storage};
use crate::utils::error::Result;

/// Shared load step: optionally save each palette, then write one export file per palette.
pub(crate) async fn save_and_export<S: Storage, C: ConfigProvider>(
    store: &PaletteStore<S>,
    exports: &S,
    config: &C,
    palettes: &[ColorPalette],
) -> Result<String> {
    let format = config.export_format();

    for palette in palettes {
        if config.save_palettes() {
            store.upsert(palette.clone()).await?;
            tracing::info!("💾 Saved palette '{}' ({})", palette.name, palette.id);
        }

        let filename = export_filename(&palette.name, format);
        let content = export_palette(palette, format)?;
        exports.write_file(&filename, content.as_bytes()).await?;
        tracing::debug!("Wrote {} ({} bytes)", filename, content.len());
    }

    Ok(config.output_path().to_string())
}
