use crate::core::settings::defaults;
use crate::domain::model::ColorPalette;
use crate::domain::ports::Storage;
use crate::utils::error::{ColorError, Result};

pub const PALETTES_KEY: &str = "colorcraft-palettes.json";

/// Saved palettes, most recently saved first.
///
/// The whole collection is one JSON document on the injected storage medium
/// and every change rewrites it.
pub struct PaletteStore<S: Storage> {
    storage: S,
    key: String,
    max_entries: usize,
}

impl<S: Storage> PaletteStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_capacity(storage, defaults::MAX_SAVED_PALETTES)
    }

    pub fn with_capacity(storage: S, max_entries: usize) -> Self {
        Self {
            storage,
            key: PALETTES_KEY.to_string(),
            max_entries,
        }
    }

    /// Never fails: missing or unreadable data is an empty collection.
    pub async fn list(&self) -> Vec<ColorPalette> {
        let bytes = match self.storage.read_file(&self.key).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("No saved palettes at '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_slice::<Vec<ColorPalette>>(&bytes) {
            Ok(palettes) => palettes,
            Err(e) => {
                tracing::warn!("Ignoring corrupt palette data in '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }

    pub async fn get(&self, id: &str) -> Option<ColorPalette> {
        self.list().await.into_iter().find(|p| p.id == id)
    }

    /// Replaces any palette with the same id and moves it to the front.
    pub async fn upsert(&self, palette: ColorPalette) -> Result<()> {
        if palette.is_empty() {
            return Err(ColorError::ValidationError {
                message: "No colors to save".to_string(),
            });
        }

        let mut palettes = self.list().await;
        palettes.retain(|p| p.id != palette.id);
        tracing::debug!("Saving palette '{}' ({})", palette.name, palette.id);
        palettes.insert(0, palette);
        palettes.truncate(self.max_entries);

        self.write_all(&palettes).await
    }

    /// Returns whether a palette was removed. Unknown ids still rewrite the collection.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let mut palettes = self.list().await;
        let before = palettes.len();
        palettes.retain(|p| p.id != id);
        let removed = palettes.len() != before;

        self.write_all(&palettes).await?;
        Ok(removed)
    }

    async fn write_all(&self, palettes: &[ColorPalette]) -> Result<()> {
        let json = serde_json::to_vec(palettes)?;
        self.storage
            .write_file(&self.key, &json)
            .await
            .map_err(|e| ColorError::StorageError {
                message: format!("writing '{}': {}", self.key, e),
            })
    }
}
