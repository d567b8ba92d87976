//! Image files to RGBA pixel buffers.
//!
//! Decoding uses the `image` crate on a blocking thread. Images whose longer
//! side exceeds the configured maximum are scaled down (aspect ratio kept)
//! before sampling, which bounds sampling cost for large photos.

use crate::domain::model::PixelBuffer;
use crate::utils::error::{ColorError, Result};
use crate::utils::validation::{validate_file_extension, IMAGE_EXTENSIONS};
use image::imageops::FilterType;
use image::DynamicImage;
use std::path::Path;

pub async fn load_pixel_buffer(path: &Path, max_dimension: u32) -> Result<PixelBuffer> {
    let shown = path.display().to_string();
    validate_file_extension("image", &shown, IMAGE_EXTENSIONS)?;

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!("Read {} bytes from {}", bytes.len(), shown);

    tokio::task::spawn_blocking(move || decode_pixel_buffer(&bytes, max_dimension))
        .await
        .map_err(|e| ColorError::ProcessingError {
            message: format!("image decoding task failed: {}", e),
        })?
}

pub fn decode_pixel_buffer(bytes: &[u8], max_dimension: u32) -> Result<PixelBuffer> {
    let image = image::load_from_memory(bytes)?;
    to_pixel_buffer(image, max_dimension)
}

pub fn to_pixel_buffer(image: DynamicImage, max_dimension: u32) -> Result<PixelBuffer> {
    let (width, height) = (image.width(), image.height());
    let image = if width > max_dimension || height > max_dimension {
        let resized = image.resize(max_dimension, max_dimension, FilterType::Triangle);
        tracing::debug!(
            "Downscaled image from {}x{} to {}x{}",
            width,
            height,
            resized.width(),
            resized.height()
        );
        resized
    } else {
        image
    };

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}
