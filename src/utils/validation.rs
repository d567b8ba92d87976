use crate::utils::error::{ColorError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Image extensions the loader accepts.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

fn hex_color_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#?[0-9a-fA-F]{6}$").expect("static pattern compiles"))
}

/// Strict check for user-supplied hex colors.
///
/// `hex_to_rgb` maps malformed input to black, so anything typed by a user
/// goes through here first.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    if !hex_color_pattern().is_match(value.trim()) {
        return Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a 6-digit hex color such as #ff8800".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Byte strides must land on pixel boundaries of an RGBA buffer.
pub fn validate_pixel_stride(field_name: &str, stride: usize) -> Result<()> {
    validate_positive_number(field_name, stride, 4)?;
    if stride % 4 != 0 {
        return Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: stride.to_string(),
            reason: "Stride must be a multiple of 4 bytes (one RGBA pixel)".to_string(),
        });
    }
    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) => {
            let extension = extension.to_lowercase();
            if !allowed_set.contains(extension.as_str()) {
                return Err(ColorError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: file.to_string(),
                    reason: format!(
                        "Unsupported file extension: {}. Allowed extensions: {}",
                        extension,
                        allowed_extensions.join(", ")
                    ),
                });
            }
            Ok(())
        }
        None => Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ColorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_hex_color() {
        assert!(validate_hex_color("base", "#ff8800").is_ok());
        assert!(validate_hex_color("base", "FF8800").is_ok());
        assert!(validate_hex_color("base", "#ff88").is_err());
        assert!(validate_hex_color("base", "#gg8800").is_err());
        assert!(validate_hex_color("base", "").is_err());
    }

    #[test]
    fn test_validate_pixel_stride() {
        assert!(validate_pixel_stride("sampling.stride_fine", 16).is_ok());
        assert!(validate_pixel_stride("sampling.stride_fine", 4).is_ok());
        assert!(validate_pixel_stride("sampling.stride_fine", 0).is_err());
        assert!(validate_pixel_stride("sampling.stride_fine", 18).is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("categories.dominant_cap", 12, 1).is_ok());
        assert!(validate_positive_number("categories.dominant_cap", 0, 1).is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("image", "photo.png", IMAGE_EXTENSIONS).is_ok());
        assert!(validate_file_extension("image", "PHOTO.JPG", IMAGE_EXTENSIONS).is_ok());
        assert!(validate_file_extension("image", "notes.txt", IMAGE_EXTENSIONS).is_err());
        assert!(validate_file_extension("image", "noext", IMAGE_EXTENSIONS).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("image.max_dimension", 800u32, 1, 10_000).is_ok());
        assert!(validate_range("image.max_dimension", 0u32, 1, 10_000).is_err());
    }
}
