use crate::domain::model::ColorPalette;
use crate::utils::error::Result;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
    Text,
}

impl ExportFormat {
    /// Unknown names fall back to plain text.
    pub fn from_name(name: &str) -> Self {
        match name {
            "css" => ExportFormat::Css,
            "scss" => ExportFormat::Scss,
            "json" => ExportFormat::Json,
            _ => ExportFormat::Text,
        }
    }

    pub fn render(&self, palette: &ColorPalette) -> Result<String> {
        let rendered = match self {
            ExportFormat::Css => numbered_lines(palette, "--color"),
            ExportFormat::Scss => numbered_lines(palette, "$color"),
            ExportFormat::Json => serde_json::to_string_pretty(palette)?,
            ExportFormat::Text => palette
                .colors
                .iter()
                .map(|color| color.hex.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        };
        Ok(rendered)
    }
}

fn numbered_lines(palette: &ColorPalette, prefix: &str) -> String {
    palette
        .colors
        .iter()
        .enumerate()
        .map(|(index, color)| format!("{}-{}: {};", prefix, index + 1, color.hex))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn export_palette(palette: &ColorPalette, format: &str) -> Result<String> {
    ExportFormat::from_name(format).render(palette)
}

/// `"Sunset  Glow"` + `"css"` becomes `"sunset-glow.css"`.
///
/// The result is a single path component: runs of anything outside
/// `[a-z0-9._-]` become `-` and leading dots are dropped.
pub fn export_filename(palette_name: &str, format: &str) -> String {
    let stem = file_safe(palette_name);
    let stem = if stem.is_empty() { "palette".to_string() } else { stem };
    format!("{}.{}", stem, file_safe(format))
}

fn file_safe(value: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let unsafe_chars =
        UNSAFE.get_or_init(|| Regex::new(r"[^a-z0-9._-]+").expect("static pattern compiles"));
    unsafe_chars
        .replace_all(&value.trim().to_lowercase(), "-")
        .trim_start_matches('.')
        .to_string()
}
