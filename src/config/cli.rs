use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Extract dominant, vibrant, muted, light and dark palettes from an image
    Extract {
        /// Image file (png, jpg, gif, webp, bmp)
        image: PathBuf,
    },

    /// Generate a harmony palette from a base color
    Harmony {
        /// Base color as hex, e.g. "#3366cc"
        #[arg(long, conflicts_with = "image", required_unless_present = "image")]
        base: Option<String>,

        /// Use the most frequent color of this image as the base
        #[arg(long)]
        image: Option<PathBuf>,

        /// complementary, triadic, analogous, monochromatic or tetradic
        #[arg(long, default_value = "complementary")]
        scheme: String,

        /// Palette name (defaults to "<scheme> Palette")
        #[arg(long)]
        name: Option<String>,
    },

    /// Work with saved palettes
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum SavedAction {
    /// List saved palettes, most recent first
    List,

    /// Delete a saved palette by id
    Delete { id: String },

    /// Print a saved palette in the chosen --format
    Export { id: String },
}
