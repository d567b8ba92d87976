#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_DATA_DIR: &str = "./.colorcraft";
pub const DEFAULT_EXPORT_FORMAT: &str = "css";

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::cli::Command;
    use super::toml_config::TomlConfig;
    use super::{DEFAULT_DATA_DIR, DEFAULT_EXPORT_FORMAT, DEFAULT_OUTPUT_PATH};
    use crate::core::settings::EngineSettings;
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;

    /// Command line flags win over the TOML file, which wins over built-in defaults.
    #[derive(Debug, Clone, Parser)]
    #[command(name = "colorcraft")]
    #[command(about = "Extract color palettes and color harmonies from images")]
    pub struct CliConfig {
        #[command(subcommand)]
        pub command: Command,

        #[arg(long, global = true, help = "Path to a colorcraft TOML config file")]
        pub config: Option<String>,

        #[arg(long, global = true, help = "Directory export files are written to")]
        pub output_path: Option<String>,

        #[arg(long, global = true, help = "Directory holding saved palettes")]
        pub data_dir: Option<String>,

        #[arg(long, global = true, help = "Export format: css, scss, json or txt")]
        pub format: Option<String>,

        #[arg(long, global = true, help = "Save generated palettes to the collection")]
        pub save: bool,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        #[arg(skip)]
        pub settings: EngineSettings,
    }

    impl CliConfig {
        /// Fills everything the command line left unset from `toml`.
        pub fn apply_toml(&mut self, toml: &TomlConfig) {
            self.settings = toml.settings().clone();
            if self.output_path.is_none() {
                self.output_path = Some(toml.output_path().to_string());
            }
            if self.data_dir.is_none() {
                self.data_dir = Some(toml.data_dir().to_string());
            }
            if self.format.is_none() {
                self.format = Some(toml.export_format().to_string());
            }
            self.save = self.save || toml.save_palettes();
        }

        pub fn data_dir(&self) -> &str {
            self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
        }
    }

    impl ConfigProvider for CliConfig {
        fn settings(&self) -> &EngineSettings {
            &self.settings
        }

        fn output_path(&self) -> &str {
            self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
        }

        fn export_format(&self) -> &str {
            self.format.as_deref().unwrap_or(DEFAULT_EXPORT_FORMAT)
        }

        fn save_palettes(&self) -> bool {
            self.save
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            self.settings.validate()?;
            validation::validate_path("output_path", self.output_path())?;
            validation::validate_path("data_dir", self.data_dir())?;
            validation::validate_non_empty_string("format", self.export_format())?;

            if let Command::Harmony { base: Some(base), .. } = &self.command {
                validation::validate_hex_color("base", base)?;
            }
            Ok(())
        }
    }

}
