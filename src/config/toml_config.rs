use crate::config::{DEFAULT_DATA_DIR, DEFAULT_EXPORT_FORMAT, DEFAULT_OUTPUT_PATH};
use crate::core::settings::{CategoryCaps, EngineSettings, SamplingSettings};
use crate::core::ConfigProvider;
use crate::utils::error::{ColorError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional `colorcraft.toml`. Every section and field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub sampling: SamplingSettings,
    pub categories: CategoryCaps,
    pub storage: StorageConfig,
    pub image: ImageConfig,
    pub export: ExportConfig,
    #[serde(skip)]
    resolved: EngineSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: String,
    pub max_saved: usize,
    pub auto_save: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            max_saved: crate::core::settings::defaults::MAX_SAVED_PALETTES,
            auto_save: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub max_dimension: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_dimension: crate::core::settings::defaults::MAX_IMAGE_DIMENSION,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub output_path: String,
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            format: DEFAULT_EXPORT_FORMAT.to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ColorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        let mut config: Self =
            toml::from_str(&processed_content).map_err(|e| ColorError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.resolved = config.build_settings();
        Ok(config)
    }

    /// 替換環境變數 (例如 ${COLORCRAFT_DATA})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern compiles"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    fn build_settings(&self) -> EngineSettings {
        EngineSettings {
            sampling: self.sampling.clone(),
            categories: self.categories.clone(),
            max_saved_palettes: self.storage.max_saved,
            max_image_dimension: self.image.max_dimension,
        }
    }

    pub fn data_dir(&self) -> &str {
        &self.storage.data_dir
    }

    pub fn validate_config(&self) -> Result<()> {
        self.build_settings().validate()?;
        validation::validate_path("storage.data_dir", &self.storage.data_dir)?;
        validation::validate_path("export.output_path", &self.export.output_path)?;
        validation::validate_non_empty_string("export.format", &self.export.format)?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn settings(&self) -> &EngineSettings {
        &self.resolved
    }

    fn output_path(&self) -> &str {
        &self.export.output_path
    }

    fn export_format(&self) -> &str {
        &self.export.format
    }

    fn save_palettes(&self) -> bool {
        self.storage.auto_save
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.settings(), &EngineSettings::default());
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.export_format(), "css");
        assert!(!config.save_palettes());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml_content = r#"
[sampling]
stride_fine = 8

[categories]
vibrant = 4

[storage]
max_saved = 10
auto_save = true

[image]
max_dimension = 400

[export]
format = "scss"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let settings = config.settings();
        assert_eq!(settings.sampling.stride_fine, 8);
        assert_eq!(settings.sampling.stride_coarse, 20);
        assert_eq!(settings.sampling.alpha_cutoff, 125);
        assert_eq!(settings.categories.vibrant, 4);
        assert_eq!(settings.categories.dominant, 12);
        assert_eq!(settings.max_saved_palettes, 10);
        assert_eq!(settings.max_image_dimension, 400);
        assert_eq!(config.export_format(), "scss");
        assert!(config.save_palettes());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COLORCRAFT_TEST_OUTPUT", "/tmp/colorcraft-out");

        let toml_content = r#"
[export]
output_path = "${COLORCRAFT_TEST_OUTPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output_path(), "/tmp/colorcraft-out");

        std::env::remove_var("COLORCRAFT_TEST_OUTPUT");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[storage]
data_dir = "${COLORCRAFT_SURELY_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_dir(), "${COLORCRAFT_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[sampling]
stride_coarse = 7
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[sampling\nstride_fine = ").unwrap_err();
        assert!(matches!(err, ColorError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[categories]\ndark = 3\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.settings().categories.dark, 3);
    }
}
