use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("Image decoding failed: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ColorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ColorError::ImageError(_) | ColorError::ValidationError { .. } => ErrorCategory::Input,
            ColorError::ConfigValidationError { .. }
            | ColorError::InvalidConfigValueError { .. }
            | ColorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ColorError::IoError(_)
            | ColorError::SerializationError(_)
            | ColorError::StorageError { .. } => ErrorCategory::Storage,
            ColorError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::High,
            ErrorCategory::Processing => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ColorError::ImageError(_) => {
                "Check that the file is a PNG, JPEG, GIF, WebP or BMP image".to_string()
            }
            ColorError::IoError(_) => "Check that the path exists and is readable".to_string(),
            ColorError::SerializationError(_) => {
                "The stored data may be damaged; remove the palette file and save again".to_string()
            }
            ColorError::ConfigValidationError { field, .. }
            | ColorError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in your configuration", field)
            }
            ColorError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            ColorError::StorageError { .. } => {
                "Check the data directory permissions and free disk space".to_string()
            }
            ColorError::ValidationError { .. } => "Check the command arguments".to_string(),
            ColorError::ProcessingError { .. } => {
                "Run again with --verbose and report the log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ColorError::ImageError(_) => "Could not read colors from the image".to_string(),
            ColorError::IoError(e) => format!("File access failed: {}", e),
            ColorError::SerializationError(_) => "Palette data could not be encoded".to_string(),
            ColorError::ConfigValidationError { .. }
            | ColorError::InvalidConfigValueError { .. }
            | ColorError::MissingConfigError { .. } => format!("Configuration problem: {}", self),
            ColorError::StorageError { message } => format!("Could not save palettes: {}", message),
            ColorError::ValidationError { message } => message.clone(),
            ColorError::ProcessingError { .. } => "Color processing failed unexpectedly".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let err = ColorError::ValidationError {
            message: "No colors to save".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = ColorError::MissingConfigError {
            field: "harmony.base".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("harmony.base"));
    }

    #[test]
    fn test_storage_and_processing_severities() {
        let err = ColorError::StorageError {
            message: "disk full".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);

        let err = ColorError::ProcessingError {
            message: "image decoding task failed".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(ErrorSeverity::Medium < ErrorSeverity::Critical);
    }

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let err = ColorError::ValidationError {
            message: "No colors to export".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "No colors to export");
    }
}
