use crate::domain::model::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unknown category: {name}")]
    UnknownCategoryError { name: String },

    #[error("Unsupported output format: {name}")]
    UnknownFormatError { name: String },

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
}

pub type Result<T> = std::result::Result<T, ClassifyError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller handed us a token outside the closed enumerations.
    Input,
    /// Configuration file or CLI arguments are unusable.
    Config,
    /// Rendering a classification into an output format failed.
    Render,
    /// Writing a report to its destination failed.
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClassifyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClassifyError::UnknownCategoryError { .. } => ErrorCategory::Input,
            ClassifyError::UnknownFormatError { .. } => ErrorCategory::Input,
            ClassifyError::ConfigValidationError { .. }
            | ClassifyError::InvalidConfigValueError { .. }
            | ClassifyError::MissingConfigError { .. } => ErrorCategory::Config,
            ClassifyError::SerializationError(_) | ClassifyError::CsvError(_) => {
                ErrorCategory::Render
            }
            ClassifyError::IoError(_) => ErrorCategory::Storage,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // Bad tokens and bad config are caller defects, fail fast.
            ErrorCategory::Input | ErrorCategory::Config => ErrorSeverity::High,
            ErrorCategory::Render => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ClassifyError::UnknownCategoryError { .. } => format!(
                "Use one of the supported categories: {}",
                Category::token_list()
            ),
            ClassifyError::UnknownFormatError { .. } => {
                "Use one of the supported output formats: text, json, csv".to_string()
            }
            ClassifyError::ConfigValidationError { field, .. }
            | ClassifyError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' entry in the configuration and retry", field)
            }
            ClassifyError::MissingConfigError { field } => {
                format!("Add the required '{}' entry to the configuration", field)
            }
            ClassifyError::IoError(_) => {
                "Check that the output path exists and is writable".to_string()
            }
            ClassifyError::SerializationError(_) | ClassifyError::CsvError(_) => {
                "Re-run with --verbose and report the log output".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClassifyError::UnknownCategoryError { name } => {
                format!("'{}' is not a number category this tool knows", name)
            }
            ClassifyError::UnknownFormatError { name } => {
                format!("'{}' is not a supported output format", name)
            }
            ClassifyError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            ClassifyError::ConfigValidationError { .. }
            | ClassifyError::InvalidConfigValueError { .. } => {
                format!("The configuration is invalid: {}", self)
            }
            ClassifyError::IoError(e) => format!("Could not write the output: {}", e),
            ClassifyError::SerializationError(_) | ClassifyError::CsvError(_) => {
                format!("Could not render the output: {}", self)
            }
        }
    }
}
