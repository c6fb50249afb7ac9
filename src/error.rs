use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the automation driver.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DriverError {
    #[error("element query failed for selector '{selector}': {message}")]
    Query { selector: String, message: String },

    #[error("failed to fetch rectangle for element {element}: {message}")]
    ElementRect { element: String, message: String },

    #[error("settings call failed: {0}")]
    Settings(String),

    #[error("device introspection failed: {0}")]
    Device(String),
}

impl DriverError {
    pub fn query(selector: impl Into<String>, message: impl Into<String>) -> Self {
        DriverError::Query {
            selector: selector.into(),
            message: message.into(),
        }
    }

    pub fn element_rect(element: impl Into<String>, message: impl Into<String>) -> Self {
        DriverError::ElementRect {
            element: element.into(),
            message: message.into(),
        }
    }
}

pub type DriverResult<T> = std::result::Result<T, DriverError>;

#[derive(Debug, Error)]
pub enum BlockoutError {
    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),

    #[error("Failed to restore allowInvisibleElements={original}: {source}")]
    VisibilityRestore {
        original: bool,
        source: DriverError,
        /// Error raised by the wrapped action before the restore was attempted.
        action: Option<Box<BlockoutError>>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BlockoutError {
    pub fn config(message: impl Into<String>) -> Self {
        BlockoutError::Config(message.into())
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            BlockoutError::Driver(e) => ErrorPayload::new(
                ErrorCategory::Driver,
                e.to_string(),
                "Check that the automation session is alive and the selector syntax matches the platform.",
            ),
            BlockoutError::VisibilityRestore { .. } => ErrorPayload::new(
                ErrorCategory::Driver,
                self.to_string(),
                "The session may still allow invisible elements; reset the setting or restart the session.",
            ),
            BlockoutError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            BlockoutError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check the options/device JSON; elementBlockOuts entries need a selector.",
            ),
            BlockoutError::Yaml(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Check the YAML options file for indentation and key names.",
            ),
            BlockoutError::TomlParse(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check the config TOML syntax (e.g., [chrome] status_bar_height = 24).",
            ),
            BlockoutError::Image(e) => ErrorPayload::new(
                ErrorCategory::Input,
                e.to_string(),
                "Verify the screenshot path and that it is a supported image (png, jpg, gif, webp, bmp).",
            ),
            BlockoutError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Chrome heights must be positive and margins finite.",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, BlockoutError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Config,
    Driver,
    Input,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}
