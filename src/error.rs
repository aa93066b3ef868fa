use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a time tracker entry
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Could not determine the home directory")]
    HomeDirUnavailable,

    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    #[error("In-page evaluation failed: {0}")]
    EvaluationFailed(String),

    #[error("Interaction with '{selector}' failed: {reason}")]
    InteractionFailed { selector: String, reason: String },

    #[error("No option in '{selector}' matches '{fragment}'")]
    NoMatchingOption { selector: String, fragment: String },

    #[error("Failed to capture screenshot: {0}")]
    ScreenshotFailed(String),

    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),
}

/// Result type alias using TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;
