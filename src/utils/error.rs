use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Browser automation failed: {0}")]
    BrowserError(#[from] anyhow::Error),

    #[error("Detail page request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Timed out after {seconds}s waiting for listing marker '{selector}'")]
    MarkerTimeoutError { selector: String, seconds: u64 },

    #[error("Page height did not stabilize within {rounds} scroll rounds")]
    ScrollNotSettledError { rounds: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Browser,
    Network,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ScrapeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::BrowserError(_)
            | Self::MarkerTimeoutError { .. }
            | Self::ScrollNotSettledError { .. } => ErrorCategory::Browser,
            Self::HttpError(_) => ErrorCategory::Network,
            Self::CsvError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorCategory::Output
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 瀏覽器無法啟動屬於環境問題
            Self::BrowserError(_) => ErrorSeverity::Critical,
            Self::MarkerTimeoutError { .. } | Self::ScrollNotSettledError { .. } => {
                ErrorSeverity::Medium
            }
            Self::HttpError(_) => ErrorSeverity::Medium,
            Self::CsvError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorSeverity::High
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::BrowserError(_) => {
                "Check that a Chrome/Chromium binary is installed and launchable".to_string()
            }
            Self::MarkerTimeoutError { selector, .. } => format!(
                "The listing page may have changed; verify that '{}' still matches",
                selector
            ),
            Self::ScrollNotSettledError { rounds } => format!(
                "Listing kept growing after {} scroll rounds; raise max_scroll_rounds or narrow the listing URL",
                rounds
            ),
            Self::HttpError(_) => {
                "Check network connectivity and that the detail URL is reachable".to_string()
            }
            Self::CsvError(_) | Self::IoError(_) | Self::SerializationError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => {
                "Fix the configuration value and re-run".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Browser => format!("Browser step failed: {}", self),
            ErrorCategory::Network => format!("Network request failed: {}", self),
            ErrorCategory::Output => format!("Could not write output: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
