//! Error types for Vriksha

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Vriksha error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Aggregate statistics requested over an empty history
    #[error("Not computable: measurement history is empty")]
    EmptyHistory,

    /// Input at or beyond the singular limit of a derived metric
    #[error("{quantity} out of range for input {value}")]
    OutOfRange {
        /// Metric being computed
        quantity: &'static str,
        /// Offending input
        value: f64,
    },

    /// Horizontal distance to the tree must be positive and finite
    #[error("Invalid distance: {0} m")]
    InvalidDistance(f64),

    /// Filter smoothing factor outside (0, 1]
    #[error("Invalid filter alpha: {0} (expected 0 < alpha <= 1)")]
    InvalidAlpha(f64),

    /// Recorded measurement value is not a finite number
    #[error("Invalid measurement value: {0}")]
    InvalidValue(f64),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed line in a sample log
    #[error("Sample log line {line}: {message}")]
    SampleLog {
        /// 1-based line number
        line: usize,
        /// Parser message
        message: String,
    },
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::Config(e.to_string())
    }
}
