//! Demeter error types

/// Demeter error types
///
/// The rule-table evaluator is total and never produces one of these;
/// they come from the remote model client, caller-side validation, and
/// configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum DemeterError {
    // Remote/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The remote model answered with an `{"error": ...}` body.
    #[error("remote model error: {0}")]
    Remote(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown crop: {0}")]
    UnknownCrop(String),

    /// A reading failed caller-side validation.
    #[error("invalid {parameter} reading {value}: {reason}")]
    InvalidReading {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("no remote model endpoint configured")]
    NotConfigured,
}

impl DemeterError {
    /// Whether the error is worth surfacing as a temporary outage rather
    /// than a permanent misconfiguration.
    pub fn is_transient(&self) -> bool {
        match self {
            DemeterError::Http(_) => true,
            DemeterError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Result type alias for Demeter operations
pub type Result<T> = std::result::Result<T, DemeterError>;
