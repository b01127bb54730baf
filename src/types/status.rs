//! Remote model availability.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What the last availability probe found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// No probe has completed yet.
    #[default]
    Checking,
    /// The remote model answered its health check.
    Connected,
    /// The remote model is unreachable or unhealthy; the rule table answers alone.
    Fallback,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Connected => "connected",
            Self::Fallback => "fallback",
        }
    }

    pub fn is_connected(&self) -> bool {
        *self == Self::Connected
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
