//! Service status — the health state reported by the registry's poller.

use serde::{Deserialize, Serialize};

/// Health status of a registered service.
///
/// The registry reports `UNKNOWN` until the first poll and `OK` / `FAILED`
/// afterwards. Unrecognised values are preserved as [`Other`](Self::Other)
/// so they are displayed exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Ok,
    Failed,
    Other(String),
}

impl ServiceStatus {
    /// The wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Ok => "OK",
            Self::Failed => "FAILED",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for ServiceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "UNKNOWN" => Self::Unknown,
            "OK" => Self::Ok,
            "FAILED" => Self::Failed,
            _ => Self::Other(value),
        }
    }
}

impl From<ServiceStatus> for String {
    fn from(value: ServiceStatus) -> Self {
        match value {
            ServiceStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
