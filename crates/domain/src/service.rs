//! Service — a named, URL-addressable resource tracked by the registry.
//!
//! The dashboard never mutates a [`Service`] after receiving it: records are
//! only displayed. New services are submitted as a [`NewService`] and the
//! registry assigns the id, status and creation date.

pub mod status;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::id::ServiceId;

pub use status::ServiceStatus;

/// A service record as served by `GET /api/v1/services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub url: String,
    pub status: ServiceStatus,
    /// Server-formatted creation date, displayed as received.
    pub creation_date: String,
}

impl Service {
    /// Text of the list item rendered for this service.
    #[must_use]
    pub fn list_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, name: {}, url: {}, status: {}, creation_date: {}",
            self.id, self.name, self.url, self.status, self.creation_date
        )
    }
}

/// Body of `POST /api/v1/services`.
///
/// Field order is part of the wire contract: `url` first, then `name`.
/// Values are submitted as typed, empty strings included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewService {
    pub url: String,
    pub name: String,
}

impl NewService {
    #[must_use]
    pub fn new(url: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
        }
    }

    /// Serialize to the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ApiError> {
        serde_json::to_string(self).map_err(|err| ApiError::Encode {
            message: err.to_string(),
        })
    }
}

/// A list element that could not be read as a [`Service`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// Position of the element in the response array.
    pub index: usize,
    pub reason: String,
}

/// Result of decoding a service list: readable records in response order,
/// plus the elements that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedServiceList {
    pub services: Vec<Service>,
    pub rejected: Vec<RejectedRecord>,
}

/// Decode a `GET /api/v1/services` response body, preserving array order.
///
/// Each element is decoded on its own: an element with a missing or
/// mistyped field is reported in [`DecodedServiceList::rejected`] and the
/// remaining elements are still returned.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not a JSON array.
pub fn decode_service_list(body: &str) -> Result<DecodedServiceList, ApiError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|err| ApiError::Decode {
            message: err.to_string(),
        })?;

    let mut decoded = DecodedServiceList::default();
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Service>(record) {
            Ok(service) => decoded.services.push(service),
            Err(err) => decoded.rejected.push(RejectedRecord {
                index,
                reason: err.to_string(),
            }),
        }
    }
    Ok(decoded)
}
