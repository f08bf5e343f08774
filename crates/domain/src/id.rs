//! Service identifier as assigned by the registry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Service`](crate::service::Service).
///
/// The registry may hand out numeric or textual ids, so both JSON shapes are
/// accepted and serialized back unchanged. Numbers keep their JSON form
/// (integer, `u64` or float).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ServiceId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for ServiceId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_numeric_id() {
        let id: ServiceId = serde_json::from_str("42").unwrap();
        assert_eq!(id, ServiceId::from(42));
    }

    #[test]
    fn should_deserialize_textual_id() {
        let id: ServiceId =
            serde_json::from_str("\"0b6c9f1e-5c1a-4d7e-9a43-2f1d8f0e6b11\"").unwrap();
        assert_eq!(
            id,
            ServiceId::Text("0b6c9f1e-5c1a-4d7e-9a43-2f1d8f0e6b11".to_string())
        );
    }

    #[test]
    fn should_accept_ids_beyond_i64() {
        let id: ServiceId = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(id.to_string(), "18446744073709551615");
    }

    #[test]
    fn should_accept_float_ids() {
        let id: ServiceId = serde_json::from_str("1.5").unwrap();
        assert_eq!(id.to_string(), "1.5");
    }

    #[test]
    fn should_display_number_without_quotes() {
        assert_eq!(ServiceId::from(1).to_string(), "1");
    }

    #[test]
    fn should_keep_leading_zeros_of_textual_id() {
        let id: ServiceId = serde_json::from_str("\"007\"").unwrap();
        assert_eq!(id, ServiceId::Text("007".to_string()));
        assert_eq!(id.to_string(), "007");
    }

    #[test]
    fn should_serialize_back_to_received_json_shape() {
        assert_eq!(serde_json::to_string(&ServiceId::from(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ServiceId::from("x")).unwrap(),
            "\"x\""
        );
    }
}
