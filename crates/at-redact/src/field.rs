//! Governed event fields.

use serde::{Deserialize, Serialize};

/// The four event fields governed by the redaction policy.
///
/// Each field knows where it lives on the event (scalar property or
/// detail-map entry) and which pair of environment variables controls it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Login name, stored under the `username` detail key.
    Username,
    /// Brokered identity, stored under the `identity_provider_identity`
    /// detail key.
    Identity,
    /// SSO session identifier (scalar property).
    SessionId,
    /// Client IP address (scalar property).
    IpAddress,
}

impl Field {
    /// All governed fields, in policy order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::Identity,
        Field::SessionId,
        Field::IpAddress,
    ];

    /// Detail-map key for fields stored in the detail map, `None` for
    /// scalar properties.
    pub fn detail_key(&self) -> Option<&'static str> {
        match self {
            Field::Username => Some("username"),
            Field::Identity => Some("identity_provider_identity"),
            Field::SessionId | Field::IpAddress => None,
        }
    }

    /// Environment variable that forces [`Mode::Drop`](crate::Mode::Drop)
    /// for this field.
    pub fn drop_var(&self) -> &'static str {
        match self {
            Field::Username => "LOG_DROP_USERNAME",
            Field::Identity => "LOG_DROP_IDENTITY",
            Field::SessionId => "LOG_DROP_SESSION_ID",
            Field::IpAddress => "LOG_DROP_IP_ADDRESS",
        }
    }

    /// Environment variable that forces [`Mode::Hash`](crate::Mode::Hash)
    /// for this field.
    pub fn hash_var(&self) -> &'static str {
        match self {
            Field::Username => "LOG_HASH_USERNAME",
            Field::Identity => "LOG_HASH_IDENTITY",
            Field::SessionId => "LOG_HASH_SESSION_ID",
            Field::IpAddress => "LOG_HASH_IP_ADDRESS",
        }
    }

    /// Parse a field from a string.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "username" => Some(Field::Username),
            "identity" => Some(Field::Identity),
            "session_id" => Some(Field::SessionId),
            "ip_address" => Some(Field::IpAddress),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Field::Username => "username",
            Field::Identity => "identity",
            Field::SessionId => "session_id",
            Field::IpAddress => "ip_address",
        };
        write!(f, "{}", s)
    }
}
