//! The audit event record.
//!
//! An [`AuditEvent`] describes one authentication/audit occurrence as the
//! host pipeline hands it over: a handful of scalar properties plus an
//! optional string-keyed detail map. The record is externally owned; this
//! crate only defines its shape and accessors.
//!
//! Detail-map access is deliberately narrow: a shared read view via
//! [`AuditEvent::details`] and a whole-map setter via
//! [`AuditEvent::set_details`]. Changing a single entry means cloning the
//! map, editing the clone, and writing it back, which keeps any aliased
//! view of the old map intact.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of authentication occurrence, in the host platform's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    /// Successful interactive login.
    Login,
    /// Failed login attempt.
    LoginError,
    /// Session logout.
    Logout,
    /// New account registration.
    Register,
    /// Authorization code exchanged for tokens.
    CodeToToken,
    /// Token refresh.
    RefreshToken,
    /// Login brokered through an external identity provider.
    IdentityProviderLogin,
    /// Any event type not modeled above.
    Other,
}

// Unknown wire names map to `Other` rather than failing the whole event;
// the host vocabulary grows faster than this crate.
impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Ok(EventType::parse_str(&name).unwrap_or(EventType::Other))
    }
}

impl EventType {
    /// Parse an event type from its wire name.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "LOGIN" => Some(EventType::Login),
            "LOGIN_ERROR" => Some(EventType::LoginError),
            "LOGOUT" => Some(EventType::Logout),
            "REGISTER" => Some(EventType::Register),
            "CODE_TO_TOKEN" => Some(EventType::CodeToToken),
            "REFRESH_TOKEN" => Some(EventType::RefreshToken),
            "IDENTITY_PROVIDER_LOGIN" => Some(EventType::IdentityProviderLogin),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EventType::Login => "LOGIN",
            EventType::LoginError => "LOGIN_ERROR",
            EventType::Logout => "LOGOUT",
            EventType::Register => "REGISTER",
            EventType::CodeToToken => "CODE_TO_TOKEN",
            EventType::RefreshToken => "REFRESH_TOKEN",
            EventType::IdentityProviderLogin => "IDENTITY_PROVIDER_LOGIN",
            EventType::Other => "OTHER",
        };
        write!(f, "{}", s)
    }
}

/// One authentication/audit occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    /// Kind of occurrence.
    #[serde(rename = "type")]
    pub event_type: EventType,

    /// When the event occurred.
    pub time: DateTime<Utc>,

    /// Realm the event belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,

    /// Client application involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,

    /// Internal user identifier (opaque, not a login name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// SSO session identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,

    /// Client IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    /// Error tag for failed operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Free-form string-keyed details.
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<HashMap<String, String>>,
}

impl AuditEvent {
    /// Create an event of the given type, stamped now, with no context.
    pub fn new(event_type: EventType) -> Self {
        AuditEvent {
            event_type,
            time: Utc::now(),
            realm: None,
            client: None,
            user_id: None,
            session_id: None,
            ip_address: None,
            error: None,
            details: None,
        }
    }

    /// Set the realm.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Set the client.
    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Set the internal user identifier.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set the session identifier.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the client IP address.
    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Set the error tag.
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Add one detail entry, creating the map if needed.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Shared view of the detail map.
    pub fn details(&self) -> Option<&HashMap<String, String>> {
        self.details.as_ref()
    }

    /// Replace the whole detail map.
    pub fn set_details(&mut self, details: Option<HashMap<String, String>>) {
        self.details = details;
    }

    /// Look up one detail value.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details
            .as_ref()
            .and_then(|d| d.get(key))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_roundtrip() {
        assert_eq!(EventType::parse_str("LOGIN"), Some(EventType::Login));
        assert_eq!(
            EventType::parse_str("IDENTITY_PROVIDER_LOGIN"),
            Some(EventType::IdentityProviderLogin)
        );
        assert_eq!(EventType::parse_str("login"), None);
        assert_eq!(EventType::Login.to_string(), "LOGIN");
        assert_eq!(EventType::CodeToToken.to_string(), "CODE_TO_TOKEN");
    }

    #[test]
    fn test_event_type_unknown_deserializes_to_other() {
        let parsed: EventType = serde_json::from_str("\"CLIENT_DELETE\"").unwrap();
        assert_eq!(parsed, EventType::Other);
    }

    #[test]
    fn test_builder_fills_fields() {
        let event = AuditEvent::new(EventType::Login)
            .with_realm("master")
            .with_session_id("sess-1")
            .with_ip_address("198.51.100.7")
            .with_detail("username", "alice");

        assert_eq!(event.realm.as_deref(), Some("master"));
        assert_eq!(event.session_id.as_deref(), Some("sess-1"));
        assert_eq!(event.ip_address.as_deref(), Some("198.51.100.7"));
        assert_eq!(event.detail("username"), Some("alice"));
        assert_eq!(event.detail("missing"), None);
    }

    #[test]
    fn test_serde_wire_names() {
        let event = AuditEvent::new(EventType::LoginError)
            .with_session_id("sess-1")
            .with_ip_address("198.51.100.7")
            .with_error("invalid_user_credentials");

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "LOGIN_ERROR");
        assert_eq!(json["sessionId"], "sess-1");
        assert_eq!(json["ipAddress"], "198.51.100.7");
        assert_eq!(json["error"], "invalid_user_credentials");
        // Unset optionals are omitted, not serialized as null.
        assert!(json.get("realm").is_none());
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_serde_roundtrip_with_details() {
        let event = AuditEvent::new(EventType::Login)
            .with_detail("username", "alice")
            .with_detail("auth_method", "openid-connect");

        let json = serde_json::to_string(&event).unwrap();
        let back: AuditEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_set_details_replaces_map() {
        let mut event = AuditEvent::new(EventType::Login).with_detail("username", "alice");

        let mut replacement = event.details().cloned().unwrap();
        replacement.remove("username");
        event.set_details(Some(replacement));

        assert_eq!(event.detail("username"), None);
    }
}
