//! Integration tests for at-pipeline.
//!
//! Drives the full path an event takes in production: interceptor in front
//! of a JSONL file sink, policy resolved from environment-style variables,
//! sanitized output read back from disk.

use std::collections::HashMap;

use at_common::{AuditEvent, EventType};
use at_pipeline::{EventSink, JsonlSink, SanitizingSink};
use at_redact::Policy;

const SHA256_SESSION_ID: &str = "4bdf1e15df716f27ff6ebcc119aa4b8863a221cd54e87772d824888f4aeac5c0";
const SHA256_IDENTITY: &str = "689f6a627384c7dcb2dcc1487e540223e77bdf9dcd0d8be8a326eda65b0ce9a4";

fn policy_for(pairs: &[(&str, &str)]) -> Policy {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Policy::from_map(&vars)
}

#[test]
fn test_events_reach_disk_sanitized() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let policy = policy_for(&[
        ("LOG_HASH_SESSION_ID", "true"),
        ("LOG_DROP_IP_ADDRESS", "true"),
        ("LOG_HASH_IDENTITY", "true"),
    ]);

    let mut sink = SanitizingSink::new(policy, JsonlSink::open(&path).unwrap()).unwrap();
    sink.submit(
        AuditEvent::new(EventType::IdentityProviderLogin)
            .with_realm("master")
            .with_session_id("session-id")
            .with_ip_address("0.0.0.0")
            .with_detail("username", "user")
            .with_detail("identity_provider_identity", "identity"),
    )
    .unwrap();
    sink.flush().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let persisted: AuditEvent = serde_json::from_str(content.lines().next().unwrap()).unwrap();

    assert_eq!(persisted.session_id.as_deref(), Some(SHA256_SESSION_ID));
    assert_eq!(persisted.ip_address, None);
    assert_eq!(persisted.detail("username"), Some("user"));
    assert_eq!(
        persisted.detail("identity_provider_identity"),
        Some(SHA256_IDENTITY)
    );
    assert_eq!(persisted.realm.as_deref(), Some("master"));

    // The raw values the policy hashed or dropped are not on disk.
    assert!(!content.contains("session-id"));
    assert!(!content.contains("0.0.0.0"));
    assert!(!content.contains("\"identity\""));
}

#[test]
fn test_noop_policy_passes_events_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let policy = policy_for(&[]);
    assert!(policy.is_noop());

    let original = AuditEvent::new(EventType::Login)
        .with_session_id("sess-1")
        .with_ip_address("198.51.100.7")
        .with_detail("username", "alice");

    let mut sink = SanitizingSink::new(policy, JsonlSink::open(&path).unwrap()).unwrap();
    sink.submit(original.clone()).unwrap();
    sink.flush().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let persisted: AuditEvent = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(persisted, original);
}

#[test]
fn test_each_submitted_event_is_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.jsonl");

    let policy = policy_for(&[("LOG_DROP_IP_ADDRESS", "true")]);
    let mut sink = SanitizingSink::new(policy, JsonlSink::open(&path).unwrap()).unwrap();

    for i in 0..5 {
        sink.submit(
            AuditEvent::new(EventType::Login)
                .with_session_id(format!("sess-{}", i))
                .with_ip_address("203.0.113.9"),
        )
        .unwrap();
    }
    sink.flush().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 5);
    for line in content.lines() {
        let event: AuditEvent = serde_json::from_str(line).unwrap();
        assert_eq!(event.ip_address, None);
    }
}
