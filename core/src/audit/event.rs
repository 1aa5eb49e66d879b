use crate::determinism::{json_canonical, sha256_hex};
use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Actor {
    System,
    Admin,
    Visitor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEvent {
    pub ts_utc: String, // RFC3339 UTC
    pub event_type: String,
    pub session_id: String,
    pub actor: Actor,
    pub details: serde_json::Value,
    pub prev_event_hash: String, // hex 64
    pub event_hash: String,      // hex 64
}

pub const ZERO_HASH_64: &str = "0000000000000000000000000000000000000000000000000000000000000000";

impl AuditEvent {
    /// Unhashed event; [`crate::audit::log::AuditLog::append`] chains and
    /// hashes it.
    pub fn new(
        ts_utc: impl Into<String>,
        event_type: &str,
        session_id: impl Into<String>,
        actor: Actor,
        details: serde_json::Value,
    ) -> Self {
        Self {
            ts_utc: ts_utc.into(),
            event_type: event_type.to_string(),
            session_id: session_id.into(),
            actor,
            details,
            prev_event_hash: String::new(),
            event_hash: String::new(),
        }
    }
}

// event_hash is computed with itself zeroed so the envelope keeps every key.
pub fn compute_event_hash(event: &AuditEvent) -> CoreResult<String> {
    let mut e = event.clone();
    e.event_hash = ZERO_HASH_64.to_string();
    let bytes = json_canonical::to_canonical_bytes(&e)?;
    Ok(sha256_hex(&bytes))
}

pub fn finalize_event(mut event: AuditEvent) -> CoreResult<AuditEvent> {
    if event.prev_event_hash.len() != 64
        || !event.prev_event_hash.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(CoreError::InvalidInput(
            "prev_event_hash must be 64 hex chars".to_string(),
        ));
    }
    validate_event_taxonomy(&event)?;
    event.event_hash = compute_event_hash(&event)?;
    Ok(event)
}

fn validate_event_taxonomy(event: &AuditEvent) -> CoreResult<()> {
    let required = required_detail_keys(&event.event_type).ok_or_else(|| {
        CoreError::InvalidInput(format!("unknown event_type {}", event.event_type))
    })?;
    for k in required {
        if event.details.get(k).is_none() {
            return Err(CoreError::InvalidInput(format!(
                "event {} missing details.{}",
                event.event_type, k
            )));
        }
    }
    Ok(())
}

fn required_detail_keys(event_type: &str) -> Option<&'static [&'static str]> {
    let keys: &'static [&'static str] = match event_type {
        "IMPACTS_FETCHED" => &["impact_count", "keypoint_count", "skipped_indices"],
        "IMPACTS_FETCH_FAILED" => &["error_message", "fallback_used"],
        "IMPACT_SUBMITTED" => &["method", "path", "keypoint_count"],
        "IMPACT_DELETED" => &["impact_id", "path"],
        _ => return None,
    };
    Some(keys)
}
