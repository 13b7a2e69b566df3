//! Merge of a fetched agent configuration with the desired state.
//!
//! The fetched document is kept as an open JSON object so that fields this
//! tool does not model are passed back to the service untouched.

use super::definition::{
    is_memory_kind, FeatureEntry, ResponseFormat, SHORT_TERM_MEMORY,
};
use crate::error::{AgentctlError, Result};
use serde_json::{Map, Value};

/// Fields set by the service that must never be sent back on update.
pub const SERVER_OWNED_FIELDS: &[&str] = &["_id", "created_at", "updated_at", "api_key", "version"];

/// Messages retained by the short-term memory feature.
pub const MEMORY_MESSAGE_COUNT: u32 = 20;

/// What an agent should look like after reconciliation.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredState {
    pub instructions: String,
    pub response_format: ResponseFormat,
    pub memory: FeatureEntry,
}

impl DesiredState {
    /// Structured-object output with short-term memory and the given instructions.
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            response_format: ResponseFormat::JsonObject,
            memory: FeatureEntry::short_term_memory(MEMORY_MESSAGE_COUNT),
        }
    }
}

/// Copy of `current` without any server-owned field.
pub fn strip_server_fields(current: &Map<String, Value>) -> Map<String, Value> {
    current
        .iter()
        .filter(|(key, _)| !SERVER_OWNED_FIELDS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Drop every memory-kind entry and append `memory` last.
/// Non-memory entries keep their content and relative order.
pub fn ensure_memory_feature(features: &[Value], memory: &FeatureEntry) -> Result<Vec<Value>> {
    let mut merged: Vec<Value> = features
        .iter()
        .filter(|entry| !feature_kind(entry).is_some_and(is_memory_kind))
        .cloned()
        .collect();
    merged.push(serde_json::to_value(memory)?);
    Ok(merged)
}

/// Build the update payload from the fetched config and the desired state.
pub fn merge(current: &Map<String, Value>, desired: &DesiredState) -> Result<Map<String, Value>> {
    let mut payload = strip_server_fields(current);

    payload.insert(
        "response_format".to_string(),
        serde_json::to_value(desired.response_format)?,
    );
    payload.insert(
        "agent_instructions".to_string(),
        Value::String(desired.instructions.clone()),
    );

    let features = match current.get("features") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => {
            return Err(AgentctlError::MalformedResponse(format!(
                "features is not a list: {}",
                other
            )))
        }
    };
    payload.insert(
        "features".to_string(),
        Value::Array(ensure_memory_feature(&features, &desired.memory)?),
    );

    Ok(payload)
}

/// Outcome of the post-update convergence checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    pub response_format_ok: bool,
    pub short_term_memory_ok: bool,
}

impl Verification {
    pub fn passed(&self) -> bool {
        self.response_format_ok && self.short_term_memory_ok
    }

    /// Human-readable list of failed checks.
    pub fn failures(&self) -> Vec<&'static str> {
        let mut failures = Vec::new();
        if !self.response_format_ok {
            failures.push("response_format is not json_object");
        }
        if !self.short_term_memory_ok {
            failures.push("SHORT_TERM_MEMORY feature is missing");
        }
        failures
    }
}

/// Check a re-fetched config against the reconciled state.
pub fn verify(updated: &Map<String, Value>) -> Verification {
    Verification {
        response_format_ok: response_format_type(updated)
            == Some(ResponseFormat::JsonObject.as_str()),
        short_term_memory_ok: feature_kinds(updated)
            .iter()
            .any(|kind| kind == SHORT_TERM_MEMORY),
    }
}

/// `response_format.type` of a config, if present.
pub fn response_format_type(config: &Map<String, Value>) -> Option<&str> {
    config
        .get("response_format")
        .and_then(|format| format.get("type"))
        .and_then(Value::as_str)
}

/// Discriminants of every feature entry, in order. Entries without a string
/// `type` are shown as `?`.
pub fn feature_kinds(config: &Map<String, Value>) -> Vec<String> {
    config
        .get("features")
        .and_then(Value::as_array)
        .map(|features| {
            features
                .iter()
                .map(|entry| feature_kind(entry).unwrap_or("?").to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn feature_kind(entry: &Value) -> Option<&str> {
    entry.get("type").and_then(Value::as_str)
}
