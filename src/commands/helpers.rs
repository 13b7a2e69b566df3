use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde_json::{Map, Value};

/// Width of the banner rule printed around long-running commands
pub const RULE_WIDTH: usize = 60;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn check_mark(ok: bool) -> &'static str {
    if ok {
        "✓"
    } else {
        "✗"
    }
}

/// `name` field of an agent document, for display.
pub fn agent_name(config: &Map<String, Value>) -> &str {
    config
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
}

/// Render a service timestamp in local time.
///
/// The service sends either RFC 3339 or naive ISO 8601 (implicitly UTC).
/// Anything else is shown verbatim; a missing value shows as `N/A`.
pub fn format_timestamp(value: Option<&Value>) -> String {
    let Some(raw) = value.and_then(Value::as_str) else {
        return "N/A".to_string();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| Utc.from_utc_datetime(&naive))
        });

    match parsed {
        Ok(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S %Z")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
