//! Blocking HTTP client for the agent management API.

use crate::agent::AgentConfig;
use crate::error::{AgentctlError, Result};
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::{Map, Value};
use std::time::Duration;

/// Sent as `X-API-Key`; `from_static` only accepts lowercase names.
const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

pub struct AgentClient {
    http: Client,
    base_url: String,
}

impl AgentClient {
    /// Build a client whose every request carries the API key and times out
    /// after `timeout`.
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            AgentctlError::InvalidConfig("API key contains invalid characters".to_string())
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /v3/agents/`; returns the assigned `agent_id`.
    pub fn create_agent(&self, config: &AgentConfig) -> Result<String> {
        let url = format!("{}/v3/agents/", self.base_url);
        let body = send(self.http.post(&url).json(config), "POST", &url)?;

        match body.get("agent_id").and_then(Value::as_str) {
            Some(agent_id) => Ok(agent_id.to_string()),
            None => Err(AgentctlError::MalformedResponse(format!(
                "no agent_id in response: {}",
                Value::Object(body.clone())
            ))),
        }
    }

    /// `GET /v3/agents/{id}`
    pub fn get_agent(&self, agent_id: &str) -> Result<Map<String, Value>> {
        let url = self.agent_url(agent_id);
        send(self.http.get(&url), "GET", &url)
    }

    /// `PUT /v3/agents/{id}`; returns the updated config as sent back by the service.
    pub fn update_agent(
        &self,
        agent_id: &str,
        payload: &Map<String, Value>,
    ) -> Result<Map<String, Value>> {
        let url = self.agent_url(agent_id);
        send(self.http.put(&url).json(payload), "PUT", &url)
    }

    fn agent_url(&self, agent_id: &str) -> String {
        format!("{}/v3/agents/{}", self.base_url, agent_id)
    }
}

/// Send a request and decode a JSON object body. Any non-2xx status becomes
/// `AgentctlError::Http` carrying the raw body.
fn send(request: RequestBuilder, method: &str, url: &str) -> Result<Map<String, Value>> {
    log::debug!("{} {}", method, url);
    let response = request.send()?;
    let status = response.status();
    let text = response.text()?;
    log::debug!("{} {} -> {}", method, url, status);

    if !status.is_success() {
        return Err(AgentctlError::Http {
            status: status.as_u16(),
            body: text,
        });
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(AgentctlError::MalformedResponse(format!(
            "expected a JSON object, got {}",
            other
        ))),
        Err(e) => Err(AgentctlError::MalformedResponse(format!(
            "invalid JSON ({}): {}",
            e, text
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn client(server: &mockito::ServerGuard) -> AgentClient {
        AgentClient::new(&server.url(), "test-key", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_get_agent_sends_key_and_content_type() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/v3/agents/abc123")
            .match_header("x-api-key", "test-key")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"name": "Builder", "_id": "abc123"}"#)
            .create();

        let agent = client(&server).get_agent("abc123").unwrap();
        assert_eq!(agent["name"], json!("Builder"));
        mock.assert();
    }

    #[test]
    fn test_get_agent_http_error() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/v3/agents/missing")
            .with_status(404)
            .with_body(r#"{"detail": "Agent not found"}"#)
            .create();

        let err = client(&server).get_agent("missing").unwrap_err();
        match err {
            AgentctlError::Http { status, body } => {
                assert_eq!(status, 404);
                assert!(body.contains("Agent not found"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_create_agent_returns_id() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/v3/agents/")
            .match_body(Matcher::PartialJson(json!({
                "name": "Test",
                "response_format": {"type": "text"}
            })))
            .with_status(200)
            .with_body(r#"{"agent_id": "new-id-1"}"#)
            .create();

        let config = AgentConfig::builder("Test")
            .model("m")
            .instructions("i")
            .build()
            .unwrap();
        let id = client(&server).create_agent(&config).unwrap();
        assert_eq!(id, "new-id-1");
        mock.assert();
    }

    #[test]
    fn test_create_agent_without_id_is_malformed() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/v3/agents/")
            .with_status(200)
            .with_body(r#"{"status": "ok"}"#)
            .create();

        let config = AgentConfig::builder("Test")
            .model("m")
            .instructions("i")
            .build()
            .unwrap();
        let err = client(&server).create_agent(&config).unwrap_err();
        match err {
            AgentctlError::MalformedResponse(message) => {
                assert!(message.contains("no agent_id"));
                assert!(message.contains(r#""status":"ok""#));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_update_agent_sends_payload() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("PUT", "/v3/agents/abc123")
            .match_body(Matcher::Json(json!({"name": "Builder"})))
            .with_status(200)
            .with_body(r#"{"name": "Builder", "updated_at": "2026-10-19T10:00:00Z"}"#)
            .create();

        let payload = json!({"name": "Builder"}).as_object().cloned().unwrap();
        let updated = client(&server).update_agent("abc123", &payload).unwrap();
        assert_eq!(updated["updated_at"], json!("2026-10-19T10:00:00Z"));
        mock.assert();
    }

    #[test]
    fn test_non_object_body_is_malformed() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/v3/agents/abc")
            .with_status(200)
            .with_body("[1, 2, 3]")
            .create();

        let err = client(&server).get_agent("abc").unwrap_err();
        assert!(matches!(err, AgentctlError::MalformedResponse(_)));
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let client = AgentClient::new("http://localhost:9/", "k", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9");
        assert_eq!(client.agent_url("x"), "http://localhost:9/v3/agents/x");
    }

    #[test]
    fn test_invalid_api_key_characters() {
        let result = AgentClient::new("http://localhost", "bad\nkey", Duration::from_secs(1));
        assert!(matches!(result, Err(AgentctlError::InvalidConfig(_))));
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let client = AgentClient::new("http://127.0.0.1:9", "k", Duration::from_secs(2)).unwrap();
        let err = client.get_agent("abc").unwrap_err();
        assert!(matches!(err, AgentctlError::Transport(_)));
    }
}
