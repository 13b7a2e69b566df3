use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentctlError {
    #[error("API key not set. Export {0} or pass --api-key")]
    MissingCredential(String),

    #[error("Agent definition file not found: {0}")]
    DefinitionNotFound(PathBuf),

    #[error("Failed to parse agent definition {path}: {message}")]
    DefinitionParse { path: PathBuf, message: String },

    #[error("No instructions found in agent definition: {0} (expected spec.instructions)")]
    MissingInstructions(PathBuf),

    #[error("Request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Unexpected response from agent service: {0}")]
    MalformedResponse(String),

    #[error("Agent did not converge: {0}")]
    VerificationMismatch(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AgentctlError {
    fn from(err: reqwest::Error) -> Self {
        AgentctlError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AgentctlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status_and_body() {
        let err = AgentctlError::Http {
            status: 404,
            body: "{\"detail\":\"Agent not found\"}".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("Agent not found"));
    }

    #[test]
    fn test_missing_credential_names_variable() {
        let err = AgentctlError::MissingCredential("LYZR_API_KEY".to_string());
        assert!(err.to_string().contains("LYZR_API_KEY"));
    }
}
