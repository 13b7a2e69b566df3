//! Data structures describing an agent resource as the management API sees it.

use crate::error::{AgentctlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Feature discriminant for bounded conversation history.
pub const SHORT_TERM_MEMORY: &str = "SHORT_TERM_MEMORY";

/// Every feature discriminant the service uses for memory behavior.
/// A well-formed feature list carries at most one of these.
pub const MEMORY_KINDS: &[&str] = &["memory", SHORT_TERM_MEMORY, "STRUCTURED_MEMORY"];

pub fn is_memory_kind(kind: &str) -> bool {
    MEMORY_KINDS.contains(&kind)
}

/// How the remote agent renders its replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    #[default]
    Text,
    #[value(name = "json_object")]
    JsonObject,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Text => "text",
            ResponseFormat::JsonObject => "json_object",
        }
    }
}

/// One entry of an agent's feature list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEntry {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub config: Map<String, Value>,

    #[serde(default)]
    pub priority: i64,
}

impl FeatureEntry {
    /// Short-term memory retaining the last `message_count` messages.
    pub fn short_term_memory(message_count: u32) -> Self {
        let mut config = Map::new();
        config.insert("message_count".to_string(), Value::from(message_count));
        Self {
            kind: SHORT_TERM_MEMORY.to_string(),
            config,
            priority: 0,
        }
    }

    pub fn is_memory(&self) -> bool {
        is_memory_kind(&self.kind)
    }
}

/// Full configuration of an agent as submitted on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub model: String,
    pub provider_id: String,
    pub llm_credential_id: String,
    pub agent_role: String,
    pub agent_goal: String,
    pub agent_instructions: String,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_p")]
    pub top_p: f64,

    #[serde(default)]
    pub response_format: ResponseFormat,

    #[serde(default)]
    pub features: Vec<FeatureEntry>,

    #[serde(default)]
    pub tools: Vec<Value>,

    #[serde(default)]
    pub files: Vec<Value>,

    #[serde(default)]
    pub tool_configs: Vec<Value>,
}

fn default_temperature() -> f64 {
    0.7
}

fn default_top_p() -> f64 {
    0.9
}

impl AgentConfig {
    pub fn builder(name: impl Into<String>) -> AgentConfigBuilder {
        AgentConfigBuilder::new(name)
    }
}

/// Builds an [`AgentConfig`] from named parameters, validating on `build`.
#[derive(Debug, Clone)]
pub struct AgentConfigBuilder {
    config: AgentConfig,
}

impl AgentConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: AgentConfig {
                name: name.into(),
                description: String::new(),
                model: String::new(),
                provider_id: String::new(),
                llm_credential_id: String::new(),
                agent_role: String::new(),
                agent_goal: String::new(),
                agent_instructions: String::new(),
                temperature: default_temperature(),
                top_p: default_top_p(),
                response_format: ResponseFormat::default(),
                features: Vec::new(),
                tools: Vec::new(),
                files: Vec::new(),
                tool_configs: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = description.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn provider_id(mut self, provider_id: impl Into<String>) -> Self {
        self.config.provider_id = provider_id.into();
        self
    }

    /// Name of the provider credential stored on the service side.
    pub fn llm_credential_id(mut self, llm_credential_id: impl Into<String>) -> Self {
        self.config.llm_credential_id = llm_credential_id.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.config.agent_role = role.into();
        self
    }

    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.config.agent_goal = goal.into();
        self
    }

    pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
        self.config.agent_instructions = instructions.into();
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.config.temperature = temperature;
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.config.top_p = top_p;
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.config.response_format = format;
        self
    }

    pub fn feature(mut self, feature: FeatureEntry) -> Self {
        self.config.features.push(feature);
        self
    }

    pub fn build(self) -> Result<AgentConfig> {
        let config = self.config;
        if config.name.trim().is_empty() {
            return Err(AgentctlError::InvalidConfig(
                "Agent name cannot be empty".to_string(),
            ));
        }
        if config.model.trim().is_empty() {
            return Err(AgentctlError::InvalidConfig(format!(
                "Agent '{}' has no model",
                config.name
            )));
        }
        if config.agent_instructions.trim().is_empty() {
            return Err(AgentctlError::InvalidConfig(format!(
                "Agent '{}' has no instructions",
                config.name
            )));
        }
        if !(0.0..=2.0).contains(&config.temperature) {
            return Err(AgentctlError::InvalidConfig(format!(
                "temperature must be between 0 and 2, got {}",
                config.temperature
            )));
        }
        if !(0.0..=1.0).contains(&config.top_p) {
            return Err(AgentctlError::InvalidConfig(format!(
                "top_p must be between 0 and 1, got {}",
                config.top_p
            )));
        }
        if config.features.iter().filter(|f| f.is_memory()).count() > 1 {
            return Err(AgentctlError::InvalidConfig(format!(
                "Agent '{}' declares more than one memory feature",
                config.name
            )));
        }
        Ok(config)
    }
}

impl From<AgentConfig> for AgentConfigBuilder {
    fn from(config: AgentConfig) -> Self {
        Self { config }
    }
}
