use crate::cli::ApiFlags;
use crate::client::AgentClient;
use crate::error::{AgentctlError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = ".agentctl.toml";

/// Effective configuration after every layer has been applied.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub agent: AgentTargetConfig,

    /// API key passed on the command line (never stored in config file)
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_base_url() -> String {
    "https://agent-prod.studio.lyzr.ai".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_api_key_env() -> String {
    "LYZR_API_KEY".to_string()
}

#[derive(Debug, Clone)]
pub struct AgentTargetConfig {
    /// Agent reconciled by `agentctl update`
    pub id: Option<String>,

    /// Declarative manifest providing the agent instructions
    pub definition: Option<PathBuf>,

    /// Variable name printed after `agentctl create`
    pub env_name: String,
}

impl Default for AgentTargetConfig {
    fn default() -> Self {
        Self {
            id: None,
            definition: None,
            env_name: default_env_name(),
        }
    }
}

fn default_env_name() -> String {
    "AGENT_ID".to_string()
}

/// One `.agentctl.toml` file. Every key is optional; a key that is present
/// overrides the layers below it, even when it equals the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub api: ApiLayer,

    #[serde(default)]
    pub agent: AgentLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLayer {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub api_key_env: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentLayer {
    pub id: Option<String>,
    pub definition: Option<PathBuf>,
    pub env_name: Option<String>,
}

impl ConfigLayer {
    /// Parse a single TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let layer: ConfigLayer = toml::from_str(&contents)?;
        Ok(layer)
    }
}

impl Config {
    /// Load configuration with precedence:
    /// 1. CLI flags (applied later via with_api_overrides / with_target)
    /// 2. Environment variables
    /// 3. Project config (.agentctl.toml in project root)
    /// 4. Global config (~/.agentctl.toml)
    /// 5. Built-in defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        for path in Self::sources(project_root) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                config = config.merge(ConfigLayer::from_file(&path)?);
            }
        }

        config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Config files consulted by `load`, lowest precedence first
    pub fn sources(project_root: &Path) -> Vec<PathBuf> {
        let mut sources = Vec::new();
        if let Some(home) = home_dir() {
            sources.push(home.join(CONFIG_FILE_NAME));
        }
        sources.push(project_root.join(CONFIG_FILE_NAME));
        sources
    }

    /// Load a single TOML file over the built-in defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let config = Self::default().merge(ConfigLayer::from_file(path)?);
        config.validate()?;
        Ok(config)
    }

    /// Apply every key present in `layer` (layer takes precedence)
    fn merge(mut self, layer: ConfigLayer) -> Self {
        if let Some(base_url) = layer.api.base_url {
            self.api.base_url = base_url;
        }
        if let Some(timeout_secs) = layer.api.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(api_key_env) = layer.api.api_key_env {
            self.api.api_key_env = api_key_env;
        }

        if let Some(id) = layer.agent.id {
            self.agent.id = Some(id);
        }
        if let Some(definition) = layer.agent.definition {
            self.agent.definition = Some(definition);
        }
        if let Some(env_name) = layer.agent.env_name {
            self.agent.env_name = env_name;
        }

        self
    }

    /// Apply environment variable overrides
    fn merge_env(mut self) -> Self {
        if let Ok(url) = std::env::var("AGENTCTL_BASE_URL") {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }

        if let Ok(timeout) = std::env::var("AGENTCTL_TIMEOUT") {
            if let Ok(timeout) = timeout.parse::<u64>() {
                self.api.timeout_secs = timeout;
            }
        }

        if let Ok(id) = std::env::var("AGENTCTL_AGENT_ID") {
            if !id.trim().is_empty() {
                self.agent.id = Some(id);
            }
        }

        if let Some(definition) = std::env::var_os("AGENTCTL_DEFINITION") {
            if !definition.is_empty() {
                self.agent.definition = Some(PathBuf::from(definition));
            }
        }

        self
    }

    /// Apply CLI overrides for the API connection (highest precedence)
    pub fn with_api_overrides(mut self, flags: &ApiFlags) -> Self {
        if let Some(ref key) = flags.api_key {
            self.api_key = Some(key.clone());
        }
        if let Some(ref url) = flags.base_url {
            self.api.base_url = url.clone();
        }
        if let Some(timeout) = flags.timeout {
            self.api.timeout_secs = timeout;
        }

        self
    }

    /// Apply CLI overrides for the target agent
    pub fn with_target(mut self, agent_id: Option<&str>, definition: Option<&Path>) -> Self {
        if let Some(id) = agent_id {
            self.agent.id = Some(id.to_string());
        }
        if let Some(path) = definition {
            self.agent.definition = Some(path.to_path_buf());
        }
        self
    }

    fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(AgentctlError::InvalidConfig(
                "api.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !self.api.base_url.starts_with("http://") && !self.api.base_url.starts_with("https://")
        {
            return Err(AgentctlError::InvalidConfig(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.api_key_env.trim().is_empty() {
            return Err(AgentctlError::InvalidConfig(
                "api.api_key_env cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the API key: `--api-key` first, then the configured
    /// environment variable. There is no built-in fallback.
    pub fn resolve_api_key(&self) -> Result<String> {
        let key = self
            .api_key
            .clone()
            .or_else(|| std::env::var(&self.api.api_key_env).ok())
            .filter(|key| !key.trim().is_empty());

        key.ok_or_else(|| AgentctlError::MissingCredential(self.api.api_key_env.clone()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    /// Build an API client; fails with `MissingCredential` before any network use.
    pub fn client(&self) -> Result<AgentClient> {
        let api_key = self.resolve_api_key()?;
        AgentClient::new(&self.api.base_url, &api_key, self.timeout())
    }

    pub fn agent_id(&self) -> Result<&str> {
        self.agent
            .id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| {
                AgentctlError::InvalidConfig(
                    "No agent id. Pass --agent-id or set agent.id in .agentctl.toml".to_string(),
                )
            })
    }

    /// Manifest path, with `~` expanded and relative paths resolved
    /// against the project root.
    pub fn definition_path(&self, project_root: &Path) -> Result<PathBuf> {
        let raw = self.agent.definition.as_deref().ok_or_else(|| {
            AgentctlError::InvalidConfig(
                "No agent definition. Pass --definition or set agent.definition in .agentctl.toml"
                    .to_string(),
            )
        })?;

        Ok(crate::utils::path::resolve_against(project_root, raw))
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
