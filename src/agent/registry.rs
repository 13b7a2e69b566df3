//! Registry of built-in agent presets used by `agentctl create`.

use super::definition::{AgentConfig, AgentConfigBuilder};
use crate::error::{AgentctlError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// A preset as stored in `presets/<id>.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Preset {
    pub preset: PresetMeta,
    pub agent: AgentConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PresetMeta {
    pub id: String,

    #[serde(default)]
    pub summary: String,
}

impl Preset {
    /// Start a builder seeded with this preset's configuration.
    pub fn builder(&self) -> AgentConfigBuilder {
        AgentConfigBuilder::from(self.agent.clone())
    }
}

pub struct PresetRegistry {
    presets: HashMap<String, Arc<Preset>>,
}

impl PresetRegistry {
    /// Load all presets embedded in the binary
    pub fn load() -> Result<Self> {
        let mut presets = HashMap::new();

        let readme = parse_preset(
            "readme-builder",
            include_str!("../../presets/readme-builder.toml"),
        )?;
        presets.insert(readme.preset.id.clone(), Arc::new(readme));

        Ok(Self { presets })
    }

    pub fn get(&self, id: &str) -> Option<Arc<Preset>> {
        self.presets.get(id).cloned()
    }

    /// Look up a preset, failing with `UnknownPreset` when absent.
    pub fn require(&self, id: &str) -> Result<Arc<Preset>> {
        self.get(id)
            .ok_or_else(|| AgentctlError::UnknownPreset(id.to_string()))
    }

    /// All preset IDs, sorted
    pub fn list_available(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.presets.keys().cloned().collect();
        ids.sort();
        ids
    }
}

fn parse_preset(source: &str, content: &str) -> Result<Preset> {
    let preset: Preset = toml::from_str(content).map_err(|e| {
        AgentctlError::InvalidConfig(format!("Failed to parse {} preset: {}", source, e))
    })?;
    if preset.preset.id != source {
        return Err(AgentctlError::InvalidConfig(format!(
            "Preset file {} declares id '{}'",
            source, preset.preset.id
        )));
    }
    // A preset must be submittable as-is
    preset.builder().build()?;
    Ok(preset)
}
