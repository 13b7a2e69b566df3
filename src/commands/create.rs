use crate::agent::{manifest, AgentConfigBuilder, FeatureEntry, PresetRegistry};
use crate::cli::CreateCmd;
use crate::config::Config;
use crate::error::Result;
use crate::utils::path::resolve_against;
use std::path::Path;

pub fn execute(config: &Config, project_root: &Path, cmd: &CreateCmd) -> Result<()> {
    // Credential is checked before anything else so a bootstrap run fails fast
    let client = if cmd.dry_run {
        None
    } else {
        Some(config.client()?)
    };

    let registry = PresetRegistry::load()?;
    let preset = registry.require(&cmd.preset)?;

    let mut builder = apply_overrides(preset.builder(), cmd);
    if let Some(ref path) = cmd.instructions {
        let path = resolve_against(project_root, path);
        println!("Loading instructions from {}", path.display());
        builder = builder.instructions(manifest::load_instructions(&path)?);
    }
    let agent = builder.build()?;

    let Some(client) = client else {
        println!("{}", serde_json::to_string_pretty(&agent)?);
        println!("\nDry run: no agent created");
        return Ok(());
    };

    println!(
        "Creating agent '{}' from preset {}...",
        agent.name, preset.preset.id
    );
    log::info!("Creating agent at {}", client.base_url());
    let agent_id = client.create_agent(&agent)?;

    let env_name = cmd.env_name.as_deref().unwrap_or(&config.agent.env_name);
    println!("{} agent created successfully!", agent.name);
    println!("\nAgent ID: {}", agent_id);
    println!("\nAdd this to your environment file:");
    println!("{}={}", env_name, agent_id);

    Ok(())
}

/// Layer the named command-line overrides over a preset.
fn apply_overrides(mut builder: AgentConfigBuilder, cmd: &CreateCmd) -> AgentConfigBuilder {
    if let Some(ref name) = cmd.name {
        builder = builder.name(name.as_str());
    }
    if let Some(ref description) = cmd.description {
        builder = builder.description(description.as_str());
    }
    if let Some(ref model) = cmd.model {
        builder = builder.model(model.as_str());
    }
    if let Some(ref provider_id) = cmd.provider_id {
        builder = builder.provider_id(provider_id.as_str());
    }
    if let Some(ref credential) = cmd.llm_credential_id {
        builder = builder.llm_credential_id(credential.as_str());
    }
    if let Some(ref role) = cmd.role {
        builder = builder.role(role.as_str());
    }
    if let Some(ref goal) = cmd.goal {
        builder = builder.goal(goal.as_str());
    }
    if let Some(temperature) = cmd.temperature {
        builder = builder.temperature(temperature);
    }
    if let Some(top_p) = cmd.top_p {
        builder = builder.top_p(top_p);
    }
    if let Some(format) = cmd.response_format {
        builder = builder.response_format(format);
    }
    if let Some(message_count) = cmd.memory {
        builder = builder.feature(FeatureEntry::short_term_memory(message_count));
    }
    builder
}
