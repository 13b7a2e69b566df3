use super::helpers::{agent_name, format_timestamp};
use crate::agent::reconcile::{feature_kinds, response_format_type};
use crate::cli::ShowCmd;
use crate::config::Config;
use crate::error::Result;
use serde_json::Value;

pub fn execute(config: &Config, cmd: &ShowCmd) -> Result<()> {
    let agent_id = config.agent_id()?;
    let client = config.client()?;
    let agent = client.get_agent(agent_id)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&agent)?);
        return Ok(());
    }

    let text = |key: &str| agent.get(key).and_then(Value::as_str).unwrap_or("-").to_string();
    let instructions_len = agent
        .get("agent_instructions")
        .and_then(Value::as_str)
        .map(|s| s.chars().count())
        .unwrap_or(0);

    println!("Agent {}", agent_id);
    println!("  name: {}", agent_name(&agent));
    println!("  model: {}", text("model"));
    println!("  provider: {}", text("provider_id"));
    println!(
        "  response_format: {}",
        response_format_type(&agent).unwrap_or("none")
    );
    println!("  features: {:?}", feature_kinds(&agent));
    println!("  instructions: {} characters", instructions_len);
    println!("  updated: {}", format_timestamp(agent.get("updated_at")));

    Ok(())
}
