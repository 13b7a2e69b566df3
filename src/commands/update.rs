//! `agentctl update`: bring an existing agent to JSON output with short-term
//! memory and instructions taken from a manifest.

use super::helpers::{agent_name, check_mark, format_timestamp, rule};
use crate::agent::reconcile::{self, feature_kinds, response_format_type, DesiredState};
use crate::agent::definition::SHORT_TERM_MEMORY;
use crate::agent::manifest;
use crate::cli::UpdateCmd;
use crate::client::AgentClient;
use crate::config::Config;
use crate::error::{AgentctlError, Result};
use std::path::Path;

pub fn execute(config: &Config, project_root: &Path, cmd: &UpdateCmd) -> Result<()> {
    let agent_id = config.agent_id()?;
    let definition = config.definition_path(project_root)?;
    let client = config.client()?;
    reconcile(&client, agent_id, &definition, cmd.dry_run)
}

/// Run the five reconciliation steps against `agent_id`.
///
/// Nothing is sent before the manifest loads, and no update is sent unless
/// the fetch succeeded. A failed verification is reported as
/// `VerificationMismatch` after the update has already been committed.
pub fn reconcile(
    client: &AgentClient,
    agent_id: &str,
    definition: &Path,
    dry_run: bool,
) -> Result<()> {
    println!("{}", rule());
    println!("Reconciling agent {}", agent_id);
    println!("  - JSON output mode");
    println!(
        "  - {} ({} messages)",
        SHORT_TERM_MEMORY,
        reconcile::MEMORY_MESSAGE_COUNT
    );
    println!("{}", rule());

    println!("\n1. Loading instructions from manifest...");
    println!("   Path: {}", definition.display());
    let instructions = manifest::load_instructions(definition)?;
    println!("   Loaded {} characters", instructions.chars().count());

    println!("\n2. Fetching current agent configuration...");
    let current = client.get_agent(agent_id)?;
    println!("   Agent: {}", agent_name(&current));
    println!(
        "   Current response_format: {}",
        response_format_type(&current).unwrap_or("none")
    );
    println!("   Current features: {:?}", feature_kinds(&current));

    let desired = DesiredState::new(instructions);
    let payload = reconcile::merge(&current, &desired)?;

    println!("\n3. Prepared update");
    println!(
        "   response_format: {}",
        response_format_type(&payload).unwrap_or("none")
    );
    println!("   features: {:?}", feature_kinds(&payload));

    if dry_run {
        println!("\n{}", serde_json::to_string_pretty(&payload)?);
        println!("\nDry run: no changes sent");
        println!("\n{}", rule());
        return Ok(());
    }

    println!("\n4. Updating agent...");
    let result = client.update_agent(agent_id, &payload)?;
    println!("   Updated at: {}", format_timestamp(result.get("updated_at")));

    println!("\n5. Verifying update...");
    let updated = client.get_agent(agent_id)?;
    let verification = reconcile::verify(&updated);
    println!(
        "   {} response_format: {}",
        check_mark(verification.response_format_ok),
        response_format_type(&updated).unwrap_or("none")
    );
    println!(
        "   {} features: {:?}",
        check_mark(verification.short_term_memory_ok),
        feature_kinds(&updated)
    );

    if !verification.passed() {
        println!("\n{}", rule());
        return Err(AgentctlError::VerificationMismatch(
            verification.failures().join("; "),
        ));
    }

    println!("\n✓ Agent reconciled: JSON output mode with short-term memory");
    println!("\n{}", rule());
    Ok(())
}
