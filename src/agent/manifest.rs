//! Loading desired instructions from a declarative agent manifest.
//!
//! Manifests are YAML documents owned by a separate authoring workflow. Only
//! `spec.instructions` is read; every other key is ignored.
//!
//! ```yaml
//! kind: Agent
//! metadata:
//!   name: builder-manager
//! spec:
//!   instructions: |
//!     You coordinate the blueprint builder...
//! ```

use crate::error::{AgentctlError, Result};
use serde_yaml::Value;
use std::path::Path;

/// Read `spec.instructions` from the manifest at `path`.
///
/// Fails with `DefinitionNotFound` when the file is missing,
/// `DefinitionParse` when it cannot be read as UTF-8 YAML, and `MissingInstructions`
/// when the field is absent, not a string, or empty.
pub fn load_instructions(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(AgentctlError::DefinitionNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| AgentctlError::DefinitionParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let document: Value =
        serde_yaml::from_str(&content).map_err(|e| AgentctlError::DefinitionParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let instructions = document
        .get("spec")
        .and_then(|spec| spec.get("instructions"))
        .and_then(Value::as_str)
        .unwrap_or_default();

    if instructions.is_empty() {
        return Err(AgentctlError::MissingInstructions(path.to_path_buf()));
    }

    log::debug!(
        "Loaded {} characters of instructions from {}",
        instructions.chars().count(),
        path.display()
    );
    Ok(instructions.to_string())
}
