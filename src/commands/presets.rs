use crate::agent::PresetRegistry;
use crate::error::Result;

pub fn execute() -> Result<()> {
    let registry = PresetRegistry::load()?;

    println!("Available presets:\n");
    for id in registry.list_available() {
        // Listed ids always resolve
        let Some(preset) = registry.get(&id) else {
            continue;
        };
        println!("  {} ({})", id, preset.agent.model);
        if !preset.preset.summary.is_empty() {
            println!("      {}", preset.preset.summary);
        }
    }

    Ok(())
}
