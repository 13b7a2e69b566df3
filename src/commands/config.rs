use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::error::Result;
use std::path::Path;

pub fn execute(project_root: &Path, command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Validate { file } => match file {
            Some(path) => validate_file(path),
            None => validate(project_root),
        },
        ConfigCommands::Show => show(project_root),
    }
}

fn validate_file(path: &Path) -> Result<()> {
    println!("Validating {}...", path.display());
    match Config::from_file(path) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn validate(project_root: &Path) -> Result<()> {
    println!("Validating configuration files...\n");

    for source in Config::sources(project_root) {
        if source.exists() {
            println!("  Found: {}", source.display());
        } else {
            println!("  {} - not found (optional)", source.display());
        }
    }

    // Loading the merged config validates every file
    println!("\nLoading and validating configuration...");
    match Config::load(project_root) {
        Ok(_) => {
            println!("✓ Configuration is valid!");
            Ok(())
        }
        Err(e) => {
            println!("✗ Configuration is invalid!");
            println!("  Error: {}", e);
            Err(e)
        }
    }
}

fn show(project_root: &Path) -> Result<()> {
    let config = Config::load(project_root)?;

    println!("Effective Configuration:");
    println!("(CLI > Environment > Project config > Global config > Defaults)\n");

    println!("API:");
    println!("  base_url: {}", config.api.base_url);
    println!("  timeout: {}s", config.api.timeout_secs);
    let key_state = if config.resolve_api_key().is_ok() {
        "set"
    } else {
        "not set"
    };
    println!("  api_key_env: {} ({})", config.api.api_key_env, key_state);

    println!("\nAgent:");
    println!(
        "  id: {}",
        config.agent.id.as_deref().unwrap_or("(not set)")
    );
    match config.definition_path(project_root) {
        Ok(path) => {
            let exists = if path.is_file() { "" } else { " (missing)" };
            println!("  definition: {}{}", path.display(), exists);
        }
        Err(_) => println!("  definition: (not set)"),
    }
    println!("  env_name: {}", config.agent.env_name);

    Ok(())
}
