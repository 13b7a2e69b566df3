#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;

use agentctl::cli::{Cli, Commands};
use agentctl::commands;
use agentctl::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Commands that need neither config nor credentials
    match &cli.command {
        Commands::Version => return Ok(commands::version::execute()?),
        Commands::Presets => return Ok(commands::presets::execute()?),
        _ => {}
    }

    let project_root = std::env::current_dir()?;

    match &cli.command {
        Commands::Config { command } => {
            commands::config::execute(&project_root, command)?;
        }
        Commands::Create(cmd) => {
            let config = Config::load(&project_root)?.with_api_overrides(&cmd.api);
            commands::create::execute(&config, &project_root, cmd)?;
        }
        Commands::Update(cmd) => {
            let config = Config::load(&project_root)?
                .with_api_overrides(&cmd.api)
                .with_target(cmd.agent_id.as_deref(), cmd.definition.as_deref());
            commands::update::execute(&config, &project_root, cmd)?;
        }
        Commands::Show(cmd) => {
            let config = Config::load(&project_root)?
                .with_api_overrides(&cmd.api)
                .with_target(cmd.agent_id.as_deref(), None);
            commands::show::execute(&config, cmd)?;
        }
        Commands::Version | Commands::Presets => unreachable!(),
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise warnings only, or debug for agentctl with `-v`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,agentctl=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
