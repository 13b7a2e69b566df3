use crate::agent::ResponseFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod flags;
pub use flags::ApiFlags;

#[derive(Parser, Debug)]
#[command(name = "agentctl")]
#[command(about = "Create and reconcile hosted agents", long_about = None)]
#[command(version = env!("AGENTCTL_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Show debug logging (HTTP requests, config layers)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Validate configuration files
    Validate {
        /// Optional path to a specific config file to validate
        file: Option<PathBuf>,
    },

    /// Show effective configuration after merging all sources
    Show,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new agent from a preset
    Create(CreateCmd),

    /// Reconcile an existing agent: JSON output, short-term memory, instructions from a manifest
    #[command(alias = "reconcile")]
    Update(UpdateCmd),

    /// Show the current configuration of an agent
    Show(ShowCmd),

    /// List built-in agent presets
    Presets,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print the agentctl version
    Version,
}

#[derive(Parser, Debug)]
pub struct CreateCmd {
    #[command(flatten)]
    pub api: ApiFlags,

    /// Preset to create the agent from
    #[arg(long, default_value = "readme-builder")]
    pub preset: String,

    /// Override the agent name
    #[arg(long)]
    pub name: Option<String>,

    /// Override the description
    #[arg(long)]
    pub description: Option<String>,

    /// Override the model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Override the model provider
    #[arg(long)]
    pub provider_id: Option<String>,

    /// Override the service-side provider credential name
    #[arg(long)]
    pub llm_credential_id: Option<String>,

    /// Override the agent role
    #[arg(long)]
    pub role: Option<String>,

    /// Override the agent goal
    #[arg(long)]
    pub goal: Option<String>,

    /// Sampling temperature (0 to 2)
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Nucleus sampling threshold (0 to 1)
    #[arg(long)]
    pub top_p: Option<f64>,

    /// Reply format of the new agent
    #[arg(long, value_enum)]
    pub response_format: Option<ResponseFormat>,

    /// Enable short-term memory keeping this many messages
    #[arg(long, value_name = "MESSAGES", value_parser = clap::value_parser!(u32).range(1..))]
    pub memory: Option<u32>,

    /// Take instructions from a manifest's spec.instructions
    #[arg(long)]
    pub instructions: Option<PathBuf>,

    /// Variable name used in the printed env line
    #[arg(long)]
    pub env_name: Option<String>,

    /// Print the payload without creating anything
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct UpdateCmd {
    #[command(flatten)]
    pub api: ApiFlags,

    /// Agent to reconcile (defaults to agent.id)
    #[arg(long)]
    pub agent_id: Option<String>,

    /// Manifest providing spec.instructions (defaults to agent.definition)
    #[arg(long)]
    pub definition: Option<PathBuf>,

    /// Fetch and merge, print the payload, but do not update
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct ShowCmd {
    #[command(flatten)]
    pub api: ApiFlags,

    /// Agent to show (defaults to agent.id)
    #[arg(long)]
    pub agent_id: Option<String>,

    /// Print the raw JSON document
    #[arg(long)]
    pub json: bool,
}
