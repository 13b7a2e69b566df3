use clap::Parser;

/// Connection flags shared by every command that talks to the agent service.
#[derive(Parser, Debug, Clone, Default)]
pub struct ApiFlags {
    /// API key (defaults to the variable named by api.api_key_env, LYZR_API_KEY)
    #[arg(long, env = "AGENTCTL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the agent service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}
