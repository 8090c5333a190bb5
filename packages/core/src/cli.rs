use clap::Parser;

/// Slack channel step CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "slack-channel-step",
    version,
    about = "Create Slack channels, reusing or unarchiving ones that already exist"
)]
pub struct Cli {
    /// Channel names to create
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Slack access token (overrides SLACK_ACCESS_TOKEN)
    #[arg(long)]
    pub token: Option<String>,

    /// Slack Web API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// HTTP request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Retries for rate-limited calls
    #[arg(long)]
    pub max_retries: Option<u32>,

    /// Pretty-print the JSON result
    #[arg(long)]
    pub pretty: bool,
}
