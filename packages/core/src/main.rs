use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dotenvy::dotenv;

use slack_channel_step::cli::Cli;
use slack_channel_step::config::Config;
use slack_channel_step::error::AppError;
use slack_channel_step::logging::init_logging;
use slack_channel_step::retry::RetryPolicy;
use slack_channel_step::services::slack::SlackClient;
use slack_channel_step::step::CreateChannelsStep;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = Config::from_env()
        .and_then(|config| config.with_overrides(&cli))
        .map_err(AppError::Config)?;

    tracing::info!("Step started with config: {:?}", config);

    let token = config.require_token().map_err(AppError::Config)?;
    let client = SlackClient::new(
        config.api_url.as_str(),
        token,
        Duration::from_secs(config.timeout_seconds),
    )?
    .with_retry_policy(RetryPolicy {
        max_retries: config.max_retries,
        ..RetryPolicy::default()
    });

    let step = CreateChannelsStep::new(Arc::new(client));
    let channels = step.run(&cli.names).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&channels)?
    } else {
        serde_json::to_string(&channels)?
    };
    println!("{}", output);

    Ok(())
}
