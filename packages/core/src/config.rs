use std::env;

use crate::cli::Cli;
use crate::services::slack::{AccessToken, DEFAULT_API_URL};

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_MAX_RETRIES: u32 = 3;

#[derive(Debug, Clone)]
pub struct Config {
    pub access_token: Option<AccessToken>,
    pub api_url: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let access_token = lookup("SLACK_ACCESS_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .map(AccessToken::new);

        let api_url = lookup("SLACK_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_seconds = match lookup("SLACK_TIMEOUT_SECONDS") {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        let max_retries = match lookup("SLACK_MAX_RETRIES") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|_| "SLACK_MAX_RETRIES must be a valid number")?,
            None => DEFAULT_MAX_RETRIES,
        };

        Ok(Self {
            access_token,
            api_url,
            timeout_seconds,
            max_retries,
        })
    }

    /// Command-line flags take precedence over the environment.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self, String> {
        if let Some(token) = &cli.token {
            self.access_token = Some(AccessToken::new(token.clone()));
        }
        if let Some(api_url) = &cli.api_url {
            self.api_url = api_url.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_seconds = positive_timeout(timeout)?;
        }
        if let Some(max_retries) = cli.max_retries {
            self.max_retries = max_retries;
        }
        Ok(self)
    }

    pub fn require_token(&self) -> Result<AccessToken, String> {
        self.access_token
            .clone()
            .ok_or_else(|| "SLACK_ACCESS_TOKEN is required (or pass --token)".to_string())
    }
}

fn parse_timeout(raw: &str) -> Result<u64, String> {
    let seconds = raw
        .parse::<u64>()
        .map_err(|_| "SLACK_TIMEOUT_SECONDS must be a valid number")?;
    positive_timeout(seconds)
}

fn positive_timeout(seconds: u64) -> Result<u64, String> {
    if seconds == 0 {
        return Err("timeout must be greater than zero".to_string());
    }
    Ok(seconds)
}
