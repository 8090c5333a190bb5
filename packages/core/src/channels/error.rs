//! Error types for channel operations

use thiserror::Error;

/// Slack error code returned by `channels.create` when the name is in use.
pub const NAME_TAKEN: &str = "name_taken";

/// Slack error code returned when a method is called too often.
pub const RATE_LIMITED: &str = "ratelimited";

/// Errors from the Slack Web API or the transport underneath it
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlackError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Slack returned HTTP {status}")]
    Http { status: u16 },

    #[error("Data format error: {message}")]
    Parse { message: String },

    #[error("Slack API error: {code}")]
    Api { code: String },

    #[error("Rate limit exceeded after {attempts} attempts")]
    RateLimited { attempts: u32 },
}

impl SlackError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { message: message.into() }
    }

    pub fn api(code: impl Into<String>) -> Self {
        Self::Api { code: code.into() }
    }

    /// Slack's error code, when the failure came back in an `ok: false` body.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code } => Some(code),
            _ => None,
        }
    }

    pub fn is_name_taken(&self) -> bool {
        self.code() == Some(NAME_TAKEN)
    }
}

/// A channel the step could neither create nor recover
#[derive(Error, Debug)]
#[error("Failed to create channel '{name}': {source}")]
pub struct StepError {
    pub name: String,
    #[source]
    pub source: SlackError,
}
