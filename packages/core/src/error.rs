use thiserror::Error;

use crate::channels::{SlackError, StepError};

/// Unified application error.
///
/// Everything that can stop the binary ends up here and is logged once
/// in `main`.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Slack client error: {0}")]
    Client(#[from] SlackError),

    #[error(transparent)]
    Step(#[from] StepError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}
