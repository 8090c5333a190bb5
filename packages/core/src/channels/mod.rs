//! Channel Module
//!
//! The channel record Slack hands back, the name rules Slack applies on
//! creation, and the API seam the create-channels step talks through.

pub mod api;
pub mod error;
pub mod name;
pub mod types;

pub use api::{ChannelApi, ChannelResult};
pub use error::{SlackError, StepError};
pub use name::normalize_channel_name;
pub use types::Channel;
