//! Channel API Interface
//!
//! Abstraction over the remote calls the create-channels step makes

use async_trait::async_trait;

use crate::channels::{error::SlackError, types::Channel};

/// Result type for channel API operations
pub type ChannelResult<T> = Result<T, SlackError>;

/// The three remote calls the step needs from a messaging platform
#[async_trait]
pub trait ChannelApi {
    /// Create a channel; the platform may normalise the name
    async fn create_channel(&self, name: &str) -> ChannelResult<Channel>;

    /// List every channel, archived ones included
    async fn list_channels(&self) -> ChannelResult<Vec<Channel>>;

    async fn unarchive_channel(&self, channel_id: &str) -> ChannelResult<()>;

    /// Get the name of this API for logging/debugging
    fn provider_name(&self) -> &str;
}
