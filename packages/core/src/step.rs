//! Create-channels workflow step.
//!
//! Creates every requested channel concurrently. When Slack says a name is
//! already taken, the existing channel is looked up under the name Slack
//! would have stored, unarchived if needed, and returned in place of a new
//! one. Any other failure fails the step.

use std::sync::Arc;

use futures_util::future::try_join_all;

use crate::channels::{normalize_channel_name, Channel, ChannelApi, SlackError, StepError};

pub struct CreateChannelsStep {
    api: Arc<dyn ChannelApi + Send + Sync>,
}

impl CreateChannelsStep {
    pub fn new(api: Arc<dyn ChannelApi + Send + Sync>) -> Self {
        Self { api }
    }

    /// Create or recover one channel per name.
    ///
    /// The result lines up with `names`. The first failure aborts the step
    /// and names the channel that caused it.
    pub async fn run(&self, names: &[String]) -> Result<Vec<Channel>, StepError> {
        tracing::info!(
            "Creating {} channel(s) via {}",
            names.len(),
            self.api.provider_name()
        );

        let channels = try_join_all(names.iter().map(|name| async move {
            self.create_or_recover(name)
                .await
                .map_err(|source| StepError {
                    name: name.clone(),
                    source,
                })
        }))
        .await?;

        tracing::info!("All {} channel(s) ready", channels.len());
        Ok(channels)
    }

    async fn create_or_recover(&self, name: &str) -> Result<Channel, SlackError> {
        match self.api.create_channel(name).await {
            Ok(channel) => {
                tracing::info!("Created channel {} ({})", channel.name, channel.id);
                Ok(channel)
            }
            Err(err) if err.is_name_taken() => self.recover(name, err).await,
            Err(err) => Err(err),
        }
    }

    /// Resolve a `name_taken` into the channel that holds the name.
    async fn recover(&self, name: &str, err: SlackError) -> Result<Channel, SlackError> {
        let fixed_name = normalize_channel_name(name);
        let channels = self.api.list_channels().await?;

        let Some(channel) = channels.into_iter().find(|c| c.name == fixed_name) else {
            tracing::warn!(
                "Could not find channel {} ({}), but Slack reported it as already existing",
                name,
                fixed_name
            );
            return Err(err);
        };

        if channel.is_archived() {
            tracing::info!(
                "Channel {} ({}) exists and was archived - unarchiving",
                name,
                fixed_name
            );
            self.api.unarchive_channel(&channel.id).await?;
            return Ok(channel);
        }

        tracing::info!(
            "Channel {} ({}) already exists and is unarchived - nothing to do",
            name,
            fixed_name
        );
        Ok(channel)
    }
}
