//! In-memory stand-in for the Slack Web API, used by the step tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::channels::error::NAME_TAKEN;
use crate::channels::{normalize_channel_name, Channel, ChannelApi, ChannelResult, SlackError};

#[derive(Default)]
pub struct MockSlackClient {
    channels: Mutex<Vec<Channel>>,
    create_errors: HashMap<String, SlackError>,
    list_error: Option<SlackError>,
    unarchive_error: Option<SlackError>,
    calls: Mutex<Vec<String>>,
}

impl MockSlackClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a channel that already exists in the workspace.
    pub fn with_channel(self, channel: Channel) -> Self {
        self.channels.lock().unwrap().push(channel);
        self
    }

    /// Fail `channels.create` for `name` with `err`.
    pub fn with_create_error(mut self, name: &str, err: SlackError) -> Self {
        self.create_errors.insert(name.to_string(), err);
        self
    }

    pub fn with_list_error(mut self, err: SlackError) -> Self {
        self.list_error = Some(err);
        self
    }

    pub fn with_unarchive_error(mut self, err: SlackError) -> Self {
        self.unarchive_error = Some(err);
        self
    }

    /// Calls made so far, e.g. `create:general`, `list`, `unarchive:C1`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn channel(&self, name: &str) -> Option<Channel> {
        self.channels
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ChannelApi for MockSlackClient {
    async fn create_channel(&self, name: &str) -> ChannelResult<Channel> {
        self.record(format!("create:{}", name));

        if let Some(err) = self.create_errors.get(name) {
            return Err(err.clone());
        }

        let normalized = normalize_channel_name(name);
        let mut channels = self.channels.lock().unwrap();
        if channels.iter().any(|c| c.name == normalized) {
            return Err(SlackError::api(NAME_TAKEN));
        }

        let channel = Channel::new(format!("C{:04}", channels.len() + 1), normalized, false);
        channels.push(channel.clone());
        Ok(channel)
    }

    async fn list_channels(&self) -> ChannelResult<Vec<Channel>> {
        self.record("list".to_string());

        match &self.list_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.channels.lock().unwrap().clone()),
        }
    }

    async fn unarchive_channel(&self, channel_id: &str) -> ChannelResult<()> {
        self.record(format!("unarchive:{}", channel_id));

        if let Some(err) = &self.unarchive_error {
            return Err(err.clone());
        }

        let mut channels = self.channels.lock().unwrap();
        match channels.iter_mut().find(|c| c.id == channel_id) {
            Some(channel) => {
                channel.archived = Some(false);
                Ok(())
            }
            None => Err(SlackError::api("channel_not_found")),
        }
    }

    fn provider_name(&self) -> &str {
        "MockSlack"
    }
}
