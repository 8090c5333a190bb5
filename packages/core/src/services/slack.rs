use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::channels::error::RATE_LIMITED;
use crate::channels::{Channel, ChannelApi, ChannelResult, SlackError};
use crate::retry::{retry_after, RetryPolicy};

pub const DEFAULT_API_URL: &str = "https://slack.com/api";

/// Slack access token. Never printed, not even through `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[derive(Clone)]
pub struct SlackClient {
    base_url: String,
    token: AccessToken,
    http: Client,
    retry: RetryPolicy,
}

impl fmt::Debug for SlackClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackClient")
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl SlackClient {
    pub fn new(
        base_url: impl Into<String>,
        token: AccessToken,
        timeout: Duration,
    ) -> Result<Self, SlackError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| SlackError::network(format!("Failed to build HTTP client: {}", err)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            http,
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Envelope shared by every Web API method.
#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    channel: Option<Channel>,
    #[serde(default)]
    channels: Option<Vec<Channel>>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: Option<String>,
}

impl SlackResponse {
    fn next_cursor(&self) -> Option<&str> {
        self.response_metadata
            .as_ref()
            .and_then(|meta| meta.next_cursor.as_deref())
            .filter(|cursor| !cursor.is_empty())
    }
}

/// Result of a single HTTP exchange.
enum Attempt {
    Done(SlackResponse),
    Throttled(Option<Duration>),
}

impl SlackClient {
    /// POST a form to `method`, retrying while Slack reports rate limiting.
    async fn call(&self, method: &str, form: &[(&str, &str)]) -> ChannelResult<SlackResponse> {
        let url = format!("{}/{}", self.base_url, method);
        let mut attempts = 0u32;

        loop {
            attempts += 1;

            let hint = match self.send_once(&url, form).await? {
                Attempt::Done(body) => return Ok(body),
                Attempt::Throttled(hint) => hint,
            };

            if attempts > self.retry.max_retries {
                return Err(SlackError::RateLimited { attempts });
            }

            let delay = hint.unwrap_or_else(|| self.retry.backoff(attempts));
            tracing::warn!(
                "Slack rate limited {} (attempt {}), retrying in {:?}",
                method,
                attempts,
                delay
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn send_once(&self, url: &str, form: &[(&str, &str)]) -> ChannelResult<Attempt> {
        let response = self
            .http
            .post(url)
            .bearer_auth(self.token.expose())
            .form(form)
            .send()
            .await
            .map_err(|err| SlackError::network(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(Attempt::Throttled(retry_after(response.headers())));
        }

        if !status.is_success() {
            return Err(SlackError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .json::<SlackResponse>()
            .await
            .map_err(|err| SlackError::parse(err.to_string()))?;

        if body.ok {
            return Ok(Attempt::Done(body));
        }

        match body.error {
            Some(code) if code == RATE_LIMITED => Ok(Attempt::Throttled(None)),
            Some(code) => Err(SlackError::Api { code }),
            None => Err(SlackError::api("unknown_error")),
        }
    }
}

#[async_trait]
impl ChannelApi for SlackClient {
    async fn create_channel(&self, name: &str) -> ChannelResult<Channel> {
        let body = self.call("channels.create", &[("name", name)]).await?;

        body.channel
            .ok_or_else(|| SlackError::parse("channels.create response has no channel"))
    }

    async fn list_channels(&self) -> ChannelResult<Vec<Channel>> {
        let mut channels = Vec::new();
        let mut cursor: Option<String> = None;
        let mut seen_cursors = HashSet::new();

        loop {
            let body = match cursor.as_deref() {
                Some(cursor) => self.call("channels.list", &[("cursor", cursor)]).await?,
                None => self.call("channels.list", &[]).await?,
            };

            let next = body.next_cursor().map(str::to_string);
            let page = body
                .channels
                .ok_or_else(|| SlackError::parse("channels.list response has no channels"))?;
            channels.extend(page);

            match next {
                Some(next) if !seen_cursors.insert(next.clone()) => {
                    tracing::warn!("channels.list repeated cursor {}, stopping pagination", next);
                    break;
                }
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::debug!("Listed {} channels", channels.len());
        Ok(channels)
    }

    async fn unarchive_channel(&self, channel_id: &str) -> ChannelResult<()> {
        self.call("channels.unarchive", &[("channel", channel_id)])
            .await
            .map(|_| ())
    }

    fn provider_name(&self) -> &str {
        "Slack"
    }
}
