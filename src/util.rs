use serenity::all::{ChannelId, CreateAllowedMentions, CreateMessage, Http};
use std::future::Future;

/// Somewhere a command can send its replies to.
#[serenity::async_trait]
pub trait Replier: Send + Sync {
    async fn send(&self, content: &str) -> anyhow::Result<()>;
}

/// Replies to the channel a message came from.
pub struct ChannelReplier<'a> {
    http: &'a Http,
    channel_id: ChannelId,
}
impl<'a> ChannelReplier<'a> {
    pub fn new(http: &'a Http, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}
#[serenity::async_trait]
impl Replier for ChannelReplier<'_> {
    async fn send(&self, content: &str) -> anyhow::Result<()> {
        self.channel_id
            .send_message(
                self.http,
                CreateMessage::new()
                    .content(content)
                    .allowed_mentions(CreateAllowedMentions::new()),
            )
            .await?;
        Ok(())
    }
}

/// Runs the [body] and reports to the channel if an error occurs.
pub async fn run_and_report_error(
    replier: &dyn Replier,
    body: impl Future<Output = anyhow::Result<()>>,
) {
    if let Err(err) = body.await {
        tracing::error!("Error while running command: {err:#}");
        if let Err(err) = replier.send(&format!("Error: {err}")).await {
            tracing::error!("Failed to report error: {err:#}");
        }
    }
}
