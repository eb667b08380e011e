use crate::util::Replier;

pub mod category;
pub mod help;
pub mod roll;

/// A single chat message addressed to the bot.
pub struct Invocation<'a> {
    pub author: &'a str,
    pub content: &'a str,
    pub channel: &'a dyn Replier,
}

#[serenity::async_trait]
pub trait CommandHandler: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    async fn run(&self, invocation: &Invocation<'_>) -> anyhow::Result<()>;
}
