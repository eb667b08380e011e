use std::sync::Arc;

use crate::{constant, generator::CategoryGenerator};

use super::{CommandHandler, Invocation};

pub struct Handler {
    generator: Option<Arc<dyn CategoryGenerator>>,
}
impl Handler {
    /// `generator` is `None` when no language model credentials are configured.
    pub fn new(generator: Option<Arc<dyn CategoryGenerator>>) -> Self {
        Self { generator }
    }
}
#[serenity::async_trait]
impl CommandHandler for Handler {
    fn name(&self) -> &str {
        constant::commands::CATEGORY
    }

    fn description(&self) -> &str {
        "Generates a brand new category with the language model."
    }

    async fn run(&self, invocation: &Invocation<'_>) -> anyhow::Result<()> {
        let Some(generator) = &self.generator else {
            tracing::warn!(
                "{} asked for a category, but no OpenAI API key is configured",
                invocation.author
            );
            return invocation
                .channel
                .send(constant::reply::GENERATOR_NOT_CONFIGURED)
                .await;
        };

        invocation.channel.send(constant::reply::THINKING).await?;

        let reply = match generator.generate().await {
            Ok(category) => constant::reply::generated(&category),
            Err(err) => {
                tracing::error!("Failed to generate a category: {err}");
                constant::reply::GENERATION_FAILED.to_string()
            }
        };
        invocation.channel.send(&reply).await
    }
}
