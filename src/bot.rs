use std::{sync::Arc, time::Duration};

use anyhow::Context as _;
use serenity::{
    Client,
    all::{GatewayIntents, ShardManager},
};

use crate::{
    catalog::Catalog,
    commands::{category, roll},
    config::Configuration,
    dispatch::Dispatcher,
    generator::{CategoryGenerator, OpenAiGenerator},
    handler::Handler,
    selector::RandomSelector,
};

/// Builds the command table from the configuration. Fails if `catalog` has nothing to roll.
pub fn dispatcher(config: &Configuration, catalog: Catalog) -> anyhow::Result<Dispatcher> {
    if catalog.is_empty() {
        anyhow::bail!("the category catalog is empty");
    }
    let catalog = Arc::new(catalog);
    tracing::info!("Loaded {} categories", catalog.len());

    let generator = OpenAiGenerator::new(
        &config.authentication,
        config.generator.clone(),
        &catalog,
    )
    .map(|g| Arc::new(g) as Arc<dyn CategoryGenerator>);
    if generator.is_none() {
        tracing::warn!("No OpenAI API key configured; `category` will not be able to generate");
    }

    Ok(Dispatcher::builder(config.discord.command_prefix.clone())
        .command(roll::Handler::new(
            catalog,
            Arc::new(RandomSelector::from_entropy()),
            Duration::from_millis(config.discord.roll_delay_ms),
        ))
        .command(category::Handler::new(generator))
        .build())
}

/// The bot and its connection to Discord.
pub struct Bot {
    client: Client,
}
impl Bot {
    pub async fn new(config: Configuration) -> anyhow::Result<Self> {
        let token = config.discord_token()?;
        let dispatcher = dispatcher(&config, Catalog::builtin())?;

        let client = Client::builder(
            token,
            GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT,
        )
        .event_handler(Handler::new(dispatcher))
        .await
        .context("Error creating client")?;

        Ok(Self { client })
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(self.client.shard_manager.clone())
    }

    /// Connects to the gateway and handles events until shut down.
    pub async fn start(mut self) -> anyhow::Result<()> {
        self.client.start().await.context("Client error")
    }
}

#[derive(Clone)]
pub struct ShutdownHandle(Arc<ShardManager>);
impl ShutdownHandle {
    /// Disconnects every shard, which makes [`Bot::start`] return.
    pub async fn shutdown(&self) {
        self.0.shutdown_all().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands::Invocation, constant, dispatch::Dispatched, util::testing::Recorder};

    #[tokio::test]
    async fn test_default_commands() {
        let mut config = Configuration::default();
        config.discord.roll_delay_ms = 0;
        let dispatcher = dispatcher(&config, Catalog::builtin()).unwrap();
        assert_eq!(dispatcher.command_names(), ["category", "help", "roll"]);

        let recorder = Recorder::default();
        let dispatched = dispatcher
            .dispatch(&Invocation {
                author: "tester",
                content: "!category",
                channel: &recorder,
            })
            .await;
        assert_eq!(dispatched, Dispatched::Ran("category".into()));
        assert_eq!(recorder.sent(), [constant::reply::GENERATOR_NOT_CONFIGURED]);

        let recorder = Recorder::default();
        dispatcher
            .dispatch(&Invocation {
                author: "tester",
                content: "!roll",
                channel: &recorder,
            })
            .await;
        let sent = recorder.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], constant::reply::ROLLING);
        assert!(sent[1].starts_with("🎲 The category is... **"));
    }

    #[test]
    fn test_empty_catalog_is_refused() {
        let result = dispatcher(&Configuration::default(), Catalog::parse(""));
        assert!(result.is_err());
        assert!(dispatcher(&Configuration::default(), Catalog::parse("Void")).is_ok());
    }

    #[tokio::test]
    async fn test_missing_token_fails_before_connecting() {
        let result = Bot::new(Configuration::default()).await;
        assert!(result.is_err());
    }
}
