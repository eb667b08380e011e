use tracing_subscriber::EnvFilter;

mod bot;
mod catalog;
mod commands;
mod config;
mod constant;
mod dispatch;
mod generator;
mod handler;
mod selector;
mod util;

use bot::Bot;
use config::Configuration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    dotenv::dotenv().ok();

    let config = Configuration::load()?;
    let bot = Bot::new(config).await?;

    let shutdown = bot.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down...");
            shutdown.shutdown().await;
        }
    });

    bot.start().await
}
