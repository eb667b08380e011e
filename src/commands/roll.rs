use std::{sync::Arc, time::Duration};

use crate::{catalog::Catalog, constant, selector::Selector};

use super::{CommandHandler, Invocation};

pub struct Handler {
    catalog: Arc<Catalog>,
    selector: Arc<dyn Selector>,
    delay: Duration,
}
impl Handler {
    pub fn new(catalog: Arc<Catalog>, selector: Arc<dyn Selector>, delay: Duration) -> Self {
        Self {
            catalog,
            selector,
            delay,
        }
    }
}
#[serenity::async_trait]
impl CommandHandler for Handler {
    fn name(&self) -> &str {
        constant::commands::ROLL
    }

    fn description(&self) -> &str {
        "Rolls a random category from the list."
    }

    async fn run(&self, invocation: &Invocation<'_>) -> anyhow::Result<()> {
        invocation.channel.send(constant::reply::ROLLING).await?;
        tokio::time::sleep(self.delay).await;

        let category = self.selector.pick(self.catalog.entries())?;
        tracing::info!("Rolled `{category}` for {}", invocation.author);
        invocation
            .channel
            .send(&constant::reply::rolled(&category))
            .await
    }
}
