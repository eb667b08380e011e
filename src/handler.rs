use serenity::{
    all::{Context, EventHandler, Message, Ready},
    async_trait,
};

use crate::{
    commands::Invocation,
    dispatch::{Dispatched, Dispatcher},
    util::ChannelReplier,
};

pub struct Handler {
    dispatcher: Dispatcher,
}
impl Handler {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}
#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        tracing::info!(
            "{} is connected; listening for {}",
            ready.user.name,
            self.dispatcher
                .command_names()
                .iter()
                .map(|name| format!("{}{name}", self.dispatcher.prefix()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        tracing::info!("---------- League 2v2 Bot is ready ----------");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            tracing::info!("Message from {}: {}", msg.author.name, msg.content);
            return;
        }

        let replier = ChannelReplier::new(&ctx.http, msg.channel_id);
        let dispatched = self
            .dispatcher
            .dispatch(&Invocation {
                author: &msg.author.name,
                content: &msg.content,
                channel: &replier,
            })
            .await;

        match dispatched {
            Dispatched::Ran(name) => tracing::debug!("Handled `{name}` for {}", msg.author.name),
            Dispatched::Unknown(name) => tracing::debug!("Ignoring unknown command `{name}`"),
            Dispatched::NotACommand => {}
        }
    }
}
