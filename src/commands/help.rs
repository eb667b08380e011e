use crate::constant;

use super::{CommandHandler, Invocation};

/// Lists the commands registered alongside it.
pub struct Handler {
    listing: String,
}
impl Handler {
    pub fn new<'a>(prefix: &str, commands: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut commands: Vec<_> = commands
            .into_iter()
            .chain([(constant::commands::HELP, "Shows this message.")])
            .collect();
        commands.sort_by_key(|(name, _)| *name);

        let width = commands
            .iter()
            .map(|(name, _)| name.len() + prefix.len())
            .max()
            .unwrap_or(0);

        let mut listing = String::from("```\nCommands:\n");
        for (name, description) in commands {
            let invocation = format!("{prefix}{name}");
            listing += &format!("  {invocation:<width$}  {description}\n");
        }
        listing += "```";

        Self { listing }
    }
}
#[serenity::async_trait]
impl CommandHandler for Handler {
    fn name(&self) -> &str {
        constant::commands::HELP
    }

    fn description(&self) -> &str {
        "Shows this message."
    }

    async fn run(&self, invocation: &Invocation<'_>) -> anyhow::Result<()> {
        invocation.channel.send(&self.listing).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::Recorder;

    #[tokio::test]
    async fn test_listing() {
        let handler = Handler::new(
            "!",
            [("roll", "Rolls a category."), ("category", "Makes one up.")],
        );
        let recorder = Recorder::default();
        handler
            .run(&Invocation {
                author: "tester",
                content: "!help",
                channel: &recorder,
            })
            .await
            .unwrap();

        assert_eq!(
            recorder.sent(),
            ["```\nCommands:\n  !category  Makes one up.\n  !help      Shows this message.\n  !roll      Rolls a category.\n```"]
        );
    }
}
