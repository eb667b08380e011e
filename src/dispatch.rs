use std::{collections::HashMap, sync::Arc};

use crate::{
    commands::{CommandHandler, Invocation, help},
    util,
};

#[derive(Debug, PartialEq, Eq)]
pub enum Dispatched {
    Ran(String),
    Unknown(String),
    NotACommand,
}

/// Returns the command name if `content` invokes one, ignoring any arguments.
pub fn parse<'a>(prefix: &str, content: &'a str) -> Option<&'a str> {
    let rest = content.strip_prefix(prefix)?;
    let name = rest.split(char::is_whitespace).next()?;
    (!name.is_empty()).then_some(name)
}

pub struct Builder {
    prefix: String,
    commands: Vec<Arc<dyn CommandHandler>>,
}
impl Builder {
    pub fn command(mut self, command: impl CommandHandler + 'static) -> Self {
        self.commands.push(Arc::new(command));
        self
    }

    /// Finishes the table, adding a `help` command that lists everything in it.
    pub fn build(self) -> Dispatcher {
        let help = help::Handler::new(
            &self.prefix,
            self.commands
                .iter()
                .map(|c| (c.name(), c.description())),
        );

        let commands = self
            .commands
            .into_iter()
            .chain([Arc::new(help) as Arc<dyn CommandHandler>])
            .map(|c| (c.name().to_string(), c))
            .collect();

        Dispatcher {
            prefix: self.prefix,
            commands,
        }
    }
}

pub struct Dispatcher {
    prefix: String,
    commands: HashMap<String, Arc<dyn CommandHandler>>,
}
impl Dispatcher {
    pub fn builder(prefix: impl Into<String>) -> Builder {
        Builder {
            prefix: prefix.into(),
            commands: vec![],
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Logs the message, then runs the command it invokes, if any.
    pub async fn dispatch(&self, invocation: &Invocation<'_>) -> Dispatched {
        tracing::info!("Message from {}: {}", invocation.author, invocation.content);

        let Some(name) = parse(&self.prefix, invocation.content) else {
            return Dispatched::NotACommand;
        };
        let Some(command) = self.commands.get(name) else {
            return Dispatched::Unknown(name.to_string());
        };

        util::run_and_report_error(invocation.channel, command.run(invocation)).await;
        Dispatched::Ran(name.to_string())
    }
}
