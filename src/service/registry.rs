//! Build-once registry of command handlers.
//!
//! Commands are registered on a [`CommandRegistryBuilder`] during start-up. The built
//! [`CommandRegistry`] is immutable and shared by every in-flight dispatch.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serenity::async_trait;

use crate::{
    error::{command::CommandError, AppError},
    model::{
        command::CommandResult,
        message::{BotUser, InboundMessage},
    },
    service::{
        cache::{DisabledChannelCache, PrefixCache},
        storage::Storage,
    },
};

/// Collaborators a handler may use while it runs.
pub struct CommandContext<'a> {
    pub storage: &'a dyn Storage,
    pub prefix_cache: &'a PrefixCache,
    pub disabled_cache: &'a DisabledChannelCache,
    pub registry: &'a CommandRegistry,
    pub bot: &'a BotUser,
    pub guild_count: usize,
}

/// One invocation of a command.
pub struct Invocation<'a> {
    pub message: &'a InboundMessage,
    /// The prefix the user typed, including a trailing space for mention form.
    pub prefix: &'a str,
    /// Whitespace-separated arguments taken from the clean message text.
    pub args: &'a [String],
    /// Argument text taken from the unmodified message text.
    pub raw_args: &'a str,
}

/// A command handler.
#[async_trait]
pub trait Command: Send + Sync {
    async fn run(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError>;
}

/// A handler with its names and help text.
pub struct RegisteredCommand {
    name: String,
    aliases: Vec<String>,
    help: String,
    handler: Arc<dyn Command>,
}

impl RegisteredCommand {
    /// Canonical name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn help(&self) -> &str {
        &self.help
    }

    pub fn handler(&self) -> &dyn Command {
        self.handler.as_ref()
    }
}

#[derive(Default)]
pub struct CommandRegistryBuilder {
    commands: Vec<RegisteredCommand>,
}

impl CommandRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a command. Names and aliases are matched case-insensitively.
    pub fn command(
        mut self,
        name: &str,
        aliases: &[&str],
        help: &str,
        handler: impl Command + 'static,
    ) -> Self {
        self.commands.push(RegisteredCommand {
            name: name.to_lowercase(),
            aliases: aliases.iter().map(|a| a.to_lowercase()).collect(),
            help: help.to_string(),
            handler: Arc::new(handler),
        });
        self
    }

    /// Builds the registry.
    ///
    /// # Returns
    /// - `Ok(CommandRegistry)` - Every name and alias is unique and non-empty
    /// - `Err(AppError::InternalError)` - A name or alias is empty, contains whitespace,
    ///   or is registered twice
    pub fn build(self) -> Result<CommandRegistry, AppError> {
        let mut commands = HashMap::new();
        let mut aliases = HashMap::new();
        let mut order = Vec::new();
        let mut keys = Vec::new();
        let mut seen = HashSet::new();

        for command in self.commands {
            for key in std::iter::once(&command.name).chain(command.aliases.iter()) {
                if key.is_empty() || key.contains(char::is_whitespace) {
                    return Err(AppError::InternalError(format!(
                        "Invalid command name or alias '{}'",
                        key
                    )));
                }
                if !seen.insert(key.clone()) {
                    return Err(AppError::InternalError(format!(
                        "Command name or alias '{}' registered twice",
                        key
                    )));
                }
                keys.push(key.clone());
            }

            for alias in &command.aliases {
                aliases.insert(alias.clone(), command.name.clone());
            }

            order.push(command.name.clone());
            commands.insert(command.name.clone(), command);
        }

        Ok(CommandRegistry {
            commands,
            aliases,
            order,
            keys,
        })
    }
}

/// Immutable mapping of command names and aliases to handlers.
pub struct CommandRegistry {
    commands: HashMap<String, RegisteredCommand>,
    /// alias -> canonical name
    aliases: HashMap<String, String>,
    /// Canonical names in registration order.
    order: Vec<String>,
    /// Every canonical name and alias, scanned by the candidacy check.
    keys: Vec<String>,
}

impl CommandRegistry {
    pub fn builder() -> CommandRegistryBuilder {
        CommandRegistryBuilder::new()
    }

    /// Cheap pre-filter: does the text contain any command name or alias?
    ///
    /// `lowercase_text` must already be lowercased. False positives are expected and
    /// rejected by later stages; every registered key is scanned, so a real command
    /// never fails this check.
    pub fn is_candidate(&self, lowercase_text: &str) -> bool {
        self.keys
            .iter()
            .any(|key| lowercase_text.contains(key.as_str()))
    }

    /// Looks a name up as a canonical name first, then as an alias.
    pub fn lookup(&self, name: &str) -> Option<&RegisteredCommand> {
        self.commands.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|canonical| self.commands.get(canonical))
        })
    }

    /// Commands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &RegisteredCommand> {
        self.order.iter().filter_map(|name| self.commands.get(name))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
