//! Built-in commands registered at start-up.

use crate::{error::AppError, service::registry::CommandRegistry};

pub mod channel;
pub mod help;
pub mod info;
pub mod ping;
pub mod prefix;

#[cfg(test)]
mod test;

/// Reply to commands that change guild settings when the author lacks Manage Server.
pub const MISSING_PERMISSION: &str = "You need the Manage Server permission to do that.";

/// Builds the registry holding every built-in command.
///
/// # Returns
/// - `Ok(CommandRegistry)` - Registry ready for dispatch
/// - `Err(AppError::InternalError)` - Two commands share a name or alias
pub fn registry() -> Result<CommandRegistry, AppError> {
    CommandRegistry::builder()
        .command("ping", &[], "Pings the bot", ping::Ping)
        .command(
            "info",
            &["botinfo", "credits"],
            "Gets some info and credits about the bot",
            info::Info,
        )
        .command(
            "prefix",
            &[],
            "Shows or changes the command prefix of this server",
            prefix::Prefix,
        )
        .command(
            "channel",
            &[],
            "Disables or re-enables commands in this channel",
            channel::Channel,
        )
        .command(
            "help",
            &["commands"],
            "Lists the available commands",
            help::Help,
        )
        .build()
}
