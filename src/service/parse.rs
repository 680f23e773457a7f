use crate::{
    model::message::{BotUser, InboundMessage},
    service::prefix::ResolvedPrefix,
};

/// A command name with its arguments, derived from one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lowercased first word after the prefix.
    pub name: String,
    /// Words after the command name, taken from the clean text.
    pub args: Vec<String>,
    /// Text after the command name, taken from the unmodified message.
    pub raw_args: String,
}

/// Splits a prefixed message into command name and arguments.
///
/// Two views are derived. Arguments come from the clean text, where mentions are
/// rendered as names, with the prefix equivalent stripped (`@botname ` for mention form).
/// The command name and `raw_args` come from the unmodified text so case and markup are
/// preserved for commands that need them.
///
/// # Returns
/// - `Some(ParsedCommand)` - A command word follows the prefix
/// - `None` - Nothing follows the prefix, or the message does not start with it
pub fn parse_command(
    message: &InboundMessage,
    resolved: &ResolvedPrefix,
    bot: &BotUser,
) -> Option<ParsedCommand> {
    let raw = message
        .content
        .strip_prefix(resolved.prefix.as_str())?
        .trim();

    let (command_word, raw_args) = match raw.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (raw, ""),
    };

    if command_word.is_empty() {
        return None;
    }

    let clean_prefix = if resolved.is_mention {
        format!("{} ", bot.clean_mention())
    } else {
        resolved.prefix.clone()
    };

    let clean: String = message
        .clean_content
        .chars()
        .skip(clean_prefix.chars().count())
        .collect();

    let args = clean
        .split_whitespace()
        .skip(1)
        .map(str::to_string)
        .collect();

    Some(ParsedCommand {
        name: command_word.to_lowercase(),
        args,
        raw_args: raw_args.to_string(),
    })
}
