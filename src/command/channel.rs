use serenity::async_trait;

use crate::{
    command::MISSING_PERMISSION,
    error::command::CommandError,
    model::command::CommandResult,
    service::{
        prefix::load_guild_config,
        registry::{Command, CommandContext, Invocation},
    },
};

const INVALID_OPTION_REPLY: &str =
    "That's not a valid option! Use `channel disable` or `channel enable`.";

/// Disables or re-enables commands in the channel it is sent in.
///
/// This is the one command the disabled-channel gate always lets through. Requires
/// Manage Server.
pub struct Channel;

#[async_trait]
impl Command for Channel {
    async fn run(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        let Some(guild_id) = invocation.message.guild_id() else {
            return Ok(text("This command only works in servers."));
        };
        if !invocation.message.can_manage_guild {
            return Ok(text(MISSING_PERMISSION));
        }
        let channel_id = invocation.message.channel_id;

        let option = invocation.args.first().map(|arg| arg.to_lowercase());
        let disable = match option.as_deref() {
            Some("disable") => true,
            Some("enable") => false,
            _ => return Ok(text(INVALID_OPTION_REPLY)),
        };

        let config = load_guild_config(ctx.storage, guild_id).await?;
        let disabled = config.disabled_channels.contains(&channel_id);

        if disable == disabled {
            return Ok(text(if disable {
                "Commands are already disabled in this channel."
            } else {
                "Commands are not disabled in this channel."
            }));
        }

        ctx.storage
            .set_channel_disabled(guild_id, channel_id, disable)
            .await?;
        ctx.disabled_cache.invalidate(guild_id).await;

        tracing::info!(
            "Commands {} in channel {} of guild {}",
            if disable { "disabled" } else { "enabled" },
            channel_id,
            guild_id
        );

        Ok(text(if disable {
            "I have disabled bot commands in this channel."
        } else {
            "Bot commands have been re-enabled in this channel."
        }))
    }
}

fn text(content: &str) -> CommandResult {
    CommandResult::Text(content.to_string())
}
