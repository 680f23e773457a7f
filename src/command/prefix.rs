use serenity::async_trait;

use crate::{
    command::MISSING_PERMISSION,
    error::command::CommandError,
    model::command::CommandResult,
    service::{
        prefix::PrefixResolver,
        registry::{Command, CommandContext, Invocation},
    },
};

const DIRECT_MESSAGE_REPLY: &str =
    "Prefixes aren't used in direct messages, just type the command name.";

/// Shows or changes a guild's command prefix.
///
/// Anyone may view the prefix; changing it requires Manage Server. A change
/// invalidates the guild's prefix cache entry so the next message is resolved against
/// storage.
pub struct Prefix;

#[async_trait]
impl Command for Prefix {
    async fn run(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        let Some(guild_id) = invocation.message.guild_id() else {
            return Ok(CommandResult::Text(DIRECT_MESSAGE_REPLY.to_string()));
        };

        let Some(new_prefix) = invocation.args.first() else {
            let current = PrefixResolver::new(ctx.storage, ctx.prefix_cache)
                .guild_prefix(guild_id)
                .await?;

            return Ok(CommandResult::Text(format!(
                "The current prefix is `{}`.",
                current
            )));
        };

        if !invocation.message.can_manage_guild {
            return Ok(CommandResult::Text(MISSING_PERMISSION.to_string()));
        }

        ctx.storage.set_prefix(guild_id, new_prefix).await?;
        ctx.prefix_cache.invalidate(guild_id).await;

        tracing::info!("Prefix of guild {} changed to {}", guild_id, new_prefix);

        Ok(CommandResult::Text(format!(
            "The prefix has been changed to `{}`.",
            new_prefix
        )))
    }
}
