use serenity::async_trait;

use crate::{
    error::command::CommandError,
    model::command::{CommandResult, Embed},
    service::registry::{Command, CommandContext, Invocation, RegisteredCommand},
};

const HELP_COLOR: u32 = 0xFF0000;

/// Lists every command, or describes one when given its name or alias.
pub struct Help;

#[async_trait]
impl Command for Help {
    async fn run(
        &self,
        ctx: &CommandContext<'_>,
        invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        if let Some(name) = invocation.args.first() {
            let Some(command) = ctx.registry.lookup(&name.to_lowercase()) else {
                return Ok(CommandResult::Text(format!(
                    "There's no command called `{}`.",
                    name
                )));
            };

            let embed = Embed::new()
                .color(HELP_COLOR)
                .title(format!("{}{}", invocation.prefix, command.name()))
                .description(command.help());

            let embed = if command.aliases().is_empty() {
                embed
            } else {
                embed.field("Aliases:", command.aliases().join(", "), false)
            };

            return Ok(CommandResult::Embed(embed));
        }

        let description = ctx
            .registry
            .commands()
            .map(|command| help_line(invocation.prefix, command))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(CommandResult::Embed(
            Embed::new()
                .color(HELP_COLOR)
                .title(format!("{} Commands", ctx.bot.name))
                .description(description),
        ))
    }
}

fn help_line(prefix: &str, command: &RegisteredCommand) -> String {
    if command.aliases().is_empty() {
        format!("**{}{}** - {}", prefix, command.name(), command.help())
    } else {
        format!(
            "**{}{}** ({}) - {}",
            prefix,
            command.name(),
            command.aliases().join(", "),
            command.help()
        )
    }
}
