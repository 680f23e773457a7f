use serenity::async_trait;

use crate::{
    error::command::CommandError,
    model::command::{CommandResult, Embed},
    service::registry::{Command, CommandContext, Invocation},
};

const INFO_COLOR: u32 = 0xFF0000;

/// Version, server count and source link of the running bot.
pub struct Info;

#[async_trait]
impl Command for Info {
    async fn run(
        &self,
        ctx: &CommandContext<'_>,
        _invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        let mut embed = Embed::new()
            .color(INFO_COLOR)
            .author(format!("{} Info/Credits", ctx.bot.name), None)
            .field("Version:", format!("v{}", env!("CARGO_PKG_VERSION")), false)
            .field("Total Servers:", ctx.guild_count.to_string(), false);

        let repository = env!("CARGO_PKG_REPOSITORY");
        if !repository.is_empty() {
            embed = embed.field(
                "Source Code:",
                format!("[Click here!]({})", repository),
                false,
            );
        }

        Ok(CommandResult::Embed(embed))
    }
}
