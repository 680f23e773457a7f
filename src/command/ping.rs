use serenity::async_trait;

use crate::{
    error::command::CommandError,
    model::command::CommandResult,
    service::registry::{Command, CommandContext, Invocation},
};

pub struct Ping;

#[async_trait]
impl Command for Ping {
    async fn run(
        &self,
        _ctx: &CommandContext<'_>,
        _invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::Text("Pong!".to_string()))
    }
}
