use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError, service::dispatch::Dispatcher,
};

/// Starts the Discord bot and runs until the gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `dispatcher` - Command dispatcher every message is passed to
///
/// # Returns
/// - `Ok(())` if the bot runs and shuts down cleanly
/// - `Err(AppError)` if client initialization or the gateway connection fails
pub async fn start_bot(config: &Config, dispatcher: Dispatcher) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let handler = Handler::new(dispatcher);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
