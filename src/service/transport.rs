use serenity::async_trait;

use crate::{
    error::transport::TransportError,
    model::{message::BotUser, outbound::OutboundMessage},
};

/// The chat platform, as seen by the dispatcher.
#[async_trait]
pub trait Transport: Send + Sync {
    /// The bot's own account.
    fn bot_user(&self) -> BotUser;

    /// Number of guilds the bot is currently in.
    fn guild_count(&self) -> usize;

    /// Whether the bot may post in the given channel.
    async fn can_send_messages(&self, channel_id: u64) -> bool;

    /// Delivers a message to a channel.
    ///
    /// # Returns
    /// - `Ok(())` - Message accepted by the platform
    /// - `Err(TransportError::EntityTooLarge)` - Payload exceeded the upload limit
    /// - `Err(TransportError)` - Any other delivery failure
    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<(), TransportError>;
}
