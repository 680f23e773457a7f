//! [`Transport`] implementation over a serenity event context.

use serenity::all::{
    ChannelId, Context, CreateAttachment, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter,
    CreateMessage, GuildId, UserId,
};
use serenity::async_trait;

use crate::{
    error::transport::TransportError,
    model::{command::Embed, message::BotUser, outbound::OutboundMessage},
    service::transport::Transport,
};

/// Transport for the duration of a single gateway event.
pub struct SerenityTransport<'a> {
    ctx: &'a Context,
    /// Guild of the event, `None` for direct messages.
    guild_id: Option<GuildId>,
}

impl<'a> SerenityTransport<'a> {
    pub fn new(ctx: &'a Context, guild_id: Option<GuildId>) -> Self {
        Self { ctx, guild_id }
    }

    /// Reads the bot's send permission from the cache.
    ///
    /// Cache guards are not held across an await point, so this stays synchronous.
    ///
    /// # Returns
    /// - `Some(bool)` - Whether the bot may send messages in the channel
    /// - `None` - The guild, channel or bot member is not cached
    fn cached_send_permission(&self, guild_id: GuildId, channel_id: ChannelId) -> Option<bool> {
        let bot_id: UserId = self.ctx.cache.current_user().id;
        let guild = self.ctx.cache.guild(guild_id)?;

        let channel = guild
            .channels
            .get(&channel_id)
            .or_else(|| guild.threads.iter().find(|thread| thread.id == channel_id))?;
        let member = guild.members.get(&bot_id)?;

        Some(guild.user_permissions_in(channel, member).send_messages())
    }
}

#[async_trait]
impl Transport for SerenityTransport<'_> {
    fn bot_user(&self) -> BotUser {
        let user = self.ctx.cache.current_user();

        BotUser {
            id: user.id.get(),
            name: user.name.clone(),
        }
    }

    /// Guilds currently in the cache, kept current by guild create and delete events.
    fn guild_count(&self) -> usize {
        self.ctx.cache.guilds().len()
    }

    async fn can_send_messages(&self, channel_id: u64) -> bool {
        let Some(guild_id) = self.guild_id else {
            return true;
        };

        match self.cached_send_permission(guild_id, ChannelId::new(channel_id)) {
            Some(allowed) => allowed,
            None => {
                tracing::warn!(
                    "No cached permissions for channel {} in guild {}, assuming send is allowed",
                    channel_id,
                    guild_id
                );
                true
            }
        }
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<(), TransportError> {
        ChannelId::new(channel_id)
            .send_message(self.ctx, build_message(message))
            .await?;

        Ok(())
    }
}

/// Converts an outbound message into a serenity message builder.
pub fn build_message(message: OutboundMessage) -> CreateMessage {
    let mut builder = CreateMessage::new();

    if let Some(content) = message.content {
        builder = builder.content(content);
    }

    if let Some(embed) = message.embed {
        builder = builder.embed(build_embed(embed));
    }

    for attachment in message.attachments {
        builder = builder.add_file(CreateAttachment::bytes(
            attachment.bytes,
            attachment.filename,
        ));
    }

    builder
}

/// Converts an embed into a serenity embed builder.
pub fn build_embed(embed: Embed) -> CreateEmbed {
    let mut builder = CreateEmbed::new();

    if let Some(title) = embed.title {
        builder = builder.title(title);
    }
    if let Some(description) = embed.description {
        builder = builder.description(description);
    }
    if let Some(url) = embed.url {
        builder = builder.url(url);
    }
    if let Some(color) = embed.color {
        builder = builder.colour(color);
    }
    if let Some(image_url) = embed.image_url {
        builder = builder.image(image_url);
    }
    if let Some(author) = embed.author {
        let mut embed_author = CreateEmbedAuthor::new(author.name);
        if let Some(icon_url) = author.icon_url {
            embed_author = embed_author.icon_url(icon_url);
        }
        builder = builder.author(embed_author);
    }
    if let Some(footer) = embed.footer {
        builder = builder.footer(CreateEmbedFooter::new(footer));
    }

    for field in embed.fields {
        builder = builder.field(field.name, field.value, field.inline);
    }

    builder
}
