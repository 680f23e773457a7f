use serenity::all::{Context, Message};
use serenity::utils::{content_safe, ContentSafeOptions};

use crate::{
    bot::transport::SerenityTransport,
    model::message::{Author, InboundMessage, Origin},
    service::dispatch::Dispatcher,
};

/// Passes a message to the dispatcher.
///
/// # Arguments
/// - `dispatcher` - Command dispatcher
/// - `ctx` - Event context used for the reply transport
/// - `message` - The received message
pub async fn handle_message(dispatcher: &Dispatcher, ctx: Context, message: Message) {
    // Bot messages never reach a command; skip the clean-text rendering for them
    if message.author.bot {
        return;
    }

    // Bot accounts still carry legacy discriminators; the bot's clean mention must stay `@name`
    #[allow(deprecated)]
    let options = ContentSafeOptions::default().show_discriminator(false);
    let clean_content = content_safe(&ctx.cache, &message.content, &options, &message.mentions);
    let can_manage_guild = author_can_manage_guild(&ctx, &message);

    let inbound = inbound_from_serenity(&message, clean_content, can_manage_guild);
    let transport = SerenityTransport::new(&ctx, message.guild_id);

    dispatcher.handle_message(&transport, &inbound).await;
}

/// Converts a serenity message into the dispatcher's message model.
///
/// # Arguments
/// - `message` - Message received from the gateway
/// - `clean_content` - Text of the message with mentions rendered as names
/// - `can_manage_guild` - Whether the author holds Manage Server in the guild
pub fn inbound_from_serenity(
    message: &Message,
    clean_content: String,
    can_manage_guild: bool,
) -> InboundMessage {
    let origin = match message.guild_id {
        Some(guild_id) => Origin::Guild {
            guild_id: guild_id.get(),
        },
        None => Origin::Direct,
    };

    InboundMessage {
        author: Author {
            id: message.author.id.get(),
            name: message.author.name.clone(),
            bot: message.author.bot,
        },
        channel_id: message.channel_id.get(),
        origin,
        content: message.content.clone(),
        clean_content,
        can_manage_guild: can_manage_guild && message.guild_id.is_some(),
    }
}

/// Reads the author's Manage Server permission from the cached guild.
///
/// Uses the partial member sent with the message and falls back to the cached member.
/// Returns `false` when neither is available.
fn author_can_manage_guild(ctx: &Context, message: &Message) -> bool {
    let Some(guild_id) = message.guild_id else {
        return false;
    };
    let Some(guild) = ctx.cache.guild(guild_id) else {
        return false;
    };

    let channel_id = message.channel_id;
    let channel = guild
        .channels
        .get(&channel_id)
        .or_else(|| guild.threads.iter().find(|thread| thread.id == channel_id));

    let permissions = match (&message.member, channel) {
        (Some(member), Some(channel)) => {
            guild.partial_member_permissions_in(channel, message.author.id, member)
        }
        _ => match guild.members.get(&message.author.id) {
            Some(member) => guild.member_permissions(member),
            None => return false,
        },
    };

    permissions.manage_guild()
}
