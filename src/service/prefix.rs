//! Decides whether a message is addressed to the bot and which prefix to strip.

use crate::{
    error::AppError,
    model::{
        guild_config::GuildConfig,
        message::{BotUser, InboundMessage, Origin},
    },
    service::{cache::PrefixCache, storage::Storage},
};

/// Prefix a message was addressed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPrefix {
    /// Literal text to strip from the start of the message.
    pub prefix: String,
    /// Whether the bot was addressed by mention rather than by the guild prefix.
    pub is_mention: bool,
}

pub struct PrefixResolver<'a> {
    storage: &'a dyn Storage,
    cache: &'a PrefixCache,
}

impl<'a> PrefixResolver<'a> {
    pub fn new(storage: &'a dyn Storage, cache: &'a PrefixCache) -> Self {
        Self { storage, cache }
    }

    /// Returns a guild's configured prefix, filling the cache on a miss.
    ///
    /// On a miss the configuration is read through [`load_guild_config`].
    ///
    /// # Returns
    /// - `Ok(String)` - The guild's prefix
    /// - `Err(AppError)` - Storage failure; the cache is left untouched
    pub async fn guild_prefix(&self, guild_id: u64) -> Result<String, AppError> {
        if let Some(prefix) = self.cache.get(guild_id).await {
            return Ok(prefix);
        }

        let config = load_guild_config(self.storage, guild_id).await?;

        tracing::debug!("Cached prefix '{}' for guild {}", config.prefix, guild_id);
        self.cache.insert(guild_id, config.prefix.clone()).await;

        Ok(config.prefix)
    }

    /// Resolves the effective prefix of a message.
    ///
    /// - Direct messages use the empty prefix
    /// - Guild messages starting with either mention form of the bot use that mention
    ///   plus one space
    /// - Otherwise the guild's configured prefix applies
    ///
    /// # Returns
    /// - `Ok(Some(ResolvedPrefix))` - The message starts with the effective prefix
    /// - `Ok(None)` - The message is not addressed to the bot
    /// - `Err(AppError)` - Storage failure while reading the guild prefix
    pub async fn resolve(
        &self,
        message: &InboundMessage,
        bot: &BotUser,
    ) -> Result<Option<ResolvedPrefix>, AppError> {
        let resolved = match message.origin {
            Origin::Direct => ResolvedPrefix {
                prefix: String::new(),
                is_mention: false,
            },
            Origin::Guild { guild_id } => {
                let guild_prefix = self.guild_prefix(guild_id).await?;

                // The platform renders bot mentions in either form depending on the client
                let mention = [bot.member_mention(), bot.mention()]
                    .into_iter()
                    .find(|mention| message.content.starts_with(mention.as_str()));

                match mention {
                    Some(mention) => ResolvedPrefix {
                        prefix: format!("{} ", mention),
                        is_mention: true,
                    },
                    None => ResolvedPrefix {
                        prefix: guild_prefix,
                        is_mention: false,
                    },
                }
            }
        };

        if !message.content.starts_with(resolved.prefix.as_str()) {
            return Ok(None);
        }

        Ok(Some(resolved))
    }
}

/// Reads a guild's configuration, initializing or repairing it when incomplete.
///
/// Missing and uninitialized records go through initialization/repair. Administratively
/// disabled records are returned as stored.
pub(crate) async fn load_guild_config(
    storage: &dyn Storage,
    guild_id: u64,
) -> Result<GuildConfig, AppError> {
    match storage.get_guild_config(guild_id).await? {
        Some(config) if !config.needs_repair() => Ok(config),
        _ => storage.initialize_or_repair_guild_config(guild_id).await,
    }
}
