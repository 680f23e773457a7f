use std::{collections::HashSet, sync::Arc};

use tokio::time::Instant;

use crate::{
    error::{
        command::{CommandError, ErrorKind},
        AppError,
    },
    model::{
        message::{BotUser, InboundMessage, Origin},
        outbound::OutboundMessage,
    },
    service::{
        cache::{DisabledChannelCache, PrefixCache},
        parse::{parse_command, ParsedCommand},
        prefix::{load_guild_config, PrefixResolver},
        registry::{CommandContext, CommandRegistry, Invocation, RegisteredCommand},
        render::ResultRenderer,
        storage::Storage,
        temp_storage::TempStorage,
        transport::Transport,
    },
};

/// Canonical name of the channel-management command, exempt from the disabled-channel gate.
pub const CHANNEL_COMMAND: &str = "channel";

const ENTITY_TOO_LARGE_REPLY: &str =
    "the resulting file was too large to upload. Try again with a smaller image if possible.";
const UPSTREAM_TIMEOUT_REPLY: &str = "I couldn't contact the image API in time (most likely due to it being overloaded). Try running your command again.";
const DOWNLOAD_TIMEOUT_REPLY: &str =
    "the request timed out before I could download that image. Try uploading your image somewhere else.";
const APOLOGY: &str = "Uh oh! I ran into an error while running this command. Please report the content of the attached file";
const ERROR_ATTACHMENT_NAME: &str = "error.txt";

/// Entry point for inbound messages.
///
/// Owns the command registry, both guild caches and the storage seams. One instance is
/// shared by every in-flight dispatch.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    storage: Arc<dyn Storage>,
    prefix_cache: PrefixCache,
    disabled_cache: DisabledChannelCache,
    temp_storage: Option<Arc<dyn TempStorage>>,
    support_url: Option<String>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>, storage: Arc<dyn Storage>) -> Self {
        Self {
            registry,
            storage,
            prefix_cache: PrefixCache::new(),
            disabled_cache: DisabledChannelCache::new(),
            temp_storage: None,
            support_url: None,
        }
    }

    /// Enables offloading of oversized file results.
    pub fn with_temp_storage(mut self, temp_storage: Arc<dyn TempStorage>) -> Self {
        self.temp_storage = Some(temp_storage);
        self
    }

    /// Link appended to the apology sent for unclassified failures.
    pub fn with_support_url(mut self, support_url: Option<String>) -> Self {
        self.support_url = support_url;
        self
    }

    pub fn prefix_cache(&self) -> &PrefixCache {
        &self.prefix_cache
    }

    pub fn disabled_cache(&self) -> &DisabledChannelCache {
        &self.disabled_cache
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Handles one inbound message.
    ///
    /// Messages that are not commands are dropped silently. Every outcome of a command,
    /// including its failure, is delivered through `transport`; nothing is returned.
    pub async fn handle_message(&self, transport: &dyn Transport, message: &InboundMessage) {
        if message.author.bot {
            return;
        }

        if let Origin::Guild { .. } = message.origin {
            if !transport.can_send_messages(message.channel_id).await {
                return;
            }
        }

        // Most chat traffic ends here without touching the caches or storage
        if !self.registry.is_candidate(&message.content.to_lowercase()) {
            return;
        }

        let bot = transport.bot_user();

        let resolver = PrefixResolver::new(self.storage.as_ref(), &self.prefix_cache);
        let resolved = match resolver.resolve(message, &bot).await {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                tracing::debug!(
                    "Message in channel {} does not start with the prefix",
                    message.channel_id
                );
                return;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to resolve prefix for channel {}: {}",
                    message.channel_id,
                    e
                );
                return;
            }
        };

        let Some(parsed) = parse_command(message, &resolved, &bot) else {
            return;
        };

        let command = self.registry.lookup(&parsed.name);

        if let Origin::Guild { guild_id } = message.origin {
            let is_channel_command = command.is_some_and(|c| c.name() == CHANNEL_COMMAND);

            match self.disabled_channels(guild_id).await {
                Ok(disabled) => {
                    if disabled.contains(&message.channel_id) && !is_channel_command {
                        tracing::debug!(
                            "Ignoring command {} in disabled channel {}",
                            parsed.name,
                            message.channel_id
                        );
                        return;
                    }
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to load disabled channels for guild {}: {}",
                        guild_id,
                        e
                    );
                    return;
                }
            }
        }

        let Some(command) = command else {
            return;
        };

        tracing::info!(
            "{} ({}) ran command {}",
            message.author.name,
            message.author.id,
            parsed.name
        );

        if let Err(e) = self
            .invoke(transport, &bot, message, &resolved.prefix, command, &parsed)
            .await
        {
            self.report_failure(transport, message, e).await;
        }
    }

    /// Disabled channels of a guild, filling the cache on a miss.
    async fn disabled_channels(&self, guild_id: u64) -> Result<HashSet<u64>, AppError> {
        if let Some(disabled) = self.disabled_cache.get(guild_id).await {
            return Ok(disabled);
        }

        let config = load_guild_config(self.storage.as_ref(), guild_id).await?;

        tracing::debug!(
            "Cached {} disabled channel(s) for guild {}",
            config.disabled_channels.len(),
            guild_id
        );
        self.disabled_cache
            .insert(guild_id, config.disabled_channels.clone())
            .await;

        Ok(config.disabled_channels)
    }

    /// Runs a command and delivers its result.
    ///
    /// Every failure from usage tracking, the handler, rendering or sending is returned
    /// to the caller for reporting.
    async fn invoke(
        &self,
        transport: &dyn Transport,
        bot: &BotUser,
        message: &InboundMessage,
        prefix: &str,
        command: &RegisteredCommand,
        parsed: &ParsedCommand,
    ) -> Result<(), CommandError> {
        self.storage.increment_command_usage(command.name()).await?;

        let ctx = CommandContext {
            storage: self.storage.as_ref(),
            prefix_cache: &self.prefix_cache,
            disabled_cache: &self.disabled_cache,
            registry: self.registry.as_ref(),
            bot,
            guild_count: transport.guild_count(),
        };
        let invocation = Invocation {
            message,
            prefix,
            args: &parsed.args,
            raw_args: &parsed.raw_args,
        };

        let start = Instant::now();
        let result = command.handler().run(&ctx, &invocation).await?;
        let elapsed = start.elapsed();

        let renderer = ResultRenderer::new(self.temp_storage.as_deref());
        if let Some(outbound) = renderer.render(result, &message.author, elapsed).await? {
            transport.send_message(message.channel_id, outbound).await?;
        }

        Ok(())
    }

    /// Tells the invoker that their command failed.
    async fn report_failure(
        &self,
        transport: &dyn Transport,
        message: &InboundMessage,
        error: CommandError,
    ) {
        let mention = message.author.mention();

        let reply = match error.kind() {
            ErrorKind::EntityTooLarge => {
                OutboundMessage::text(format!("{}, {}", mention, ENTITY_TOO_LARGE_REPLY))
            }
            ErrorKind::UpstreamTimeout => {
                OutboundMessage::text(format!("{}, {}", mention, UPSTREAM_TIMEOUT_REPLY))
            }
            ErrorKind::DownloadTimeout => {
                OutboundMessage::text(format!("{}, {}", mention, DOWNLOAD_TIMEOUT_REPLY))
            }
            ErrorKind::Unclassified => {
                tracing::error!(
                    "Command from {} ({}) failed: {}",
                    message.author.name,
                    message.author.id,
                    error
                );

                let details = format!("Message: {}\n\nDetails: {:?}", error, error);
                OutboundMessage::text(self.apology())
                    .with_attachment(ERROR_ATTACHMENT_NAME, details.into_bytes())
            }
        };

        if let Err(e) = transport.send_message(message.channel_id, reply).await {
            tracing::error!(
                "Failed to send error reply to channel {}: {}",
                message.channel_id,
                e
            );
        }
    }

    fn apology(&self) -> String {
        match &self.support_url {
            Some(url) => format!("{} here or at <{}>", APOLOGY, url),
            None => format!("{}.", APOLOGY),
        }
    }
}
