//! Dispatcher tests.
//!
//! Storage is either a real `DatabaseStorage` over an in-memory database or a
//! `MockStorage` where a test asserts which storage calls happen. The transport and
//! temp storage are recording fakes.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use sea_orm::{DatabaseConnection, DbErr};
use serenity::async_trait;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    error::{command::CommandError, transport::TransportError, AppError},
    model::{
        command::CommandResult,
        guild_config::{GuildConfig, GuildStatus},
        message::{Author, BotUser, InboundMessage, Origin},
        outbound::OutboundMessage,
    },
    service::{
        dispatch::Dispatcher,
        registry::{Command, CommandContext, CommandRegistry, Invocation},
        storage::{DatabaseStorage, MockStorage, Storage},
        temp_storage::TempStorage,
        transport::Transport,
    },
};


const BOT_ID: u64 = 555;
const GUILD_ID: u64 = 1000;
const CHANNEL_ID: u64 = 2000;
const AUTHOR_ID: u64 = 3000;

/// Transport that records every message sent.
struct RecordingTransport {
    can_send: bool,
    /// Sends carrying attachments fail as too large.
    reject_attachments: bool,
    guild_count: AtomicUsize,
    sent: Mutex<Vec<(u64, OutboundMessage)>>,
}

impl RecordingTransport {
    fn new() -> Self {
        Self {
            can_send: true,
            reject_attachments: false,
            guild_count: AtomicUsize::new(3),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn without_permission() -> Self {
        Self {
            can_send: false,
            ..Self::new()
        }
    }

    fn rejecting_attachments() -> Self {
        Self {
            reject_attachments: true,
            ..Self::new()
        }
    }

    /// Simulates the bot joining or leaving guilds.
    fn set_guild_count(&self, count: usize) {
        self.guild_count.store(count, Ordering::Relaxed);
    }

    fn sent(&self) -> Vec<(u64, OutboundMessage)> {
        self.sent.lock().unwrap().clone()
    }

    /// Text content of every sent message.
    fn sent_content(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .map(|(_, message)| message.content.unwrap_or_default())
            .collect()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    fn bot_user(&self) -> BotUser {
        BotUser {
            id: BOT_ID,
            name: "helper".to_string(),
        }
    }

    fn guild_count(&self) -> usize {
        self.guild_count.load(Ordering::Relaxed)
    }

    async fn can_send_messages(&self, _channel_id: u64) -> bool {
        self.can_send
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<(), TransportError> {
        if self.reject_attachments && !message.attachments.is_empty() {
            return Err(TransportError::EntityTooLarge);
        }

        self.sent.lock().unwrap().push((channel_id, message));
        Ok(())
    }
}

/// Temp storage that keeps file names in memory.
#[derive(Default)]
struct RecordingTempStorage {
    files: Mutex<Vec<String>>,
}

#[async_trait]
impl TempStorage for RecordingTempStorage {
    async fn write_temp_file(&self, _bytes: &[u8], filename: &str) -> Result<String, AppError> {
        self.files.lock().unwrap().push(filename.to_string());
        Ok(format!("https://tmp.example.com/{}", filename))
    }
}

/// Replies with the received arguments as `args|raw_args`.
struct Echo;

#[async_trait]
impl Command for Echo {
    async fn run(
        &self,
        _ctx: &CommandContext<'_>,
        invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::Text(format!(
            "{}|{}",
            invocation.args.join(","),
            invocation.raw_args
        )))
    }
}

/// Always fails with the given error text.
struct Fail(&'static str);

#[async_trait]
impl Command for Fail {
    async fn run(
        &self,
        _ctx: &CommandContext<'_>,
        _invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        Err(CommandError::Other(self.0.to_string()))
    }
}

/// Waits, then returns a file of the given size.
struct SlowFile {
    delay: Duration,
    len: usize,
}

#[async_trait]
impl Command for SlowFile {
    async fn run(
        &self,
        _ctx: &CommandContext<'_>,
        _invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        tokio::time::sleep(self.delay).await;
        Ok(CommandResult::file(vec![0u8; self.len], "result.png"))
    }
}

/// Stand-in for the channel-management command.
struct ChannelStub;

#[async_trait]
impl Command for ChannelStub {
    async fn run(
        &self,
        _ctx: &CommandContext<'_>,
        _invocation: &Invocation<'_>,
    ) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::Text("channel ok".to_string()))
    }
}

/// Registry shared by the dispatcher tests.
///
/// - `ping`: replies "pong"
/// - `echo` (alias `say`): echoes its arguments
/// - `channel` (alias `chan`): replies "channel ok"
/// - `toolarge`, `udp`, `timeout`, `crash`: fail with matching error text
/// - `silent`: returns nothing
/// - `servers`: replies with the guild count it was given
fn registry() -> Arc<CommandRegistry> {
    struct Pong;

    #[async_trait]
    impl Command for Pong {
        async fn run(
            &self,
            _ctx: &CommandContext<'_>,
            _invocation: &Invocation<'_>,
        ) -> Result<CommandResult, CommandError> {
            Ok(CommandResult::Text("pong".to_string()))
        }
    }

    struct Silent;

    #[async_trait]
    impl Command for Silent {
        async fn run(
            &self,
            _ctx: &CommandContext<'_>,
            _invocation: &Invocation<'_>,
        ) -> Result<CommandResult, CommandError> {
            Ok(CommandResult::Empty)
        }
    }

    struct Servers;

    #[async_trait]
    impl Command for Servers {
        async fn run(
            &self,
            ctx: &CommandContext<'_>,
            _invocation: &Invocation<'_>,
        ) -> Result<CommandResult, CommandError> {
            Ok(CommandResult::Text(ctx.guild_count.to_string()))
        }
    }

    let registry = CommandRegistry::builder()
        .command("ping", &[], "Pings", Pong)
        .command("echo", &["say"], "Echoes", Echo)
        .command("channel", &["chan"], "Manages channels", ChannelStub)
        .command("toolarge", &[], "Fails", Fail("Request entity too large"))
        .command("udp", &[], "Fails", Fail("Error: UDP timed out"))
        .command("timeout", &[], "Fails", Fail("Error: Timed out"))
        .command("crash", &[], "Fails", Fail("image worker crashed"))
        .command("silent", &[], "Nothing", Silent)
        .command("servers", &[], "Counts guilds", Servers)
        .build()
        .unwrap();

    Arc::new(registry)
}

/// Registry with a single slow file command named `slow`.
fn slow_registry(delay: Duration, len: usize) -> Arc<CommandRegistry> {
    let registry = CommandRegistry::builder()
        .command("slow", &[], "Slow", SlowFile { delay, len })
        .build()
        .unwrap();

    Arc::new(registry)
}

fn author() -> Author {
    Author {
        id: AUTHOR_ID,
        name: "tester".to_string(),
        bot: false,
    }
}

/// Guild message whose clean text equals its raw text.
fn guild_message(content: &str) -> InboundMessage {
    guild_message_with_clean(content, content)
}

fn guild_message_with_clean(content: &str, clean_content: &str) -> InboundMessage {
    InboundMessage {
        author: author(),
        channel_id: CHANNEL_ID,
        origin: Origin::Guild { guild_id: GUILD_ID },
        content: content.to_string(),
        clean_content: clean_content.to_string(),
        can_manage_guild: true,
    }
}

fn direct_message(content: &str) -> InboundMessage {
    InboundMessage {
        origin: Origin::Direct,
        ..guild_message(content)
    }
}

fn active_config(guild_id: u64, prefix: &str) -> GuildConfig {
    GuildConfig {
        guild_id,
        prefix: prefix.to_string(),
        status: GuildStatus::Active,
        disabled_channels: HashSet::new(),
    }
}

/// Dispatcher over a fresh in-memory database with the default prefix `&`.
async fn database_dispatcher(
    registry: Arc<CommandRegistry>,
) -> Result<(Dispatcher, DatabaseConnection), DbErr> {
    let test = TestBuilder::new()
        .with_storage_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let storage: Arc<dyn Storage> = Arc::new(DatabaseStorage::new(db.clone(), "&"));
    Ok((Dispatcher::new(registry, storage), db))
}

fn mock_dispatcher(registry: Arc<CommandRegistry>, storage: MockStorage) -> Dispatcher {
    Dispatcher::new(registry, Arc::new(storage))
}

/// Storage for direct-message tests, which only count usage.
fn counting_storage() -> MockStorage {
    let mut storage = MockStorage::new();
    storage
        .expect_increment_command_usage()
        .returning(|_| Ok(()));
    storage
}
