//! Built-in command tests.
//!
//! Commands run against `DatabaseStorage` over an in-memory database, with the registry
//! returned by [`registry()`](crate::command::registry).

use std::collections::HashSet;

use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::{
    command::{registry, MISSING_PERMISSION},
    model::{
        command::CommandResult,
        guild_config::GuildConfig,
        message::{Author, BotUser, InboundMessage, Origin},
    },
    service::{
        cache::{DisabledChannelCache, PrefixCache},
        registry::{CommandContext, CommandRegistry, Invocation},
        storage::{DatabaseStorage, Storage},
    },
};


const GUILD_ID: u64 = 1000;
const CHANNEL_ID: u64 = 2000;

/// Everything a command needs, owned so a `CommandContext` can borrow from it.
struct Harness {
    db: DatabaseConnection,
    storage: DatabaseStorage,
    prefix_cache: PrefixCache,
    disabled_cache: DisabledChannelCache,
    registry: CommandRegistry,
    bot: BotUser,
}

impl Harness {
    async fn new() -> Result<Self, DbErr> {
        let test = TestBuilder::new()
            .with_storage_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.clone().unwrap();

        Ok(Self {
            storage: DatabaseStorage::new(db.clone(), "&"),
            db,
            prefix_cache: PrefixCache::new(),
            disabled_cache: DisabledChannelCache::new(),
            registry: registry().unwrap(),
            bot: BotUser {
                id: 555,
                name: "helper".to_string(),
            },
        })
    }

    fn ctx(&self) -> CommandContext<'_> {
        CommandContext {
            storage: &self.storage,
            prefix_cache: &self.prefix_cache,
            disabled_cache: &self.disabled_cache,
            registry: &self.registry,
            bot: &self.bot,
            guild_count: 7,
        }
    }

    /// Guild configuration currently stored for `GUILD_ID`.
    async fn stored_config(&self) -> Option<GuildConfig> {
        self.storage.get_guild_config(GUILD_ID).await.unwrap()
    }

    /// Runs a registered command by name with whitespace-separated arguments.
    async fn run(&self, message: &InboundMessage, name: &str, raw_args: &str) -> CommandResult {
        let args: Vec<String> = raw_args.split_whitespace().map(str::to_string).collect();
        let invocation = Invocation {
            message,
            prefix: "&",
            args: &args,
            raw_args,
        };

        self.registry
            .lookup(name)
            .unwrap()
            .handler()
            .run(&self.ctx(), &invocation)
            .await
            .unwrap()
    }
}

fn guild_message() -> InboundMessage {
    InboundMessage {
        author: Author {
            id: 3000,
            name: "tester".to_string(),
            bot: false,
        },
        channel_id: CHANNEL_ID,
        origin: Origin::Guild { guild_id: GUILD_ID },
        content: String::new(),
        clean_content: String::new(),
        can_manage_guild: true,
    }
}

/// Guild message from a member without Manage Server.
fn unprivileged_message() -> InboundMessage {
    InboundMessage {
        can_manage_guild: false,
        ..guild_message()
    }
}

fn direct_message() -> InboundMessage {
    InboundMessage {
        origin: Origin::Direct,
        ..guild_message()
    }
}

fn text(result: CommandResult) -> String {
    match result {
        CommandResult::Text(text) => text,
        other => panic!("expected text result, got {:?}", other),
    }
}
