//! Persistent storage as seen by the dispatcher and commands.
//!
//! [`Storage`] is the seam; [`DatabaseStorage`] implements it on top of the SeaORM
//! repositories and converts entity rows into [`GuildConfig`] domain models.

use sea_orm::DatabaseConnection;
use serenity::async_trait;

use crate::{
    data::{CommandUsageRepository, DisabledChannelRepository, GuildConfigRepository},
    error::AppError,
    model::guild_config::GuildConfig,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads a guild's configuration, `None` if the guild has never been seen.
    async fn get_guild_config(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError>;

    /// Creates a missing configuration or repairs an incomplete one.
    async fn initialize_or_repair_guild_config(
        &self,
        guild_id: u64,
    ) -> Result<GuildConfig, AppError>;

    /// Counts one invocation of a command under its canonical name.
    async fn increment_command_usage(&self, command: &str) -> Result<(), AppError>;

    /// Stores a new prefix, initializing the guild first if needed.
    async fn set_prefix(&self, guild_id: u64, prefix: &str) -> Result<GuildConfig, AppError>;

    /// Disables or re-enables commands in a channel, initializing the guild first if needed.
    async fn set_channel_disabled(
        &self,
        guild_id: u64,
        channel_id: u64,
        disabled: bool,
    ) -> Result<GuildConfig, AppError>;
}

/// [`Storage`] backed by the SQL database.
pub struct DatabaseStorage {
    db: DatabaseConnection,
    default_prefix: String,
}

impl DatabaseStorage {
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `default_prefix` - Prefix given to guilds on initialization or repair
    pub fn new(db: DatabaseConnection, default_prefix: impl Into<String>) -> Self {
        Self {
            db,
            default_prefix: default_prefix.into(),
        }
    }

    async fn load(&self, config: entity::guild_config::Model) -> Result<GuildConfig, AppError> {
        let guild_id = config.guild_id.parse::<u64>().map_err(|e| {
            AppError::InternalError(format!(
                "Failed to parse guild_id '{}': {}",
                config.guild_id, e
            ))
        })?;

        let channels = DisabledChannelRepository::new(&self.db)
            .get_by_guild_id(guild_id)
            .await?;

        Ok(GuildConfig::from_entity(config, channels)?)
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn get_guild_config(&self, guild_id: u64) -> Result<Option<GuildConfig>, AppError> {
        let repo = GuildConfigRepository::new(&self.db);

        match repo.find_by_guild_id(guild_id).await? {
            Some(config) => Ok(Some(self.load(config).await?)),
            None => Ok(None),
        }
    }

    async fn initialize_or_repair_guild_config(
        &self,
        guild_id: u64,
    ) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(&self.db);
        let config = repo
            .initialize_or_repair(guild_id, &self.default_prefix)
            .await?;

        self.load(config).await
    }

    async fn increment_command_usage(&self, command: &str) -> Result<(), AppError> {
        let repo = CommandUsageRepository::new(&self.db);
        repo.increment(command).await?;

        Ok(())
    }

    async fn set_prefix(&self, guild_id: u64, prefix: &str) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(&self.db);
        repo.initialize_or_repair(guild_id, &self.default_prefix)
            .await?;
        let config = repo.update_prefix(guild_id, prefix).await?;

        self.load(config).await
    }

    async fn set_channel_disabled(
        &self,
        guild_id: u64,
        channel_id: u64,
        disabled: bool,
    ) -> Result<GuildConfig, AppError> {
        let repo = GuildConfigRepository::new(&self.db);
        let config = repo
            .initialize_or_repair(guild_id, &self.default_prefix)
            .await?;

        let channel_repo = DisabledChannelRepository::new(&self.db);
        if disabled {
            channel_repo.disable(guild_id, channel_id).await?;
        } else {
            channel_repo.enable(guild_id, channel_id).await?;
        }

        self.load(config).await
    }
}
