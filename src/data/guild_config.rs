use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::guild_config::GuildStatus;

pub struct GuildConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a guild's configuration row by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Configuration found
    /// - `Ok(None)`: Guild has no configuration yet
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Option<entity::guild_config::Model>, DbErr> {
        entity::prelude::GuildConfig::find()
            .filter(entity::guild_config::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        guild_id: u64,
        prefix: &str,
        status: GuildStatus,
    ) -> Result<entity::guild_config::Model, DbErr> {
        entity::guild_config::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            prefix: ActiveValue::Set(prefix.to_string()),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Initializes a missing configuration or repairs an incomplete one.
    ///
    /// - No row: inserts an active row with `default_prefix`
    /// - Uninitialized row, or active row with an empty prefix: fills in
    ///   `default_prefix` when the prefix is empty and marks the row active
    /// - Anything else, including administratively disabled rows: returned unchanged
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID
    /// - `default_prefix`: Prefix to use where none is stored
    ///
    /// # Returns
    /// - `Ok(Model)`: The resulting configuration row
    /// - `Err(DbErr)`: Database error during query or write
    pub async fn initialize_or_repair(
        &self,
        guild_id: u64,
        default_prefix: &str,
    ) -> Result<entity::guild_config::Model, DbErr> {
        let Some(existing) = self.find_by_guild_id(guild_id).await? else {
            return self
                .create(guild_id, default_prefix, GuildStatus::Active)
                .await;
        };

        let status = existing.status.parse::<GuildStatus>().ok();
        let needs_repair = match status {
            Some(GuildStatus::Disabled) => false,
            Some(GuildStatus::Active) => existing.prefix.is_empty(),
            // Unknown status text is treated as an incomplete record
            Some(GuildStatus::Uninitialized) | None => true,
        };

        if !needs_repair {
            return Ok(existing);
        }

        let prefix = if existing.prefix.is_empty() {
            default_prefix.to_string()
        } else {
            existing.prefix.clone()
        };

        let mut active: entity::guild_config::ActiveModel = existing.into();
        active.prefix = ActiveValue::Set(prefix);
        active.status = ActiveValue::Set(GuildStatus::Active.as_str().to_string());

        active.update(self.db).await
    }

    /// Updates the prefix of an existing configuration row.
    ///
    /// # Returns
    /// - `Ok(Model)`: Updated row
    /// - `Err(DbErr::RecordNotFound)`: Guild has no configuration row
    /// - `Err(DbErr)`: Database error during update
    pub async fn update_prefix(
        &self,
        guild_id: u64,
        prefix: &str,
    ) -> Result<entity::guild_config::Model, DbErr> {
        let existing = self.find_by_guild_id(guild_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Guild config for guild {} not found", guild_id))
        })?;

        let mut active: entity::guild_config::ActiveModel = existing.into();
        active.prefix = ActiveValue::Set(prefix.to_string());

        active.update(self.db).await
    }
}
