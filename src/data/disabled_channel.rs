use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

pub struct DisabledChannelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DisabledChannelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_guild_id(
        &self,
        guild_id: u64,
    ) -> Result<Vec<entity::guild_disabled_channel::Model>, DbErr> {
        entity::prelude::GuildDisabledChannel::find()
            .filter(entity::guild_disabled_channel::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await
    }

    /// Marks a channel as disabled for commands.
    ///
    /// Idempotent: disabling an already disabled channel leaves a single row.
    ///
    /// # Returns
    /// - `Ok(Model)`: The disabled channel row
    /// - `Err(DbErr)`: Database error during query or insert
    pub async fn disable(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<entity::guild_disabled_channel::Model, DbErr> {
        let existing = entity::prelude::GuildDisabledChannel::find()
            .filter(entity::guild_disabled_channel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_disabled_channel::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?;

        if let Some(existing) = existing {
            return Ok(existing);
        }

        entity::guild_disabled_channel::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Re-enables commands in a channel.
    ///
    /// # Returns
    /// - `Ok(true)`: The channel was disabled and has been re-enabled
    /// - `Ok(false)`: The channel was not disabled
    /// - `Err(DbErr)`: Database error during delete
    pub async fn enable(&self, guild_id: u64, channel_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildDisabledChannel::delete_many()
            .filter(entity::guild_disabled_channel::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_disabled_channel::Column::ChannelId.eq(channel_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
