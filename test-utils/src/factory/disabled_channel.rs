//! Factory for disabled channel rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Disables a channel for a guild.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID as string
/// - `channel_id` - Discord channel ID as string
///
/// # Returns
/// - `Ok(entity::guild_disabled_channel::Model)` - Created row
/// - `Err(DbErr)` - Database error during insert
pub async fn create_disabled_channel(
    db: &DatabaseConnection,
    guild_id: &str,
    channel_id: &str,
) -> Result<entity::guild_disabled_channel::Model, DbErr> {
    entity::guild_disabled_channel::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        channel_id: ActiveValue::Set(channel_id.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
