//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an active guild configuration with the given channels disabled.
///
/// # Arguments
/// - `db` - Database connection
/// - `channel_ids` - Channel IDs to disable in the new guild
///
/// # Returns
/// - `Ok((config, channels))` - Created guild row and its disabled channel rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guild_with_disabled_channels(
    db: &DatabaseConnection,
    channel_ids: &[&str],
) -> Result<
    (
        entity::guild_config::Model,
        Vec<entity::guild_disabled_channel::Model>,
    ),
    DbErr,
> {
    let config = crate::factory::guild_config::create_guild_config(db).await?;

    let mut channels = Vec::with_capacity(channel_ids.len());
    for channel_id in channel_ids {
        channels.push(
            crate::factory::disabled_channel::create_disabled_channel(
                db,
                &config.guild_id,
                channel_id,
            )
            .await?,
        );
    }

    Ok((config, channels))
}
