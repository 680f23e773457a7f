use super::*;

/// Tests disabling a channel.
///
/// Expected: Ok with row inserted
#[tokio::test]
async fn disables_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DisabledChannelRepository::new(db);
    let row = repo.disable(100, 5).await?;

    assert_eq!(row.guild_id, "100");
    assert_eq!(row.channel_id, "5");

    Ok(())
}

/// Tests that disabling twice keeps a single row.
///
/// Expected: Ok with exactly one row
#[tokio::test]
async fn disabling_twice_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DisabledChannelRepository::new(db);
    let first = repo.disable(100, 5).await?;
    let second = repo.disable(100, 5).await?;

    assert_eq!(first.id, second.id);

    let count = entity::prelude::GuildDisabledChannel::find()
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
