use super::*;

/// Tests re-enabling a disabled channel.
///
/// Expected: Ok(true) and row removed
#[tokio::test]
async fn enables_disabled_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_disabled_channel(db, "100", "5").await?;
    factory::create_disabled_channel(db, "100", "6").await?;

    let repo = DisabledChannelRepository::new(db);
    let removed = repo.enable(100, 5).await?;

    assert!(removed);

    let remaining = repo.get_by_guild_id(100).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].channel_id, "6");

    Ok(())
}

/// Tests re-enabling a channel that was never disabled.
///
/// Expected: Ok(false)
#[tokio::test]
async fn enabling_unknown_channel_returns_false() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DisabledChannelRepository::new(db);
    let removed = repo.enable(100, 5).await?;

    assert!(!removed);

    Ok(())
}
