use super::*;

/// Tests listing disabled channels only returns the requested guild's rows.
///
/// Expected: Ok with two channels for guild 100
#[tokio::test]
async fn returns_channels_for_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_disabled_channel(db, "100", "1").await?;
    factory::create_disabled_channel(db, "100", "2").await?;
    factory::create_disabled_channel(db, "200", "3").await?;

    let repo = DisabledChannelRepository::new(db);
    let mut channels: Vec<String> = repo
        .get_by_guild_id(100)
        .await?
        .into_iter()
        .map(|c| c.channel_id)
        .collect();
    channels.sort();

    assert_eq!(channels, vec!["1".to_string(), "2".to_string()]);

    Ok(())
}

/// Tests listing disabled channels of a guild with none.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_guild_without_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_config_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DisabledChannelRepository::new(db);
    let channels = repo.get_by_guild_id(100).await?;

    assert!(channels.is_empty());

    Ok(())
}
