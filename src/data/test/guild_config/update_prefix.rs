use super::*;

/// Tests updating the prefix of an existing guild.
///
/// Expected: Ok with new prefix persisted
#[tokio::test]
async fn updates_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .prefix("&")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let updated = repo.update_prefix(123456789, "$").await?;
    assert_eq!(updated.prefix, "$");

    let stored = repo.find_by_guild_id(123456789).await?.unwrap();
    assert_eq!(stored.prefix, "$");

    Ok(())
}

/// Tests updating the prefix of a guild without configuration.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let result = repo.update_prefix(123456789, "$").await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
