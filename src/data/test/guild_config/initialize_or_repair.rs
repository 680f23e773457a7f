use super::*;

/// Tests initializing a guild with no configuration row.
///
/// Verifies that a new active row carrying the default prefix is inserted.
///
/// Expected: Ok with active config using default prefix
#[tokio::test]
async fn creates_missing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigRepository::new(db);
    let config = repo.initialize_or_repair(123456789, "&").await?;

    assert_eq!(config.guild_id, "123456789");
    assert_eq!(config.prefix, "&");
    assert_eq!(config.status, GuildStatus::Active.as_str());

    let count = entity::prelude::GuildConfig::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests repairing an uninitialized row.
///
/// Verifies that the existing prefix is kept and the row becomes active
/// without inserting a duplicate.
///
/// Expected: Ok with active config, original prefix preserved
#[tokio::test]
async fn activates_uninitialized_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .prefix("?")
        .status(GuildStatus::Uninitialized.as_str())
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.initialize_or_repair(123456789, "&").await?;

    assert_eq!(config.prefix, "?");
    assert_eq!(config.status, "active");

    let count = entity::prelude::GuildConfig::find()
        .filter(entity::guild_config::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests repairing an active row with an empty prefix.
///
/// Expected: Ok with the default prefix filled in
#[tokio::test]
async fn fills_empty_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .prefix("")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.initialize_or_repair(123456789, "&").await?;

    assert_eq!(config.prefix, "&");

    Ok(())
}

/// Tests that administratively disabled guilds are left untouched.
///
/// Expected: Ok with config unchanged and still disabled
#[tokio::test]
async fn leaves_disabled_config_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .prefix("")
        .status(GuildStatus::Disabled.as_str())
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.initialize_or_repair(123456789, "&").await?;

    assert_eq!(config.prefix, "");
    assert_eq!(config.status, "disabled");

    Ok(())
}

/// Tests that a healthy active config is returned as-is.
///
/// Expected: Ok with custom prefix preserved
#[tokio::test]
async fn keeps_active_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::guild_config::GuildConfigFactory::new(db)
        .guild_id("123456789")
        .prefix("%")
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let config = repo.initialize_or_repair(123456789, "&").await?;

    assert_eq!(config, created);

    Ok(())
}
