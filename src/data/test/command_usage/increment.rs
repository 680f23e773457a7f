use super::*;

/// Tests incrementing a command that has never been used.
///
/// Expected: Ok with count 1
#[tokio::test]
async fn creates_counter_on_first_use() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    repo.increment("ping").await?;

    assert_eq!(repo.get_count("ping").await?, 1);

    Ok(())
}

/// Tests incrementing an existing counter.
///
/// Verifies the upsert updates the existing row rather than inserting another.
///
/// Expected: Ok with count 4 and a single row
#[tokio::test]
async fn increments_existing_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::command_usage::CommandUsageFactory::new(db)
        .command("ping")
        .count(3)
        .build()
        .await?;

    let repo = CommandUsageRepository::new(db);
    repo.increment("ping").await?;

    assert_eq!(repo.get_count("ping").await?, 4);

    let rows = entity::prelude::CommandUsage::find().count(db).await?;
    assert_eq!(rows, 1);

    Ok(())
}

/// Tests that counters are tracked per command.
///
/// Expected: Ok with independent counts
#[tokio::test]
async fn tracks_commands_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);
    repo.increment("ping").await?;
    repo.increment("ping").await?;
    repo.increment("info").await?;

    assert_eq!(repo.get_count("ping").await?, 2);
    assert_eq!(repo.get_count("info").await?, 1);

    Ok(())
}
