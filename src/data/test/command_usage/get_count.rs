use super::*;

/// Tests reading the count of a command that was never run.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_unused_command() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommandUsageRepository::new(db);

    assert_eq!(repo.get_count("ping").await?, 0);

    Ok(())
}

/// Tests reading a stored count.
///
/// Expected: Ok(42)
#[tokio::test]
async fn returns_stored_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CommandUsage)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::command_usage::CommandUsageFactory::new(db)
        .command("info")
        .count(42)
        .build()
        .await?;

    let repo = CommandUsageRepository::new(db);

    assert_eq!(repo.get_count("info").await?, 42);

    Ok(())
}
