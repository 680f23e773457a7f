use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
};

pub struct CommandUsageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandUsageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Increments the usage counter for a command, creating it on first use.
    ///
    /// # Arguments
    /// - `command`: Canonical command name
    ///
    /// # Returns
    /// - `Ok(())`: Counter incremented
    /// - `Err(DbErr)`: Database error during upsert
    pub async fn increment(&self, command: &str) -> Result<(), DbErr> {
        entity::prelude::CommandUsage::insert(entity::command_usage::ActiveModel {
            command: ActiveValue::Set(command.to_string()),
            count: ActiveValue::Set(1),
            last_used_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::command_usage::Column::Command)
                .value(
                    entity::command_usage::Column::Count,
                    Expr::cust("\"count\" + 1"),
                )
                .update_column(entity::command_usage::Column::LastUsedAt)
                .to_owned(),
        )
        .exec(self.db)
        .await?;

        Ok(())
    }

    /// Returns how many times a command has been run, 0 if never.
    pub async fn get_count(&self, command: &str) -> Result<i64, DbErr> {
        let usage = entity::prelude::CommandUsage::find()
            .filter(entity::command_usage::Column::Command.eq(command))
            .one(self.db)
            .await?;

        Ok(usage.map(|u| u.count).unwrap_or(0))
    }
}
