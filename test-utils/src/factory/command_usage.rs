//! Factory for command usage counters.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

pub struct CommandUsageFactory<'a> {
    db: &'a DatabaseConnection,
    command: String,
    count: i64,
}

impl<'a> CommandUsageFactory<'a> {
    /// Defaults:
    /// - command: `"command{id}"`
    /// - count: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            command: format!("command{}", next_id()),
            count: 0,
        }
    }

    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    pub fn count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub async fn build(self) -> Result<entity::command_usage::Model, DbErr> {
        entity::command_usage::ActiveModel {
            command: ActiveValue::Set(self.command),
            count: ActiveValue::Set(self.count),
            last_used_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_command_usage(
    db: &DatabaseConnection,
    command: &str,
    count: i64,
) -> Result<entity::command_usage::Model, DbErr> {
    CommandUsageFactory::new(db)
        .command(command)
        .count(count)
        .build()
        .await
}
