use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_guild_config_table::GuildConfig;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildDisabledChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildDisabledChannel::Id))
                    .col(string(GuildDisabledChannel::GuildId))
                    .col(string(GuildDisabledChannel::ChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_disabled_channel_guild_id")
                            .from(GuildDisabledChannel::Table, GuildDisabledChannel::GuildId)
                            .to(GuildConfig::Table, GuildConfig::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_guild_disabled_channel_unique")
                    .table(GuildDisabledChannel::Table)
                    .col(GuildDisabledChannel::GuildId)
                    .col(GuildDisabledChannel::ChannelId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildDisabledChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildDisabledChannel {
    Table,
    Id,
    GuildId,
    ChannelId,
}
