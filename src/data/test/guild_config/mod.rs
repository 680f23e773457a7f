use crate::data::guild_config::GuildConfigRepository;
use crate::model::guild_config::GuildStatus;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod initialize_or_repair;
mod update_prefix;
