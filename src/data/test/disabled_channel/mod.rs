use crate::data::disabled_channel::DisabledChannelRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod disable;
mod enable;
mod get_by_guild_id;
