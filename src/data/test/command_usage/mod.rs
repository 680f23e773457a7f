use crate::data::command_usage::CommandUsageRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod get_count;
mod increment;
