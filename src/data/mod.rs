//! Database repository layer.
//!
//! Repository structs wrap a borrowed `DatabaseConnection` and perform all queries,
//! inserts and updates for a single table. They return SeaORM entity models; conversion
//! to domain models happens in the service layer's `DatabaseStorage`.

pub mod command_usage;
pub mod disabled_channel;
pub mod guild_config;

pub use command_usage::CommandUsageRepository;
pub use disabled_channel::DisabledChannelRepository;
pub use guild_config::GuildConfigRepository;

#[cfg(test)]
mod test;
