//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test rows with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let config = factory::create_guild_config(&db).await?;
//!
//!     // Create with disabled channels
//!     let config = factory::helpers::create_guild_with_disabled_channels(&db, &["1", "2"]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Create guild configuration rows
//! - `disabled_channel` - Create disabled channel rows
//! - `command_usage` - Create command usage counters
//! - `helpers` - ID generation and combined setups

pub mod command_usage;
pub mod disabled_channel;
pub mod guild_config;
pub mod helpers;

pub use command_usage::create_command_usage;
pub use disabled_channel::create_disabled_channel;
pub use guild_config::create_guild_config;
