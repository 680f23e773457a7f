//! Domain models shared by the dispatch pipeline, the data layer and the bot glue.
//!
//! These types are independent of both the database entities and serenity's model so the
//! pipeline can be driven by any transport and storage implementation.

pub mod command;
pub mod guild_config;
pub mod message;
pub mod outbound;
