//! Discord integration.
//!
//! Connects to the gateway, turns incoming serenity messages into
//! [`InboundMessage`](crate::model::message::InboundMessage) values for the dispatcher
//! and implements the dispatcher's [`Transport`](crate::service::transport::Transport)
//! on top of the event [`Context`](serenity::all::Context).
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel data for permission checks and the guild count
//! - `GUILD_MESSAGES` - Messages in guild channels
//! - `DIRECT_MESSAGES` - Messages sent to the bot directly
//! - `MESSAGE_CONTENT` - Message text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
pub mod transport;
