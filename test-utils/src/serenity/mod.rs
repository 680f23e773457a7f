//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating what
//! Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_message;
//!
//! let message = create_test_message(TestMessage {
//!     guild_id: Some(100),
//!     content: "&ping".to_string(),
//!     ..Default::default()
//! });
//! ```

pub mod message;

pub use message::{create_test_message, TestMessage};
