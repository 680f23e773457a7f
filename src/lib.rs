//! Prefix-command bot for Discord.
//!
//! Every inbound message passes through the [`service::dispatch::Dispatcher`], which
//! cheaply rejects unrelated traffic, resolves the guild's command prefix through a
//! cache, parses the command, invokes the registered handler and delivers its result.
//!
//! # Layout
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **Error Layer** (`error/`) - Application, transport and command error types
//! - **Model Layer** (`model/`) - Domain types shared by every layer
//! - **Data Layer** (`data/`) - SeaORM repositories
//! - **Service Layer** (`service/`) - The dispatch pipeline and its collaborator seams
//! - **Bot** (`bot/`) - Serenity event handling and the Discord transport
//! - **Commands** (`command/`) - Built-in command handlers
//! - **Startup** (`startup`) - Database, tracing and dispatcher initialization

pub mod bot;
pub mod command;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
