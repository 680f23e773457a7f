//! The command dispatch pipeline.
//!
//! The [`dispatch::Dispatcher`] is invoked once per inbound message and sequences
//! candidate filtering, prefix resolution, parsing, the disabled-channel gate, registry
//! lookup, invocation and result rendering. Its collaborators are injected through the
//! [`storage::Storage`], [`transport::Transport`] and [`temp_storage::TempStorage`]
//! traits so each stage can be tested without Discord or a database.

pub mod cache;
pub mod dispatch;
pub mod parse;
pub mod prefix;
pub mod registry;
pub mod render;
pub mod storage;
pub mod temp_storage;
pub mod transport;

#[cfg(test)]
mod test;
