//! Failures raised while a command runs or while its result is delivered.
//!
//! Every failure is reduced to an [`ErrorKind`]. Three kinds are expected operational
//! conditions that get a dedicated reply; everything else is `Unclassified` and is logged
//! and reported to the invoker with the error attached.

use thiserror::Error;

use crate::error::{transport::TransportError, AppError};

/// Classification of a command failure, used to choose the reply sent to the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The result was too large for the platform to accept.
    EntityTooLarge,
    /// An upstream processing API did not answer in time.
    UpstreamTimeout,
    /// Downloading a user-supplied file did not finish in time.
    DownloadTimeout,
    /// Anything else.
    Unclassified,
}

impl ErrorKind {
    /// Classifies free-form error text.
    ///
    /// Collaborators that only surface a message string (HTTP clients, image workers)
    /// are mapped through these rules. Matching is case-sensitive and ordered:
    /// "UDP timed out" must win over the plainer "Timed out".
    pub fn classify(text: &str) -> Self {
        if text.contains("Request entity too large") {
            Self::EntityTooLarge
        } else if text.contains("UDP timed out") {
            Self::UpstreamTimeout
        } else if text.contains("Timed out") {
            Self::DownloadTimeout
        } else {
            Self::Unclassified
        }
    }
}

/// Error returned by command handlers and by the rendering of their results.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The produced file was rejected as too large.
    #[error("Request entity too large")]
    EntityTooLarge,

    /// The image API did not respond before its deadline.
    #[error("UDP timed out")]
    UpstreamTimeout,

    /// A user-supplied image could not be downloaded before its deadline.
    #[error("Timed out")]
    DownloadTimeout,

    /// Storage or other application failure.
    #[error(transparent)]
    App(#[from] AppError),

    /// Delivery failure reported by the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Free-form failure reported by a handler.
    #[error("{0}")]
    Other(String),
}

impl CommandError {
    /// Returns the classification used to pick the reply.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EntityTooLarge | Self::Transport(TransportError::EntityTooLarge) => {
                ErrorKind::EntityTooLarge
            }
            Self::UpstreamTimeout => ErrorKind::UpstreamTimeout,
            Self::DownloadTimeout => ErrorKind::DownloadTimeout,
            Self::Transport(_) | Self::Other(_) => ErrorKind::classify(&self.to_string()),
            Self::App(_) => ErrorKind::Unclassified,
        }
    }
}

impl From<sea_orm::DbErr> for CommandError {
    fn from(err: sea_orm::DbErr) -> Self {
        CommandError::App(AppError::DbErr(err))
    }
}
