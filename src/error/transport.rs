use serenity::http::HttpError;
use thiserror::Error;

use crate::error::command::ErrorKind;

/// HTTP status Discord answers with when an upload exceeds the size limit.
const PAYLOAD_TOO_LARGE: u16 = 413;

/// Failure reported by the chat transport when delivering a message.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The platform rejected the payload for being too large.
    #[error("Request entity too large")]
    EntityTooLarge,

    /// Any other Discord API error.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(Box<serenity::Error>),

    /// Failure raised by a non-Discord transport.
    #[error("{0}")]
    Other(String),
}

/// Maps serenity errors, pulling out the "entity too large" condition.
///
/// Discord signals oversized uploads with HTTP 413. Older gateways and proxies only put
/// the condition in the error text, so the text is checked as well.
impl From<serenity::Error> for TransportError {
    fn from(err: serenity::Error) -> Self {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            if response.status_code.as_u16() == PAYLOAD_TOO_LARGE {
                return Self::EntityTooLarge;
            }
        }

        if ErrorKind::classify(&err.to_string()) == ErrorKind::EntityTooLarge {
            return Self::EntityTooLarge;
        }

        Self::Discord(Box::new(err))
    }
}
