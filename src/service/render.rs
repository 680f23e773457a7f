//! Turns a handler's [`CommandResult`] into the message sent back to the origin channel.

use std::time::Duration;

use rand::Rng;

use crate::{
    error::command::CommandError,
    model::{
        command::{CommandResult, Embed, FilePayload},
        message::Author,
        outbound::OutboundMessage,
    },
    service::temp_storage::TempStorage,
};

/// Largest file sent as a direct attachment.
pub const MAX_ATTACHMENT_BYTES: usize = 8_388_119;

/// Invocations at least this slow mention the invoker so the late reply is noticed.
pub const SLOW_RESPONSE_THRESHOLD: Duration = Duration::from_millis(180_000);

const OVERFLOW_EMBED_COLOR: u32 = 0xFF0000;
const OVERFLOW_TITLE: &str = "Here's your image!";
const OVERFLOW_FOOTER: &str =
    "The result image was more than 8MB in size, so it was uploaded to an external site instead.";

const TEMP_NAME_LENGTH: usize = 13;
const TEMP_NAME_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub struct ResultRenderer<'a> {
    temp_storage: Option<&'a dyn TempStorage>,
}

impl<'a> ResultRenderer<'a> {
    pub fn new(temp_storage: Option<&'a dyn TempStorage>) -> Self {
        Self { temp_storage }
    }

    /// Builds the outbound message for a command result.
    ///
    /// # Arguments
    /// - `result` - Value returned by the handler
    /// - `invoker` - Author of the command message
    /// - `elapsed` - Time the handler took to produce `result`
    ///
    /// # Returns
    /// - `Ok(Some(OutboundMessage))` - Message to send to the origin channel
    /// - `Ok(None)` - The handler produced nothing to send
    /// - `Err(CommandError)` - Writing an oversized file to temp storage failed
    pub async fn render(
        &self,
        result: CommandResult,
        invoker: &Author,
        elapsed: Duration,
    ) -> Result<Option<OutboundMessage>, CommandError> {
        let slow_mention = (elapsed >= SLOW_RESPONSE_THRESHOLD).then(|| invoker.mention());

        let message = match result {
            CommandResult::Text(text) => OutboundMessage::text(text),
            CommandResult::Embed(embed) => OutboundMessage::embed(embed),
            CommandResult::File(payload) => match self.temp_storage {
                Some(temp_storage) if payload.bytes.len() > MAX_ATTACHMENT_BYTES => {
                    render_overflow(temp_storage, payload, slow_mention).await?
                }
                _ => render_attachment(payload, slow_mention),
            },
            CommandResult::Empty => return Ok(None),
        };

        Ok(Some(message))
    }
}

async fn render_overflow(
    temp_storage: &dyn TempStorage,
    payload: FilePayload,
    slow_mention: Option<String>,
) -> Result<OutboundMessage, CommandError> {
    let filename = random_filename(&payload.filename);
    let url = temp_storage
        .write_temp_file(&payload.bytes, &filename)
        .await?;

    tracing::debug!(
        "Uploaded {} byte result to temp storage as {}",
        payload.bytes.len(),
        filename
    );

    let embed = Embed::new()
        .color(OVERFLOW_EMBED_COLOR)
        .title(OVERFLOW_TITLE)
        .url(url.clone())
        .image(url)
        .footer(OVERFLOW_FOOTER);

    Ok(OutboundMessage::embed(embed).with_content(slow_mention))
}

fn render_attachment(payload: FilePayload, slow_mention: Option<String>) -> OutboundMessage {
    let content = payload.caption.or(slow_mention);

    OutboundMessage::default()
        .with_content(content)
        .with_attachment(payload.filename, payload.bytes)
}

/// Generates a random base-36 file name keeping the extension of `original`.
fn random_filename(original: &str) -> String {
    let mut rng = rand::rng();
    let stem: String = (0..TEMP_NAME_LENGTH)
        .map(|_| TEMP_NAME_ALPHABET[rng.random_range(0..TEMP_NAME_ALPHABET.len())] as char)
        .collect();

    match original.rsplit_once('.') {
        Some((_, extension)) if !extension.is_empty() => format!("{}.{}", stem, extension),
        _ => stem,
    }
}
