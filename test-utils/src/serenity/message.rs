//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Fields of a test message that tests usually care about.
#[derive(Debug, Clone)]
pub struct TestMessage {
    pub message_id: u64,
    pub channel_id: u64,
    /// `None` for a direct message.
    pub guild_id: Option<u64>,
    pub author_id: u64,
    pub author_name: String,
    pub author_bot: bool,
    pub content: String,
}

impl Default for TestMessage {
    fn default() -> Self {
        Self {
            message_id: 900000000000000001,
            channel_id: 200000000000000001,
            guild_id: Some(100000000000000001),
            author_id: 300000000000000001,
            author_name: "tester".to_string(),
            author_bot: false,
            content: String::new(),
        }
    }
}

/// Creates a test Serenity Message.
///
/// # Arguments
/// - `message` - Values to place in the message
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(message: TestMessage) -> Message {
    let mut value = serde_json::json!({
        "id": message.message_id.to_string(),
        "channel_id": message.channel_id.to_string(),
        "author": {
            "id": message.author_id.to_string(),
            "username": message.author_name,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": message.author_bot,
        },
        "content": message.content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    });

    if let Some(guild_id) = message.guild_id {
        value["guild_id"] = serde_json::Value::String(guild_id.to_string());
    }

    serde_json::from_value(value).expect("Failed to create test message - invalid JSON structure")
}
