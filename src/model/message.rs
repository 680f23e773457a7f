/// The user who sent a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: u64,
    pub name: String,
    /// Whether the account is automated; bot messages are never dispatched.
    pub bot: bool,
}

impl Author {
    /// Mention markup that pings this user.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

/// Where a message was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// A direct message with the bot.
    Direct,
    /// A channel belonging to a guild.
    Guild { guild_id: u64 },
}

/// A message received from the chat platform, immutable for the duration of dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub author: Author,
    pub channel_id: u64,
    pub origin: Origin,
    /// The message text exactly as sent.
    pub content: String,
    /// The message text with mentions rendered as human-readable names.
    pub clean_content: String,
    /// Whether the author holds the Manage Server permission in the message's guild.
    /// Always `false` for direct messages.
    pub can_manage_guild: bool,
}

impl InboundMessage {
    pub fn guild_id(&self) -> Option<u64> {
        match self.origin {
            Origin::Direct => None,
            Origin::Guild { guild_id } => Some(guild_id),
        }
    }
}

/// Identity of the bot account itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotUser {
    pub id: u64,
    pub name: String,
}

impl BotUser {
    /// Raw user-id mention, `<@id>`.
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    /// Member-scoped (nickname) mention, `<@!id>`.
    pub fn member_mention(&self) -> String {
        format!("<@!{}>", self.id)
    }

    /// How the platform renders a mention of the bot in clean text.
    pub fn clean_mention(&self) -> String {
        format!("@{}", self.name)
    }
}
