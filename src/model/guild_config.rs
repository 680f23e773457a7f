use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use sea_orm::DbErr;

/// Lifecycle state of a guild's configuration record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildStatus {
    /// Record exists but was never completed; repaired on first use.
    Uninitialized,
    /// Normal, fully initialized configuration.
    Active,
    /// Administratively disabled. The record is read as-is and never repaired.
    Disabled,
}

impl GuildStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for GuildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GuildStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uninitialized" => Ok(Self::Uninitialized),
            "active" => Ok(Self::Active),
            "disabled" => Ok(Self::Disabled),
            other => Err(format!("Unknown guild status '{}'", other)),
        }
    }
}

/// Per-guild configuration as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfig {
    pub guild_id: u64,
    pub prefix: String,
    pub status: GuildStatus,
    /// Channels in which commands may not run.
    pub disabled_channels: HashSet<u64>,
}

impl GuildConfig {
    /// Whether the record must go through initialization/repair before its prefix is used.
    ///
    /// Administratively disabled guilds are never repaired, since repair would
    /// reactivate them.
    pub fn needs_repair(&self) -> bool {
        match self.status {
            GuildStatus::Uninitialized => true,
            GuildStatus::Active => self.prefix.is_empty(),
            GuildStatus::Disabled => false,
        }
    }

    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The guild configuration row
    /// - `channels` - Disabled channel rows belonging to the guild
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Successfully converted model
    /// - `Err(DbErr::Custom)` - An id failed to parse
    ///
    /// Status text that doesn't parse is read as `Uninitialized` so the row goes
    /// through repair instead of failing every lookup.
    pub fn from_entity(
        entity: entity::guild_config::Model,
        channels: Vec<entity::guild_disabled_channel::Model>,
    ) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        let status = entity.status.parse::<GuildStatus>().unwrap_or_else(|e| {
            tracing::warn!("Guild {}: {}; treating it as uninitialized", guild_id, e);
            GuildStatus::Uninitialized
        });

        let disabled_channels = channels
            .into_iter()
            .map(|c| {
                c.channel_id
                    .parse::<u64>()
                    .map_err(|e| DbErr::Custom(format!("Failed to parse channel_id: {}", e)))
            })
            .collect::<Result<HashSet<u64>, DbErr>>()?;

        Ok(Self {
            guild_id,
            prefix: entity.prefix,
            status,
            disabled_channels,
        })
    }
}
