//! Domain models for service locations.
//!
//! A service location is the per-guild configuration bundle: which channel the bot talks in,
//! which roles may use its commands, and the settings of each optional module. One JSON file
//! per guild is loaded from the service location directory. Snowflakes are stored as strings,
//! the way Discord serializes them, and parsed to `u64` at use.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// Default announcement for a story reminder.
pub const DEFAULT_STORY_TEMPLATE: &str =
    "# Event Starting <t:{start}:R>!\n\n## Event _{name}_ will start at <t:{start}:f>.\n\n{ping}";

/// Default announcement for a show reminder.
pub const DEFAULT_SHOW_TEMPLATE: &str =
    "# Virtual Live Starting <t:{start}:R>!\n\n## _{name}_ will start at <t:{start}:f>.\n\n{ping}";

/// Per-guild configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLocation {
    pub guild_id: String,
    /// Default channel for everything the bot posts in this guild.
    pub io_channel_id: String,
    /// Members holding any of these roles may use the bot's commands.
    #[serde(default)]
    pub command_access_role_ids: Vec<String>,
    #[serde(default)]
    pub modules: Modules,
}

/// Optional feature modules of a service location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_reminder: Option<EventReminderModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost_notifier: Option<BoostNotifierModule>,
}

/// Settings for story and show announcements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventReminderModule {
    /// Overrides the service location's channel for announcements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_channel_id: Option<String>,
    pub story_ping_role_id: PingRole,
    pub show_ping_role_id: PingRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_message_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_message_template: Option<String>,
}

/// Settings for boost announcements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoostNotifierModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_channel_id: Option<String>,
    /// The role Discord grants to server boosters.
    pub boost_role_id: String,
}

/// Role to mention with an announcement.
///
/// Either a single role, or one role per UTC hour bucket (`"UTC01"` .. `"UTC21"`), picked by
/// the hour the announced performance starts at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PingRole {
    Fixed(String),
    ByHourBucket(BTreeMap<String, String>),
}

impl PingRole {
    /// Resolves the role to mention for something starting at `start_at`.
    ///
    /// # Returns
    /// - `Ok(Some(role_id))` - Role to mention
    /// - `Ok(None)` - No role configured for the hour bucket of `start_at`
    /// - `Err(AppError::InternalErr(ParseStringId))` - Configured role ID is not a snowflake
    pub fn resolve(&self, start_at: DateTime<Utc>) -> Result<Option<u64>, AppError> {
        match self {
            Self::Fixed(role_id) => Ok(Some(parse_u64_from_string(role_id.clone())?)),
            Self::ByHourBucket(buckets) => match buckets.get(&hour_bucket(start_at)) {
                Some(role_id) => Ok(Some(parse_u64_from_string(role_id.clone())?)),
                None => Ok(None),
            },
        }
    }
}

/// Hour bucket key for a point in time, e.g. `"UTC09"`.
pub fn hour_bucket(at: DateTime<Utc>) -> String {
    format!("UTC{:02}", at.hour())
}

impl ServiceLocation {
    pub fn guild_id(&self) -> Result<u64, AppError> {
        parse_u64_from_string(self.guild_id.clone())
    }

    /// Channel for story and show announcements, if the module is enabled.
    pub fn event_reminder_channel_id(&self) -> Result<Option<u64>, AppError> {
        let Some(module) = &self.modules.event_reminder else {
            return Ok(None);
        };
        let channel_id = module
            .io_channel_id
            .clone()
            .unwrap_or_else(|| self.io_channel_id.clone());

        Ok(Some(parse_u64_from_string(channel_id)?))
    }

    /// Channel for boost announcements, if the module is enabled.
    pub fn boost_notifier_channel_id(&self) -> Result<Option<u64>, AppError> {
        let Some(module) = &self.modules.boost_notifier else {
            return Ok(None);
        };
        let channel_id = module
            .io_channel_id
            .clone()
            .unwrap_or_else(|| self.io_channel_id.clone());

        Ok(Some(parse_u64_from_string(channel_id)?))
    }

    /// Checks whether a member holding `member_role_ids` may use the bot's commands.
    ///
    /// Unparseable configured role IDs never match.
    pub fn grants_command_access(&self, member_role_ids: &[u64]) -> bool {
        self.command_access_role_ids
            .iter()
            .filter_map(|role_id| role_id.parse::<u64>().ok())
            .any(|role_id| member_role_ids.contains(&role_id))
    }
}
