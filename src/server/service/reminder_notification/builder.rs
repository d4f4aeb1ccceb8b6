//! Announcement rendering.
//!
//! Pure functions turning a reminder event and a guild's service location into the message
//! to post. Kept free of Discord I/O so rendering can be tested on its own.

use chrono::{DateTime, Utc};

use crate::server::{
    error::AppError,
    model::{
        reminder::ReminderEvent,
        service_location::{
            hour_bucket, PingRole, ServiceLocation, DEFAULT_SHOW_TEMPLATE, DEFAULT_STORY_TEMPLATE,
        },
    },
};

/// A rendered announcement for one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub guild_id: u64,
    pub channel_id: u64,
    pub content: String,
}

/// Builds the announcement of `event` for one guild.
///
/// # Arguments
/// - `location` - The guild's service location
/// - `event` - The fired reminder
///
/// # Returns
/// - `Ok(Some(announcement))` - Message to post
/// - `Ok(None)` - The guild has the event reminder module disabled
/// - `Err(AppError::InternalErr(ParseStringId))` - A configured snowflake is invalid
pub fn build_announcement(
    location: &ServiceLocation,
    event: &ReminderEvent,
) -> Result<Option<Announcement>, AppError> {
    let Some(module) = &location.modules.event_reminder else {
        return Ok(None);
    };
    let Some(channel_id) = location.event_reminder_channel_id()? else {
        return Ok(None);
    };
    let guild_id = location.guild_id()?;

    let (ping_role, template) = match event {
        ReminderEvent::StoryStart { .. } => (
            &module.story_ping_role_id,
            module
                .story_message_template
                .as_deref()
                .unwrap_or(DEFAULT_STORY_TEMPLATE),
        ),
        ReminderEvent::ShowStart { .. } => (
            &module.show_ping_role_id,
            module
                .show_message_template
                .as_deref()
                .unwrap_or(DEFAULT_SHOW_TEMPLATE),
        ),
    };

    let ping = build_ping(ping_role, guild_id, event.start_at())?;
    let content = render_template(template, event.name(), event.start_at(), &ping);

    Ok(Some(Announcement {
        guild_id,
        channel_id,
        content,
    }))
}

/// Resolves the mention for an announcement.
///
/// Returns an empty string, after logging a warning, when no role is configured for the
/// hour bucket of `start_at`.
fn build_ping(
    ping_role: &PingRole,
    guild_id: u64,
    start_at: DateTime<Utc>,
) -> Result<String, AppError> {
    match ping_role.resolve(start_at)? {
        Some(role_id) => Ok(role_mention(role_id, guild_id)),
        None => {
            tracing::warn!(
                "No ping role configured for bucket {} in guild {}, announcing without ping",
                hour_bucket(start_at),
                guild_id
            );
            Ok(String::new())
        }
    }
}

/// Mention markup for a role.
///
/// The @everyone role has the same ID as its guild and must be written as `@everyone`.
pub fn role_mention(role_id: u64, guild_id: u64) -> String {
    if role_id == guild_id {
        "@everyone".to_string()
    } else {
        format!("<@&{}>", role_id)
    }
}

/// Fills in an announcement template.
///
/// Replaces `{start}` with the start as unix seconds (for Discord `<t:...>` markup), `{ping}`
/// with the mention and `{name}` with the event name. Trailing whitespace left by an empty
/// ping is trimmed.
pub fn render_template(template: &str, name: &str, start_at: DateTime<Utc>, ping: &str) -> String {
    // {name} last so a name containing a placeholder is left as written
    template
        .replace("{start}", &start_at.timestamp().to_string())
        .replace("{ping}", ping)
        .replace("{name}", name)
        .trim_end()
        .to_string()
}
