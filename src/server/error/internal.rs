use std::num::ParseIntError;
use thiserror::Error;

/// Unexpected states pointing at a bug or at malformed configuration data.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A snowflake stored as a string could not be parsed.
    ///
    /// Guild, channel and role IDs are kept as strings in service location files and only
    /// parsed when used.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A snowflake string parsed to zero, which Discord never assigns.
    #[error("ID '{value}' is zero, which is not a valid Discord ID")]
    ZeroId { value: String },

    /// The current time could not be represented as a Discord timestamp for the status embed.
    #[error("Failed to convert Unix timestamp {timestamp} to Discord timestamp: {reason}")]
    InvalidDiscordTimestamp { timestamp: i64, reason: String },

    /// Two reminders with the same key were armed without an intervening clear.
    #[error("Reminder key '{key}' was armed twice in the same batch")]
    DuplicateReminderKey { key: String },
}
