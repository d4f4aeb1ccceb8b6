//! Domain models for stories.
//!
//! A story is an in-game timed event as published by the events feed. The feed record is
//! deserialized into `StoryRecord` and converted to the `Story` domain model, which carries
//! a proper UTC timestamp instead of epoch milliseconds.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Kind of a story as labelled by the events feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryEventType {
    Marathon,
    CheerfulCarnival,
    /// Any event type this bot does not distinguish.
    #[serde(other)]
    Other,
}

/// Story as it appears in the events feed.
///
/// Only the fields the reminder pipeline needs are declared; everything else in the feed is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryRecord {
    pub id: i64,
    pub name: String,
    pub event_type: StoryEventType,
    /// Start time in epoch milliseconds.
    pub start_at: i64,
}

/// Story domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Story {
    /// Feed identifier of the story.
    pub id: i64,
    /// Display name of the story.
    pub name: String,
    /// Story kind.
    pub event_type: StoryEventType,
    /// When the story starts.
    pub start_at: DateTime<Utc>,
}

impl Story {
    /// Converts a feed record to the story domain model.
    ///
    /// # Arguments
    /// - `record` - The record from the events feed
    ///
    /// # Returns
    /// - `Some(Story)` - The converted story
    /// - `None` - The start timestamp is outside the representable range
    pub fn from_record(record: StoryRecord) -> Option<Self> {
        let start_at = DateTime::from_timestamp_millis(record.start_at)?;

        Some(Self {
            id: record.id,
            name: record.name,
            event_type: record.event_type,
            start_at,
        })
    }
}
