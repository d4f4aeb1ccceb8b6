//! Domain models for shows.
//!
//! A show is an in-game virtual live. One show can be performed several times, each
//! performance being a schedule entry with its own sequence number and start time.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Single performance of a show as it appears in the shows feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowScheduleRecord {
    pub seq: i64,
    pub start_at: i64,
    pub end_at: i64,
}

/// Show as it appears in the shows feed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub start_at: Option<i64>,
    pub end_at: i64,
    #[serde(default)]
    pub virtual_live_schedules: Vec<ShowScheduleRecord>,
}

/// A scheduled performance of a show.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowSchedule {
    /// Sequence number of the performance within its show.
    pub seq: i64,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

/// Show domain model.
#[derive(Debug, Clone, PartialEq)]
pub struct Show {
    /// Feed identifier of the show.
    ///
    /// Placeholder shows handed to every new player use high id bands, which is why
    /// shows are filtered by an id threshold before scheduling.
    pub id: i64,
    pub name: String,
    /// When the last performance ends.
    pub end_at: DateTime<Utc>,
    /// Performances in feed order.
    pub schedules: Vec<ShowSchedule>,
}

impl Show {
    /// Converts a feed record to the show domain model.
    ///
    /// Schedule entries with out-of-range timestamps are dropped individually.
    ///
    /// # Arguments
    /// - `record` - The record from the shows feed
    ///
    /// # Returns
    /// - `Some(Show)` - The converted show
    /// - `None` - The show's end timestamp is outside the representable range
    pub fn from_record(record: ShowRecord) -> Option<Self> {
        let end_at = DateTime::from_timestamp_millis(record.end_at)?;
        let schedules = record
            .virtual_live_schedules
            .into_iter()
            .filter_map(|schedule| {
                Some(ShowSchedule {
                    seq: schedule.seq,
                    start_at: DateTime::from_timestamp_millis(schedule.start_at)?,
                    end_at: DateTime::from_timestamp_millis(schedule.end_at)?,
                })
            })
            .collect();

        Some(Self {
            id: record.id,
            name: record.name,
            end_at,
            schedules,
        })
    }

    /// Reminder key for one of this show's performances.
    pub fn schedule_key(&self, schedule: &ShowSchedule) -> String {
        format!("{} #{}", self.name, schedule.seq)
    }
}
