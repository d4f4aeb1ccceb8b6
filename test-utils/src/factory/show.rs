//! Show factory for creating shows feed entries.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Default length of a single performance, in milliseconds.
const PERFORMANCE_LENGTH_MS: i64 = 30 * 60 * 1000;

/// Factory for creating shows feed entries with customizable fields.
///
/// The show's `startAt`/`endAt` span its schedules unless set explicitly.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::show::ShowFactory;
///
/// let show = ShowFactory::new()
///     .name("Live A")
///     .schedule(1, first_ms)
///     .schedule(2, second_ms)
///     .build();
/// ```
pub struct ShowFactory {
    id: u64,
    name: String,
    end_at: Option<i64>,
    schedules: Vec<(i64, i64)>,
}

impl ShowFactory {
    /// Creates a new ShowFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented, below the default placeholder threshold of 1000
    /// - name: `"Show {id}"`
    /// - no schedules
    pub fn new() -> Self {
        let id = next_id() % 1000;
        Self {
            id,
            name: format!("Show {}", id),
            end_at: None,
            schedules: Vec::new(),
        }
    }

    pub fn id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the show's overall end time in epoch milliseconds.
    pub fn end_at(mut self, end_at: i64) -> Self {
        self.end_at = Some(end_at);
        self
    }

    /// Adds a performance starting at `start_at` epoch milliseconds.
    pub fn schedule(mut self, seq: i64, start_at: i64) -> Self {
        self.schedules.push((seq, start_at));
        self
    }

    /// Builds the feed entry.
    pub fn build(self) -> Value {
        let schedules: Vec<Value> = self
            .schedules
            .iter()
            .map(|(seq, start_at)| {
                json!({
                    "virtualLiveId": self.id,
                    "seq": seq,
                    "startAt": start_at,
                    "endAt": start_at + PERFORMANCE_LENGTH_MS,
                })
            })
            .collect();

        let start_at = self.schedules.iter().map(|(_, start)| *start).min();
        let end_at = self.end_at.unwrap_or_else(|| {
            self.schedules
                .iter()
                .map(|(_, start)| start + PERFORMANCE_LENGTH_MS)
                .max()
                .unwrap_or(0)
        });

        json!({
            "id": self.id,
            "name": self.name,
            "startAt": start_at.unwrap_or(0),
            "endAt": end_at,
            "virtualLiveSchedules": schedules,
        })
    }
}

impl Default for ShowFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a shows feed entry with a single performance.
pub fn create_show(start_at: i64) -> Value {
    ShowFactory::new().schedule(1, start_at).build()
}
