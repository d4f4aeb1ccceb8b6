//! Story factory for creating stories feed entries.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Factory for creating stories feed entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::story::StoryFactory;
///
/// let story = StoryFactory::new(start_ms)
///     .name("Cheerful Festival")
///     .event_type("cheerful_carnival")
///     .build();
/// ```
pub struct StoryFactory {
    id: u64,
    name: String,
    event_type: String,
    start_at: i64,
}

impl StoryFactory {
    /// Creates a new StoryFactory with default values.
    ///
    /// Defaults:
    /// - id: auto-incremented
    /// - name: `"Story {id}"`
    /// - eventType: `"marathon"`
    ///
    /// # Arguments
    /// - `start_at` - Start time in epoch milliseconds
    pub fn new(start_at: i64) -> Self {
        let id = next_id();
        Self {
            id,
            name: format!("Story {}", id),
            event_type: "marathon".to_string(),
            start_at,
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

    /// Sets the raw `eventType` label, e.g. `"cheerful_carnival"`.
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = event_type.into();
        self
    }

    /// Builds the feed entry.
    ///
    /// Includes a field the bot does not read, as the real feed does.
    pub fn build(self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "eventType": self.event_type,
            "startAt": self.start_at,
            "assetbundleName": format!("event_{}", self.id),
        })
    }
}

/// Creates a stories feed entry with default values.
pub fn create_story(start_at: i64) -> Value {
    StoryFactory::new(start_at).build()
}
