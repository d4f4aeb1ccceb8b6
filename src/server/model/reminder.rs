//! Domain models for scheduled reminders and the events they produce.

use chrono::{DateTime, Utc};

/// What a reminder announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderKind {
    Story,
    Show,
}

/// A reminder waiting to fire.
///
/// Created by the schedule computation, owned by the timer registry until it fires or is
/// cancelled by the next refresh.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledReminder {
    /// Registry key: the story name, or `"<show name> #<seq>"` for show performances.
    /// Unique within a batch; repeated names carry the feed id, e.g. `"Rerun [12]"`.
    pub key: String,
    /// When the timer fires.
    pub fire_at: DateTime<Utc>,
    pub kind: ReminderKind,
    /// Name shown to members.
    pub display_name: String,
    /// When the story or performance itself starts.
    pub start_at: DateTime<Utc>,
}

/// Domain event emitted when a reminder fires.
#[derive(Debug, Clone, PartialEq)]
pub enum ReminderEvent {
    StoryStart {
        name: String,
        start_at: DateTime<Utc>,
    },
    ShowStart {
        name: String,
        start_at: DateTime<Utc>,
    },
}

impl ReminderEvent {
    pub fn name(&self) -> &str {
        match self {
            Self::StoryStart { name, .. } | Self::ShowStart { name, .. } => name,
        }
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        match self {
            Self::StoryStart { start_at, .. } | Self::ShowStart { start_at, .. } => *start_at,
        }
    }
}

impl From<ScheduledReminder> for ReminderEvent {
    fn from(reminder: ScheduledReminder) -> Self {
        match reminder.kind {
            ReminderKind::Story => Self::StoryStart {
                name: reminder.display_name,
                start_at: reminder.start_at,
            },
            ReminderKind::Show => Self::ShowStart {
                name: reminder.display_name,
                start_at: reminder.start_at,
            },
        }
    }
}

/// Outcome of one dataset within a refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetStatus {
    /// Downloaded and parsed.
    Fresh,
    /// Download failed; the dataset was treated as empty.
    Unavailable,
    /// Downloaded but not parseable; the dataset was treated as empty.
    Malformed,
}

/// What a refresh cycle did.
///
/// Only logged. The on-demand refresh command intentionally does not surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    pub stories: DatasetStatus,
    pub shows: DatasetStatus,
    /// Story reminders armed by this cycle.
    pub stories_armed: usize,
    /// Show performance reminders armed by this cycle.
    pub shows_armed: usize,
}
