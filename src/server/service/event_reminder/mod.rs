//! Event reminder service.
//!
//! This module provides the `EventReminderService`, which keeps one reminder timer armed per
//! upcoming story and show performance. Each refresh downloads both feeds, computes fire
//! times and replaces the whole batch of armed timers at once. When a timer fires, the
//! service emits a `ReminderEvent` to every registered `ReminderListener`.
//!
//! The service is organized into separate modules by concern:
//! - `schedule` - Fire-time computation and feed filtering
//! - `timer` - The registry of armed timers
//! - `listener` - Listener trait and event fan-out

pub mod listener;
pub mod schedule;
pub mod timer;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tokio_cron_scheduler::JobScheduler;

use crate::server::{
    data::resource::ResourceFetcher,
    error::{resource::ResourceError, AppError},
    model::{
        reminder::{DatasetStatus, RefreshSummary, ReminderEvent, ScheduledReminder},
        resource::Dataset,
        show::{Show, ShowRecord},
        story::{Story, StoryRecord},
    },
    scheduler,
};

use self::{
    listener::{ListenerSet, ReminderListener},
    timer::{FireCallback, TimerRegistry},
};

/// Source of the current time.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Service keeping story and show reminders armed.
pub struct EventReminderService {
    /// Downloads and persists the feeds
    fetcher: ResourceFetcher,
    /// Armed timers of the current batch
    timers: TimerRegistry,
    /// Receivers of fired reminders
    listeners: ListenerSet,
    /// Shows with an id at or above this are never scheduled
    show_id_threshold: i64,
    /// Serializes refreshes
    refresh_lock: Mutex<()>,
    clock: Clock,
}

impl EventReminderService {
    /// Creates a new EventReminderService reading the system clock.
    ///
    /// # Arguments
    /// - `fetcher` - Fetcher for the stories and shows feeds
    /// - `show_id_threshold` - Shows with an id at or above this are skipped
    ///
    /// # Returns
    /// - `EventReminderService` - New service with no reminders armed
    pub fn new(fetcher: ResourceFetcher, show_id_threshold: i64) -> Self {
        Self::with_clock(fetcher, show_id_threshold, Arc::new(Utc::now))
    }

    /// Creates a new EventReminderService reading time from `clock`.
    pub fn with_clock(fetcher: ResourceFetcher, show_id_threshold: i64, clock: Clock) -> Self {
        Self {
            fetcher,
            timers: TimerRegistry::new(),
            listeners: ListenerSet::default(),
            show_id_threshold,
            refresh_lock: Mutex::new(()),
            clock,
        }
    }

    /// Registers a listener for reminder events fired from now on.
    pub fn add_listener(&self, listener: Arc<dyn ReminderListener>) {
        self.listeners.add(listener);
    }

    /// Pending reminders ordered by fire time.
    pub fn active_reminders(&self) -> Vec<ScheduledReminder> {
        self.timers.list_active()
    }

    /// Downloads both feeds and re-arms every reminder.
    ///
    /// Only one refresh runs at a time; concurrent callers wait for the running one and then
    /// perform their own. A feed that fails to download or parse is treated as empty for this
    /// cycle, which disarms its reminders. The previous batch is always replaced in full.
    ///
    /// # Returns
    /// - `RefreshSummary` - Per-dataset outcome and the number of reminders armed
    pub async fn refresh(&self) -> RefreshSummary {
        let _guard = self.refresh_lock.lock().await;

        let fetched = self.fetcher.fetch().await;
        let now = (self.clock)();

        let (story_records, stories_status) =
            parse_dataset::<StoryRecord>(Dataset::Stories, fetched.stories);
        let (show_records, shows_status) =
            parse_dataset::<ShowRecord>(Dataset::Shows, fetched.shows);

        let stories: Vec<Story> = story_records
            .into_iter()
            .filter_map(Story::from_record)
            .collect();
        let shows: Vec<Show> = show_records
            .into_iter()
            .filter_map(Show::from_record)
            .collect();

        let mut reminders = schedule::story_reminders(now, &stories);
        let stories_armed = reminders.len();
        reminders.extend(schedule::show_reminders(
            now,
            &shows,
            self.show_id_threshold,
        ));
        let shows_armed = reminders.len() - stories_armed;
        schedule::ensure_unique_keys(&mut reminders);

        self.timers.arm_batch(reminders, now, self.fire_callback());

        let summary = RefreshSummary {
            stories: stories_status,
            shows: shows_status,
            stories_armed,
            shows_armed,
        };

        tracing::info!(
            "Refreshed reminders: stories {:?} ({} armed), shows {:?} ({} armed)",
            summary.stories,
            summary.stories_armed,
            summary.shows,
            summary.shows_armed
        );

        summary
    }

    /// Runs a refresh now and then every `interval`.
    ///
    /// # Returns
    /// - `Ok(JobScheduler)` - The running scheduler; keep it alive for refreshes to continue
    /// - `Err(AppError::SchedulerErr)` - Failed to create or start the scheduler
    pub async fn start(self: &Arc<Self>, interval: Duration) -> Result<JobScheduler, AppError> {
        self.refresh().await;

        scheduler::event_refresh::start_scheduler(self.clone(), interval).await
    }

    fn fire_callback(&self) -> FireCallback {
        let listeners = self.listeners.clone();

        Arc::new(move |reminder: ScheduledReminder| {
            tracing::info!("Reminder '{}' fired", reminder.key);
            listeners.emit(ReminderEvent::from(reminder));
        })
    }
}

/// Parses a downloaded feed, treating a missing or malformed document as empty.
fn parse_dataset<T: DeserializeOwned>(
    dataset: Dataset,
    bytes: Option<Vec<u8>>,
) -> (Vec<T>, DatasetStatus) {
    let Some(bytes) = bytes else {
        return (Vec::new(), DatasetStatus::Unavailable);
    };

    match serde_json::from_slice::<Vec<T>>(&bytes) {
        Ok(records) => (records, DatasetStatus::Fresh),
        Err(source) => {
            tracing::error!("{}", ResourceError::Parse { dataset, source });
            (Vec::new(), DatasetStatus::Malformed)
        }
    }
}

#[cfg(test)]
mod test;
