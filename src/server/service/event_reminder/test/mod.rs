use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};
use serenity::async_trait;
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tokio::sync::mpsc;
use url::Url;

use crate::server::{
    data::resource::{FeedSource, ResourceFetcher},
    error::{resource::ResourceError, AppError},
    model::{
        reminder::{DatasetStatus, ReminderEvent, ReminderKind, ScheduledReminder},
        resource::FeedUrls,
        show::{Show, ShowSchedule},
        story::{Story, StoryEventType},
    },
    service::event_reminder::{
        listener::{ListenerSet, ReminderListener},
        schedule::{
            compute_reminder, ensure_unique_keys, show_reminders, story_reminders, LEAD_TIME,
        },
        timer::{FireCallback, TimerRegistry},
        Clock, EventReminderService,
    },
};

mod compute_reminder;
mod show_reminders;

const STORIES_URL: &str = "https://feeds.test/events.json";
const SHOWS_URL: &str = "https://feeds.test/virtualLives.json";

/// Fixed wall-clock origin every test's virtual clock starts from.
fn origin() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_689_600, 0).unwrap()
}

fn ms(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

/// Clock starting at `base` and moving with tokio's (possibly paused) clock.
fn virtual_clock(base: DateTime<Utc>) -> Clock {
    let started = tokio::time::Instant::now();
    Arc::new(move || base + Duration::from_std(started.elapsed()).unwrap_or(Duration::zero()))
}

/// Lets spawned timer and listener tasks run to completion.
async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

fn reminder(key: &str, fire_at: DateTime<Utc>) -> ScheduledReminder {
    ScheduledReminder {
        key: key.to_string(),
        fire_at,
        kind: ReminderKind::Story,
        display_name: key.to_string(),
        start_at: fire_at + LEAD_TIME,
    }
}

/// Fire callback recording the keys of fired reminders.
fn recording_callback() -> (FireCallback, Arc<Mutex<Vec<String>>>) {
    let fired = Arc::new(Mutex::new(Vec::new()));
    let sink = fired.clone();
    let callback: FireCallback = Arc::new(move |reminder: ScheduledReminder| {
        sink.lock().unwrap().push(reminder.key);
    });

    (callback, fired)
}

/// Feed source whose responses can be changed between refreshes.
///
/// A URL without a body answers with HTTP 503.
struct ScriptedFeedSource {
    responses: Mutex<HashMap<String, Option<Vec<u8>>>>,
}

impl ScriptedFeedSource {
    fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
        }
    }

    fn set(&self, url: &str, body: Option<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), body);
    }
}

#[async_trait]
impl FeedSource for ScriptedFeedSource {
    async fn download(&self, url: &Url) -> Result<Vec<u8>, ResourceError> {
        match self.responses.lock().unwrap().get(url.as_str()) {
            Some(Some(body)) => Ok(body.clone()),
            _ => Err(ResourceError::Status {
                url: url.to_string(),
                status: 503,
            }),
        }
    }
}

/// Listener forwarding every event into a channel.
struct RecordingListener {
    events: mpsc::UnboundedSender<ReminderEvent>,
}

#[async_trait]
impl ReminderListener for RecordingListener {
    async fn on_reminder(&self, event: &ReminderEvent) -> Result<(), AppError> {
        let _ = self.events.send(event.clone());
        Ok(())
    }
}

fn recording_listener() -> (Arc<RecordingListener>, mpsc::UnboundedReceiver<ReminderEvent>) {
    let (events, rx) = mpsc::unbounded_channel();
    (Arc::new(RecordingListener { events }), rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<ReminderEvent>) -> Vec<ReminderEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

/// Reminder service wired to a scripted feed source and a virtual clock.
struct Harness {
    /// Keeps the resources directory alive for the test's duration
    _test: TestContext,
    source: Arc<ScriptedFeedSource>,
    service: Arc<EventReminderService>,
    events: mpsc::UnboundedReceiver<ReminderEvent>,
    /// Wall-clock time at harness creation
    now: DateTime<Utc>,
}

impl Harness {
    fn new() -> Self {
        let test = TestBuilder::new().build().unwrap();
        let source = Arc::new(ScriptedFeedSource::new());
        let fetcher = ResourceFetcher::new(
            source.clone(),
            FeedUrls {
                stories: Url::parse(STORIES_URL).unwrap(),
                shows: Url::parse(SHOWS_URL).unwrap(),
            },
            test.resources_dir(),
            std::time::Duration::from_secs(30),
        );
        let now = origin();
        let service = Arc::new(EventReminderService::with_clock(
            fetcher,
            1000,
            virtual_clock(now),
        ));
        let (listener, events) = recording_listener();
        service.add_listener(listener);

        Self {
            _test: test,
            source,
            service,
            events,
            now,
        }
    }

    fn set_stories(&self, stories: Vec<serde_json::Value>) {
        self.source
            .set(STORIES_URL, Some(factory::helpers::feed_bytes(stories)));
    }

    fn set_shows(&self, shows: Vec<serde_json::Value>) {
        self.source
            .set(SHOWS_URL, Some(factory::helpers::feed_bytes(shows)));
    }

    /// Advances virtual time by `millis` and lets fired timers deliver their events.
    async fn advance_ms(&mut self, millis: u64) -> Vec<ReminderEvent> {
        tokio::time::advance(std::time::Duration::from_millis(millis)).await;
        settle().await;
        drain(&mut self.events)
    }
}
