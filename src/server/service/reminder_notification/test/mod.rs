use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde_json::json;
use serenity::async_trait;
use test_utils::factory::service_location::ServiceLocationFactory;

use crate::server::{
    data::service_location::ServiceLocationStore,
    error::AppError,
    model::{reminder::ReminderEvent, service_location::ServiceLocation},
    service::{
        event_reminder::listener::ReminderListener,
        reminder_notification::{
            builder::{build_announcement, render_template, role_mention},
            AnnouncementSink, NotificationDispatcher,
        },
    },
};


/// 2025-01-01 13:00:00 UTC
fn start_at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_735_736_400, 0).unwrap()
}

fn story_event() -> ReminderEvent {
    ReminderEvent::StoryStart {
        name: "Foo".to_string(),
        start_at: start_at(),
    }
}

fn show_event() -> ReminderEvent {
    ReminderEvent::ShowStart {
        name: "Bar".to_string(),
        start_at: start_at(),
    }
}

fn location(document: serde_json::Value) -> ServiceLocation {
    serde_json::from_value(document).unwrap()
}

/// Sink recording every message, failing for one channel.
struct RecordingSink {
    sent: Mutex<Vec<(u64, String)>>,
    failing_channel: Option<u64>,
}

impl RecordingSink {
    fn new(failing_channel: Option<u64>) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            failing_channel,
        })
    }

    fn sent(&self) -> Vec<(u64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnnouncementSink for RecordingSink {
    async fn send(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        if self.failing_channel == Some(channel_id) {
            return Err(AppError::NotFound(format!("Unknown channel {}", channel_id)));
        }
        self.sent.lock().unwrap().push((channel_id, content));
        Ok(())
    }
}
