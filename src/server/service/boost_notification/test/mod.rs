use std::sync::{Arc, Mutex};

use serenity::async_trait;
use test_utils::factory::service_location::ServiceLocationFactory;

use crate::server::{
    data::service_location::ServiceLocationStore,
    error::AppError,
    service::{
        boost_notification::{boost_message, BoostNotificationService},
        reminder_notification::AnnouncementSink,
    },
};


#[derive(Default)]
struct RecordingSink {
    sent: Mutex<Vec<(u64, String)>>,
}

#[async_trait]
impl AnnouncementSink for RecordingSink {
    async fn send(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        self.sent.lock().unwrap().push((channel_id, content));
        Ok(())
    }
}

/// Service for guild 1 (channel 10, booster role 99) plus an unconfigured guild 2.
async fn service() -> (BoostNotificationService, Arc<RecordingSink>) {
    let locations = ServiceLocationStore::new("unused");
    locations
        .replace(vec![
            serde_json::from_value(
                ServiceLocationFactory::new()
                    .guild_id("1")
                    .io_channel_id("10")
                    .boost_notifier("99")
                    .build(),
            )
            .unwrap(),
            serde_json::from_value(ServiceLocationFactory::new().guild_id("2").build()).unwrap(),
        ])
        .await;
    let sink = Arc::new(RecordingSink::default());

    (BoostNotificationService::new(locations, sink.clone()), sink)
}
