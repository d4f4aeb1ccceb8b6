mod server;

use std::sync::Arc;

use crate::server::{
    bot,
    config::Config,
    data::{
        resource::{HttpFeedSource, ResourceFetcher},
        service_location::ServiceLocationStore,
    },
    error::AppError,
    service::{
        event_reminder::EventReminderService,
        reminder_notification::{DiscordAnnouncementSink, NotificationDispatcher},
    },
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    startup::init_tracing(&config)?;

    tracing::info!("Starting up");

    let locations = ServiceLocationStore::new(&config.service_locations_dir);
    let failed = locations.reload().await?;
    if !failed.is_empty() {
        tracing::warn!(
            "{} service location file(s) failed to load and were skipped",
            failed.len()
        );
    }

    let http_client = startup::setup_reqwest_client(&config)?;
    let fetcher = ResourceFetcher::new(
        Arc::new(HttpFeedSource::new(http_client)),
        config.feed_urls.clone(),
        &config.resources_dir,
        config.download_timeout,
    );
    let reminder = Arc::new(EventReminderService::new(
        fetcher,
        config.show_id_threshold,
    ));

    let state = AppState::new(reminder.clone(), locations.clone());
    let (bot_client, discord_http) = bot::start::init_bot(&config, state).await?;

    reminder.add_listener(Arc::new(NotificationDispatcher::new(
        locations,
        Arc::new(DiscordAnnouncementSink::new(discord_http)),
    )));

    // Keep the scheduler alive for as long as the bot runs
    let _scheduler = reminder.start(config.refresh_interval).await?;

    bot::start::start_bot(bot_client).await
}
