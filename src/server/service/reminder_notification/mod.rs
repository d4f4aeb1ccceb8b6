//! Reminder notification service.
//!
//! This module provides the `NotificationDispatcher`, the reminder listener that announces
//! fired reminders. For every serviced guild with the event reminder module enabled it
//! renders the story or show template and posts it to the guild's announcement channel.
//! Messages leave through the `AnnouncementSink` trait; `DiscordAnnouncementSink` posts them
//! with the bot's HTTP client.

pub mod builder;

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateMessage},
    async_trait,
    http::Http,
};

use crate::server::{
    data::service_location::ServiceLocationStore,
    error::AppError,
    model::reminder::ReminderEvent,
    service::event_reminder::listener::ReminderListener,
};

use self::builder::build_announcement;

/// Destination for rendered announcements.
#[async_trait]
pub trait AnnouncementSink: Send + Sync {
    /// Posts `content` to a channel.
    async fn send(&self, channel_id: u64, content: String) -> Result<(), AppError>;
}

/// Posts announcements through the Discord HTTP API.
pub struct DiscordAnnouncementSink {
    http: Arc<Http>,
}

impl DiscordAnnouncementSink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl AnnouncementSink for DiscordAnnouncementSink {
    async fn send(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        let message = CreateMessage::new().content(content);
        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        Ok(())
    }
}

/// Announces fired reminders in every serviced guild.
pub struct NotificationDispatcher {
    /// Service locations, read at announcement time so reloads apply immediately
    locations: ServiceLocationStore,
    sink: Arc<dyn AnnouncementSink>,
}

impl NotificationDispatcher {
    /// Creates a new NotificationDispatcher instance.
    ///
    /// # Arguments
    /// - `locations` - Store of the guilds to announce in
    /// - `sink` - Where rendered announcements are sent
    pub fn new(locations: ServiceLocationStore, sink: Arc<dyn AnnouncementSink>) -> Self {
        Self { locations, sink }
    }

    /// Announces `event` in every guild with the event reminder module enabled.
    ///
    /// A guild whose config is invalid or whose channel rejects the message is logged and
    /// skipped; the remaining guilds are still announced to.
    ///
    /// # Returns
    /// - Number of announcements sent
    pub async fn announce(&self, event: &ReminderEvent) -> usize {
        let mut sent = 0;

        for location in self.locations.all().await {
            let announcement = match build_announcement(&location, event) {
                Ok(Some(announcement)) => announcement,
                Ok(None) => continue,
                Err(e) => {
                    tracing::error!(
                        "Failed to build announcement of {} for guild {}: {}",
                        event.name(),
                        location.guild_id,
                        e
                    );
                    continue;
                }
            };

            match self
                .sink
                .send(announcement.channel_id, announcement.content)
                .await
            {
                Ok(()) => {
                    sent += 1;
                    tracing::info!(
                        "Announced {} in guild {} channel {}",
                        event.name(),
                        announcement.guild_id,
                        announcement.channel_id
                    );
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to announce {} in guild {} channel {}: {}",
                        event.name(),
                        announcement.guild_id,
                        announcement.channel_id,
                        e
                    );
                }
            }
        }

        sent
    }
}

#[async_trait]
impl ReminderListener for NotificationDispatcher {
    async fn on_reminder(&self, event: &ReminderEvent) -> Result<(), AppError> {
        self.announce(event).await;

        Ok(())
    }
}

#[cfg(test)]
mod test;
