//! Application state shared across all bot event handlers.
//!
//! This module defines the `AppState` struct which holds the long-lived services the bot's
//! handlers work with. The state is built once in `main` and cloned into the event handler.

use std::sync::Arc;

use crate::server::{
    data::service_location::ServiceLocationStore,
    service::event_reminder::EventReminderService,
};

/// Application state containing shared services.
///
/// All fields are cheap to clone and clones share the underlying service.
#[derive(Clone)]
pub struct AppState {
    /// Reminder service answering `/listevents` and `/updatedb`.
    pub reminder: Arc<EventReminderService>,

    /// Per-guild configuration used for command gating, boost notifications and config
    /// commands.
    pub locations: ServiceLocationStore,
}

impl AppState {
    pub fn new(reminder: Arc<EventReminderService>, locations: ServiceLocationStore) -> Self {
        Self {
            reminder,
            locations,
        }
    }
}
