//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot and the data layer:
//!
//! - **Event reminders** (`event_reminder`) - Turns feed data into armed reminder timers and
//!   emits an event when one fires
//! - **Reminder notifications** (`reminder_notification`) - Renders fired reminders into
//!   per-guild announcements
//! - **Boost notifications** (`boost_notification`) - Announces members starting or stopping
//!   a server boost

pub mod boost_notification;
pub mod event_reminder;
pub mod reminder_notification;
