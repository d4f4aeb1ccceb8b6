//! Background jobs run on a cron scheduler.

pub mod event_refresh;
