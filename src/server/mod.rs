//! Bot backend.
//!
//! This module contains everything behind the Discord bot: loading configuration, fetching the
//! remote feeds, scheduling reminders and posting announcements.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Gateway event handlers and slash commands
//! - **Service Layer** (`service/`) - Reminder scheduling, announcement and boost logic
//! - **Data Layer** (`data/`) - Feed downloads and per-guild service location files
//! - **Model Layer** (`model/`) - Domain models converted from feed records and config files
//! - **Error Layer** (`error/`) - Application error types
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Services shared with the bot's event handler
//! - **Startup** (`startup`) - Logging and HTTP client initialization
//! - **Scheduler** (`scheduler/`) - Periodic feed refresh job

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
