//! Factory methods for creating test documents.
//!
//! This module provides factories for the JSON documents the bot consumes: stories and shows
//! as published by the remote feeds, and per-guild service location configs. Each factory
//! produces a `serde_json::Value` in the exact wire shape (camelCase keys, epoch millisecond
//! timestamps) so tests exercise the real deserialization path.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let story = factory::story::create_story(start_ms);
//! let show = factory::show::ShowFactory::new()
//!     .id(42)
//!     .schedule(1, start_ms)
//!     .build();
//! let location = factory::service_location::create_service_location();
//! ```
//!
//! # Available Factories
//!
//! - `story` - Entries of the stories feed
//! - `show` - Entries of the shows feed
//! - `service_location` - Per-guild service location configs
//! - `helpers` - Unique id generation and feed document helpers

pub mod helpers;
pub mod service_location;
pub mod show;
pub mod story;

pub use service_location::create_service_location;
pub use show::create_show;
pub use story::create_story;
