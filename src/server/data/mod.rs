//! Data access layer.
//!
//! The bot keeps no database. Its data comes from two places: the remote feeds, downloaded and
//! persisted by `resource`, and the per-guild JSON files under the service location directory,
//! loaded by `service_location`.

pub mod resource;
pub mod service_location;
