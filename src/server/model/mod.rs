//! Domain models and parameter types.
//!
//! This module contains the domain models used throughout the service layer. Feed records are
//! converted to domain models at the data boundary (`from_record`), so services only ever see
//! UTC timestamps and validated shapes.

pub mod reminder;
pub mod resource;
pub mod service_location;
pub mod show;
pub mod story;
