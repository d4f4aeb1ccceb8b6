//! BESN Test Utils
//!
//! Provides shared testing utilities for the bot's unit and integration tests. This crate
//! offers a builder for creating isolated on-disk test environments (service location and
//! resource directories) and factories producing feed and config documents in the exact JSON
//! shape the bot reads.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment owning temporary directories, removed on drop
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for stories, shows and service location documents
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn loads_guild_config() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_service_location(factory::service_location::create_service_location())
//!         .build()?;
//!
//!     let dir = test.configs_dir();
//!     // Point the code under test at `dir`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
