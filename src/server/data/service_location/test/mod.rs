use serde_json::json;
use test_utils::{builder::TestBuilder, error::TestError, factory};

use crate::server::{
    data::service_location::ServiceLocationStore,
    error::{config::ConfigError, AppError},
};

mod get;
