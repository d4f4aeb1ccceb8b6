//! Process startup helpers.
//!
//! Initialization that runs once in `main` before any service is built: logging and the
//! shared HTTP client.

use std::fs::File;
use std::sync::Mutex;

use chrono::Utc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::AppError};

const DEFAULT_LOG_FILTER: &str = "besn=info,serenity=warn";

/// Initializes the global tracing subscriber.
///
/// Logs go to the console, filtered by `RUST_LOG` (default `besn=info,serenity=warn`). When
/// a log directory is configured, the same events are also written without colours to a new
/// file in it, named after the UTC start time.
///
/// # Arguments
/// - `config` - Application configuration holding the optional log directory
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::IoErr)` - Failed to create the log directory or file
pub fn init_tracing(config: &Config) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let file_layer = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            // ':' is not allowed in file names everywhere
            let file_name = format!("{}.log", Utc::now().format("%Y-%m-%dT%H.%M.%SZ"));
            let file = File::create(log_dir.join(file_name))?;

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    Ok(())
}

/// Builds the HTTP client used to download the feeds.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with the configured download timeout
/// - `Err(AppError::ReqwestErr)` - Client construction failed
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(config.download_timeout)
        .build()?;

    Ok(client)
}
