use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::resource::FeedUrls,
};

const DEFAULT_STORIES_FEED_URL: &str =
    "https://sekai-world.github.io/sekai-master-db-en-diff/events.json";
const DEFAULT_SHOWS_FEED_URL: &str =
    "https://sekai-world.github.io/sekai-master-db-en-diff/virtualLives.json";

const DEFAULT_SERVICE_LOCATIONS_DIR: &str = "./run/configs";
const DEFAULT_RESOURCES_DIR: &str = "./run/resources";

/// Shows with an id at or above this are placeholder data and never announced.
const DEFAULT_SHOW_ID_THRESHOLD: i64 = 1000;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60 * 60;
const DEFAULT_DOWNLOAD_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub discord_bot_token: String,

    pub service_locations_dir: PathBuf,
    pub resources_dir: PathBuf,
    pub log_dir: Option<PathBuf>,

    pub feed_urls: FeedUrls,
    pub show_id_threshold: i64,
    pub refresh_interval: Duration,
    pub download_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            service_locations_dir: env_or("SERVICE_LOCATIONS_DIR", DEFAULT_SERVICE_LOCATIONS_DIR)
                .into(),
            resources_dir: env_or("RESOURCES_DIR", DEFAULT_RESOURCES_DIR).into(),
            log_dir: std::env::var("LOG_DIR").ok().map(PathBuf::from),
            feed_urls: FeedUrls {
                stories: parse_env("STORIES_FEED_URL", DEFAULT_STORIES_FEED_URL.parse::<Url>())?,
                shows: parse_env("SHOWS_FEED_URL", DEFAULT_SHOWS_FEED_URL.parse::<Url>())?,
            },
            show_id_threshold: parse_env("SHOW_ID_THRESHOLD", Ok(DEFAULT_SHOW_ID_THRESHOLD))?,
            refresh_interval: Duration::from_secs(parse_env(
                "REFRESH_INTERVAL_SECS",
                Ok(DEFAULT_REFRESH_INTERVAL_SECS),
            )?),
            download_timeout: Duration::from_secs(parse_env(
                "DOWNLOAD_TIMEOUT_SECS",
                Ok(DEFAULT_DOWNLOAD_TIMEOUT_SECS),
            )?),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Reads and parses an optional environment variable, falling back to `default` when unset.
fn parse_env<T>(name: &str, default: Result<T, T::Err>) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let invalid = |value: String, reason: String| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason,
    };

    match std::env::var(name) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| invalid(value.clone(), e.to_string())),
        Err(_) => default.map_err(|e| invalid("<default>".to_string(), e.to_string())),
    }
}
