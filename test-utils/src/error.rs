use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating a directory or writing a fixture file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A fixture document could not be serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A service location document has no string `guildId` to name its file after.
    #[error("Service location fixture is missing a string guildId")]
    MissingGuildId,
}
