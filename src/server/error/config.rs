use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the environment variable
        name: String,
        /// The offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The service location directory could not be listed.
    #[error("Failed to read service location directory {}: {source}", path.display())]
    ServiceLocationDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single service location file could not be read or parsed.
    ///
    /// Other files in the directory are still loaded when this occurs.
    #[error("Failed to load service location {}: {reason}", path.display())]
    ServiceLocationFile { path: PathBuf, reason: String },
}
