use std::path::PathBuf;

use thiserror::Error;

use crate::server::model::resource::Dataset;

/// Failures while obtaining one of the remote feeds.
///
/// Every variant is recoverable: the refresh logs it and treats the affected dataset as
/// empty for the current cycle.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// Network or protocol failure while downloading.
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The feed answered with a non-success status code.
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The download did not finish within the configured timeout.
    #[error("Download of {dataset} timed out after {seconds}s")]
    Timeout { dataset: Dataset, seconds: u64 },

    /// Downloaded bytes could not be written to the resources directory.
    #[error("Failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The downloaded document is not the JSON shape we expect.
    #[error("Failed to parse {dataset}: {source}")]
    Parse {
        dataset: Dataset,
        #[source]
        source: serde_json::Error,
    },
}
