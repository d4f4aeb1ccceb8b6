//! Remote feed access and local persistence.
//!
//! This module provides the `ResourceFetcher`, which downloads the stories and shows feeds,
//! writes successful downloads to the resources directory and hands the raw bytes to the
//! reminder service. Network access goes through the `FeedSource` trait so the fetcher can be
//! exercised without a network; `HttpFeedSource` is the production implementation.
//!
//! Downloads are best-effort: each feed succeeds or fails on its own, nothing is retried, and
//! a failure only means the dataset is absent for the current cycle.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serenity::async_trait;
use url::Url;

use crate::server::{
    error::resource::ResourceError,
    model::resource::{Dataset, FeedUrls, FetchedResources},
};

/// Something that can download a feed document.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Downloads the document at `url`.
    ///
    /// # Returns
    /// - `Ok(bytes)` - Body of a successful response
    /// - `Err(ResourceError::Request | ResourceError::Status)` - Download failed
    async fn download(&self, url: &Url) -> Result<Vec<u8>, ResourceError>;
}

/// Feed source backed by a shared reqwest client.
#[derive(Clone)]
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn download(&self, url: &Url) -> Result<Vec<u8>, ResourceError> {
        let request_err = |source| ResourceError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(request_err)?;

        Ok(body.to_vec())
    }
}

/// Downloads both feeds and persists them to the resources directory.
pub struct ResourceFetcher {
    source: Arc<dyn FeedSource>,
    feed_urls: FeedUrls,
    resources_dir: PathBuf,
    timeout: Duration,
}

impl ResourceFetcher {
    /// Creates a new ResourceFetcher instance.
    ///
    /// # Arguments
    /// - `source` - Where downloads come from
    /// - `feed_urls` - Locations of the stories and shows feeds
    /// - `resources_dir` - Directory the downloaded feeds are written to
    /// - `timeout` - Upper bound for a single download
    pub fn new(
        source: Arc<dyn FeedSource>,
        feed_urls: FeedUrls,
        resources_dir: impl Into<PathBuf>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            feed_urls,
            resources_dir: resources_dir.into(),
            timeout,
        }
    }

    pub fn resources_dir(&self) -> &Path {
        &self.resources_dir
    }

    /// Path a dataset is persisted at.
    pub fn resource_path(&self, dataset: Dataset) -> PathBuf {
        self.resources_dir.join(dataset.file_name())
    }

    /// Downloads both feeds concurrently.
    ///
    /// Creates the resources directory if needed, then downloads the stories and shows feeds
    /// at the same time. Each successful download is persisted, replacing the previous file;
    /// a failed download leaves the previous file as it was. Failures are logged here and
    /// surface only as a missing dataset in the result.
    ///
    /// # Returns
    /// - `FetchedResources` - Bytes of every feed that downloaded successfully
    pub async fn fetch(&self) -> FetchedResources {
        tracing::debug!("Preparing resource folder {}", self.resources_dir.display());
        if let Err(e) = tokio::fs::create_dir_all(&self.resources_dir).await {
            // Downloads are still useful without persistence, so keep going
            tracing::error!(
                "Failed to create resource folder {}: {}",
                self.resources_dir.display(),
                e
            );
        }

        tracing::info!("Downloading resource files...");
        let (stories, shows) = tokio::join!(
            self.fetch_dataset(Dataset::Stories),
            self.fetch_dataset(Dataset::Shows)
        );

        FetchedResources { stories, shows }
    }

    /// Downloads and persists a single dataset.
    async fn fetch_dataset(&self, dataset: Dataset) -> Option<Vec<u8>> {
        let url = self.feed_urls.get(dataset);

        let bytes = match self.download_with_timeout(dataset, url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Failed to download {}: {}", dataset, e);
                return None;
            }
        };

        tracing::debug!("Downloaded {} ({} bytes)", dataset, bytes.len());

        if let Err(e) = self.persist(dataset, &bytes).await {
            tracing::error!("{}", e);
        }

        Some(bytes)
    }

    async fn download_with_timeout(
        &self,
        dataset: Dataset,
        url: &Url,
    ) -> Result<Vec<u8>, ResourceError> {
        match tokio::time::timeout(self.timeout, self.source.download(url)).await {
            Ok(result) => result,
            Err(_) => Err(ResourceError::Timeout {
                dataset,
                seconds: self.timeout.as_secs(),
            }),
        }
    }

    /// Writes the dataset next to its final location, then renames it into place so readers
    /// never observe a partially written file.
    async fn persist(&self, dataset: Dataset, bytes: &[u8]) -> Result<(), ResourceError> {
        let path = self.resource_path(dataset);
        let tmp_path = self
            .resources_dir
            .join(format!(".{}.tmp", dataset.file_name()));

        tokio::fs::write(&tmp_path, bytes)
            .await
            .map_err(|source| ResourceError::Persist {
                path: tmp_path.clone(),
                source,
            })?;

        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|source| ResourceError::Persist {
                path: path.clone(),
                source,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod test;
