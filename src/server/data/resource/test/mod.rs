use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serenity::async_trait;
use test_utils::{builder::TestBuilder, error::TestError, factory};
use url::Url;

use crate::server::{
    data::resource::{FeedSource, ResourceFetcher},
    error::resource::ResourceError,
    model::resource::{Dataset, FeedUrls},
};


/// How the fake feed source answers a URL.
#[derive(Clone)]
enum FakeResponse {
    Body(Vec<u8>),
    Status(u16),
    /// Never completes.
    Hang,
}

/// Feed source answering from a fixed table instead of the network.
struct FakeFeedSource {
    responses: HashMap<String, FakeResponse>,
}

#[async_trait]
impl FeedSource for FakeFeedSource {
    async fn download(&self, url: &Url) -> Result<Vec<u8>, ResourceError> {
        match self.responses.get(url.as_str()).cloned() {
            Some(FakeResponse::Body(bytes)) => Ok(bytes),
            Some(FakeResponse::Status(status)) => Err(ResourceError::Status {
                url: url.to_string(),
                status,
            }),
            Some(FakeResponse::Hang) => std::future::pending().await,
            None => Err(ResourceError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }
}

fn feed_urls() -> FeedUrls {
    FeedUrls {
        stories: Url::parse("https://feeds.test/events.json").unwrap(),
        shows: Url::parse("https://feeds.test/virtualLives.json").unwrap(),
    }
}

/// Builds a fetcher whose stories and shows feeds answer with the given responses.
fn fetcher(
    resources_dir: impl Into<std::path::PathBuf>,
    stories: FakeResponse,
    shows: FakeResponse,
) -> ResourceFetcher {
    let urls = feed_urls();
    let source = FakeFeedSource {
        responses: HashMap::from([
            (urls.stories.to_string(), stories),
            (urls.shows.to_string(), shows),
        ]),
    };

    ResourceFetcher::new(
        Arc::new(source),
        urls,
        resources_dir,
        Duration::from_secs(30),
    )
}
