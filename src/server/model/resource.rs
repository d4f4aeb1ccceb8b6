//! Models describing the remote feeds and their downloaded content.

use std::fmt;

use url::Url;

/// One of the two remote feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Stories,
    Shows,
}

impl Dataset {
    /// File name the dataset is persisted under inside the resources directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Stories => "stories.json",
            Self::Shows => "shows.json",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stories => f.write_str("stories"),
            Self::Shows => f.write_str("shows"),
        }
    }
}

/// Locations of the two feeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrls {
    pub stories: Url,
    pub shows: Url,
}

impl FeedUrls {
    pub fn get(&self, dataset: Dataset) -> &Url {
        match dataset {
            Dataset::Stories => &self.stories,
            Dataset::Shows => &self.shows,
        }
    }
}

/// Raw feed bytes from one fetch; `None` for a dataset whose download failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedResources {
    pub stories: Option<Vec<u8>>,
    pub shows: Option<Vec<u8>>,
}
