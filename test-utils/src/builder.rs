use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with pre-populated directories.
///
/// Provides a fluent interface for configuring the files a test starts with. Call `build()`
/// to create the temporary directories and write every configured file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, factory};
///
/// let test = TestBuilder::new()
///     .with_service_location(factory::service_location::create_service_location())
///     .with_stories(vec![factory::story::create_story(start_ms)])
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Service location documents, written as `<guildId>.json` into the configs directory.
    service_locations: Vec<Value>,
    /// Raw files written into the configs directory as-is.
    raw_configs: Vec<(String, Vec<u8>)>,
    /// Stories feed persisted into the resources directory.
    stories: Option<Value>,
    /// Shows feed persisted into the resources directory.
    shows: Option<Value>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            service_locations: Vec::new(),
            raw_configs: Vec::new(),
            stories: None,
            shows: None,
        }
    }

    /// Adds a service location document to the configs directory.
    ///
    /// # Arguments
    /// - `location` - Service location JSON; must carry a string `guildId`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_service_location(mut self, location: Value) -> Self {
        self.service_locations.push(location);
        self
    }

    /// Adds an arbitrary file to the configs directory.
    ///
    /// Useful for malformed configs and files the loader should skip.
    pub fn with_raw_config(mut self, file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.raw_configs.push((file_name.into(), content.into()));
        self
    }

    /// Seeds the resources directory with a previously persisted stories feed.
    pub fn with_stories(mut self, stories: Vec<Value>) -> Self {
        self.stories = Some(Value::Array(stories));
        self
    }

    /// Seeds the resources directory with a previously persisted shows feed.
    pub fn with_shows(mut self, shows: Vec<Value>) -> Self {
        self.shows = Some(Value::Array(shows));
        self
    }

    /// Builds the test context.
    ///
    /// Creates fresh temporary configs and resources directories and writes every configured
    /// file into them.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context owning the populated directories
    /// - `Err(TestError)` - Failed to create a directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let test = TestContext::new()?;

        for location in &self.service_locations {
            let guild_id = location
                .get("guildId")
                .and_then(Value::as_str)
                .ok_or(TestError::MissingGuildId)?;
            test.write_config(
                &format!("{guild_id}.json"),
                serde_json::to_vec_pretty(location)?,
            )?;
        }

        for (file_name, content) in self.raw_configs {
            test.write_config(&file_name, content)?;
        }

        if let Some(stories) = &self.stories {
            test.write_resource("stories.json", serde_json::to_vec(stories)?)?;
        }
        if let Some(shows) = &self.shows {
            test.write_resource("shows.json", serde_json::to_vec(shows)?)?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
