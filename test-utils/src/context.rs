use std::path::{Path, PathBuf};

use crate::{error::TestError, factory::helpers::next_id};

/// Test context owning an isolated directory tree.
///
/// Every context gets its own root under the system temp directory, with a `configs`
/// directory for service locations and a `resources` directory for downloaded feeds. The
/// whole tree is removed when the context is dropped.
pub struct TestContext {
    root: PathBuf,
}

impl TestContext {
    /// Creates a new context with empty configs and resources directories.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Directories created
    /// - `Err(TestError::Io)` - Failed to create the directories
    pub fn new() -> Result<Self, TestError> {
        let root = std::env::temp_dir().join(format!(
            "besn-test-{}-{}",
            std::process::id(),
            next_id()
        ));

        std::fs::create_dir_all(root.join("configs"))?;
        std::fs::create_dir_all(root.join("resources"))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding one service location file per guild.
    pub fn configs_dir(&self) -> PathBuf {
        self.root.join("configs")
    }

    /// Directory the feeds are persisted into.
    pub fn resources_dir(&self) -> PathBuf {
        self.root.join("resources")
    }

    /// Writes a file into the configs directory, replacing any existing one.
    pub fn write_config(&self, file_name: &str, content: impl AsRef<[u8]>) -> Result<(), TestError> {
        std::fs::write(self.configs_dir().join(file_name), content)?;
        Ok(())
    }

    /// Writes a file into the resources directory, replacing any existing one.
    pub fn write_resource(
        &self,
        file_name: &str,
        content: impl AsRef<[u8]>,
    ) -> Result<(), TestError> {
        std::fs::write(self.resources_dir().join(file_name), content)?;
        Ok(())
    }

    /// Reads a file from the resources directory.
    ///
    /// # Returns
    /// - `Some(bytes)` - File contents
    /// - `None` - File does not exist or could not be read
    pub fn read_resource(&self, file_name: &str) -> Option<Vec<u8>> {
        std::fs::read(self.resources_dir().join(file_name)).ok()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
