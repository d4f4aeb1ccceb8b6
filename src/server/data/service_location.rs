//! Service location storage.
//!
//! This module provides the `ServiceLocationStore`, which loads one JSON file per guild from
//! the service location directory and keeps the parsed set in memory. The set is replaced
//! wholesale on reload so readers always see one consistent generation of configs. A file
//! that fails to load is reported and skipped; the other files still load.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::server::{
    error::{config::ConfigError, AppError},
    model::service_location::ServiceLocation,
};

/// Result of loading the service location directory.
#[derive(Debug, Default)]
pub struct ServiceLocationLoad {
    /// Successfully parsed locations keyed by guild ID.
    pub locations: BTreeMap<String, ServiceLocation>,
    /// One error per file that could not be loaded.
    pub errors: Vec<ConfigError>,
}

/// In-memory set of service locations backed by a directory of JSON files.
///
/// Cheap to clone; clones share the same set.
#[derive(Clone)]
pub struct ServiceLocationStore {
    dir: PathBuf,
    locations: Arc<RwLock<BTreeMap<String, ServiceLocation>>>,
}

impl ServiceLocationStore {
    /// Creates a store for `dir` with no locations loaded yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            locations: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Reloads every service location from the directory.
    ///
    /// Reads each regular `.json` file in the directory and replaces the in-memory set with
    /// the files that parsed. Per-file failures are logged and returned; they never prevent the
    /// other files from loading.
    ///
    /// # Returns
    /// - `Ok(errors)` - Directory read; `errors` lists the files that were skipped
    /// - `Err(AppError::ConfigErr(ServiceLocationDir))` - The directory itself could not be read;
    ///   the previously loaded set is kept
    pub async fn reload(&self) -> Result<Vec<ConfigError>, AppError> {
        let load = load_dir(&self.dir).await?;

        tracing::info!(
            "Loaded {} service location(s) from {} ({} failed)",
            load.locations.len(),
            self.dir.display(),
            load.errors.len()
        );

        *self.locations.write().await = load.locations;

        Ok(load.errors)
    }

    /// Snapshot of all loaded service locations.
    pub async fn all(&self) -> Vec<ServiceLocation> {
        self.locations.read().await.values().cloned().collect()
    }

    /// Service location of a guild, if the guild is serviced.
    pub async fn get(&self, guild_id: u64) -> Option<ServiceLocation> {
        self.locations
            .read()
            .await
            .get(&guild_id.to_string())
            .cloned()
    }

    /// Replaces the loaded set without touching the filesystem.
    #[cfg(test)]
    pub async fn replace(&self, locations: Vec<ServiceLocation>) {
        *self.locations.write().await = locations
            .into_iter()
            .map(|location| (location.guild_id.clone(), location))
            .collect();
    }
}

/// Reads and parses every service location file in `dir`.
async fn load_dir(dir: &Path) -> Result<ServiceLocationLoad, AppError> {
    let dir_err = |source| ConfigError::ServiceLocationDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(dir_err)?;
    let mut paths = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(dir_err)? {
        let path = entry.path();
        let is_file = entry
            .file_type()
            .await
            .map(|file_type| file_type.is_file())
            .unwrap_or(false);

        if is_file && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    // Deterministic order so a duplicated guild always resolves the same way
    paths.sort();

    let mut load = ServiceLocationLoad::default();
    for path in paths {
        tracing::debug!("Loading service location config '{}'...", path.display());

        match load_file(&path).await {
            Ok(location) => {
                if let Some(previous) = load.locations.insert(location.guild_id.clone(), location)
                {
                    tracing::warn!(
                        "Service location for guild {} defined more than once, '{}' wins",
                        previous.guild_id,
                        path.display()
                    );
                }
            }
            Err(e) => {
                tracing::error!("{}", e);
                load.errors.push(e);
            }
        }
    }

    Ok(load)
}

async fn load_file(path: &Path) -> Result<ServiceLocation, ConfigError> {
    let file_err = |reason: String| ConfigError::ServiceLocationFile {
        path: path.to_path_buf(),
        reason,
    };

    let content = tokio::fs::read(path)
        .await
        .map_err(|e| file_err(e.to_string()))?;
    let location: ServiceLocation =
        serde_json::from_slice(&content).map_err(|e| file_err(e.to_string()))?;

    // Every id used to address Discord must be usable before the file is accepted
    location
        .guild_id()
        .and_then(|_| location.event_reminder_channel_id())
        .and_then(|_| location.boost_notifier_channel_id())
        .map_err(|e| file_err(e.to_string()))?;

    Ok(location)
}

#[cfg(test)]
mod test;
