//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Profile persistence
//!
//! Stores only ever receive fully recomputed profiles from
//! [`ProfileEditor`](crate::editor::ProfileEditor). Profiles written by a
//! newer engine are refused on both save and load.

use crate::profile::{PROFILE_VERSION, Profile};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors that can occur while saving or loading profiles.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The profile was written by a newer schema.
    #[error("Profile '{name}' uses schema version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        name: String,
        found: u32,
        supported: u32,
    },

    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Empty names and names that could escape the store directory.
    #[error("Invalid profile name: {0:?}")]
    InvalidName(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Save hook for consistent profiles.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Persist a profile under its name, replacing any previous copy.
    async fn save(&self, profile: &Profile) -> StoreResult<()>;

    /// Load a profile by name.
    async fn load(&self, name: &str) -> StoreResult<Profile>;
}

fn check_version(profile: &Profile) -> StoreResult<()> {
    if profile.version() > PROFILE_VERSION {
        return Err(StoreError::UnsupportedVersion {
            name: profile.name().to_string(),
            found: profile.version(),
            supported: PROFILE_VERSION,
        });
    }
    Ok(())
}

fn check_name(name: &str) -> StoreResult<()> {
    let valid = !name.trim().is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0']);
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidName(name.to_string()))
    }
}

/// In-memory store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<String, Profile>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl ProfileStore for MemoryStore {
    async fn save(&self, profile: &Profile) -> StoreResult<()> {
        check_name(profile.name())?;
        check_version(profile)?;
        self.profiles
            .write()
            .await
            .insert(profile.name().to_string(), profile.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn load(&self, name: &str) -> StoreResult<Profile> {
        let profile = self
            .profiles
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        check_version(&profile)?;
        Ok(profile)
    }
}

/// One pretty-printed JSON file per profile in a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn path_for(&self, name: &str) -> StoreResult<PathBuf> {
        check_name(name)?;
        Ok(self.directory.join(format!("{name}.json")))
    }
}

#[async_trait::async_trait]
impl ProfileStore for JsonFileStore {
    async fn save(&self, profile: &Profile) -> StoreResult<()> {
        check_version(profile)?;
        let path = self.path_for(profile.name())?;
        tokio::fs::create_dir_all(&self.directory).await?;

        // Write then rename so a crash never leaves a truncated profile.
        let staging = path.with_extension("json.tmp");
        let contents = serde_json::to_vec_pretty(profile)?;
        tokio::fs::write(&staging, contents).await?;
        tokio::fs::rename(&staging, &path).await?;

        tracing::info!("Saved profile '{}' to {}", profile.name(), path.display());
        Ok(())
    }

    async fn load(&self, name: &str) -> StoreResult<Profile> {
        let path = self.path_for(name)?;
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(name.to_string()));
            }
            Err(error) => return Err(error.into()),
        };
        let profile: Profile = serde_json::from_slice(&contents)?;
        check_version(&profile)?;
        tracing::debug!("Loaded profile '{}' from {}", name, path.display());
        Ok(profile)
    }
}
