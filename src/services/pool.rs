use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use thiserror::Error;

use crate::models::Profile;

/// Errors that can occur loading a profile pool
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate profile id: {0}")]
    DuplicateId(String),
}

/// In-memory profile pool handing out read-only snapshots
///
/// Each query scores against one `snapshot()`, so a concurrent `replace()`
/// never exposes a half-updated pool. Profiles are kept newest first,
/// the order the admin listing uses; profiles without a creation date sort
/// last in their original order.
pub struct ProfilePool {
    profiles: RwLock<Arc<[Profile]>>,
}

impl ProfilePool {
    pub fn new(profiles: Vec<Profile>) -> Result<Self, PoolError> {
        Ok(Self {
            profiles: RwLock::new(prepare(profiles)?),
        })
    }

    /// Load a pool from a JSON array of profiles
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| PoolError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let pool = Self::from_json(&json)?;
        tracing::info!("Loaded {} profiles from {}", pool.len(), path.display());
        Ok(pool)
    }

    pub fn from_json(json: &str) -> Result<Self, PoolError> {
        let profiles: Vec<Profile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    /// Current snapshot; cheap to clone and safe to hold across a query
    pub fn snapshot(&self) -> Arc<[Profile]> {
        self.profiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swap in a new set of profiles; outstanding snapshots are unaffected
    pub fn replace(&self, profiles: Vec<Profile>) -> Result<(), PoolError> {
        let next = prepare(profiles)?;
        let count = next.len();
        *self.profiles.write().unwrap_or_else(PoisonError::into_inner) = next;
        tracing::debug!("Profile pool replaced ({} profiles)", count);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Profile> {
        self.snapshot().iter().find(|profile| profile.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn prepare(mut profiles: Vec<Profile>) -> Result<Arc<[Profile]>, PoolError> {
    {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(profile.id.as_str()) {
                return Err(PoolError::DuplicateId(profile.id.clone()));
            }
        }
    }

    // Newest first; `None` compares lowest so undated profiles trail
    profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(profiles.into())
}
