//! Profile file management with atomic writes.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::profile::SetupProfile;

/// Errors from loading or saving a profile file.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ProfileError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Loads and persists a `SetupProfile` at a fixed path.
///
/// Saves go through a temp file in the same directory followed by a
/// rename, so a crash mid-write never leaves a truncated profile.
pub struct ProfileManager {
    path: PathBuf,
    profile: SetupProfile,
}

impl ProfileManager {
    /// Create a manager for the given profile path. Nothing is read
    /// until `load_or_create`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            profile: SetupProfile::default(),
        }
    }

    /// Load the profile, or write the defaults if no file exists yet.
    pub fn load_or_create(&mut self) -> ProfileResult<()> {
        if self.path.exists() {
            let text = fs::read_to_string(&self.path).map_err(|e| ProfileError::io(&self.path, e))?;
            self.profile = toml::from_str(&text)?;
            debug!(path = %self.path.display(), "profile loaded");
        } else {
            info!(path = %self.path.display(), "no profile found, writing defaults");
            self.profile = SetupProfile::default();
            self.save()?;
        }
        Ok(())
    }

    /// Write the current profile atomically.
    pub fn save(&self) -> ProfileResult<()> {
        let text = toml::to_string_pretty(&self.profile)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ProfileError::io(parent, e))?;
            }
        }

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, text).map_err(|e| ProfileError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| ProfileError::io(&self.path, e))?;
        Ok(())
    }

    pub fn profile(&self) -> &SetupProfile {
        &self.profile
    }

    pub fn profile_mut(&mut self) -> &mut SetupProfile {
        &mut self.profile
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_or_create_writes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup_profile.toml");

        let mut manager = ProfileManager::new(&path);
        manager.load_or_create().unwrap();

        assert!(path.exists());
        assert_eq!(*manager.profile(), SetupProfile::default());
    }

    #[test]
    fn modified_profile_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup_profile.toml");

        let mut manager = ProfileManager::new(&path);
        manager.load_or_create().unwrap();
        manager.profile_mut().origin.latitude = 35.0;
        manager.profile_mut().terrain.access_token = "token-123".to_string();
        manager.save().unwrap();

        let mut reloaded = ProfileManager::new(&path);
        reloaded.load_or_create().unwrap();
        assert_eq!(reloaded.profile().origin.latitude, 35.0);
        assert_eq!(reloaded.profile().terrain.access_token, "token-123");
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup_profile.toml");

        let mut manager = ProfileManager::new(&path);
        manager.load_or_create().unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn malformed_profile_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("setup_profile.toml");
        fs::write(&path, "origin = \"not a table\"").unwrap();

        let mut manager = ProfileManager::new(&path);
        let err = manager.load_or_create().unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }
}
