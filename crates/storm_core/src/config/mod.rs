//! Configuration for the setup pipeline.
//!
//! This module provides:
//! - A TOML-backed setup profile with logical sections
//! - Defaults matching the built-in Birmingham scene constants
//! - Atomic file writes (write to temp, then rename)
//!
//! # Example
//!
//! ```no_run
//! use storm_core::config::ProfileManager;
//!
//! let mut manager = ProfileManager::new(".config/setup_profile.toml");
//! manager.load_or_create().unwrap();
//! println!("origin: {}", manager.profile().origin.latitude);
//! ```

mod manager;
mod profile;

pub use manager::{ProfileError, ProfileManager, ProfileResult};
pub use profile::{
    CameraSettings, LightingSettings, OriginSettings, SetupProfile, TerrainSettings,
};
