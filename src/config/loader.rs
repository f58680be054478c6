// src/config/loader.rs
//! Profile catalog and TOML profile loading

use crate::config::profile::{ExerciseProfile, ProfileError};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Profile loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Profile file could not be read
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file is not valid TOML for an [`ExerciseProfile`]
    #[error("failed to parse profile file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Profile parsed but violates a construction invariant
    #[error("invalid profile: {0}")]
    Invalid(#[from] ProfileError),

    /// No profile registered under the requested name
    #[error("exercise not supported: {0}")]
    UnknownExercise(String),
}

/// Registry of validated exercise profiles, looked up by name
///
/// Lookup is case-insensitive; every profile in the catalog has already
/// passed [`ExerciseProfile::validate`].
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: HashMap<String, ExerciseProfile>,
}

impl ProfileCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Catalog pre-populated with the built-in exercises
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for profile in [
            ExerciseProfile::pullup(),
            ExerciseProfile::pushup(),
            ExerciseProfile::squat(),
        ] {
            // Built-ins are validated in tests; registration cannot fail.
            let _ = catalog.register(profile);
        }
        catalog
    }

    /// Validate and register a profile, replacing any same-named entry
    pub fn register(&mut self, profile: ExerciseProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        self.profiles
            .insert(profile.name.to_lowercase(), profile);
        Ok(())
    }

    /// Look up a profile by name, case-insensitive
    pub fn get(&self, name: &str) -> Result<&ExerciseProfile, ConfigError> {
        self.profiles
            .get(&name.to_lowercase())
            .ok_or_else(|| ConfigError::UnknownExercise(name.to_string()))
    }

    /// Names of every registered profile
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.values().map(|p| p.name.as_str())
    }

    /// Load a profile from a TOML file and register it
    pub fn register_from_file(&mut self, path: &Path) -> Result<&ExerciseProfile, ConfigError> {
        let profile = load_profile(path)?;
        let key = profile.name.to_lowercase();
        self.register(profile)?;
        Ok(&self.profiles[&key])
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Load and validate a single profile from a TOML file
pub fn load_profile(path: &Path) -> Result<ExerciseProfile, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let profile: ExerciseProfile = toml::from_str(&text)?;
    profile.validate()?;
    tracing::debug!(profile = %profile.name, path = %path.display(), "loaded exercise profile");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_catalog_lookup() {
        let catalog = ProfileCatalog::builtin();
        assert_eq!(catalog.get("pullup").unwrap().name, "pullup");
        assert_eq!(catalog.get("PullUp").unwrap().name, "pullup");
        assert!(matches!(
            catalog.get("deadlift"),
            Err(ConfigError::UnknownExercise(_))
        ));
    }

    #[test]
    fn test_load_profile_from_file() {
        let profile = ExerciseProfile::pushup();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&profile).unwrap().as_bytes())
            .unwrap();

        let loaded = load_profile(file.path()).unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_load_rejects_invalid_profile() {
        let mut profile = ExerciseProfile::pushup();
        profile.top_threshold_deg = 170.0; // above bottom_threshold_deg
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&profile).unwrap().as_bytes())
            .unwrap();

        assert!(matches!(
            load_profile(file.path()),
            Err(ConfigError::Invalid(ProfileError::InvertedHysteresis { .. }))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = [not toml").unwrap();
        assert!(matches!(
            load_profile(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_register_from_file() {
        let mut custom = ExerciseProfile::squat();
        custom.name = "goblet_squat".to_string();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml::to_string(&custom).unwrap().as_bytes())
            .unwrap();

        let mut catalog = ProfileCatalog::builtin();
        catalog.register_from_file(file.path()).unwrap();
        assert_eq!(catalog.get("GOBLET_SQUAT").unwrap().name, "goblet_squat");
    }
}
