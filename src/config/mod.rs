// src/config/mod.rs
//! Exercise configuration: profiles, catalog, constants

pub mod constants;
pub mod loader;
pub mod profile;

pub use loader::{load_profile, ConfigError, ProfileCatalog};
pub use profile::{
    ExerciseProfile, FailSide, FeedbackBand, GradedCheck, LiveStatusBands, ProfileError, RomCheck,
    SmoothnessCheck, TempoCheck,
};
