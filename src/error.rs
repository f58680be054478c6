// src/error.rs
//! Session-level error types
//!
//! The core is pure computation, so the taxonomy is narrow: profile
//! construction failures live in [`crate::config::ProfileError`], profile
//! file loading in [`crate::config::ConfigError`], and the session facade
//! only rejects samples that violate the finite-angle precondition.

use thiserror::Error;

/// Errors surfaced by [`crate::session::SessionTracker`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// The pose estimator delivered a NaN or infinite angle
    ///
    /// The detector and evaluator require finite input; the session facade
    /// filters for them and reports the bad reading so the host can decide
    /// whether to drop the frame or tear the session down.
    #[error("non-finite angle sample: {value}")]
    NonFiniteSample {
        /// The offending reading
        value: f32,
    },
}
