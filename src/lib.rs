//! RepTrack-Core: repetition counting and form analysis for exercise tracking
//!
//! This library turns a per-frame joint-angle stream (produced by an external
//! pose estimator) into structured training feedback. It provides:
//!
//! - Two-threshold hysteresis repetition detection
//! - Per-repetition form grading (range of motion, depth, lockout, tempo,
//!   smoothness) against configurable exercise profiles
//! - A live status directive per in-progress frame
//! - TOML-loadable profile catalog with fail-fast validation
//!
//! The core is pure, synchronous and single-threaded: one angle sample goes
//! in per frame, a cumulative count and a live status come out, and a
//! [`RepReport`] is produced for every completed repetition. Camera handling,
//! landmark extraction and rendering belong to the host application.
//!
//! # Quick Start
//!
//! ```rust
//! use reptrack_core::config::ExerciseProfile;
//! use reptrack_core::session::SessionTracker;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut session = SessionTracker::new(ExerciseProfile::pullup())?;
//!
//!     for angle in [170.0, 150.0, 100.0, 55.0, 100.0, 150.0, 170.0] {
//!         let outcome = session.process_sample(angle)?;
//!         println!("reps={} status={}", outcome.rep_count, outcome.live_status);
//!         if let Some(report) = outcome.completed_rep {
//!             println!("form ok: {} {:?}", report.form_correct, report.feedback);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod counting;
pub mod error;
pub mod session;
pub mod utils;

// Re-export commonly used types for convenience
pub use analysis::{FormAccumulator, FormEvaluator, RepReport, NO_MOTION_FEEDBACK};
pub use config::{ConfigError, ExerciseProfile, ProfileCatalog, ProfileError};
pub use counting::{Direction, RepCounter, RepUpdate};
pub use error::TrackerError;
pub use session::{FrameOutcome, SessionTracker};
pub use utils::time::{MockTimeProvider, SystemTimeProvider, TimeProvider};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
