// src/session.rs
//! Per-session facade driving the detector and evaluator in lockstep
//!
//! One [`SessionTracker`] per active session; multiple simultaneous sessions
//! (multiple cameras) each get their own independent instance. Access is
//! exclusive and sequential: hosts that capture frames on another thread must
//! serialize calls into the tracker.

use crate::analysis::evaluator::{FormEvaluator, RepReport};
use crate::config::profile::{ExerciseProfile, ProfileError};
use crate::counting::rep_counter::RepCounter;
use crate::error::TrackerError;
use crate::utils::time::{SystemTimeProvider, TimeProvider};
use std::sync::Arc;

/// Per-frame output of the tracker
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// Cumulative repetitions for the session
    pub rep_count: u32,
    /// Live directive for the display collaborator
    pub live_status: String,
    /// Verdict for the repetition this frame completed, if any
    pub completed_rep: Option<RepReport>,
}

/// Composes one repetition detector and one form evaluator per session
pub struct SessionTracker {
    counter: RepCounter,
    evaluator: FormEvaluator,
}

impl SessionTracker {
    /// Create a tracker using the system clock
    pub fn new(profile: ExerciseProfile) -> Result<Self, ProfileError> {
        Self::with_clock(profile, Arc::new(SystemTimeProvider))
    }

    /// Create a tracker with an injected clock, for deterministic tests
    pub fn with_clock(
        profile: ExerciseProfile,
        clock: Arc<dyn TimeProvider>,
    ) -> Result<Self, ProfileError> {
        let counter = RepCounter::from_profile(&profile)?;
        let evaluator = FormEvaluator::new(profile, clock)?;
        Ok(Self { counter, evaluator })
    }

    /// Process one frame's angle sample
    ///
    /// Non-finite readings are rejected here so the pure components below
    /// only ever see valid input. The evaluator is updated before the
    /// detector so the completing sample itself is part of the graded
    /// repetition.
    pub fn process_sample(&mut self, angle_deg: f32) -> Result<FrameOutcome, TrackerError> {
        if !angle_deg.is_finite() {
            return Err(TrackerError::NonFiniteSample { value: angle_deg });
        }
        tracing::trace!(angle_deg, "processing angle sample");

        self.evaluator.update(angle_deg);
        let update = self.counter.update(angle_deg);

        let completed_rep = update.rep_completed.then(|| self.evaluator.finalize());

        Ok(FrameOutcome {
            rep_count: update.rep_count,
            live_status: self.evaluator.live_status(angle_deg).to_string(),
            completed_rep,
        })
    }

    /// Switch exercise mid-session
    ///
    /// Re-arms the detector under the new thresholds (count preserved,
    /// direction reset) and discards the in-progress accumulator.
    pub fn set_profile(&mut self, profile: ExerciseProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        self.counter
            .set_thresholds(profile.top_threshold_deg, profile.bottom_threshold_deg)?;
        self.evaluator.set_profile(profile)
    }

    /// Cumulative repetitions for the session
    pub fn rep_count(&self) -> u32 {
        self.counter.rep_count()
    }

    /// The active exercise profile
    pub fn profile(&self) -> &ExerciseProfile {
        self.evaluator.profile()
    }
}
