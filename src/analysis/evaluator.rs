// src/analysis/evaluator.rs
//! Form evaluation for completed repetitions
//!
//! The evaluator folds every frame into a [`FormAccumulator`] and, when the
//! detector signals a completed repetition, grades the accumulated motion
//! against the active profile. Feedback line order is fixed: range of motion,
//! depth, lockout, tempo, smoothness, then the affirmation when everything
//! passed. Each category contributes at most one line.

use crate::analysis::accumulator::FormAccumulator;
use crate::config::profile::{ExerciseProfile, ProfileError};
use crate::utils::time::TimeProvider;
use crate::utils::{round_1dp, round_2dp};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Feedback line reported when a repetition completed without observed motion
pub const NO_MOTION_FEEDBACK: &str = "No motion recorded";

/// Verdict for one completed repetition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepReport {
    /// True when every form check passed
    pub form_correct: bool,
    /// Ordered feedback lines, most specific checks first
    pub feedback: Vec<String>,
    /// Range of motion in degrees, rounded to one decimal
    pub range_of_motion: f32,
    /// Repetition duration in seconds, rounded to two decimals
    pub rep_time: f32,
}

/// Grades repetitions against an [`ExerciseProfile`]
pub struct FormEvaluator {
    profile: ExerciseProfile,
    accumulator: FormAccumulator,
    clock: Arc<dyn TimeProvider>,
}

impl FormEvaluator {
    /// Create an evaluator; fails fast on an invalid profile
    pub fn new(
        profile: ExerciseProfile,
        clock: Arc<dyn TimeProvider>,
    ) -> Result<Self, ProfileError> {
        profile.validate()?;
        Ok(Self {
            profile,
            accumulator: FormAccumulator::new(),
            clock,
        })
    }

    /// Fold one angle sample into the in-progress repetition
    ///
    /// Called every frame regardless of detector state. Precondition: the
    /// angle is finite; the evaluator performs no input validation.
    pub fn update(&mut self, angle_deg: f32) {
        self.accumulator.record(angle_deg, self.clock.now_nanos());
    }

    /// Grade the completed repetition and reset for the next one
    ///
    /// Called exactly once per detector-signaled completion. When no motion
    /// was accumulated (no inter-frame delta observed) the degenerate range
    /// of motion is meaningless, so a neutral no-data report comes back
    /// instead.
    pub fn finalize(&mut self) -> RepReport {
        if self.accumulator.frame_count() == 0 {
            self.accumulator.reset();
            return RepReport {
                form_correct: true,
                feedback: vec![NO_MOTION_FEEDBACK.to_string()],
                range_of_motion: 0.0,
                rep_time: 0.0,
            };
        }

        let mut feedback = Vec::new();
        let mut form_correct = true;

        let rom = self.accumulator.range_of_motion_deg();
        if let Some(line) = self.profile.rom.classify(rom) {
            feedback.push(line.to_string());
            form_correct = false;
        }

        let (line, pass) = self.profile.depth.classify(self.accumulator.min_angle_deg());
        feedback.push(line.to_string());
        form_correct &= pass;

        let (line, pass) = self
            .profile
            .lockout
            .classify(self.accumulator.max_angle_deg());
        feedback.push(line.to_string());
        form_correct &= pass;

        let rep_time = match self.accumulator.rep_start_nanos() {
            Some(start) => self.clock.elapsed_secs_since(start),
            None => 0.0,
        };
        let (line, pass) = self.profile.tempo.classify(rep_time);
        feedback.push(line.to_string());
        form_correct &= pass;

        if let Some(avg) = self.accumulator.avg_velocity_deg() {
            if let Some(line) = self.profile.smoothness.classify(avg) {
                feedback.push(line.to_string());
                form_correct = false;
            }
        }

        if form_correct {
            feedback.push(self.profile.affirmation.clone());
        }

        self.accumulator.reset();

        RepReport {
            form_correct,
            feedback,
            range_of_motion: round_1dp(rom),
            rep_time: round_2dp(rep_time),
        }
    }

    /// Map the current angle to a short live directive
    ///
    /// Stateless with respect to the accumulator; safe to call every frame.
    pub fn live_status(&self, angle_deg: f32) -> &str {
        self.profile.live_status.status(angle_deg)
    }

    /// Swap the active profile mid-session
    ///
    /// The in-progress accumulator is discarded: statistics gathered under
    /// the old thresholds cannot be graded against the new ones.
    pub fn set_profile(&mut self, profile: ExerciseProfile) -> Result<(), ProfileError> {
        profile.validate()?;
        tracing::debug!(from = %self.profile.name, to = %profile.name, "switching exercise profile");
        self.profile = profile;
        self.accumulator.reset();
        Ok(())
    }

    /// The active profile
    pub fn profile(&self) -> &ExerciseProfile {
        &self.profile
    }
}
