// src/counting/rep_counter.rs
//! Two-threshold hysteresis repetition detection
//!
//! A single threshold would re-trigger on every noisy oscillation around it;
//! the detector instead alternates between two triggers separated by the
//! hysteresis band. A repetition is counted only after the angle has crossed
//! below the top threshold and then back above the bottom threshold.

use crate::config::profile::{ExerciseProfile, ProfileError};

/// Which trigger the detector is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Waiting for the angle to drop below the top threshold
    AwaitingTop,
    /// Waiting for the angle to rise back above the bottom threshold
    AwaitingBottom,
}

/// Result of feeding one angle sample to the detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepUpdate {
    /// Cumulative repetitions for the session
    pub rep_count: u32,
    /// True exactly on the sample that completed a repetition
    pub rep_completed: bool,
}

/// Hysteresis state machine over the angle stream
///
/// Precondition: callers feed only finite angle values. The detector performs
/// no input validation of its own; NaN never compares true against either
/// threshold and would silently stall the state machine.
#[derive(Debug, Clone)]
pub struct RepCounter {
    top_threshold_deg: f32,
    bottom_threshold_deg: f32,
    direction: Direction,
    rep_count: u32,
}

impl RepCounter {
    /// Create a detector from raw thresholds
    pub fn new(top_threshold_deg: f32, bottom_threshold_deg: f32) -> Result<Self, ProfileError> {
        if top_threshold_deg >= bottom_threshold_deg {
            return Err(ProfileError::InvertedHysteresis {
                top: top_threshold_deg,
                bottom: bottom_threshold_deg,
            });
        }
        Ok(Self {
            top_threshold_deg,
            bottom_threshold_deg,
            direction: Direction::AwaitingTop,
            rep_count: 0,
        })
    }

    /// Create a detector from a validated profile
    pub fn from_profile(profile: &ExerciseProfile) -> Result<Self, ProfileError> {
        Self::new(profile.top_threshold_deg, profile.bottom_threshold_deg)
    }

    /// Feed one angle sample
    ///
    /// Strict comparisons on both triggers: a sample exactly on a threshold
    /// never transitions.
    pub fn update(&mut self, angle_deg: f32) -> RepUpdate {
        let mut rep_completed = false;

        match self.direction {
            Direction::AwaitingTop => {
                if angle_deg < self.top_threshold_deg {
                    self.direction = Direction::AwaitingBottom;
                }
            }
            Direction::AwaitingBottom => {
                if angle_deg > self.bottom_threshold_deg {
                    self.direction = Direction::AwaitingTop;
                    self.rep_count += 1;
                    rep_completed = true;
                    tracing::debug!(rep_count = self.rep_count, "repetition completed");
                }
            }
        }

        RepUpdate {
            rep_count: self.rep_count,
            rep_completed,
        }
    }

    /// Swap thresholds mid-session, e.g. when the exercise profile changes
    ///
    /// Re-arms the detector at [`Direction::AwaitingTop`] so a half-finished
    /// movement under the old thresholds can neither stall the machine nor
    /// complete spuriously. The cumulative count is preserved.
    pub fn set_thresholds(
        &mut self,
        top_threshold_deg: f32,
        bottom_threshold_deg: f32,
    ) -> Result<(), ProfileError> {
        if top_threshold_deg >= bottom_threshold_deg {
            return Err(ProfileError::InvertedHysteresis {
                top: top_threshold_deg,
                bottom: bottom_threshold_deg,
            });
        }
        self.top_threshold_deg = top_threshold_deg;
        self.bottom_threshold_deg = bottom_threshold_deg;
        self.direction = Direction::AwaitingTop;
        Ok(())
    }

    /// Cumulative repetitions for the session
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// Current detector direction
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
