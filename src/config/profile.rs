// src/config/profile.rs
//! Per-exercise configuration profiles
//!
//! An [`ExerciseProfile`] carries everything that differs between exercises:
//! the hysteresis thresholds that drive repetition detection and the band
//! tables that grade a completed repetition. Classification logic is shared;
//! only the numbers and feedback strings change per exercise, so there is one
//! evaluator parameterized by a profile instead of one type per exercise.

use crate::config::constants::{detection, tempo};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Profile construction/validation failures
///
/// A profile that fails validation must never reach the detector or the
/// evaluator; both assume the invariants checked here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// The detector cannot alternate if the two triggers overlap
    #[error("hysteresis thresholds inverted: top {top} deg must be below bottom {bottom} deg")]
    InvertedHysteresis {
        /// Configured top threshold in degrees
        top: f32,
        /// Configured bottom threshold in degrees
        bottom: f32,
    },

    /// Band thresholds must be ordered worst case first
    #[error("{check} bands not ordered worst to best: {prev} deg followed by {next} deg")]
    NonMonotonicBands {
        /// Which band table failed validation
        check: &'static str,
        /// Threshold preceding the violation
        prev: f32,
        /// Threshold at the violation
        next: f32,
    },

    /// Drastic ROM cutoff must sit below the partial cutoff
    #[error("range-of-motion cutoffs inverted: drastic {drastic} deg must be below partial {partial} deg")]
    InvertedRomCutoffs {
        /// Severe cutoff in degrees
        drastic: f32,
        /// Moderate cutoff in degrees
        partial: f32,
    },

    /// Fast tempo bound must sit below the slow bound
    #[error("tempo bounds inverted: fast {fast} s must be below slow {slow} s")]
    InvertedTempoBounds {
        /// Too-fast bound in seconds
        fast: f32,
        /// Slow-but-controlled bound in seconds
        slow: f32,
    },

    /// Average inter-frame delta bound must be positive
    #[error("smoothness bound must be positive, got {0}")]
    NonPositiveSmoothness(f32),

    /// Every live status band must sit below the upper band threshold
    #[error("live status band at {band} deg must be below the upper threshold {upper} deg")]
    LiveBandAboveUpper {
        /// Offending lower band threshold
        band: f32,
        /// Upper band threshold
        upper: f32,
    },

    /// Profiles are looked up by name; an empty name is unusable
    #[error("exercise profile name must not be empty")]
    EmptyName,
}

/// One feedback band: a threshold and the line reported when it is hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBand {
    /// Band threshold in degrees
    pub threshold_deg: f32,
    /// Feedback line reported for this band
    pub message: String,
}

/// Which side of a band threshold counts as failing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailSide {
    /// Values below the threshold fall into the band (lockout checks)
    Below,
    /// Values above the threshold fall into the band (depth checks)
    Above,
}

/// Graded classification table, ordered worst band first
///
/// Exactly one line comes out of a graded check: the first band the value
/// falls into, or the pass message when it clears every band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradedCheck {
    /// Side of each threshold that counts as failing
    pub fail_side: FailSide,
    /// Line reported when the value clears every band
    pub pass_message: String,
    /// Bands ordered from most to least severe
    pub bands: Vec<FeedbackBand>,
}

impl GradedCheck {
    /// Classify a value; returns the feedback line and whether it passed
    pub fn classify(&self, value: f32) -> (&str, bool) {
        for band in &self.bands {
            let hit = match self.fail_side {
                FailSide::Below => value < band.threshold_deg,
                FailSide::Above => value > band.threshold_deg,
            };
            if hit {
                return (&band.message, false);
            }
        }
        (&self.pass_message, true)
    }

    fn validate(&self, check: &'static str) -> Result<(), ProfileError> {
        for pair in self.bands.windows(2) {
            let ordered = match self.fail_side {
                // Worst band first: lockout thresholds ascend, depth descend.
                FailSide::Below => pair[0].threshold_deg < pair[1].threshold_deg,
                FailSide::Above => pair[0].threshold_deg > pair[1].threshold_deg,
            };
            if !ordered {
                return Err(ProfileError::NonMonotonicBands {
                    check,
                    prev: pair[0].threshold_deg,
                    next: pair[1].threshold_deg,
                });
            }
        }
        Ok(())
    }
}

/// Range-of-motion cutoffs with severity-graded feedback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomCheck {
    /// Below this span the repetition barely moved
    pub drastic_below_deg: f32,
    /// Below this span the repetition was incomplete
    pub partial_below_deg: f32,
    /// Feedback for the severe case
    pub drastic_message: String,
    /// Feedback for the moderate case
    pub partial_message: String,
}

impl RomCheck {
    /// Feedback line for the given span, or `None` when the span is acceptable
    pub fn classify(&self, rom_deg: f32) -> Option<&str> {
        if rom_deg < self.drastic_below_deg {
            Some(&self.drastic_message)
        } else if rom_deg < self.partial_below_deg {
            Some(&self.partial_message)
        } else {
            None
        }
    }
}

/// Tempo bounds in seconds with the three possible verdict lines
///
/// Finishing faster than `fast_s` is the only tempo fault; a slow repetition
/// is praised, not penalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempoCheck {
    /// Repetitions shorter than this are uncontrolled
    pub fast_s: f32,
    /// Repetitions longer than this show deliberate control
    pub slow_s: f32,
    /// Feedback when the repetition was too fast
    pub too_fast_message: String,
    /// Feedback when the repetition exceeded the slow bound
    pub controlled_message: String,
    /// Feedback for an in-range tempo
    pub steady_message: String,
}

impl TempoCheck {
    /// Classify a rep time; returns the feedback line and whether it passed
    pub fn classify(&self, rep_time_s: f32) -> (&str, bool) {
        if rep_time_s < self.fast_s {
            (&self.too_fast_message, false)
        } else if rep_time_s > self.slow_s {
            (&self.controlled_message, true)
        } else {
            (&self.steady_message, true)
        }
    }
}

/// Bound on the average inter-frame angle delta
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothnessCheck {
    /// Maximum acceptable average delta in degrees per frame
    pub max_avg_delta_deg: f32,
    /// Feedback when the motion was too jerky
    pub message: String,
}

impl SmoothnessCheck {
    /// Feedback line for the given average delta, or `None` when acceptable
    pub fn classify(&self, avg_delta_deg: f32) -> Option<&str> {
        (avg_delta_deg > self.max_avg_delta_deg).then_some(self.message.as_str())
    }
}

/// Angle bands mapped to short live directives for the display collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveStatusBands {
    /// Directive when no band matches
    pub default_status: String,
    /// Matched first: angle strictly above this threshold
    pub upper: FeedbackBand,
    /// Matched next, ascending: angle strictly below the threshold
    pub lower: Vec<FeedbackBand>,
}

impl LiveStatusBands {
    /// Map an angle to its live directive
    pub fn status(&self, angle_deg: f32) -> &str {
        if angle_deg > self.upper.threshold_deg {
            return &self.upper.message;
        }
        for band in &self.lower {
            if angle_deg < band.threshold_deg {
                return &band.message;
            }
        }
        &self.default_status
    }

    fn validate(&self) -> Result<(), ProfileError> {
        for pair in self.lower.windows(2) {
            if pair[0].threshold_deg >= pair[1].threshold_deg {
                return Err(ProfileError::NonMonotonicBands {
                    check: "live status",
                    prev: pair[0].threshold_deg,
                    next: pair[1].threshold_deg,
                });
            }
        }
        for band in &self.lower {
            if band.threshold_deg >= self.upper.threshold_deg {
                return Err(ProfileError::LiveBandAboveUpper {
                    band: band.threshold_deg,
                    upper: self.upper.threshold_deg,
                });
            }
        }
        Ok(())
    }
}

/// Immutable per-exercise configuration
///
/// Read-only after a successful [`ExerciseProfile::validate`]; the detector
/// and evaluator both assume the invariants it checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    /// Exercise name used for catalog lookup
    pub name: String,
    /// Detector trigger for the contracted position, degrees
    pub top_threshold_deg: f32,
    /// Detector trigger for the extended position, degrees
    pub bottom_threshold_deg: f32,
    /// Closing line appended when every check passed
    pub affirmation: String,
    /// Range-of-motion cutoffs
    pub rom: RomCheck,
    /// Contraction quality bands over the minimum angle reached
    pub depth: GradedCheck,
    /// Extension quality bands over the maximum angle reached
    pub lockout: GradedCheck,
    /// Tempo bounds
    pub tempo: TempoCheck,
    /// Swing bound on average inter-frame delta
    pub smoothness: SmoothnessCheck,
    /// Live directive bands
    pub live_status: LiveStatusBands,
}

impl ExerciseProfile {
    /// Validate every invariant the detector and evaluator rely on
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }
        if self.top_threshold_deg >= self.bottom_threshold_deg {
            return Err(ProfileError::InvertedHysteresis {
                top: self.top_threshold_deg,
                bottom: self.bottom_threshold_deg,
            });
        }
        if self.rom.drastic_below_deg >= self.rom.partial_below_deg {
            return Err(ProfileError::InvertedRomCutoffs {
                drastic: self.rom.drastic_below_deg,
                partial: self.rom.partial_below_deg,
            });
        }
        if self.tempo.fast_s >= self.tempo.slow_s {
            return Err(ProfileError::InvertedTempoBounds {
                fast: self.tempo.fast_s,
                slow: self.tempo.slow_s,
            });
        }
        if self.smoothness.max_avg_delta_deg <= 0.0 {
            return Err(ProfileError::NonPositiveSmoothness(
                self.smoothness.max_avg_delta_deg,
            ));
        }
        self.depth.validate("depth")?;
        self.lockout.validate("lockout")?;
        self.live_status.validate()?;
        Ok(())
    }

    /// Elbow-angle pull-up profile
    pub fn pullup() -> Self {
        Self {
            name: "pullup".to_string(),
            top_threshold_deg: detection::PULLUP_TOP_THRESHOLD_DEG,
            bottom_threshold_deg: detection::PULLUP_BOTTOM_THRESHOLD_DEG,
            rom: RomCheck {
                drastic_below_deg: 50.0,
                partial_below_deg: 90.0,
                drastic_message: "Drastic partial range! Commit to the full pull".to_string(),
                partial_message: "Increase range of motion".to_string(),
            },
            depth: GradedCheck {
                fail_side: FailSide::Above,
                bands: vec![FeedbackBand {
                    threshold_deg: 55.0,
                    message: "Pull higher".to_string(),
                }],
                pass_message: "Good pull height".to_string(),
            },
            lockout: GradedCheck {
                fail_side: FailSide::Below,
                bands: vec![FeedbackBand {
                    threshold_deg: 145.0,
                    message: "Extend fully".to_string(),
                }],
                pass_message: "Full extension correct".to_string(),
            },
            tempo: TempoCheck {
                fast_s: tempo::PULLUP_FAST_S,
                slow_s: tempo::PULLUP_SLOW_S,
                too_fast_message: "Too fast - slow down".to_string(),
                controlled_message: "Good control".to_string(),
                steady_message: "Nice tempo".to_string(),
            },
            smoothness: SmoothnessCheck {
                max_avg_delta_deg: 8.0,
                message: "Reduce swinging".to_string(),
            },
            live_status: LiveStatusBands {
                upper: FeedbackBand {
                    threshold_deg: 160.0,
                    message: "PULL UP".to_string(),
                },
                lower: vec![
                    FeedbackBand {
                        threshold_deg: 70.0,
                        message: "GREAT HEIGHT - LOWER DOWN".to_string(),
                    },
                    FeedbackBand {
                        threshold_deg: 110.0,
                        message: "ALMOST AT THE TOP".to_string(),
                    },
                ],
                default_status: "KEEP MOVING".to_string(),
            },
            affirmation: "Perfect Pull-Up!".to_string(),
        }
    }

    /// Elbow-angle push-up profile
    pub fn pushup() -> Self {
        Self {
            name: "pushup".to_string(),
            top_threshold_deg: detection::PUSHUP_TOP_THRESHOLD_DEG,
            bottom_threshold_deg: detection::PUSHUP_BOTTOM_THRESHOLD_DEG,
            rom: RomCheck {
                drastic_below_deg: 60.0,
                partial_below_deg: 80.0,
                drastic_message: "Drastic partial range! Move deeper between top and bottom."
                    .to_string(),
                partial_message: "Increase range of motion for better chest engagement"
                    .to_string(),
            },
            depth: GradedCheck {
                fail_side: FailSide::Above,
                bands: vec![
                    FeedbackBand {
                        threshold_deg: 95.0,
                        message: "DEPTH ERROR: Go lower, chest closer to floor".to_string(),
                    },
                    FeedbackBand {
                        threshold_deg: 80.0,
                        message: "Good depth, but can go slightly lower".to_string(),
                    },
                ],
                pass_message: "Excellent depth reached".to_string(),
            },
            lockout: GradedCheck {
                fail_side: FailSide::Below,
                bands: vec![
                    FeedbackBand {
                        threshold_deg: 150.0,
                        message: "LOCKOUT ERROR: Fully straighten arms at the top".to_string(),
                    },
                    FeedbackBand {
                        threshold_deg: 165.0,
                        message: "Almost full lockout - push all the way up".to_string(),
                    },
                ],
                pass_message: "Good full lockout reached".to_string(),
            },
            tempo: TempoCheck {
                fast_s: tempo::PUSHUP_FAST_S,
                slow_s: tempo::PUSHUP_SLOW_S,
                too_fast_message: "Too fast - control the descent and push".to_string(),
                controlled_message: "Great steady control".to_string(),
                steady_message: "Solid tempo".to_string(),
            },
            smoothness: SmoothnessCheck {
                max_avg_delta_deg: 10.0,
                message: "Reduce body sway".to_string(),
            },
            live_status: LiveStatusBands {
                upper: FeedbackBand {
                    threshold_deg: 160.0,
                    message: "LOWER YOUR CHEST".to_string(),
                },
                lower: vec![
                    FeedbackBand {
                        threshold_deg: 75.0,
                        message: "GREAT DEPTH - PUSH UP".to_string(),
                    },
                    FeedbackBand {
                        threshold_deg: 110.0,
                        message: "ALMOST AT BOTTOM".to_string(),
                    },
                ],
                default_status: "KEEP MOVING".to_string(),
            },
            affirmation: "PRO FORM: Perfect Push-up!".to_string(),
        }
    }

    /// Knee-angle squat profile
    pub fn squat() -> Self {
        Self {
            name: "squat".to_string(),
            top_threshold_deg: detection::SQUAT_TOP_THRESHOLD_DEG,
            bottom_threshold_deg: detection::SQUAT_BOTTOM_THRESHOLD_DEG,
            rom: RomCheck {
                drastic_below_deg: 70.0,
                partial_below_deg: 95.0,
                drastic_message: "Drastic partial range! Squat deeper for effective results."
                    .to_string(),
                partial_message: "Incomplete range - focus on hip-to-knee depth".to_string(),
            },
            depth: GradedCheck {
                fail_side: FailSide::Above,
                bands: vec![
                    FeedbackBand {
                        threshold_deg: 90.0,
                        message: "DEPTH ERROR: Hips must reach at least knee level".to_string(),
                    },
                    FeedbackBand {
                        threshold_deg: 75.0,
                        message: "Good depth, parallel point achieved".to_string(),
                    },
                ],
                pass_message: "Excellent depth - below parallel!".to_string(),
            },
            lockout: GradedCheck {
                fail_side: FailSide::Below,
                bands: vec![
                    FeedbackBand {
                        threshold_deg: 155.0,
                        message: "LOCKOUT ERROR: Stand up fully at the top".to_string(),
                    },
                    FeedbackBand {
                        threshold_deg: 170.0,
                        message: "Almost full stand - push hips forward at top".to_string(),
                    },
                ],
                pass_message: "Good full lockout reached".to_string(),
            },
            tempo: TempoCheck {
                fast_s: tempo::SQUAT_FAST_S,
                slow_s: tempo::SQUAT_SLOW_S,
                too_fast_message: "Too fast - control the descent to avoid injury".to_string(),
                controlled_message: "Great steady control".to_string(),
                steady_message: "Solid tempo".to_string(),
            },
            smoothness: SmoothnessCheck {
                max_avg_delta_deg: 9.0,
                message: "Control the movement - no bouncing".to_string(),
            },
            live_status: LiveStatusBands {
                upper: FeedbackBand {
                    threshold_deg: 165.0,
                    message: "SQUAT DOWN".to_string(),
                },
                lower: vec![
                    FeedbackBand {
                        threshold_deg: 85.0,
                        message: "EXCELLENT DEPTH - STAND UP".to_string(),
                    },
                    FeedbackBand {
                        threshold_deg: 110.0,
                        message: "ALMOST AT PARALLEL".to_string(),
                    },
                ],
                default_status: "KEEP MOVING".to_string(),
            },
            affirmation: "PRO FORM: Perfect Squat!".to_string(),
        }
    }
}
