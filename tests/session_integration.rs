// tests/session_integration.rs
//! End-to-end session tests driving the detector and evaluator in lockstep.

use reptrack_core::config::profile::{
    ExerciseProfile, FailSide, FeedbackBand, GradedCheck, LiveStatusBands, RomCheck,
    SmoothnessCheck, TempoCheck,
};
use reptrack_core::session::SessionTracker;
use reptrack_core::utils::time::MockTimeProvider;
use reptrack_core::NO_MOTION_FEEDBACK;
use std::sync::Arc;

/// Pull-up-like profile with a wide hysteresis band (top=65, bottom=155) and
/// bounds sized for the coarse sample sequences used below.
fn scenario_profile() -> ExerciseProfile {
    ExerciseProfile {
        name: "scenario_pullup".to_string(),
        top_threshold_deg: 65.0,
        bottom_threshold_deg: 155.0,
        rom: RomCheck {
            drastic_below_deg: 50.0,
            partial_below_deg: 90.0,
            drastic_message: "Drastic partial range".to_string(),
            partial_message: "Increase range of motion".to_string(),
        },
        depth: GradedCheck {
            fail_side: FailSide::Above,
            bands: vec![FeedbackBand {
                threshold_deg: 65.0,
                message: "Pull higher".to_string(),
            }],
            pass_message: "Good pull height".to_string(),
        },
        lockout: GradedCheck {
            fail_side: FailSide::Below,
            bands: vec![FeedbackBand {
                threshold_deg: 150.0,
                message: "Extend fully".to_string(),
            }],
            pass_message: "Full extension correct".to_string(),
        },
        tempo: TempoCheck {
            fast_s: 0.8,
            slow_s: 4.0,
            too_fast_message: "Too fast".to_string(),
            controlled_message: "Good control".to_string(),
            steady_message: "Nice tempo".to_string(),
        },
        smoothness: SmoothnessCheck {
            max_avg_delta_deg: 45.0,
            message: "Reduce swinging".to_string(),
        },
        live_status: LiveStatusBands {
            upper: FeedbackBand {
                threshold_deg: 175.0,
                message: "PULL UP".to_string(),
            },
            lower: vec![FeedbackBand {
                threshold_deg: 80.0,
                message: "GREAT HEIGHT".to_string(),
            }],
            default_status: "KEEP MOVING".to_string(),
        },
        affirmation: "Perfect form".to_string(),
    }
}

fn session() -> (SessionTracker, Arc<MockTimeProvider>) {
    let clock = Arc::new(MockTimeProvider::new(0));
    let tracker = SessionTracker::with_clock(scenario_profile(), clock.clone()).unwrap();
    (tracker, clock)
}

#[test]
fn scenario_a_full_cycle_counts_once_with_clean_form() {
    let (mut tracker, clock) = session();
    let mut completions = Vec::new();

    for angle in [170.0, 150.0, 100.0, 60.0, 100.0, 150.0, 170.0] {
        let outcome = tracker.process_sample(angle).unwrap();
        clock.advance_secs(0.3); // ~1.8 s to completion, past the fast bound
        if let Some(report) = outcome.completed_rep {
            completions.push(report);
        }
    }

    assert_eq!(completions.len(), 1);
    assert_eq!(tracker.rep_count(), 1);

    let report = &completions[0];
    assert!(report.form_correct, "feedback: {:?}", report.feedback);
    assert_eq!(report.feedback.last().unwrap(), "Perfect form");
    assert_eq!(report.range_of_motion, 110.0);
}

#[test]
fn scenario_b_oscillation_above_top_never_counts() {
    let (mut tracker, clock) = session();
    let mut statuses = Vec::new();

    for _ in 0..40 {
        for angle in [170.0, 135.0, 100.0, 135.0] {
            let outcome = tracker.process_sample(angle).unwrap();
            clock.advance_secs(0.1);
            statuses.push(outcome.live_status);
            assert!(outcome.completed_rep.is_none());
        }
    }

    assert_eq!(tracker.rep_count(), 0);
    // The whole oscillation sits inside a single mid-range status band.
    assert!(statuses.iter().all(|s| s == "KEEP MOVING"));
}

#[test]
fn scenario_c_mid_session_reconfiguration_resets_direction_only() {
    let (mut tracker, _clock) = session();

    // Cross below top: the detector is now awaiting the bottom trigger.
    tracker.process_sample(170.0).unwrap();
    tracker.process_sample(60.0).unwrap();

    let mut reconfigured = scenario_profile();
    reconfigured.name = "scenario_narrow".to_string();
    reconfigured.top_threshold_deg = 90.0;
    reconfigured.bottom_threshold_deg = 140.0;
    tracker.set_profile(reconfigured).unwrap();

    // Direction was re-armed at awaiting-top: a rise above the new bottom
    // threshold must not complete the half-finished old movement.
    let outcome = tracker.process_sample(150.0).unwrap();
    assert!(outcome.completed_rep.is_none());
    assert_eq!(tracker.rep_count(), 0);

    // A full cycle under the new thresholds counts normally.
    tracker.process_sample(80.0).unwrap();
    let outcome = tracker.process_sample(150.0).unwrap();
    assert_eq!(outcome.rep_count, 1);
}

#[test]
fn feedback_order_is_rom_depth_lockout_tempo_smoothness() {
    // Tightened grading bands: a minimal detector cycle (span just over the
    // 90 degree hysteresis band) fails every check at once.
    let mut strict = scenario_profile();
    strict.name = "scenario_strict".to_string();
    strict.rom.drastic_below_deg = 100.0;
    strict.rom.partial_below_deg = 120.0;
    strict.depth.bands[0].threshold_deg = 60.0;
    strict.lockout.bands[0].threshold_deg = 160.0;
    strict.smoothness.max_avg_delta_deg = 25.0;

    let clock = Arc::new(MockTimeProvider::new(0));
    let mut tracker = SessionTracker::with_clock(strict, clock.clone()).unwrap();

    let mut report = None;
    for angle in [70.0, 64.0, 70.0, 156.0] {
        let outcome = tracker.process_sample(angle).unwrap();
        clock.advance_secs(0.05);
        if outcome.completed_rep.is_some() {
            report = outcome.completed_rep;
        }
    }
    let report = report.expect("cycle crossed both thresholds");

    assert!(!report.form_correct);
    assert_eq!(
        report.feedback,
        vec![
            "Drastic partial range",
            "Pull higher",
            "Extend fully",
            "Too fast",
            "Reduce swinging",
        ]
    );
}

#[test]
fn rep_count_is_monotonic_across_a_noisy_session() {
    let (mut tracker, clock) = session();
    let mut last = 0;

    for i in 0..600 {
        // Sawtooth sweep with a wobble, spanning both thresholds.
        let base = 115.0 + 60.0 * ((i as f32 * 0.21).sin());
        let wobble = 8.0 * ((i as f32 * 1.7).cos());
        let outcome = tracker.process_sample(base + wobble).unwrap();
        clock.advance_secs(0.033);

        assert!(outcome.rep_count >= last);
        last = outcome.rep_count;
    }
}

#[test]
fn finalize_after_completion_reports_no_data_until_new_motion() {
    let (mut tracker, clock) = session();

    for angle in [170.0, 60.0, 100.0, 160.0] {
        tracker.process_sample(angle).unwrap();
        clock.advance_secs(0.5);
    }
    assert_eq!(tracker.rep_count(), 1);

    // Immediately drive another detector cycle with just two samples. The
    // evaluator was reset on completion, so the second report reflects only
    // the new motion, never stale extremes from the first repetition.
    tracker.process_sample(60.0).unwrap();
    clock.advance_secs(0.5);
    let outcome = tracker.process_sample(160.0).unwrap();
    let report = outcome.completed_rep.unwrap();

    assert_eq!(report.range_of_motion, 100.0);
    assert!(!report.feedback.contains(&NO_MOTION_FEEDBACK.to_string()));
}
