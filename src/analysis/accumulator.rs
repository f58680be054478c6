// src/analysis/accumulator.rs
//! Per-repetition motion statistics

/// Running statistics for the repetition currently in progress
///
/// Reset at session start and again after every completed repetition. The
/// rep timer arms on the first sample after a reset, not on construction, so
/// idle time before the athlete starts moving never counts against tempo.
#[derive(Debug, Clone)]
pub struct FormAccumulator {
    min_angle_deg: f32,
    max_angle_deg: f32,
    rep_start_nanos: Option<u64>,
    prev_angle_deg: Option<f32>,
    velocity_sum_deg: f32,
    frame_count: u32,
}

impl FormAccumulator {
    /// Fresh accumulator with no observed motion
    pub fn new() -> Self {
        Self {
            min_angle_deg: f32::INFINITY,
            max_angle_deg: f32::NEG_INFINITY,
            rep_start_nanos: None,
            prev_angle_deg: None,
            velocity_sum_deg: 0.0,
            frame_count: 0,
        }
    }

    /// Fold one angle sample into the running statistics
    pub fn record(&mut self, angle_deg: f32, now_nanos: u64) {
        self.min_angle_deg = self.min_angle_deg.min(angle_deg);
        self.max_angle_deg = self.max_angle_deg.max(angle_deg);

        if self.rep_start_nanos.is_none() {
            self.rep_start_nanos = Some(now_nanos);
        }

        if let Some(prev) = self.prev_angle_deg {
            self.velocity_sum_deg += (angle_deg - prev).abs();
            self.frame_count += 1;
        }
        self.prev_angle_deg = Some(angle_deg);
    }

    /// Return to the initial no-motion state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Range of motion observed so far, degrees
    pub fn range_of_motion_deg(&self) -> f32 {
        self.max_angle_deg - self.min_angle_deg
    }

    /// Minimum angle observed so far
    pub fn min_angle_deg(&self) -> f32 {
        self.min_angle_deg
    }

    /// Maximum angle observed so far
    pub fn max_angle_deg(&self) -> f32 {
        self.max_angle_deg
    }

    /// Timestamp of the first sample after the last reset, if any
    pub fn rep_start_nanos(&self) -> Option<u64> {
        self.rep_start_nanos
    }

    /// Average inter-frame angle delta, or `None` before the second sample
    pub fn avg_velocity_deg(&self) -> Option<f32> {
        (self.frame_count > 0).then(|| self.velocity_sum_deg / self.frame_count as f32)
    }

    /// Number of inter-frame deltas accumulated
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }
}

impl Default for FormAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_extremes() {
        let mut acc = FormAccumulator::new();
        for angle in [120.0, 40.0, 170.0, 90.0] {
            acc.record(angle, 0);
        }
        assert_eq!(acc.min_angle_deg(), 40.0);
        assert_eq!(acc.max_angle_deg(), 170.0);
        assert_eq!(acc.range_of_motion_deg(), 130.0);
    }

    #[test]
    fn test_timer_arms_on_first_sample() {
        let mut acc = FormAccumulator::new();
        assert_eq!(acc.rep_start_nanos(), None);
        acc.record(150.0, 42);
        assert_eq!(acc.rep_start_nanos(), Some(42));
        acc.record(140.0, 99);
        assert_eq!(acc.rep_start_nanos(), Some(42));
    }

    #[test]
    fn test_velocity_needs_two_samples() {
        let mut acc = FormAccumulator::new();
        acc.record(150.0, 0);
        assert_eq!(acc.avg_velocity_deg(), None);
        assert_eq!(acc.frame_count(), 0);

        acc.record(140.0, 0);
        acc.record(150.0, 0);
        assert_eq!(acc.frame_count(), 2);
        assert_eq!(acc.avg_velocity_deg(), Some(10.0));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut acc = FormAccumulator::new();
        acc.record(60.0, 10);
        acc.record(160.0, 20);
        acc.reset();
        assert_eq!(acc.rep_start_nanos(), None);
        assert_eq!(acc.frame_count(), 0);
        assert_eq!(acc.min_angle_deg(), f32::INFINITY);
        assert_eq!(acc.max_angle_deg(), f32::NEG_INFINITY);
    }
}
