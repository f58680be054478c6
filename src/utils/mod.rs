// src/utils/mod.rs
//! Shared utilities

pub mod time;

pub use time::{current_timestamp_nanos, MockTimeProvider, SystemTimeProvider, TimeProvider};

/// Round to one decimal place (used for reported range of motion)
pub fn round_1dp(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (used for reported rep time)
pub fn round_2dp(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round_1dp(129.96), 130.0);
        assert_eq!(round_1dp(45.04), 45.0);
        assert_eq!(round_2dp(1.006), 1.01);
        assert_eq!(round_2dp(0.0), 0.0);
    }
}
