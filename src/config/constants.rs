// src/config/constants.rs
//! System-wide configuration constants

/// Joint angle constants
pub mod angle {
    /// Fully extended joint, in degrees
    pub const FULL_EXTENSION_DEG: f32 = 180.0;
    /// Fully contracted joint, in degrees
    pub const FULL_CONTRACTION_DEG: f32 = 0.0;
}

/// Default hysteresis thresholds per built-in exercise
pub mod detection {
    pub const PULLUP_TOP_THRESHOLD_DEG: f32 = 60.0;
    pub const PULLUP_BOTTOM_THRESHOLD_DEG: f32 = 150.0;

    pub const PUSHUP_TOP_THRESHOLD_DEG: f32 = 70.0;
    pub const PUSHUP_BOTTOM_THRESHOLD_DEG: f32 = 160.0;

    pub const SQUAT_TOP_THRESHOLD_DEG: f32 = 85.0;
    pub const SQUAT_BOTTOM_THRESHOLD_DEG: f32 = 160.0;
}

/// Tempo bounds per built-in exercise, in seconds
pub mod tempo {
    pub const PULLUP_FAST_S: f32 = 0.8;
    pub const PULLUP_SLOW_S: f32 = 4.0;

    pub const PUSHUP_FAST_S: f32 = 0.9;
    pub const PUSHUP_SLOW_S: f32 = 3.5;

    pub const SQUAT_FAST_S: f32 = 1.1;
    pub const SQUAT_SLOW_S: f32 = 4.2;
}
