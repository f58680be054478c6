// src/analysis/mod.rs
//! Per-repetition motion statistics and form grading

pub mod accumulator;
pub mod evaluator;

pub use accumulator::FormAccumulator;
pub use evaluator::{FormEvaluator, RepReport, NO_MOTION_FEEDBACK};
