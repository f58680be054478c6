// src/counting/mod.rs
//! Repetition detection over the per-frame angle stream

pub mod rep_counter;

pub use rep_counter::{Direction, RepCounter, RepUpdate};
