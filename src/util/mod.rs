//! Shared utilities for the headless runner.

pub mod frame_timing;

pub use frame_timing::FrameTiming;
