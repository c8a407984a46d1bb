//! Small utilities shared across components.

pub mod task;
pub mod viewport;
