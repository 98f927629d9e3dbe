//! # Compatibility Utilities

pub mod timers;
