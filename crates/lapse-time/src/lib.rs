//! LAPSE Time - labeled stopwatch entries
//!
//! This crate implements the time entry:
//! - Ready / Running / Stopped state machine
//! - Start flag validated through a ValueChain
//! - Elapsed duration for running and stopped entries

pub mod config;
pub mod entry;

pub use config::*;
pub use entry::*;
