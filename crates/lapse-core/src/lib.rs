//! LAPSE Core - Fundamental types and primitives
//!
//! This crate defines the core types shared by the LAPSE timers:
//! - Dynamic parameter values (Value)
//! - Short-circuiting validation chains (ValueChain)
//! - Time primitives (Timestamp)
//! - Error types

pub mod value;
pub mod chain;
pub mod time;
pub mod error;

pub use value::*;
pub use chain::*;
pub use time::*;
pub use error::*;
