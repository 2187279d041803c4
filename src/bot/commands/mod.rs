//! Discord command implementations.

/// Clock-in, clock-out and last-inserted commands
pub mod clock;

pub use clock::*;
