//! Core business logic - framework-agnostic clock logging, quotes and message rules.

/// Clock-in/clock-out persistence
pub mod clock;
/// Quote file loading and selection
pub mod quotes;
/// Keyword and prefix-command matching for plain messages
pub mod responder;
