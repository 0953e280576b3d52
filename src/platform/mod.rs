//! Platform abstraction layer
//!
//! Browser-facing pieces that stay testable off the web:
//! - Keyboard key names to directions

pub mod input;

pub use input::direction_for_key;
