//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped browser console logging macros
//! - **platform**: clock, timers and DOM focus/scroll helpers with native fallbacks
//! - **validation**: CSS class and style helpers for validated inputs

pub mod console_macros;
pub mod platform;
pub mod validation;

pub use platform::*;
pub use validation::*;
