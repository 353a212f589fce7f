//! Feature modules
//!
//! - **classifier**: the iris measurement form, its validation and its result state

pub mod classifier;
