//! Infrastructure Services
//!
//! - **client**: transport and dispatcher for the prediction backend
//! - **config**: static endpoint and timeout settings
//! - **errors**: errors that can follow a submission
//!
//! The services are WASM-first, using async traits without Send bounds.

pub mod client;
pub mod config;
pub mod errors;
