//! This crate contains the iris classifier form, its services and its UI components.

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub use app::IrisClassifier;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
