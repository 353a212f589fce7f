//! Iris Classifier Form
//!
//! Headless form logic for the iris classifier. Nothing in here touches the
//! DOM, so the whole flow can be driven and tested without a browser:
//!
//! - **types**: measurement fields, species tables, request/response, `UiState`
//! - **form_validation**: per-field validation rules and messages
//! - **rendering**: derives the result panel contents from a backend response
//! - **controller**: `FormController`, the state machine behind the form
//! - **keyboard**: modifier-key shortcuts
//!
//! # Usage
//!
//! ```ignore
//! use ui::features::classifier::FormController;
//!
//! let mut controller = FormController::new();
//! controller.load_sample("setosa");
//! controller.submit(&dispatcher).await;
//! ```

pub mod controller;
pub mod form_validation;
pub mod keyboard;
pub mod rendering;
pub mod types;

#[cfg(test)]
pub mod submission_test;

pub use controller::*;
pub use form_validation::*;
pub use keyboard::*;
pub use rendering::*;
pub use types::*;
