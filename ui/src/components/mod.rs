//! User Interface Components
//!
//! Dioxus components for the classifier page:
//!
//! - **input**: measurement inputs with inline validation feedback
//! - **display**: loading overlay, result panel, probability bars and error panel
//! - **forms**: the measurement form and the sample-data buttons
//!
//! Components only render what `FormController` state says and forward events
//! back to it; none of them hold state of their own.

pub mod display;
pub mod forms;
pub mod input;
