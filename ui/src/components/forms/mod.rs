pub mod measurement_form;
pub mod sample_buttons;

pub use measurement_form::*;
pub use sample_buttons::*;
