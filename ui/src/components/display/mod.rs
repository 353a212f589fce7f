pub mod error_panel;
pub mod loading_indicator;
pub mod probability_bars;
pub mod result_panel;

pub use error_panel::*;
pub use loading_indicator::*;
pub use probability_bars::*;
pub use result_panel::*;
