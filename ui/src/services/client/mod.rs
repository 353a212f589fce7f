// Client-side prediction service
//
// This module provides everything needed to talk to the prediction backend:
// - A transport seam (`PredictionTransport`) with a reqwest implementation
// - The dispatcher that applies the timeout and interprets responses

pub mod dispatcher;
pub mod transport;


pub use dispatcher::PredictionDispatcher;
pub use transport::{HttpTransport, PredictionTransport, RawResponse};
