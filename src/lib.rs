pub mod error;
pub mod feed;
pub mod gpx;
pub mod history;
pub mod metrics;
pub mod route;
pub mod state;
pub mod utils;

#[cfg(test)]
mod tests;

pub use error::Error;
pub use history::FlightHistory;
pub use metrics::{derive_metrics, DerivedMetric};
pub use state::FlightState;
