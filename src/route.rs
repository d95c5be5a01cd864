use std::fmt;

use serde::{Deserialize, Serialize};

use crate::state::FlightState;
use crate::utils::{format_duration, NOT_AVAILABLE};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub flight_number: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    /// Total route length in nautical miles.
    #[serde(default)]
    pub distance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationHeader {
    pub flight_number: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub progress: Option<u8>,
    pub time_remaining: String,
}

impl NavigationHeader {
    pub fn new(route: &Route, state: &FlightState) -> Self {
        Self {
            flight_number: route.flight_number.clone(),
            origin: route.origin.clone(),
            destination: route.destination.clone(),
            progress: progress_percent(route.distance, state.distance_to_go),
            time_remaining: format_duration(state.time_to_go),
        }
    }
}

impl fmt::Display for NavigationHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(flight_number) = &self.flight_number {
            write!(f, "{} ", flight_number)?;
        }
        write!(
            f,
            "{} → {} ",
            self.origin.as_deref().unwrap_or("---"),
            self.destination.as_deref().unwrap_or("---"),
        )?;
        match self.progress {
            Some(progress) => write!(f, "{}%", progress)?,
            None => f.write_str(NOT_AVAILABLE)?,
        }
        write!(f, " {}", self.time_remaining)
    }
}

/// Share of the route already flown, in whole percent.
pub fn progress_percent(route_distance: Option<f64>, distance_to_go: Option<f64>) -> Option<u8> {
    let total = route_distance.filter(|d| d.is_finite() && *d > 0.0)?;
    let to_go = distance_to_go.filter(|d| d.is_finite())?;
    let flown = (total - to_go) / total * 100.0;
    Some(flown.floor().clamp(0.0, 100.0) as u8)
}
