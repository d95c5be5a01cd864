use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

/// One telemetry reading as delivered by the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightState {
    /// Ground speed in knots.
    pub groundspeed: f64,
    /// Altitude in feet.
    pub altitude: f64,
    /// Heading in degrees.
    #[serde(default)]
    pub heading: Option<f64>,
    /// Remaining distance in nautical miles.
    #[serde(default)]
    pub distance_to_go: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    /// Remaining flight time in minutes.
    #[serde(default)]
    pub time_to_go: Option<f64>,
    /// Either RFC 3339 text or Unix epoch milliseconds.
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl FlightState {
    /// The reading's timestamp in UTC, or `None` if it is missing or cannot be parsed.
    pub fn time(&self) -> Option<OffsetDateTime> {
        let raw = self.timestamp.as_deref()?.trim();
        let time = match raw.parse::<i64>() {
            Ok(millis) => {
                OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()?
            }
            Err(_) => OffsetDateTime::parse(raw, &Rfc3339).ok()?,
        };
        Some(time.to_offset(UtcOffset::UTC))
    }
}
