use std::fmt;

use serde::Serialize;

use crate::state::FlightState;
use crate::utils::precision::Precision;
use crate::utils::{
    compass_direction, ft_to_m, knots_to_kmh, nm_to_km, CompassPoint, NOT_AVAILABLE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    GroundSpeed,
    Altitude,
    Heading,
    DistanceToGo,
    Latitude,
    Longitude,
}

impl MetricKind {
    pub fn title(self) -> &'static str {
        match self {
            MetricKind::GroundSpeed => "Ground Speed",
            MetricKind::Altitude => "Altitude",
            MetricKind::Heading => "Heading",
            MetricKind::DistanceToGo => "Distance to Go",
            MetricKind::Latitude => "Latitude",
            MetricKind::Longitude => "Longitude",
        }
    }
}

/// The converted companion of a primary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Secondary {
    Value(i64),
    Direction(CompassPoint),
}

impl fmt::Display for Secondary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Secondary::Value(v) => write!(f, "{}", v),
            Secondary::Direction(d) => write!(f, "{}", d),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Hemisphere {
    #[serde(rename = "°N")]
    North,
    #[serde(rename = "°S")]
    South,
    #[serde(rename = "°E")]
    East,
    #[serde(rename = "°W")]
    West,
}

impl Hemisphere {
    pub fn suffix(self) -> &'static str {
        match self {
            Hemisphere::North => "°N",
            Hemisphere::South => "°S",
            Hemisphere::East => "°E",
            Hemisphere::West => "°W",
        }
    }
}

/// A latitude or longitude split for display. The fraction holds the first three decimal
/// digits, truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Coordinate {
    pub whole: u32,
    pub fraction: u16,
    pub hemisphere: Hemisphere,
}

impl Coordinate {
    /// `None` for a non-finite input.
    fn latitude(lat: f64) -> Option<Self> {
        let hemisphere = if lat >= 0.0 {
            Hemisphere::North
        } else {
            Hemisphere::South
        };
        Self::decompose(lat, hemisphere)
    }

    /// `None` for a non-finite input.
    fn longitude(lon: f64) -> Option<Self> {
        let hemisphere = if lon >= 0.0 {
            Hemisphere::East
        } else {
            Hemisphere::West
        };
        Self::decompose(lon, hemisphere)
    }

    fn decompose(deg: f64, hemisphere: Hemisphere) -> Option<Self> {
        if !deg.is_finite() {
            return None;
        }
        let abs = deg.abs();
        Some(Coordinate {
            whole: abs.floor() as u32,
            fraction: (((abs % 1.0) * 1000.0).floor() as u16).min(999),
            hemisphere,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:03}{}",
            self.whole,
            self.fraction,
            self.hemisphere.suffix()
        )
    }
}

/// A gauge value ready for display. A `primary` of `None` means the telemetry did not supply
/// the value, which is different from a reading of zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMetric {
    pub kind: MetricKind,
    pub title: &'static str,
    pub primary: Option<i64>,
    pub primary_unit: &'static str,
    pub secondary: Option<Secondary>,
    pub secondary_unit: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

impl DerivedMetric {
    fn scalar(
        kind: MetricKind,
        primary: Option<(i64, Secondary)>,
        primary_unit: &'static str,
        secondary_unit: &'static str,
    ) -> Self {
        let (primary, secondary) = match primary {
            Some((p, s)) => (Some(p), Some(s)),
            None => (None, None),
        };
        DerivedMetric {
            kind,
            title: kind.title(),
            primary,
            primary_unit,
            secondary,
            secondary_unit,
            coordinate: None,
        }
    }

    fn coordinate(kind: MetricKind, coordinate: Option<Coordinate>) -> Self {
        DerivedMetric {
            kind,
            title: kind.title(),
            primary: coordinate.map(|c| i64::from(c.whole)),
            primary_unit: coordinate.map_or("", |c| c.hemisphere.suffix()),
            secondary: None,
            secondary_unit: "",
            coordinate,
        }
    }

    pub fn is_available(&self) -> bool {
        self.primary.is_some()
    }
}

impl fmt::Display for DerivedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.title)?;

        if let Some(coordinate) = &self.coordinate {
            return write!(f, "{}", coordinate);
        }

        let primary = match self.primary {
            Some(primary) => primary,
            None => return f.write_str(NOT_AVAILABLE),
        };
        if self.primary_unit.starts_with('°') {
            write!(f, "{}{}", primary, self.primary_unit)?;
        } else {
            write!(f, "{} {}", primary, self.primary_unit)?;
        }

        if let Some(secondary) = &self.secondary {
            if self.secondary_unit.is_empty() {
                write!(f, " ({})", secondary)?;
            } else {
                write!(f, " ({} {})", secondary, self.secondary_unit)?;
            }
        }

        Ok(())
    }
}

/// Derive the dashboard gauges from a single snapshot, in display order: ground speed,
/// altitude, heading, distance to go, latitude, longitude.
pub fn derive_metrics(state: &FlightState) -> Vec<DerivedMetric> {
    vec![
        ground_speed(state.groundspeed),
        altitude(state.altitude),
        heading(state.heading),
        distance_to_go(state.distance_to_go),
        DerivedMetric::coordinate(MetricKind::Latitude, Coordinate::latitude(state.latitude)),
        DerivedMetric::coordinate(
            MetricKind::Longitude,
            Coordinate::longitude(state.longitude),
        ),
    ]
}

fn ground_speed(kt: f64) -> DerivedMetric {
    let value = (kt.is_finite() && kt >= 0.0).then(|| {
        (
            kt.floor() as i64,
            Secondary::Value(knots_to_kmh(kt) as i64),
        )
    });
    DerivedMetric::scalar(MetricKind::GroundSpeed, value, "kt", "km/h")
}

fn altitude(ft: f64) -> DerivedMetric {
    let value = ft
        .is_finite()
        .then(|| (ft.floor() as i64, Secondary::Value(ft_to_m(ft) as i64)));
    DerivedMetric::scalar(MetricKind::Altitude, value, "ft", "m")
}

fn heading(deg: Option<f64>) -> DerivedMetric {
    // The absolute value is displayed, so -10° reads as 10° (and not 350°).
    let value = deg.filter(|deg| deg.is_finite()).map(|deg| {
        (
            deg.abs().floor() as i64,
            Secondary::Direction(compass_direction(deg)),
        )
    });
    DerivedMetric::scalar(MetricKind::Heading, value, "°", "")
}

fn distance_to_go(nm: Option<f64>) -> DerivedMetric {
    let value = nm.filter(|nm| nm.is_finite()).map(|nm| {
        // km is converted from the truncated nm value, not the raw one.
        let nm = nm.floor();
        (
            nm as i64,
            Secondary::Value(nm_to_km(nm).max_precision(0) as i64),
        )
    });
    DerivedMetric::scalar(MetricKind::DistanceToGo, value, "nm", "km")
}
