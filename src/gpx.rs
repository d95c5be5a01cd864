use std::path::{Path, PathBuf};

use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

use crate::error::Error;
use crate::state::FlightState;
use crate::utils::ft_to_m_exact;
use crate::utils::precision::Precision;

const DEFAULT_NAME: &str = "flight";

/// Receives finished export documents.
pub trait FileSink {
    fn save(&mut self, filename: &str, contents: &str) -> Result<(), Error>;
}

/// Writes exported documents into a directory.
pub struct DirSink {
    dir: PathBuf,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirSink {
    fn save(&mut self, filename: &str, contents: &str) -> Result<(), Error> {
        let path = self.dir.join(filename);
        std::fs::write(&path, contents)?;
        tracing::info!(path = %path.display(), "GPX track saved");
        Ok(())
    }
}

/// Export the snapshots as a GPX track and hand it to `sink`. Returns the name of the saved
/// file, or `None` (without calling the sink) if there is nothing to export.
#[tracing::instrument(skip_all, fields(points = points.len()))]
pub fn export(
    points: &[FlightState],
    flight_number: Option<&str>,
    sink: &mut impl FileSink,
) -> Result<Option<String>, Error> {
    let name = track_name(flight_number);
    let doc = match to_gpx(points, name)? {
        Some(doc) => doc,
        None => {
            tracing::debug!("nothing to export");
            return Ok(None);
        }
    };

    let filename = gpx_filename(flight_number);
    sink.save(&filename, &doc)?;
    Ok(Some(filename))
}

/// File name for an export, e.g. `UA123.gpx`, or `flight.gpx` without a flight number.
pub fn gpx_filename(flight_number: Option<&str>) -> String {
    let name: String = track_name(flight_number)
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    format!("{}.gpx", name)
}

fn track_name(flight_number: Option<&str>) -> &str {
    flight_number
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME)
}

/// Render a GPX 1.1 document with a single track segment. Returns `None` for an empty input.
///
/// Points with missing or out of range coordinates are left out. A point whose timestamp is
/// missing or malformed is kept without a `<time>` element.
pub fn to_gpx(points: &[FlightState], name: &str) -> Result<Option<String>, Error> {
    if points.is_empty() {
        return Ok(None);
    }

    let mut segment = TrackSegment::new();
    for (i, point) in points.iter().enumerate() {
        if !(-90.0..=90.0).contains(&point.latitude) || !(-180.0..=180.0).contains(&point.longitude)
        {
            tracing::warn!(
                index = i,
                lat = point.latitude,
                lon = point.longitude,
                "skipping point with invalid position"
            );
            continue;
        }

        let mut waypoint = Waypoint::new(Point::new(point.longitude, point.latitude));
        waypoint.elevation = point
            .altitude
            .is_finite()
            .then(|| ft_to_m_exact(point.altitude).max_precision(2));
        waypoint.time = point.time().map(Into::into);
        if waypoint.time.is_none() {
            tracing::warn!(
                index = i,
                timestamp = ?point.timestamp,
                "omitting invalid timestamp"
            );
        }
        segment.points.push(waypoint);
    }

    tracing::debug!(written = segment.points.len(), "GPX document created");

    let mut track = Track::new();
    track.name = Some(name.to_string());
    track.segments.push(segment);

    let doc = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(format!("flightdeck v{}", env!("CARGO_PKG_VERSION"))),
        tracks: vec![track],
        ..Default::default()
    };

    let mut out = Vec::new();
    gpx::write(&doc, &mut out)?;
    Ok(Some(String::from_utf8_lossy(&out).into_owned()))
}
