pub mod compass;
pub mod precision;

pub use compass::{compass_direction, CompassPoint};
use precision::Precision;

/// Displayed when a value cannot be computed.
pub const NOT_AVAILABLE: &str = "N/A";

pub fn knots_to_kmh(kt: f64) -> f64 {
    nm_to_km(kt).max_precision(0)
}

pub fn ft_to_m(ft: f64) -> f64 {
    (ft * 0.3048).max_precision(0)
}

pub fn nm_to_km(nm: f64) -> f64 {
    nm * 1.852
}

/// Unrounded feet to meters, for output that carries its own precision (e.g. GPX elevation).
pub fn ft_to_m_exact(ft: f64) -> f64 {
    ft * 0.3048
}

/// Format a remaining time given in minutes as `"<h> hr <m> min"`, or `"<m> min"` when under
/// an hour. Fractional minutes are truncated and negative values are treated as zero.
pub fn format_duration(minutes: Option<f64>) -> String {
    let minutes = match minutes {
        Some(m) if m.is_finite() => m.max(0.0).floor() as u64,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let hours = minutes / 60;
    let rem = minutes % 60;
    if hours > 0 {
        format!("{} hr {} min", hours, rem)
    } else {
        format!("{} min", rem)
    }
}
