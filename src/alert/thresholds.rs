//! Water level threshold checking.

use crate::model::Reading;

/// Default danger threshold, in meters.
pub const WATER_LEVEL_ALERT_M: f64 = 3.0;

/// A flood alert triggered when a reading exceeds the danger threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FloodAlert {
    pub location: String,
    pub water_level_m: f64,
    pub message: String,
}

/// Returns an alert if the reading's water level is strictly above
/// `threshold_m`.
///
/// The boundary is exclusive:
///   level >  threshold  →  alert
///   level == threshold  →  no alert
pub fn check_water_level(location: &str, reading: &Reading, threshold_m: f64) -> Option<FloodAlert> {
    if reading.water_level_m <= threshold_m {
        return None;
    }
    Some(FloodAlert {
        location: location.to_string(),
        water_level_m: reading.water_level_m,
        message: format!(
            "Water level in {} is above the danger threshold! Current level: {} meters.",
            location, reading.water_level_m
        ),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
