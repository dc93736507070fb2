//! Core data types for the flood monitoring dashboard.
//!
//! This module defines the shared domain model imported by all other modules.
//! It contains no logic beyond small accessors, no I/O, and no randomness.

use chrono::{DateTime, Local};

// ---------------------------------------------------------------------------
// Sensor ranges
// ---------------------------------------------------------------------------

/// Simulated water level range, in meters.
pub const WATER_LEVEL_RANGE_M: (f64, f64) = (0.0, 5.0);

/// Simulated rainfall range, in millimetres.
pub const RAINFALL_RANGE_MM: (f64, f64) = (0.0, 150.0);

/// Simulated air temperature range, in degrees Celsius.
pub const TEMPERATURE_RANGE_C: (f64, f64) = (20.0, 35.0);

/// Number of trend points retained per location.
pub const TREND_CAPACITY: usize = 10;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A fixed monitoring point. Defined once in `locations::LOCATION_REGISTRY`
/// and never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Unique key; also the label shown in the selector.
    pub name: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
}

impl Location {
    pub fn coords(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// One simulated snapshot for a location.
///
/// Values are rounded to two decimal places at simulation time, matching
/// what the metrics panel displays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub water_level_m: f64,
    pub rainfall_mm: f64,
    pub temperature_c: f64,
}

/// One historical water level sample used for the trend chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub timestamp: DateTime<Local>,
    pub water_level_m: f64,
}

impl TrendPoint {
    /// Chart label, e.g. "14:05:09".
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// One bar of the synthetic multi-day history chart.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyLevel {
    pub label: String,  // "Day 1", "Day 2", ...
    pub water_level_m: f64,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise while running the dashboard.
///
/// The simulator and trend buffer cannot fail; everything here comes from
/// lookups, configuration, or the terminal.
#[derive(Debug, PartialEq)]
pub enum DashboardError {
    /// A state-store lookup used a name not in the location registry.
    UnknownLocation(String),
    /// The configuration file could not be read or contained invalid values.
    Config(String),
    /// Terminal setup, drawing, or event polling failed.
    Terminal(String),
}

impl std::fmt::Display for DashboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardError::UnknownLocation(name) => write!(f, "Unknown location: {}", name),
            DashboardError::Config(msg) => write!(f, "Config error: {}", msg),
            DashboardError::Terminal(msg) => write!(f, "Terminal error: {}", msg),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<std::io::Error> for DashboardError {
    fn from(err: std::io::Error) -> Self {
        DashboardError::Terminal(err.to_string())
    }
}
