//! Per-session state store.
//!
//! Holds the current reading and the trend window for every registered
//! location. A `Session` is created once when the dashboard starts and
//! dropped when it exits; nothing is shared or persisted.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use rand::Rng;

use crate::locations::{LOCATION_REGISTRY, find_location};
use crate::logging::{self, LogSource};
use crate::model::{DashboardError, Location, Reading, TrendPoint};
use crate::simulate::{simulate, simulate_trend_level};
use crate::trend::TrendBuffer;

/// A location marker as drawn on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location: Location,
    pub reading: Reading,
}

impl Marker {
    /// Multi-line popup text for the marker.
    pub fn popup(&self) -> String {
        format!(
            "{}\nWater Level: {:.2}m\nRainfall: {:.2}mm\nTemperature: {:.2}°C",
            self.location.name,
            self.reading.water_level_m,
            self.reading.rainfall_mm,
            self.reading.temperature_c
        )
    }
}

/// One heatmap sample: latitude, longitude, weight (water level).
pub type HeatPoint = (f64, f64, f64);

#[derive(Debug, Clone)]
pub struct Session {
    readings: HashMap<&'static str, Reading>,
    trends: HashMap<&'static str, TrendBuffer>,
}

impl Session {
    /// Simulates an initial reading for every location and starts each
    /// trend window empty.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut readings = HashMap::with_capacity(LOCATION_REGISTRY.len());
        let mut trends = HashMap::with_capacity(LOCATION_REGISTRY.len());
        for location in LOCATION_REGISTRY {
            readings.insert(location.name, simulate(location, rng));
            trends.insert(location.name, TrendBuffer::new());
        }
        logging::debug(
            LogSource::Session,
            None,
            &format!("initialized {} locations", readings.len()),
        );
        Self { readings, trends }
    }

    pub fn reading(&self, name: &str) -> Result<&Reading, DashboardError> {
        self.readings
            .get(name)
            .ok_or_else(|| DashboardError::UnknownLocation(name.to_string()))
    }

    /// Re-simulates the reading for `name` only.
    pub fn update(&mut self, name: &str, rng: &mut impl Rng) -> Result<&Reading, DashboardError> {
        let location = find_location(name)
            .ok_or_else(|| DashboardError::UnknownLocation(name.to_string()))?;
        let reading = simulate(location, rng);
        logging::info(
            LogSource::Simulator,
            Some(location.name),
            &format!(
                "reading updated: water {:.2}m, rain {:.2}mm, temp {:.2}°C",
                reading.water_level_m, reading.rainfall_mm, reading.temperature_c
            ),
        );
        self.readings.insert(location.name, reading);
        self.reading(location.name)
    }

    /// Draws a trend level and appends it to the window for `name` only.
    pub fn record_trend(
        &mut self,
        name: &str,
        now: DateTime<Local>,
        rng: &mut impl Rng,
    ) -> Result<&TrendPoint, DashboardError> {
        let buffer = self
            .trends
            .get_mut(name)
            .ok_or_else(|| DashboardError::UnknownLocation(name.to_string()))?;
        let point = buffer.append(now, simulate_trend_level(rng));
        logging::debug(
            LogSource::Session,
            Some(name),
            &format!("trend point {:.2}m at {}", point.water_level_m, point.time_label()),
        );
        Ok(point)
    }

    pub fn trend(&self, name: &str) -> Result<&TrendBuffer, DashboardError> {
        self.trends
            .get(name)
            .ok_or_else(|| DashboardError::UnknownLocation(name.to_string()))
    }

    /// One marker per location, in registry order.
    pub fn markers(&self) -> Vec<Marker> {
        LOCATION_REGISTRY
            .iter()
            .filter_map(|location| {
                self.readings.get(location.name).map(|reading| Marker {
                    location: *location,
                    reading: *reading,
                })
            })
            .collect()
    }

    /// Heatmap weights, in registry order.
    pub fn heat_points(&self) -> Vec<HeatPoint> {
        self.markers()
            .iter()
            .map(|m| {
                let (lat, lon) = m.location.coords();
                (lat, lon, m.reading.water_level_m)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
