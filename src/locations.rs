//! Location registry for the Chennai flood monitoring dashboard.
//!
//! Defines the canonical list of monitored locations with their coordinates.
//! This is the single source of truth for location names — all other modules
//! should reference locations from here rather than hardcoding names.

use crate::model::Location;

/// Map centre used by both the marker map and the heatmap.
pub const MAP_CENTER: (f64, f64) = (13.0827, 80.2707);

/// All monitored locations, in selector order.
pub static LOCATION_REGISTRY: &[Location] = &[
    Location {
        name: "Adyar",
        latitude: 13.0047,
        longitude: 80.2670,
    },
    Location {
        name: "Anna Nagar",
        latitude: 13.0878,
        longitude: 80.2101,
    },
    Location {
        name: "Chennai Port",
        latitude: 13.0896,
        longitude: 80.2970,
    },
    Location {
        name: "Koyambedu",
        latitude: 13.0658,
        longitude: 80.2107,
    },
    Location {
        name: "T. Nagar",
        latitude: 13.0406,
        longitude: 80.2345,
    },
];

/// Returns the names of all monitored locations in registry order.
pub fn all_location_names() -> Vec<&'static str> {
    LOCATION_REGISTRY.iter().map(|l| l.name).collect()
}

/// Looks up a location by name. Returns `None` if not found.
pub fn find_location(name: &str) -> Option<&'static Location> {
    LOCATION_REGISTRY.iter().find(|l| l.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
