//! Map viewport and heatmap colouring.
//!
//! The canvas works directly in geographic coordinates: longitude on the x
//! axis, latitude on the y axis, over a fixed window around the map centre.
//! At city scale the distortion of treating degrees as planar is invisible
//! in a terminal cell grid.

use ratatui::style::Color;

use crate::locations::MAP_CENTER;
use crate::model::WATER_LEVEL_RANGE_M;

/// Half-width of the map window, in degrees.
pub const MAP_HALF_SPAN_DEG: f64 = 0.1;

/// Largest heat blob radius, in degrees.
const MAX_HEAT_RADIUS_DEG: f64 = 0.025;

/// Canvas x bounds (longitude).
pub fn x_bounds() -> [f64; 2] {
    [MAP_CENTER.1 - MAP_HALF_SPAN_DEG, MAP_CENTER.1 + MAP_HALF_SPAN_DEG]
}

/// Canvas y bounds (latitude).
pub fn y_bounds() -> [f64; 2] {
    [MAP_CENTER.0 - MAP_HALF_SPAN_DEG, MAP_CENTER.0 + MAP_HALF_SPAN_DEG]
}

/// Converts (lat, lon) to canvas (x, y).
pub fn to_canvas(latitude: f64, longitude: f64) -> (f64, f64) {
    (longitude, latitude)
}

pub fn in_viewport(latitude: f64, longitude: f64) -> bool {
    let [x0, x1] = x_bounds();
    let [y0, y1] = y_bounds();
    (x0..=x1).contains(&longitude) && (y0..=y1).contains(&latitude)
}

/// Water level scaled to [0, 1] over the sensor range.
pub fn heat_intensity(water_level_m: f64) -> f64 {
    let (lo, hi) = WATER_LEVEL_RANGE_M;
    ((water_level_m - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Blue → green → yellow → red ramp.
pub fn heat_color(intensity: f64) -> Color {
    match intensity {
        i if i < 0.25 => Color::Blue,
        i if i < 0.5 => Color::Green,
        i if i < 0.75 => Color::Yellow,
        _ => Color::Red,
    }
}

/// Concentric rings for one heat blob, outermost first: (radius, colour).
///
/// Inner rings use progressively hotter colours so a high reading shows a
/// red core inside cooler halos.
pub fn heat_rings(water_level_m: f64) -> Vec<(f64, Color)> {
    let intensity = heat_intensity(water_level_m);
    let outer = MAX_HEAT_RADIUS_DEG * (0.3 + 0.7 * intensity);
    (0..4)
        .filter(|ring| f64::from(*ring) * 0.25 <= intensity)
        .map(|ring| {
            let step = f64::from(ring);
            (outer * (1.0 - step * 0.2), heat_color(step * 0.25))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::LOCATION_REGISTRY;

    #[test]
    fn test_every_location_is_inside_the_viewport() {
        for location in LOCATION_REGISTRY {
            assert!(
                in_viewport(location.latitude, location.longitude),
                "'{}' falls outside the map window",
                location.name
            );
        }
    }

    #[test]
    fn test_bounds_are_centred_on_map_center() {
        let [x0, x1] = x_bounds();
        let [y0, y1] = y_bounds();
        assert!(((x0 + x1) / 2.0 - MAP_CENTER.1).abs() < 1e-9);
        assert!(((y0 + y1) / 2.0 - MAP_CENTER.0).abs() < 1e-9);
    }

    #[test]
    fn test_intensity_spans_zero_to_one_and_clamps() {
        assert_eq!(heat_intensity(0.0), 0.0);
        assert_eq!(heat_intensity(5.0), 1.0);
        assert_eq!(heat_intensity(2.5), 0.5);
        assert_eq!(heat_intensity(-1.0), 0.0);
        assert_eq!(heat_intensity(9.0), 1.0);
    }

    #[test]
    fn test_color_ramp_runs_cold_to_hot() {
        assert_eq!(heat_color(0.0), Color::Blue);
        assert_eq!(heat_color(0.3), Color::Green);
        assert_eq!(heat_color(0.6), Color::Yellow);
        assert_eq!(heat_color(1.0), Color::Red);
    }

    #[test]
    fn test_dry_location_has_single_cold_ring() {
        assert_eq!(heat_rings(0.0).len(), 1);
        assert_eq!(heat_rings(0.0)[0].1, Color::Blue);
    }

    #[test]
    fn test_flooded_location_has_red_core_and_shrinking_rings() {
        let rings = heat_rings(5.0);
        assert_eq!(rings.len(), 4);
        assert_eq!(rings.last().map(|r| r.1), Some(Color::Red));
        assert!(rings.windows(2).all(|w| w[0].0 > w[1].0), "rings must shrink inward");
    }
}
