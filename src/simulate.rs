//! Simulated sensor data.
//!
//! There is no live data source: every reading is a set of independent
//! uniform draws. The random source is always passed in so tests can seed
//! it; nothing here touches global state.

use rand::Rng;

use crate::model::{
    DailyLevel, Location, RAINFALL_RANGE_MM, Reading, TEMPERATURE_RANGE_C, WATER_LEVEL_RANGE_M,
};

/// Produces a fresh reading for `location`.
///
/// The location does not influence the draw; it is accepted so callers read
/// naturally and so a real source could key on it later.
pub fn simulate(_location: &Location, rng: &mut impl Rng) -> Reading {
    Reading {
        water_level_m: round2(draw(rng, WATER_LEVEL_RANGE_M)),
        rainfall_mm: round2(draw(rng, RAINFALL_RANGE_MM)),
        temperature_c: round2(draw(rng, TEMPERATURE_RANGE_C)),
    }
}

/// One unrounded water level for the trend chart.
pub fn simulate_trend_level(rng: &mut impl Rng) -> f64 {
    draw(rng, WATER_LEVEL_RANGE_M)
}

/// Synthetic per-day water levels labelled "Day 1" through "Day {days}".
pub fn simulate_history(rng: &mut impl Rng, days: usize) -> Vec<DailyLevel> {
    (1..=days)
        .map(|day| DailyLevel {
            label: format!("Day {}", day),
            water_level_m: draw(rng, WATER_LEVEL_RANGE_M),
        })
        .collect()
}

fn draw(rng: &mut impl Rng, (lo, hi): (f64, f64)) -> f64 {
    rng.random_range(lo..=hi)
}

/// Rounds to two decimal places. Endpoints of the simulated ranges are
/// whole numbers, so rounding never leaves the range.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::LOCATION_REGISTRY;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn in_range(value: f64, (lo, hi): (f64, f64)) -> bool {
        value >= lo && value <= hi
    }

    #[test]
    fn test_readings_stay_within_sensor_ranges_for_all_locations() {
        let mut rng = StdRng::seed_from_u64(7);
        for location in LOCATION_REGISTRY {
            for _ in 0..500 {
                let r = simulate(location, &mut rng);
                assert!(in_range(r.water_level_m, WATER_LEVEL_RANGE_M), "water level {} out of range", r.water_level_m);
                assert!(in_range(r.rainfall_mm, RAINFALL_RANGE_MM), "rainfall {} out of range", r.rainfall_mm);
                assert!(in_range(r.temperature_c, TEMPERATURE_RANGE_C), "temperature {} out of range", r.temperature_c);
            }
        }
    }

    #[test]
    fn test_readings_are_rounded_to_two_decimals() {
        let mut rng = StdRng::seed_from_u64(11);
        let r = simulate(&LOCATION_REGISTRY[0], &mut rng);
        for value in [r.water_level_m, r.rainfall_mm, r.temperature_c] {
            let scaled = value * 100.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "{} has more than two decimal places",
                value
            );
        }
    }

    #[test]
    fn test_same_seed_gives_same_reading() {
        let a = simulate(&LOCATION_REGISTRY[1], &mut StdRng::seed_from_u64(42));
        let b = simulate(&LOCATION_REGISTRY[1], &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_successive_draws_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let a = simulate(&LOCATION_REGISTRY[2], &mut rng);
        let b = simulate(&LOCATION_REGISTRY[2], &mut rng);
        assert_ne!(a, b, "each call should draw fresh randomness");
    }

    #[test]
    fn test_trend_level_within_water_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            assert!(in_range(simulate_trend_level(&mut rng), WATER_LEVEL_RANGE_M));
        }
    }

    #[test]
    fn test_history_has_one_labelled_entry_per_day() {
        let mut rng = StdRng::seed_from_u64(9);
        let history = simulate_history(&mut rng, 7);
        assert_eq!(history.len(), 7);
        assert_eq!(history[0].label, "Day 1");
        assert_eq!(history[6].label, "Day 7");
        assert!(history.iter().all(|d| in_range(d.water_level_m, WATER_LEVEL_RANGE_M)));
    }

    #[test]
    fn test_history_of_zero_days_is_empty() {
        let mut rng = StdRng::seed_from_u64(9);
        assert!(simulate_history(&mut rng, 0).is_empty());
    }
}
