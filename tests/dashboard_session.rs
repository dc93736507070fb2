/// End-to-end tests for a dashboard session
///
/// These tests drive the public API the way the terminal loop does:
/// build an `App` from config, start it, feed it `Action`s, and check
/// what the state store holds afterwards. Randomness is pinned with a
/// config seed and timestamps are fixed, so every run is deterministic.
///
/// Run with: cargo test --test dashboard_session

use flood_dashboard::alert::thresholds::{WATER_LEVEL_ALERT_M, check_water_level};
use flood_dashboard::config::DashboardConfig;
use flood_dashboard::locations::{LOCATION_REGISTRY, all_location_names};
use flood_dashboard::model::{Reading, TREND_CAPACITY};
use flood_dashboard::session::Session;
use flood_dashboard::ui::app::{Action, App};

use chrono::{DateTime, Duration, Local, TimeZone};
use rand::SeedableRng;
use rand::rngs::StdRng;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn t0() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 12, 2, 7, 0, 0).unwrap()
}

fn app_with_seed(seed: u64) -> App {
    let config = DashboardConfig::from_toml_str(&format!("seed = {}", seed))
        .expect("seed-only config should be valid");
    App::new(config)
}

fn snapshot(app: &App) -> Vec<(&'static str, Reading)> {
    app.session()
        .markers()
        .into_iter()
        .map(|m| (m.location.name, m.reading))
        .collect()
}

// ---------------------------------------------------------------------------
// Sliding window
// ---------------------------------------------------------------------------

#[test]
fn test_thirty_interactions_keep_the_ten_most_recent_points() {
    let mut app = app_with_seed(10);
    app.start(t0()).expect("start");
    for i in 1..30 {
        app.handle(Action::Update, t0() + Duration::seconds(i)).expect("update");
    }

    let trend = app.selected_trend().expect("Adyar trend");
    assert_eq!(trend.len(), TREND_CAPACITY);

    let times: Vec<_> = trend.iter().map(|p| p.timestamp).collect();
    let expected: Vec<_> = (20..30).map(|i| t0() + Duration::seconds(i)).collect();
    assert_eq!(times, expected, "window should hold the last 10 appends in order");
}

#[test]
fn test_direct_session_appends_respect_capacity() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut session = Session::new(&mut rng);
    let mut appended = Vec::new();
    for i in 0..15 {
        let point = session
            .record_trend("Koyambedu", t0() + Duration::minutes(i), &mut rng)
            .expect("Koyambedu is registered")
            .clone();
        appended.push(point);
    }
    let kept: Vec<_> = session.trend("Koyambedu").expect("trend").iter().cloned().collect();
    assert_eq!(kept, appended[5..].to_vec());
}

// ---------------------------------------------------------------------------
// Isolation between locations
// ---------------------------------------------------------------------------

#[test]
fn test_switching_from_adyar_to_t_nagar_does_not_mutate_adyar() {
    let mut app = app_with_seed(12);
    app.start(t0()).expect("start");
    let adyar_before = *app.session().reading("Adyar").expect("Adyar");

    let t_nagar = all_location_names()
        .iter()
        .position(|n| *n == "T. Nagar")
        .expect("T. Nagar registered");
    app.handle(Action::Select(t_nagar), t0()).expect("select");
    app.handle(Action::Update, t0()).expect("update T. Nagar");

    assert_eq!(app.session().reading("Adyar").copied(), Ok(adyar_before));
}

#[test]
fn test_update_sweep_touches_one_location_at_a_time() {
    let mut app = app_with_seed(13);
    app.start(t0()).expect("start");

    for index in 0..LOCATION_REGISTRY.len() {
        app.handle(Action::Select(index), t0()).expect("select");
        let before = snapshot(&app);
        app.handle(Action::Update, t0()).expect("update");
        let after = snapshot(&app);

        for ((name, old), (_, new)) in before.iter().zip(after.iter()) {
            if *name != LOCATION_REGISTRY[index].name {
                assert_eq!(old, new, "updating '{}' changed '{}'", LOCATION_REGISTRY[index].name, name);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Ranges and alerts
// ---------------------------------------------------------------------------

#[test]
fn test_every_reading_after_many_updates_is_in_range() {
    let mut app = app_with_seed(14);
    app.start(t0()).expect("start");
    for i in 0..200 {
        app.handle(Action::Select(i % LOCATION_REGISTRY.len()), t0()).expect("select");
        app.handle(Action::Update, t0()).expect("update");
    }
    for (name, r) in snapshot(&app) {
        assert!((0.0..=5.0).contains(&r.water_level_m), "{}: water {}", name, r.water_level_m);
        assert!((0.0..=150.0).contains(&r.rainfall_mm), "{}: rain {}", name, r.rainfall_mm);
        assert!((20.0..=35.0).contains(&r.temperature_c), "{}: temp {}", name, r.temperature_c);
    }
    for day in app.history() {
        assert!((0.0..=5.0).contains(&day.water_level_m));
    }
}

#[test]
fn test_alert_boundary_is_exclusive_at_three_meters() {
    let at = Reading { water_level_m: 3.00, rainfall_mm: 10.0, temperature_c: 25.0 };
    let above = Reading { water_level_m: 3.01, ..at };
    assert!(check_water_level("Adyar", &at, WATER_LEVEL_ALERT_M).is_none());
    assert!(check_water_level("Adyar", &above, WATER_LEVEL_ALERT_M).is_some());
}

#[test]
fn test_app_alert_matches_threshold_check_for_selected_location() {
    let mut app = app_with_seed(15);
    app.start(t0()).expect("start");
    for index in 0..LOCATION_REGISTRY.len() {
        app.handle(Action::Select(index), t0()).expect("select");
        let reading = *app.selected_reading().expect("reading");
        assert_eq!(
            app.alert().is_some(),
            reading.water_level_m > WATER_LEVEL_ALERT_M,
            "alert state disagrees with level {} at '{}'",
            reading.water_level_m,
            app.selected_location().name
        );
    }
}

// ---------------------------------------------------------------------------
// Determinism
// ---------------------------------------------------------------------------

#[test]
fn test_same_seed_replays_the_same_session() {
    let run = |seed| {
        let mut app = app_with_seed(seed);
        app.start(t0()).expect("start");
        app.handle(Action::SelectNext, t0()).expect("next");
        app.handle(Action::Update, t0()).expect("update");
        snapshot(&app)
    };
    assert_eq!(run(16), run(16));
}
