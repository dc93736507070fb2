//! Dashboard application state and the event-handler contract.
//!
//! The `App` owns everything a session needs: the state store, the random
//! source, the selected location, and what the last interaction produced.
//! The terminal loop turns key presses into `Action`s and calls
//! `App::handle`; rendering only ever reads from the `App`.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::alert::thresholds::{FloodAlert, check_water_level};
use crate::config::DashboardConfig;
use crate::locations::LOCATION_REGISTRY;
use crate::logging::{self, LogSource};
use crate::model::{DailyLevel, DashboardError, Location, Reading};
use crate::session::Session;
use crate::simulate::simulate_history;
use crate::trend::TrendBuffer;

/// Status line shown after a successful update.
pub const UPDATE_SUCCESS: &str = "Sensor data updated successfully!";

/// A single user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectNext,
    SelectPrevious,
    Select(usize),
    Update,
    Quit,
}

/// Maps a key press to an action. Releases, repeats, and unbound keys are
/// not interactions.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            (index < LOCATION_REGISTRY.len()).then_some(Action::Select(index))
        }
        KeyCode::Char('u') | KeyCode::Enter => Some(Action::Update),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

pub struct App {
    config: DashboardConfig,
    session: Session,
    rng: StdRng,
    selected: usize,
    history: Vec<DailyLevel>,
    status: Option<String>,
    running: bool,
}

impl App {
    /// Seeds from `config.seed` when set, otherwise from OS entropy.
    pub fn new(config: DashboardConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: DashboardConfig, mut rng: StdRng) -> Self {
        let session = Session::new(&mut rng);
        Self {
            config,
            session,
            rng,
            selected: 0,
            history: Vec::new(),
            status: None,
            running: true,
        }
    }

    /// The first render counts as an interaction.
    pub fn start(&mut self, now: DateTime<Local>) -> Result<(), DashboardError> {
        logging::info(
            LogSource::Ui,
            Some(self.selected_location().name),
            "dashboard started",
        );
        self.rerun(now)
    }

    pub fn handle(&mut self, action: Action, now: DateTime<Local>) -> Result<(), DashboardError> {
        let count = LOCATION_REGISTRY.len();
        self.status = None;
        match action {
            Action::Quit => {
                self.running = false;
                logging::info(LogSource::Ui, None, "quit requested");
                return Ok(());
            }
            Action::SelectNext => self.selected = (self.selected + 1) % count,
            Action::SelectPrevious => self.selected = (self.selected + count - 1) % count,
            Action::Select(index) if index < count => self.selected = index,
            Action::Select(_) | Action::Update => {}
        }
        self.rerun(now)?;

        if action == Action::Update {
            let name = self.selected_location().name;
            self.session.update(name, &mut self.rng)?;
            self.status = Some(UPDATE_SUCCESS.to_string());
        }

        if let Some(alert) = self.alert() {
            logging::log_alert(&alert);
        }
        Ok(())
    }

    /// One pass of the dashboard: a new trend point for the selected
    /// location and a fresh synthetic history.
    fn rerun(&mut self, now: DateTime<Local>) -> Result<(), DashboardError> {
        let name = self.selected_location().name;
        self.session.record_trend(name, now, &mut self.rng)?;
        self.history = simulate_history(&mut self.rng, self.config.history_days);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_location(&self) -> &'static Location {
        &LOCATION_REGISTRY[self.selected]
    }

    pub fn selected_reading(&self) -> Result<&Reading, DashboardError> {
        self.session.reading(self.selected_location().name)
    }

    pub fn selected_trend(&self) -> Result<&TrendBuffer, DashboardError> {
        self.session.trend(self.selected_location().name)
    }

    /// Threshold alert for the selected location, if its level is too high.
    pub fn alert(&self) -> Option<FloodAlert> {
        let location = self.selected_location();
        let reading = self.session.reading(location.name).ok()?;
        check_water_level(location.name, reading, self.config.alert_threshold_m)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn history(&self) -> &[DailyLevel] {
        &self.history
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
