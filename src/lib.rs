//! Flood monitoring dashboard with simulated sensor readings.
//!
//! - `model`     — shared types and the error enum.
//! - `locations` — the fixed location registry.
//! - `simulate`  — random reading generation.
//! - `trend`     — the ten-point sliding window.
//! - `session`   — per-session state store.
//! - `alert`     — water level threshold checks.
//! - `config`    — optional TOML configuration.
//! - `logging`   — file/console structured logging.
//! - `ui`        — ratatui terminal dashboard.

pub mod alert;
pub mod config;
pub mod locations;
pub mod logging;
pub mod model;
pub mod session;
pub mod simulate;
pub mod trend;
pub mod ui;
