//! Advisory alerts.
//!
//! Alerts are display decisions, not errors: a reading above the danger
//! threshold produces a banner and a log line, nothing else.

pub mod thresholds;
