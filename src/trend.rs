//! Sliding-window trend buffer.
//!
//! Keeps the most recent `TREND_CAPACITY` water level samples for one
//! location. Appending is the only mutation; once full, each append evicts
//! the oldest point.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::model::{TREND_CAPACITY, TrendPoint};

#[derive(Debug, Clone, Default)]
pub struct TrendBuffer {
    points: VecDeque<TrendPoint>,
}

impl TrendBuffer {
    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(TREND_CAPACITY + 1),
        }
    }

    /// Appends a sample, evicting the oldest if the window is full.
    pub fn append(&mut self, timestamp: DateTime<Local>, water_level_m: f64) -> &TrendPoint {
        self.points.push_back(TrendPoint {
            timestamp,
            water_level_m,
        });
        while self.points.len() > TREND_CAPACITY {
            self.points.pop_front();
        }
        &self.points[self.points.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn latest(&self) -> Option<&TrendPoint> {
        self.points.back()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrendPoint> {
        self.points.iter()
    }

    /// (index, level) pairs ready for a line chart.
    pub fn chart_points(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.water_level_m))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
