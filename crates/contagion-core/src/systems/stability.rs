//! Stability System
//!
//! Sliding windows over the current-state counters, used to detect that the
//! epidemic has stopped moving.

use std::collections::VecDeque;

use crate::components::counters::Counters;

/// Number of consecutive observations a window holds.
pub const WINDOW_LEN: usize = 5;

/// Fixed-length window of recent counter values.
///
/// Empty slots are sentinels that never compare equal to a real count, so a
/// fresh window only becomes stable once it has been filled with real values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityWindow {
    slots: VecDeque<Option<usize>>,
}

impl StabilityWindow {
    /// Seeds the window with sentinels followed by the initial value.
    pub fn new(initial: usize) -> Self {
        let mut slots: VecDeque<Option<usize>> = std::iter::repeat(None).take(WINDOW_LEN - 1).collect();
        slots.push_back(Some(initial));
        Self { slots }
    }

    /// Drops the oldest value and appends `value`.
    pub fn push(&mut self, value: usize) {
        self.slots.pop_front();
        self.slots.push_back(Some(value));
    }

    /// True when every slot holds the same real value.
    pub fn is_stable(&self) -> bool {
        match self.slots.front() {
            Some(Some(first)) => self.slots.iter().all(|slot| *slot == Some(*first)),
            _ => false,
        }
    }

    /// Recorded values, oldest first, with `None` for unfilled slots.
    pub fn values(&self) -> impl Iterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }
}

/// One window per current-state counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StabilityTracker {
    exposed: StabilityWindow,
    infected: StabilityWindow,
    recovered: StabilityWindow,
    susceptible: StabilityWindow,
}

impl StabilityTracker {
    pub fn new(counters: &Counters) -> Self {
        Self {
            exposed: StabilityWindow::new(counters.exposed()),
            infected: StabilityWindow::new(counters.infected()),
            recovered: StabilityWindow::new(counters.recovered()),
            susceptible: StabilityWindow::new(counters.susceptible()),
        }
    }

    pub fn push(&mut self, counters: &Counters) {
        self.exposed.push(counters.exposed());
        self.infected.push(counters.infected());
        self.recovered.push(counters.recovered());
        self.susceptible.push(counters.susceptible());
    }

    pub fn all_stable(&self) -> bool {
        self.exposed.is_stable()
            && self.infected.is_stable()
            && self.recovered.is_stable()
            && self.susceptible.is_stable()
    }
}
