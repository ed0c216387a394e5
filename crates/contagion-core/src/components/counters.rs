//! Aggregate Counters
//!
//! Population counts shared between the simulation and every actor step.
//! Actors never touch the fields directly; they report transitions through
//! the `record_*` operations, which keep the current counts summing to the
//! population and the cumulative counts monotone.

use contagion_events::HealthStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counters {
    susceptible: usize,
    exposed: usize,
    infected: usize,
    recovered: usize,
    consumers: usize,
    spreaders: usize,
}

impl Counters {
    /// Counts statuses at construction.
    ///
    /// Consumers and spreaders both start at the initial infected count.
    pub fn from_statuses(statuses: impl IntoIterator<Item = HealthStatus>) -> Self {
        let mut counters = Self::default();
        for status in statuses {
            match status {
                HealthStatus::Susceptible => counters.susceptible += 1,
                HealthStatus::Exposed => counters.exposed += 1,
                HealthStatus::Infected => counters.infected += 1,
                HealthStatus::Recovered => counters.recovered += 1,
            }
        }
        counters.consumers = counters.infected;
        counters.spreaders = counters.infected;
        counters
    }

    /// Susceptible -> Exposed
    pub fn record_exposure(&mut self) {
        debug_assert!(self.susceptible > 0, "exposure with no susceptible actors");
        self.susceptible -= 1;
        self.exposed += 1;
        self.consumers += 1;
    }

    /// Exposed -> Infected
    pub fn record_infection(&mut self) {
        debug_assert!(self.exposed > 0, "infection with no exposed actors");
        self.exposed -= 1;
        self.infected += 1;
        self.spreaders += 1;
    }

    /// Infected -> Recovered
    pub fn record_recovery(&mut self) {
        debug_assert!(self.infected > 0, "recovery with no infected actors");
        self.infected -= 1;
        self.recovered += 1;
    }

    pub fn count(&self, status: HealthStatus) -> usize {
        match status {
            HealthStatus::Susceptible => self.susceptible,
            HealthStatus::Exposed => self.exposed,
            HealthStatus::Infected => self.infected,
            HealthStatus::Recovered => self.recovered,
        }
    }

    pub fn susceptible(&self) -> usize {
        self.susceptible
    }

    pub fn exposed(&self) -> usize {
        self.exposed
    }

    pub fn infected(&self) -> usize {
        self.infected
    }

    pub fn recovered(&self) -> usize {
        self.recovered
    }

    /// Cumulative count of actors that have ever been Exposed or Infected
    pub fn consumers(&self) -> usize {
        self.consumers
    }

    /// Cumulative count of actors that have ever been Infected
    pub fn spreaders(&self) -> usize {
        self.spreaders
    }

    pub fn population(&self) -> usize {
        self.susceptible + self.exposed + self.infected + self.recovered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HealthStatus::*;

    #[test]
    fn test_from_statuses() {
        let counters = Counters::from_statuses([Susceptible, Infected, Exposed, Susceptible, Recovered]);
        assert_eq!(counters.susceptible(), 2);
        assert_eq!(counters.exposed(), 1);
        assert_eq!(counters.infected(), 1);
        assert_eq!(counters.recovered(), 1);
        assert_eq!(counters.consumers(), 1);
        assert_eq!(counters.spreaders(), 1);
        assert_eq!(counters.population(), 5);
    }

    #[test]
    fn test_transitions_preserve_population() {
        let mut counters = Counters::from_statuses([Susceptible, Susceptible, Infected]);

        counters.record_exposure();
        assert_eq!(counters.count(Exposed), 1);
        assert_eq!(counters.consumers(), 2);

        counters.record_infection();
        assert_eq!(counters.count(Infected), 2);
        assert_eq!(counters.spreaders(), 2);

        counters.record_recovery();
        assert_eq!(counters.count(Recovered), 1);
        assert_eq!(counters.population(), 3);

        // Cumulative counts never drop on recovery
        assert_eq!(counters.consumers(), 2);
        assert_eq!(counters.spreaders(), 2);
    }
}
