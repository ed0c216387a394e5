//! Health Status
//!
//! The SEIR-like state every actor is in, plus the integer codes used by
//! graph input files.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Health/exposure state of an actor.
///
/// Transitions only move forward: Susceptible -> Exposed -> Infected -> Recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Susceptible,
    Exposed,
    Infected,
    Recovered,
}

impl HealthStatus {
    /// All statuses in transition order.
    pub const ALL: [HealthStatus; 4] = [
        HealthStatus::Susceptible,
        HealthStatus::Exposed,
        HealthStatus::Infected,
        HealthStatus::Recovered,
    ];

    /// Integer code used by graph input files.
    ///
    /// Note the ordering of codes is not the transition order:
    /// 0 = Susceptible, 1 = Infected, 2 = Exposed, 3 = Recovered.
    pub fn code(self) -> u8 {
        match self {
            HealthStatus::Susceptible => 0,
            HealthStatus::Infected => 1,
            HealthStatus::Exposed => 2,
            HealthStatus::Recovered => 3,
        }
    }

    /// Position along the transition chain.
    fn stage(self) -> u8 {
        match self {
            HealthStatus::Susceptible => 0,
            HealthStatus::Exposed => 1,
            HealthStatus::Infected => 2,
            HealthStatus::Recovered => 3,
        }
    }

    /// Whether moving from `self` to `next` is a single legal forward step.
    pub fn can_transition_to(self, next: HealthStatus) -> bool {
        next.stage() == self.stage() + 1
    }

    /// Whether `later` is reachable from `self` (or equal to it).
    pub fn precedes_or_equals(self, later: HealthStatus) -> bool {
        self.stage() <= later.stage()
    }

    pub fn is_terminal(self) -> bool {
        self == HealthStatus::Recovered
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Susceptible => "susceptible",
            HealthStatus::Exposed => "exposed",
            HealthStatus::Infected => "infected",
            HealthStatus::Recovered => "recovered",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a status code outside 0..=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown status code: {0}")]
pub struct UnknownStatusCode(pub u8);

impl TryFrom<u8> for HealthStatus {
    type Error = UnknownStatusCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(HealthStatus::Susceptible),
            1 => Ok(HealthStatus::Infected),
            2 => Ok(HealthStatus::Exposed),
            3 => Ok(HealthStatus::Recovered),
            other => Err(UnknownStatusCode(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        for status in HealthStatus::ALL {
            assert_eq!(HealthStatus::try_from(status.code()), Ok(status));
        }
        assert_eq!(HealthStatus::try_from(1), Ok(HealthStatus::Infected));
        assert_eq!(HealthStatus::try_from(2), Ok(HealthStatus::Exposed));
        assert_eq!(HealthStatus::try_from(4), Err(UnknownStatusCode(4)));
    }

    #[test]
    fn test_forward_transitions_only() {
        use HealthStatus::*;

        assert!(Susceptible.can_transition_to(Exposed));
        assert!(Exposed.can_transition_to(Infected));
        assert!(Infected.can_transition_to(Recovered));

        assert!(!Susceptible.can_transition_to(Infected));
        assert!(!Exposed.can_transition_to(Susceptible));
        assert!(!Recovered.can_transition_to(Susceptible));
        assert!(!Recovered.can_transition_to(Recovered));
        assert!(Recovered.is_terminal());
    }

    #[test]
    fn test_precedes_or_equals() {
        use HealthStatus::*;

        assert!(Susceptible.precedes_or_equals(Recovered));
        assert!(Infected.precedes_or_equals(Infected));
        assert!(!Recovered.precedes_or_equals(Exposed));
    }

    #[test]
    fn test_serializes_snake_case() {
        let json = serde_json::to_string(&HealthStatus::Infected).unwrap();
        assert_eq!(json, "\"infected\"");
        let parsed: HealthStatus = serde_json::from_str("\"recovered\"").unwrap();
        assert_eq!(parsed, HealthStatus::Recovered);
    }
}
