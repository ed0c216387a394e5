//! Model Parameters
//!
//! Global constants fixed at simulation construction.

use serde::{Deserialize, Serialize};

use crate::error::SetupError;

/// Global model parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// Confidence threshold: neighbors further than this in belief are ignored
    pub epsilon: f64,
    /// Per-tick recovery probability for infected actors
    pub beta: f64,
    /// Confidence-weight constant in [0, 1]
    pub weight: f64,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            epsilon: 0.2,
            beta: 0.05,
            weight: 0.5,
        }
    }
}

impl ModelParams {
    pub fn new(epsilon: f64, beta: f64, weight: f64) -> Self {
        Self {
            epsilon,
            beta,
            weight,
        }
    }

    /// Rejects non-finite values, a negative `epsilon`, and `beta`/`weight` outside [0, 1].
    pub fn validate(&self) -> Result<(), SetupError> {
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(SetupError::InvalidParameter {
                name: "epsilon",
                value: self.epsilon,
                reason: "must be a finite value >= 0",
            });
        }
        for (name, value) in [("beta", self.beta), ("weight", self.weight)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SetupError::InvalidParameter {
                    name,
                    value,
                    reason: "must lie in [0, 1]",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert!(ModelParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_params() {
        let err = ModelParams::new(-0.1, 0.5, 0.5).validate().unwrap_err();
        assert!(matches!(err, SetupError::InvalidParameter { name: "epsilon", .. }));

        let err = ModelParams::new(0.1, 1.5, 0.5).validate().unwrap_err();
        assert!(matches!(err, SetupError::InvalidParameter { name: "beta", .. }));

        let err = ModelParams::new(0.1, 0.5, f64::NAN).validate().unwrap_err();
        assert!(matches!(err, SetupError::InvalidParameter { name: "weight", .. }));
    }

    #[test]
    fn test_large_epsilon_is_allowed() {
        assert!(ModelParams::new(5.0, 0.0, 1.0).validate().is_ok());
    }
}
