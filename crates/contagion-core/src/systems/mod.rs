//! Simulation Systems
//!
//! Opinion dynamics, the per-actor contagion state machine and stability detection.

pub mod contagion;
pub mod opinion;
pub mod stability;

// Re-export commonly used systems
pub use contagion::{InfectedNeighbor, StepContext};
pub use opinion::{camp_counts, extremeness, LEFTIST_THRESHOLD, RIGHTIST_THRESHOLD};
pub use stability::{StabilityTracker, StabilityWindow, WINDOW_LEN};
