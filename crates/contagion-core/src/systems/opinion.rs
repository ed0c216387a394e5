//! Opinion Dynamics
//!
//! Bounded-confidence belief updates and the infection probability they feed.

/// Beliefs at or below this count as leftist.
pub const LEFTIST_THRESHOLD: f64 = 0.4;
/// Beliefs at or above this count as rightist.
pub const RIGHTIST_THRESHOLD: f64 = 0.6;

/// Distance of a belief from the midpoint, scaled to [0, 1].
pub fn extremeness(belief: f64) -> f64 {
    (2.0 * belief - 1.0).abs()
}

/// Round to two decimal places, as beliefs are at actor creation.
pub fn round_belief(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whether two beliefs are inside the confidence window.
pub fn within_confidence(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Resistance to opinion change: more extreme actors move less.
pub fn confidence(weight: f64, extremeness: f64) -> f64 {
    weight + (1.0 - weight) * extremeness
}

/// Move `belief` toward `target` by the share `1 - conf` of the gap.
pub fn pull_toward(belief: f64, target: f64, conf: f64) -> f64 {
    belief + (1.0 - conf) * (target - belief)
}

/// Equal-weighted average of neighbor influence, own extremeness and own group support.
pub fn infection_probability(neighbor_influence: f64, extremeness: f64, group_support: f64) -> f64 {
    (neighbor_influence + extremeness + group_support) / 3.0
}

pub fn is_leftist(belief: f64) -> bool {
    belief <= LEFTIST_THRESHOLD
}

pub fn is_rightist(belief: f64) -> bool {
    belief >= RIGHTIST_THRESHOLD
}

/// Counts of (leftist, rightist) beliefs.
pub fn camp_counts(beliefs: &[f64]) -> (usize, usize) {
    beliefs.iter().fold((0, 0), |(left, right), &b| {
        (left + is_leftist(b) as usize, right + is_rightist(b) as usize)
    })
}
