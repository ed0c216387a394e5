//! Actor Components
//!
//! One actor per network node: belief, fixed traits, health status and the
//! memory of neighbors already assessed during the current exposure.

use std::collections::HashSet;

use contagion_events::{ActorId, ActorRecord, HealthStatus};

use crate::components::network::NodeAttributes;
use crate::error::SetupError;
use crate::systems::opinion::{extremeness, round_belief};

#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    id: ActorId,
    belief: f64,
    extremeness: f64,
    influence: f64,
    group_support: f64,
    status: HealthStatus,
    originator: ActorId,
    assessed_neighbors: HashSet<ActorId>,
}

fn unit_interval(node: ActorId, attribute: &'static str, value: f64) -> Result<f64, SetupError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(SetupError::AttributeOutOfRange {
            node,
            attribute,
            value,
        })
    }
}

impl Actor {
    /// Creates an actor from its node attributes, rounding the belief to two
    /// decimals.
    ///
    /// The originator is not checked against the network here; the simulation
    /// does that once all nodes are known.
    pub fn from_attributes(id: ActorId, attributes: &NodeAttributes) -> Result<Self, SetupError> {
        let belief = round_belief(unit_interval(id, "initial_opinion", attributes.initial_opinion)?);
        let influence = unit_interval(id, "influence", attributes.influence)?;
        let group_support = unit_interval(id, "group_support", attributes.group_support)?;
        let status = HealthStatus::try_from(attributes.status).map_err(|e| SetupError::UnknownStatus {
            node: id,
            code: e.0,
        })?;

        Ok(Self {
            id,
            belief,
            extremeness: extremeness(belief),
            influence,
            group_support,
            status,
            originator: attributes.originator,
            assessed_neighbors: HashSet::new(),
        })
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn belief(&self) -> f64 {
        self.belief
    }

    pub fn extremeness(&self) -> f64 {
        self.extremeness
    }

    pub fn influence(&self) -> f64 {
        self.influence
    }

    pub fn group_support(&self) -> f64 {
        self.group_support
    }

    pub fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn originator(&self) -> ActorId {
        self.originator
    }

    pub fn assessed_neighbors(&self) -> &HashSet<ActorId> {
        &self.assessed_neighbors
    }

    pub fn has_assessed(&self, neighbor: ActorId) -> bool {
        self.assessed_neighbors.contains(&neighbor)
    }

    /// Per-actor fields for the tick report
    pub fn record(&self) -> ActorRecord {
        ActorRecord {
            id: self.id,
            status: self.status,
            opinion: self.belief,
            extremeness: self.extremeness,
            influence: self.influence,
        }
    }

    /// Sets the belief and recomputes extremeness.
    pub(crate) fn set_belief(&mut self, belief: f64) {
        self.belief = belief;
        self.extremeness = extremeness(belief);
    }

    /// Moves one step along the status chain.
    pub(crate) fn transition(&mut self, next: HealthStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "illegal transition {} -> {} for actor {}",
            self.status,
            next,
            self.id
        );
        tracing::trace!(actor = self.id, from = %self.status, to = %next, "status transition");
        self.status = next;
    }

    pub(crate) fn set_originator(&mut self, originator: ActorId) {
        self.originator = originator;
    }

    pub(crate) fn mark_assessed(&mut self, neighbors: impl IntoIterator<Item = ActorId>) {
        self.assessed_neighbors.extend(neighbors);
    }
}
