//! Contagion System
//!
//! The per-actor state machine run once per tick, and the
//! opinion-and-infection evaluation that couples belief convergence to
//! infection.

use contagion_events::{ActorId, HealthStatus};

use crate::components::actor::Actor;
use crate::components::counters::Counters;
use crate::components::params::ModelParams;
use crate::systems::opinion::{confidence, infection_probability, pull_toward, within_confidence};

/// What an actor sees of an infected neighbor during its step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfectedNeighbor {
    pub id: ActorId,
    pub influence: f64,
    /// The neighbor's originator, passed on if it infects the actor
    pub originator: ActorId,
    /// The neighbor's belief from the per-tick snapshot
    pub opinion: f64,
}

/// Mutable model context handed to each actor step
pub struct StepContext<'a> {
    pub params: &'a ModelParams,
    pub counters: &'a mut Counters,
    /// The single uniform draw in [0, 1) taken for this activation
    pub eventp: f64,
}

impl Actor {
    /// Runs one activation.
    ///
    /// `infected` lists the neighbors whose live status is Infected, in
    /// adjacency order. It is ignored unless the actor is Susceptible or
    /// Exposed.
    pub fn step(&mut self, infected: &[InfectedNeighbor], ctx: &mut StepContext<'_>) {
        match self.status() {
            HealthStatus::Susceptible => {
                if infected.is_empty() {
                    return;
                }
                self.transition(HealthStatus::Exposed);
                ctx.counters.record_exposure();

                for neighbor in infected {
                    self.evaluate(neighbor, ctx);
                }
                self.mark_assessed(infected.iter().map(|n| n.id));
            }
            HealthStatus::Exposed => {
                let fresh: Vec<InfectedNeighbor> = infected
                    .iter()
                    .filter(|n| !self.has_assessed(n.id))
                    .copied()
                    .collect();

                for neighbor in &fresh {
                    self.evaluate(neighbor, ctx);
                }
                self.mark_assessed(fresh.iter().map(|n| n.id));
            }
            HealthStatus::Infected => {
                if ctx.eventp < ctx.params.beta {
                    self.transition(HealthStatus::Recovered);
                    ctx.counters.record_recovery();
                }
            }
            HealthStatus::Recovered => {}
        }
    }

    /// Bounded-confidence update toward one infected neighbor, followed by an
    /// infection check if the beliefs are still aligned afterwards.
    fn evaluate(&mut self, neighbor: &InfectedNeighbor, ctx: &mut StepContext<'_>) {
        let epsilon = ctx.params.epsilon;
        if !within_confidence(neighbor.opinion, self.belief(), epsilon) {
            return;
        }

        let conf = confidence(ctx.params.weight, self.extremeness());
        self.set_belief(pull_toward(self.belief(), neighbor.opinion, conf));

        if !within_confidence(neighbor.opinion, self.belief(), epsilon)
            || self.status() == HealthStatus::Infected
        {
            return;
        }

        let alpha = infection_probability(neighbor.influence, self.extremeness(), self.group_support());
        if ctx.eventp < alpha {
            self.transition(HealthStatus::Infected);
            self.set_originator(neighbor.originator);
            ctx.counters.record_infection();
        }
    }
}
