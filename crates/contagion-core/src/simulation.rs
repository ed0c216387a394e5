//! Simulation
//!
//! Owns the network, the actors, the shared counters and the convergence
//! bookkeeping, and advances the model one tick at a time.
//!
//! Actors are activated sequentially in a fresh random order each tick. An
//! actor sees the live status of neighbors activated before it in the same
//! tick, so infections can chain within a tick. Neighbor beliefs, on the other
//! hand, are read from the snapshot taken at the end of the previous tick.

use std::collections::BTreeMap;
use std::convert::Infallible;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use contagion_events::{ActorId, AggregateRecord, HealthStatus, TickRecord};

use crate::components::{Actor, Counters, ModelParams, Network};
use crate::error::SetupError;
use crate::output::sink::{MemoryCollector, ReportSink};
use crate::systems::contagion::{InfectedNeighbor, StepContext};
use crate::systems::opinion::camp_counts;
use crate::systems::stability::StabilityTracker;

/// Result of [`Simulation::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    /// Steps executed by this call
    pub ticks_run: u64,
    /// Value of [`Simulation::tick`] after the step that first raised the
    /// convergence flag during this call
    pub converged_at: Option<u64>,
}

pub struct Simulation<S: ReportSink = MemoryCollector> {
    network: Network,
    actors: Vec<Actor>,
    params: ModelParams,
    counters: Counters,
    num_leftist: usize,
    num_rightist: usize,
    /// Beliefs as of the end of the previous tick, indexed by actor id.
    /// Before the first tick this holds the rounded initial beliefs.
    opinions: Vec<f64>,
    stability: StabilityTracker,
    converged: bool,
    tick: u64,
    rng: SmallRng,
    sink: S,
}

impl Simulation<MemoryCollector> {
    /// Builds a simulation collecting every tick record in memory.
    pub fn new(network: Network, params: ModelParams, seed: u64) -> Result<Self, SetupError> {
        Self::with_sink(network, params, seed, MemoryCollector::new())
    }
}

impl<S: ReportSink> Simulation<S> {
    /// Builds a simulation, validating parameters and every node attribute.
    pub fn with_sink(network: Network, params: ModelParams, seed: u64, sink: S) -> Result<Self, SetupError> {
        params.validate()?;

        let actors = network
            .nodes()
            .map(|(id, attributes)| Actor::from_attributes(id, attributes))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(actor) = actors.iter().find(|a| a.originator() >= actors.len()) {
            return Err(SetupError::UnknownOriginator {
                node: actor.id(),
                originator: actor.originator(),
            });
        }

        let counters = Counters::from_statuses(actors.iter().map(Actor::status));
        let opinions: Vec<f64> = actors.iter().map(Actor::belief).collect();
        let (num_leftist, num_rightist) = camp_counts(&opinions);
        let stability = StabilityTracker::new(&counters);

        tracing::info!(
            actors = actors.len(),
            edges = network.edge_count(),
            infected = counters.infected(),
            seed,
            "simulation initialized"
        );

        Ok(Self {
            network,
            actors,
            params,
            counters,
            num_leftist,
            num_rightist,
            opinions,
            stability,
            converged: false,
            tick: 0,
            rng: SmallRng::seed_from_u64(seed),
            sink,
        })
    }

    /// Advances exactly one tick.
    ///
    /// The record pushed to the sink describes the state before this tick's
    /// activations.
    pub fn step(&mut self) {
        let record = self.tick_record(self.sink.wants_actors());
        self.sink.collect(record);

        let mut order: Vec<ActorId> = (0..self.actors.len()).collect();
        order.shuffle(&mut self.rng);
        for id in order {
            self.activate(id);
        }

        let current: Vec<f64> = self.actors.iter().map(Actor::belief).collect();
        let previous = std::mem::replace(&mut self.opinions, current);
        (self.num_leftist, self.num_rightist) = camp_counts(&self.opinions);

        self.stability.push(&self.counters);
        let was_converged = self.converged;
        self.converged = self.stability.all_stable() && previous == self.opinions;
        self.tick += 1;

        tracing::debug!(
            tick = self.tick,
            susceptible = self.counters.susceptible(),
            exposed = self.counters.exposed(),
            infected = self.counters.infected(),
            recovered = self.counters.recovered(),
            leftist = self.num_leftist,
            rightist = self.num_rightist,
            "tick complete"
        );
        if self.converged && !was_converged {
            tracing::info!(tick = self.tick, "convergence detected");
        }
    }

    /// Steps up to `max_ticks` times, optionally halting on the first tick
    /// the convergence flag is raised.
    pub fn run(&mut self, max_ticks: u64, stop_on_convergence: bool) -> RunOutcome {
        match self.run_with(max_ticks, stop_on_convergence, |_| Ok::<(), Infallible>(())) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    /// Like [`Simulation::run`], calling `after_step` once after every step.
    ///
    /// The first error returned by `after_step` ends the run and is passed
    /// through.
    pub fn run_with<E>(
        &mut self,
        max_ticks: u64,
        stop_on_convergence: bool,
        mut after_step: impl FnMut(&mut Self) -> Result<(), E>,
    ) -> Result<RunOutcome, E> {
        let start = self.tick;
        let mut converged_at = None;
        for _ in 0..max_ticks {
            self.step();
            after_step(self)?;
            if self.converged && converged_at.is_none() {
                converged_at = Some(self.tick);
                if stop_on_convergence {
                    break;
                }
            }
        }
        Ok(RunOutcome {
            ticks_run: self.tick - start,
            converged_at,
        })
    }

    fn activate(&mut self, id: ActorId) {
        // Drawn for every activation so the random stream does not depend on status
        let eventp: f64 = self.rng.gen();
        let infected = match self.actors[id].status() {
            HealthStatus::Susceptible | HealthStatus::Exposed => self.infected_neighbors(id),
            HealthStatus::Infected | HealthStatus::Recovered => Vec::new(),
        };

        let mut ctx = StepContext {
            params: &self.params,
            counters: &mut self.counters,
            eventp,
        };
        self.actors[id].step(&infected, &mut ctx);
    }

    /// Neighbors whose live status is Infected, with beliefs from the snapshot
    fn infected_neighbors(&self, id: ActorId) -> Vec<InfectedNeighbor> {
        self.network
            .neighbors(id)
            .iter()
            .filter_map(|&n| {
                let neighbor = &self.actors[n];
                (neighbor.status() == HealthStatus::Infected).then(|| InfectedNeighbor {
                    id: n,
                    influence: neighbor.influence(),
                    originator: neighbor.originator(),
                    opinion: self.opinions[n],
                })
            })
            .collect()
    }

    /// Replaces one actor's live belief.
    ///
    /// The next snapshot will differ from the current one, so the convergence
    /// flag drops on the following tick.
    pub fn override_belief(&mut self, id: ActorId, belief: f64) -> Result<(), SetupError> {
        if !(0.0..=1.0).contains(&belief) {
            return Err(SetupError::AttributeOutOfRange {
                node: id,
                attribute: "belief",
                value: belief,
            });
        }
        let actor = self.actors.get_mut(id).ok_or(SetupError::UnknownActor(id))?;
        tracing::debug!(actor = id, from = actor.belief(), to = belief, "belief overridden");
        actor.set_belief(belief);
        Ok(())
    }

    pub fn aggregates(&self) -> AggregateRecord {
        AggregateRecord {
            consumers: self.counters.consumers(),
            spreaders: self.counters.spreaders(),
            exposed: self.counters.exposed(),
            infected: self.counters.infected(),
            recovered: self.counters.recovered(),
            susceptible: self.counters.susceptible(),
            leftist: self.num_leftist,
            rightist: self.num_rightist,
        }
    }

    /// Report for the current state, as the sink would receive it next step
    pub fn tick_record(&self, include_actors: bool) -> TickRecord {
        TickRecord {
            tick: self.tick,
            aggregates: self.aggregates(),
            actors: if include_actors {
                self.actors.iter().map(Actor::record).collect()
            } else {
                Vec::new()
            },
        }
    }

    /// Number of ever-infected actors (Infected or Recovered) per originator
    pub fn cascade_sizes(&self) -> BTreeMap<ActorId, usize> {
        let mut sizes = BTreeMap::new();
        for actor in &self.actors {
            if matches!(actor.status(), HealthStatus::Infected | HealthStatus::Recovered) {
                *sizes.entry(actor.originator()).or_insert(0) += 1;
            }
        }
        sizes
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// Convergence flag as 0/1
    pub fn flag(&self) -> u8 {
        self.converged as u8
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id)
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Belief snapshot taken at the end of the last tick
    pub fn opinions(&self) -> &[f64] {
        &self.opinions
    }

    pub fn num_leftist(&self) -> usize {
        self.num_leftist
    }

    pub fn num_rightist(&self) -> usize {
        self.num_rightist
    }

    pub fn params(&self) -> &ModelParams {
        &self.params
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn neighbors(&self, id: ActorId) -> &[ActorId] {
        self.network.neighbors(id)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
