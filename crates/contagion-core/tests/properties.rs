//! Property tests over random small networks.

use contagion_core::{ModelParams, Network, NetworkBuilder, NodeAttributes, Simulation};
use contagion_events::HealthStatus;
use proptest::prelude::*;

fn network_strategy() -> impl Strategy<Value = Network> {
    (2usize..12)
        .prop_flat_map(|n| {
            let node = (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64, 0u8..4, 0..n);
            (
                proptest::collection::vec(node, n),
                proptest::collection::vec((0..n, 0..n), 0..n * 3),
            )
        })
        .prop_map(|(nodes, edges)| {
            let mut builder = NetworkBuilder::new();
            for (id, (influence, initial_opinion, group_support, status, originator)) in nodes.into_iter().enumerate() {
                builder.add_node(
                    id,
                    NodeAttributes {
                        influence,
                        initial_opinion,
                        group_support,
                        status,
                        originator,
                    },
                );
            }
            for (a, b) in edges {
                builder.add_edge(a, b);
            }
            builder.build().expect("generated network is structurally valid")
        })
}

fn params_strategy() -> impl Strategy<Value = ModelParams> {
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(|(epsilon, beta, weight)| ModelParams::new(epsilon, beta, weight))
}

proptest! {
    #[test]
    fn property_invariants_hold_every_tick(
        network in network_strategy(),
        params in params_strategy(),
        seed in any::<u64>(),
        ticks in 1u64..30,
    ) {
        let population = network.node_count();
        let mut sim = Simulation::new(network, params, seed).unwrap();

        for _ in 0..ticks {
            let before_statuses: Vec<HealthStatus> = sim.actors().iter().map(|a| a.status()).collect();
            let before = sim.counters().clone();

            sim.step();
            let after = sim.counters();

            prop_assert_eq!(after.population(), population);
            prop_assert!(after.consumers() >= before.consumers());
            prop_assert!(after.spreaders() >= before.spreaders());

            let mut left_susceptible = 0;
            let mut newly_infected = 0;
            for (actor, &was) in sim.actors().iter().zip(&before_statuses) {
                let now = actor.status();
                prop_assert!(was.precedes_or_equals(now), "{} regressed from {} to {}", actor.id(), was, now);

                if was == HealthStatus::Susceptible && now != HealthStatus::Susceptible {
                    left_susceptible += 1;
                }
                if matches!(was, HealthStatus::Susceptible | HealthStatus::Exposed)
                    && matches!(now, HealthStatus::Infected | HealthStatus::Recovered)
                {
                    newly_infected += 1;
                }

                let belief = actor.belief();
                prop_assert!((0.0..=1.0).contains(&belief), "belief {} out of range", belief);
                prop_assert!((actor.extremeness() - (2.0 * belief - 1.0).abs()).abs() < 1e-9);
            }

            // Every actor leaving Susceptible went through Exposed in the counters
            prop_assert_eq!(after.consumers() - before.consumers(), left_susceptible);
            prop_assert_eq!(after.spreaders() - before.spreaders(), newly_infected);
        }

        let last = sim.sink().last().unwrap();
        prop_assert_eq!(last.aggregates.population(), population);
        prop_assert_eq!(last.actors.len(), population);
    }

    #[test]
    fn property_deterministic_given_seed(
        network in network_strategy(),
        params in params_strategy(),
        seed in any::<u64>(),
        ticks in 1u64..25,
    ) {
        let mut sim_a = Simulation::new(network.clone(), params, seed).unwrap();
        let mut sim_b = Simulation::new(network, params, seed).unwrap();

        sim_a.run(ticks, false);
        sim_b.run(ticks, false);

        prop_assert_eq!(sim_a.sink().records(), sim_b.sink().records());
        prop_assert_eq!(sim_a.is_converged(), sim_b.is_converged());
    }

    #[test]
    fn property_zero_beta_keeps_infected(
        network in network_strategy(),
        seed in any::<u64>(),
        ticks in 1u64..20,
    ) {
        let mut sim = Simulation::new(network, ModelParams::new(0.5, 0.0, 0.5), seed).unwrap();
        let initially_recovered = sim.counters().recovered();
        sim.run(ticks, false);
        prop_assert_eq!(sim.counters().recovered(), initially_recovered);
    }
}
