//! Loading node-link graphs from disk and feeding them to the engine.

use std::fs;

use contagion_core::{load_network, GraphLoadError, ModelParams, SetupError, Simulation};
use contagion_events::HealthStatus;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/small_world.json");

#[test]
fn test_fixture_loads() {
    let network = load_network(FIXTURE).unwrap();
    assert_eq!(network.node_count(), 16);
    assert_eq!(network.edge_count(), 35);
    // Ring plus the (0, 8) chord
    assert_eq!(network.degree(0), 5);
    assert!(network.neighbors(0).contains(&8));
    assert!(network.neighbors(8).contains(&0));
}

#[test]
fn test_fixture_initial_state() {
    let network = load_network(FIXTURE).unwrap();
    let sim = Simulation::new(network, ModelParams::default(), 42).unwrap();

    assert_eq!(sim.counters().infected(), 2);
    assert_eq!(sim.counters().susceptible(), 14);
    assert_eq!(sim.counters().consumers(), 2);
    assert_eq!(sim.counters().spreaders(), 2);
    assert_eq!(sim.actor(0).unwrap().status(), HealthStatus::Infected);
    assert_eq!(sim.actor(9).unwrap().status(), HealthStatus::Infected);
    assert_eq!(sim.tick(), 0);
    assert_eq!(sim.flag(), 0);
}

#[test]
fn test_missing_file_reports_path() {
    let err = load_network("no/such/graph.json").unwrap_err();
    assert!(matches!(err, GraphLoadError::Io { .. }));
    assert!(err.to_string().contains("no/such/graph.json"));
}

#[test]
fn test_unknown_status_fails_at_construction() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{
            "nodes": [
                {"id": 0, "influence": 0.5, "initial_opinion": 0.5, "group_support": 0.5, "status": 7, "originator": 0},
                {"id": 1, "influence": 0.5, "initial_opinion": 0.5, "group_support": 0.5, "status": 0, "originator": 1}
            ],
            "links": [{"source": 0, "target": 1}]
        }"#,
    )
    .unwrap();

    let network = load_network(&path).unwrap();
    let err = Simulation::new(network, ModelParams::default(), 1).err();
    assert_eq!(err, Some(SetupError::UnknownStatus { node: 0, code: 7 }));
}

#[test]
fn test_dangling_edge_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.json");
    fs::write(
        &path,
        r#"{
            "nodes": [
                {"id": 0, "influence": 0.5, "initial_opinion": 0.5, "group_support": 0.5, "status": 1, "originator": 0}
            ],
            "edges": [{"source": 0, "target": 3}]
        }"#,
    )
    .unwrap();

    let err = load_network(&path).unwrap_err();
    assert!(matches!(
        err,
        GraphLoadError::Invalid(SetupError::UnknownEdgeEndpoint { from: 0, to: 3 })
    ));
}
