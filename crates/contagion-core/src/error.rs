//! Error Types
//!
//! Construction, loading, configuration and output failures.

use std::path::PathBuf;

use contagion_events::ActorId;

/// Errors detected while building a network or a simulation.
///
/// All of these are raised before the first tick runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("network has no nodes")]
    EmptyNetwork,

    #[error("node {0} is defined more than once")]
    DuplicateNode(ActorId),

    #[error("node id {id} is outside 0..{node_count}; node ids must be contiguous from 0")]
    NodeIdOutOfRange { id: ActorId, node_count: usize },

    #[error("edge ({from}, {to}) references a node that does not exist")]
    UnknownEdgeEndpoint { from: ActorId, to: ActorId },

    #[error("node {node}: attribute `{attribute}` = {value} is outside [0, 1]")]
    AttributeOutOfRange {
        node: ActorId,
        attribute: &'static str,
        value: f64,
    },

    #[error("node {node}: unknown status code {code}")]
    UnknownStatus { node: ActorId, code: u8 },

    #[error("node {node}: originator {originator} is not a node of the network")]
    UnknownOriginator { node: ActorId, originator: ActorId },

    #[error("parameter `{name}` = {value} is invalid: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("actor {0} does not exist")]
    UnknownActor(ActorId),
}

/// Errors reading a graph file.
#[derive(Debug, thiserror::Error)]
pub enum GraphLoadError {
    #[error("could not read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed graph JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] SetupError),
}

/// Errors loading the tuning file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors writing reports.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
