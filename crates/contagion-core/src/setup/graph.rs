//! Graph Loading
//!
//! Reads networks in node-link JSON form:
//!
//! ```json
//! {
//!   "nodes": [{"id": 0, "influence": 0.9, "initial_opinion": 0.7,
//!              "group_support": 0.4, "status": 1, "originator": 0}],
//!   "links": [{"source": 0, "target": 1}]
//! }
//! ```
//!
//! Extra keys (`directed`, `multigraph`, `graph`, extra node attributes) are
//! ignored. `edges` is accepted in place of `links`.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use contagion_events::ActorId;

use crate::components::network::{Network, NetworkBuilder, NodeAttributes};
use crate::error::GraphLoadError;

#[derive(Debug, Deserialize)]
struct GraphFile {
    #[serde(default)]
    directed: bool,
    nodes: Vec<GraphNode>,
    #[serde(default, alias = "edges")]
    links: Vec<GraphLink>,
}

#[derive(Debug, Deserialize)]
struct GraphNode {
    id: ActorId,
    #[serde(flatten)]
    attributes: NodeAttributes,
}

#[derive(Debug, Deserialize)]
struct GraphLink {
    source: ActorId,
    target: ActorId,
}

/// Parse a node-link JSON document into a network
pub fn parse_network(json: &str) -> Result<Network, GraphLoadError> {
    let graph: GraphFile = serde_json::from_str(json)?;
    if graph.directed {
        tracing::warn!("graph is marked directed; edges will be treated as undirected");
    }

    let mut builder = NetworkBuilder::new();
    for node in graph.nodes {
        builder.add_node(node.id, node.attributes);
    }
    for link in graph.links {
        builder.add_edge(link.source, link.target);
    }
    Ok(builder.build()?)
}

/// Load a node-link JSON network from disk
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, GraphLoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| GraphLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let network = parse_network(&content)?;
    tracing::info!(
        path = %path.display(),
        nodes = network.node_count(),
        edges = network.edge_count(),
        "loaded network"
    );
    Ok(network)
}
