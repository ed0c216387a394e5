//! Network Components
//!
//! The fixed undirected social graph and the per-node attributes read once
//! when the simulation is built.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use contagion_events::ActorId;

use crate::error::SetupError;

/// Attributes attached to each node in the input graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeAttributes {
    /// Persuasive/infectious power as a neighbor, in [0, 1]
    pub influence: f64,
    /// Starting belief, in [0, 1]
    pub initial_opinion: f64,
    /// Susceptibility to peer pressure, in [0, 1]
    pub group_support: f64,
    /// Status code: 0=Susceptible, 1=Infected, 2=Exposed, 3=Recovered
    pub status: u8,
    /// Node considered the source of this node's contagion episode
    pub originator: ActorId,
}

impl NodeAttributes {
    /// A susceptible node that is its own originator.
    pub fn susceptible(id: ActorId, influence: f64, initial_opinion: f64, group_support: f64) -> Self {
        Self {
            influence,
            initial_opinion,
            group_support,
            status: 0,
            originator: id,
        }
    }

    /// An infected seed node that is its own originator.
    pub fn infected(id: ActorId, influence: f64, initial_opinion: f64, group_support: f64) -> Self {
        Self {
            status: 1,
            ..Self::susceptible(id, influence, initial_opinion, group_support)
        }
    }
}

/// Undirected graph with attributes per node.
///
/// Node ids are exactly `0..node_count()`. Neighbor lists keep edge insertion
/// order and never contain self-loops or duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    nodes: Vec<NodeAttributes>,
    adjacency: Vec<Vec<ActorId>>,
    edge_count: usize,
}

impl Network {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn attributes(&self, id: ActorId) -> Option<&NodeAttributes> {
        self.nodes.get(id)
    }

    /// Iterate nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = (ActorId, &NodeAttributes)> {
        self.nodes.iter().enumerate()
    }

    /// Neighbors of `id`, empty for unknown ids
    pub fn neighbors(&self, id: ActorId) -> &[ActorId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, id: ActorId) -> usize {
        self.neighbors(id).len()
    }
}

/// Incremental builder for [`Network`]
#[derive(Debug, Clone, Default)]
pub struct NetworkBuilder {
    nodes: Vec<(ActorId, NodeAttributes)>,
    edges: Vec<(ActorId, ActorId)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(mut self, id: ActorId, attributes: NodeAttributes) -> Self {
        self.add_node(id, attributes);
        self
    }

    pub fn edge(mut self, a: ActorId, b: ActorId) -> Self {
        self.add_edge(a, b);
        self
    }

    pub fn add_node(&mut self, id: ActorId, attributes: NodeAttributes) {
        self.nodes.push((id, attributes));
    }

    pub fn add_edge(&mut self, a: ActorId, b: ActorId) {
        self.edges.push((a, b));
    }

    /// Validates ids and edges and produces the network.
    ///
    /// Node attribute values are validated later, when actors are created.
    pub fn build(self) -> Result<Network, SetupError> {
        let node_count = self.nodes.len();
        if node_count == 0 {
            return Err(SetupError::EmptyNetwork);
        }

        let mut slots: Vec<Option<NodeAttributes>> = vec![None; node_count];
        for (id, attributes) in self.nodes {
            let slot = slots
                .get_mut(id)
                .ok_or(SetupError::NodeIdOutOfRange { id, node_count })?;
            if slot.is_some() {
                return Err(SetupError::DuplicateNode(id));
            }
            *slot = Some(attributes);
        }
        // Every id is below node_count and unique, so every slot is filled
        let nodes: Vec<NodeAttributes> = slots.into_iter().flatten().collect();

        let mut adjacency: Vec<Vec<ActorId>> = vec![Vec::new(); node_count];
        let mut seen: HashSet<(ActorId, ActorId)> = HashSet::new();
        for (a, b) in self.edges {
            if a >= node_count || b >= node_count {
                return Err(SetupError::UnknownEdgeEndpoint { from: a, to: b });
            }
            if a == b {
                tracing::warn!(node = a, "ignoring self-loop");
                continue;
            }
            if !seen.insert((a.min(b), a.max(b))) {
                tracing::warn!(a, b, "ignoring duplicate edge");
                continue;
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        Ok(Network {
            nodes,
            adjacency,
            edge_count: seen.len(),
        })
    }
}
