use std::fmt;

use crate::tree::ids::NodeId;

/// Error type for tree construction and the two traversal phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The amount list was empty, so there is no root.
    EmptyTree,
    /// A tree on `node_count` nodes needs exactly `node_count - 1` edges.
    EdgeCount { expected: usize, actual: usize },
    /// An edge endpoint does not name a node.
    NodeOutOfRange {
        edge_index: usize,
        node: usize,
        node_count: usize,
    },
    /// An edge connects a node to itself.
    SelfLoop { edge_index: usize, node: NodeId },
    /// An edge joins two nodes that are already connected.
    Cycle {
        edge_index: usize,
        from: NodeId,
        to: NodeId,
    },
    /// The amount list does not have one entry per node.
    AmountCount { expected: usize, actual: usize },
    /// Bob's start node does not name a node.
    BobOutOfRange { bob: usize, node_count: usize },
    /// Bob's walk exhausted the graph without reaching the root.
    RootUnreachable { bob: NodeId },
    /// Alice's running reward left the `i64` range at this node.
    RewardOverflow { node: NodeId },
    /// Alice's search finished without reaching any leaf.
    NoLeafReached,
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeError::EmptyTree => write!(f, "tree has no nodes"),
            TreeError::EdgeCount { expected, actual } => {
                write!(f, "expected {expected} edges for a tree, got {actual}")
            }
            TreeError::NodeOutOfRange {
                edge_index,
                node,
                node_count,
            } => write!(
                f,
                "edge {edge_index} references node {node} but the tree has {node_count} nodes"
            ),
            TreeError::SelfLoop { edge_index, node } => {
                write!(f, "edge {edge_index} is a self loop on node {}", node.index())
            }
            TreeError::Cycle {
                edge_index,
                from,
                to,
            } => write!(
                f,
                "edge {edge_index} ({}, {}) closes a cycle",
                from.index(),
                to.index()
            ),
            TreeError::AmountCount { expected, actual } => {
                write!(f, "expected {expected} amounts, one per node, got {actual}")
            }
            TreeError::BobOutOfRange { bob, node_count } => write!(
                f,
                "bob starts at node {bob} but the tree has {node_count} nodes"
            ),
            TreeError::RootUnreachable { bob } => {
                write!(f, "no path from node {} to the root", bob.index())
            }
            TreeError::RewardOverflow { node } => {
                write!(f, "reward overflows i64 at node {}", node.index())
            }
            TreeError::NoLeafReached => write!(f, "search reached no leaf"),
        }
    }
}

impl std::error::Error for TreeError {}
