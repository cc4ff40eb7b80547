use std::collections::{BTreeMap, btree_map};

use log::debug;

use crate::tree::{
    adjacency::Adjacency,
    error::TreeError,
    ids::{NodeId, ROOT},
};

/// Time at which Bob reaches each node of his walk to the root.
/// Nodes off that walk have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrivalTimes {
    times: BTreeMap<NodeId, usize>,
}

impl ArrivalTimes {
    /// Arrival time at `node`, or `None` if Bob never passes it
    pub fn get(&self, node: NodeId) -> Option<usize> {
        self.times.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.times.contains_key(&node)
    }

    /// Number of nodes on Bob's walk, both ends included
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Bob's walk from his start node to the root, ordered by arrival time.
    pub fn path(&self) -> Vec<NodeId> {
        let mut path = vec![ROOT; self.times.len()];
        for (&node, &time) in &self.times {
            path[time] = node;
        }
        path
    }

    /// Iterate `(node, time)` pairs in node order
    pub fn iter(&self) -> btree_map::Iter<'_, NodeId, usize> {
        self.times.iter()
    }
}

impl<'a> IntoIterator for &'a ArrivalTimes {
    type Item = (&'a NodeId, &'a usize);
    type IntoIter = btree_map::Iter<'a, NodeId, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}

/// One level of the explicit DFS stack: the node and how many of its neighbors were tried.
struct Frame {
    node: NodeId,
    cursor: usize,
}

/// Find Bob's unique walk from `bob` to the root and record his arrival time at every node
/// on it.
///
/// Depth-first search with an explicit path stack. Every node entered gets a tentative time;
/// when a node runs out of unvisited neighbors without the root being found, its entry is
/// erased again, so only the path itself survives. Search stops as soon as the root is entered.
pub fn resolve_arrival_times(
    adjacency: &Adjacency,
    bob: NodeId,
) -> Result<ArrivalTimes, TreeError> {
    if !adjacency.contains(bob) {
        return Err(TreeError::BobOutOfRange {
            bob: bob.index(),
            node_count: adjacency.node_count(),
        });
    }

    let mut times = BTreeMap::new();
    let mut visited = vec![false; adjacency.node_count()];
    let mut stack = vec![Frame {
        node: bob,
        cursor: 0,
    }];
    times.insert(bob, 0);
    visited[bob.index()] = true;

    if bob == ROOT {
        debug!("bob starts at the root");
        return Ok(ArrivalTimes { times });
    }

    while let Some(frame) = stack.last_mut() {
        let neighbors = adjacency.neighbors(frame.node);
        let mut next = None;
        while let Some(&candidate) = neighbors.get(frame.cursor) {
            frame.cursor += 1;
            if !visited[candidate.index()] {
                next = Some(candidate);
                break;
            }
        }

        let Some(next) = next else {
            // Dead end: this branch is not on the way to the root.
            times.remove(&frame.node);
            stack.pop();
            continue;
        };

        let time = stack.len();
        times.insert(next, time);
        visited[next.index()] = true;

        if next == ROOT {
            debug!(
                "bob reaches the root from node {} after {time} steps",
                bob.index()
            );
            return Ok(ArrivalTimes { times });
        }

        stack.push(Frame {
            node: next,
            cursor: 0,
        });
    }

    Err(TreeError::RootUnreachable { bob })
}
