use std::collections::VecDeque;

use log::{debug, trace};

use crate::tree::{
    adjacency::Adjacency,
    config::FrontierOrder,
    error::TreeError,
    ids::{NodeId, ROOT},
    resolver::ArrivalTimes,
};

/// Alice's share of the gate at a node.
///
/// - Bob never passes the node, or arrives later than Alice: the full amount.
/// - Both arrive at the same time: half, truncated toward zero (`-3` gives `-1`).
/// - Bob was there first and already opened the gate: nothing.
pub fn gate_share(amount: i64, bob_time: Option<usize>, alice_time: usize) -> i64 {
    match bob_time {
        None => amount,
        Some(bob_time) if bob_time > alice_time => amount,
        Some(bob_time) if bob_time == alice_time => amount / 2,
        Some(_) => 0,
    }
}

/// Emitted once for every leaf Alice's search reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafRecord {
    pub leaf: NodeId,
    /// Steps Alice took from the root
    pub time: usize,
    /// Net reward collected on the way, the leaf included
    pub reward: i64,
}

/// Outcome of Alice's search over all root-to-leaf paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    pub best_reward: i64,
    pub best_leaf: NodeId,
    /// Root first, `best_leaf` last
    pub path: Vec<NodeId>,
    pub leaves_visited: usize,
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    node: NodeId,
    parent: Option<NodeId>,
    time: usize,
    reward: i64,
}

/// Walk every root-to-leaf path for Alice and return the most profitable one.
///
/// A single visited set is shared by all branches. Each node is marked only after it has been
/// processed and its unvisited neighbors queued; in a tree the only visited neighbor of a node
/// is its parent, so no branch is pruned. The first leaf reaching the best reward wins ties.
pub fn explore<F>(
    adjacency: &Adjacency,
    amounts: &[i64],
    arrivals: &ArrivalTimes,
    order: FrontierOrder,
    mut on_leaf: F,
) -> Result<Exploration, TreeError>
where
    F: FnMut(&LeafRecord),
{
    let node_count = adjacency.node_count();
    if amounts.len() != node_count {
        return Err(TreeError::AmountCount {
            expected: node_count,
            actual: amounts.len(),
        });
    }

    let mut visited = vec![false; node_count];
    let mut parents: Vec<Option<NodeId>> = vec![None; node_count];
    let mut best: Option<LeafRecord> = None;
    let mut leaves_visited = 0;

    let mut frontier = VecDeque::new();
    frontier.push_back(FrontierEntry {
        node: ROOT,
        parent: None,
        time: 0,
        reward: 0,
    });

    while let Some(entry) = pop(&mut frontier, order) {
        let node = entry.node;
        // Only reachable on non-tree input, where a node can be queued twice.
        if visited[node.index()] {
            continue;
        }
        parents[node.index()] = entry.parent;

        let reward = entry
            .reward
            .checked_add(gate_share(
                amounts[node.index()],
                arrivals.get(node),
                entry.time,
            ))
            .ok_or(TreeError::RewardOverflow { node })?;

        if adjacency.is_leaf(node) {
            let record = LeafRecord {
                leaf: node,
                time: entry.time,
                reward,
            };
            trace!(
                "leaf {} at time {} with reward {reward}",
                node.index(),
                entry.time
            );
            on_leaf(&record);
            leaves_visited += 1;
            if best.is_none_or(|b| reward > b.reward) {
                best = Some(record);
            }
            visited[node.index()] = true;
            continue;
        }

        for &neighbor in adjacency.neighbors(node) {
            if !visited[neighbor.index()] {
                frontier.push_back(FrontierEntry {
                    node: neighbor,
                    parent: Some(node),
                    time: entry.time + 1,
                    reward,
                });
            }
        }

        visited[node.index()] = true;
    }

    let best = best.ok_or(TreeError::NoLeafReached)?;
    debug!(
        "alice visited {leaves_visited} leaves, best reward {} at leaf {}",
        best.reward,
        best.leaf.index()
    );

    Ok(Exploration {
        best_reward: best.reward,
        best_leaf: best.leaf,
        path: trace_path(&parents, best.leaf),
        leaves_visited,
    })
}

fn pop(frontier: &mut VecDeque<FrontierEntry>, order: FrontierOrder) -> Option<FrontierEntry> {
    match order {
        FrontierOrder::BreadthFirst => frontier.pop_front(),
        FrontierOrder::DepthFirst => frontier.pop_back(),
    }
}

/// Follow parent links from `leaf` back to the root.
fn trace_path(parents: &[Option<NodeId>], leaf: NodeId) -> Vec<NodeId> {
    let mut path = vec![leaf];
    let mut current = leaf;
    while let Some(parent) = parents[current.index()] {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}
