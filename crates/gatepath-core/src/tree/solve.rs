use log::debug;

use crate::tree::{
    adjacency::Adjacency,
    config::SolveConfig,
    error::TreeError,
    explorer::{LeafRecord, explore},
    ids::NodeId,
    resolver::{ArrivalTimes, resolve_arrival_times},
    snapshot::{ArrivalSnapshot, SolutionSnapshot},
};

/// Full result of one solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub reward: i64,
    pub best_leaf: NodeId,
    /// Alice's most profitable walk, root first
    pub path: Vec<NodeId>,
    pub arrivals: ArrivalTimes,
    pub leaves_visited: usize,
}

impl Solution {
    /// Serializable view of this solution.
    pub fn snapshot(&self) -> SolutionSnapshot {
        let bob_path = self
            .arrivals
            .path()
            .into_iter()
            .enumerate()
            .map(|(time, node)| ArrivalSnapshot {
                node: node.index(),
                time,
            })
            .collect();

        SolutionSnapshot {
            schema_version: 1,
            reward: self.reward,
            best_leaf: self.best_leaf.index(),
            alice_path: self.path.iter().map(NodeId::index).collect(),
            bob_path,
            leaves_visited: self.leaves_visited,
        }
    }
}

/// Maximum net reward Alice can collect walking from the root to a leaf while Bob walks
/// from `bob` to the root. Uses the default configuration.
pub fn most_profitable_path(
    edges: &[[usize; 2]],
    bob: usize,
    amount: &[i64],
) -> Result<i64, TreeError> {
    solve(edges, bob, amount, &SolveConfig::default()).map(|solution| solution.reward)
}

/// Resolve Bob's arrival times, then search Alice's paths against them.
pub fn solve(
    edges: &[[usize; 2]],
    bob: usize,
    amount: &[i64],
    config: &SolveConfig,
) -> Result<Solution, TreeError> {
    solve_with_hook(edges, bob, amount, config, |_| {})
}

/// Solve and invoke a callback for every leaf Alice's search reaches.
pub fn solve_with_hook<F>(
    edges: &[[usize; 2]],
    bob: usize,
    amount: &[i64],
    config: &SolveConfig,
    on_leaf: F,
) -> Result<Solution, TreeError>
where
    F: FnMut(&LeafRecord),
{
    let adjacency = Adjacency::from_edges(amount.len(), edges, config.validate)?;
    let arrivals = resolve_arrival_times(&adjacency, NodeId::from(bob))?;
    debug!("bob walks {} nodes to the root", arrivals.len());

    let exploration = explore(&adjacency, amount, &arrivals, config.frontier, on_leaf)?;

    Ok(Solution {
        reward: exploration.best_reward,
        best_leaf: exploration.best_leaf,
        path: exploration.path,
        arrivals,
        leaves_visited: exploration.leaves_visited,
    })
}
