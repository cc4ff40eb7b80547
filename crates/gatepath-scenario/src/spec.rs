use gatepath_core::{Solution, SolveConfig, solve};
use log::info;
use serde::{Deserialize, Serialize};

use crate::ScenarioError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Serializable problem instance used for YAML IO and validation.
pub struct ScenarioSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Undirected tree edges over nodes `0..amount.len()`.
    pub edges: Vec<[usize; 2]>,
    /// Bob's start node.
    pub bob: usize,
    /// Gate amount per node; negative is a cost, positive a reward.
    pub amount: Vec<i64>,
    /// Reward the solver should return, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<i64>,
}

impl ScenarioSpec {
    pub fn node_count(&self) -> usize {
        self.amount.len()
    }

    /// Validate shape and index invariants. Cycles are left to the solver, which reports the
    /// exact closing edge.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        let nodes = self.node_count();
        if nodes == 0 {
            return Err(ScenarioError::EmptyAmount);
        }

        if self.edges.len() != nodes - 1 {
            return Err(ScenarioError::EdgeCount {
                nodes,
                expected: nodes - 1,
                actual: self.edges.len(),
            });
        }

        for (edge_index, &[a, b]) in self.edges.iter().enumerate() {
            if let Some(node) = [a, b].into_iter().find(|node| *node >= nodes) {
                return Err(ScenarioError::NodeOutOfRange { edge_index, node });
            }
            if a == b {
                return Err(ScenarioError::SelfLoop { edge_index, node: a });
            }
        }

        if self.bob >= nodes {
            return Err(ScenarioError::BobOutOfRange {
                bob: self.bob,
                nodes,
            });
        }

        Ok(())
    }

    /// Validate and solve with the default configuration.
    pub fn solve(&self) -> Result<Solution, ScenarioError> {
        self.solve_with(&SolveConfig::default())
    }

    /// Solve with an explicit configuration. Scenario checks run only when `config.validate`
    /// is set; otherwise the solver still rejects out-of-range node indices.
    pub fn solve_with(&self, config: &SolveConfig) -> Result<Solution, ScenarioError> {
        if config.validate {
            self.validate()?;
        }
        let solution = solve(&self.edges, self.bob, &self.amount, config)?;
        info!(
            "scenario {} solved: reward {} at leaf {}",
            self.name.as_deref().unwrap_or("<unnamed>"),
            solution.reward,
            solution.best_leaf.index()
        );
        Ok(solution)
    }

    /// Solve and compare against `expected`, if the scenario declares one.
    pub fn check(&self) -> Result<Solution, ScenarioError> {
        let solution = self.solve()?;
        match self.expected {
            Some(expected) if expected != solution.reward => Err(ScenarioError::UnexpectedReward {
                expected,
                actual: solution.reward,
            }),
            _ => Ok(solution),
        }
    }
}
