use crate::{ScenarioError, ScenarioSpec};

#[derive(Debug, Clone, Default)]
/// Struct to build scenarios node by node
pub struct ScenarioBuilder {
    name: Option<String>,
    bob: Option<usize>,
    amount: Vec<i64>,
    edges: Vec<[usize; 2]>,
    expected: Option<i64>,
}

impl ScenarioBuilder {
    /// Create a new ScenarioBuilder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Define where Bob starts walking
    pub fn set_bob(&mut self, node: usize) -> &mut Self {
        self.bob = Some(node);
        self
    }

    /// Add a node with its gate amount and return its index
    /// The first node added is the root
    pub fn add_node(&mut self, amount: i64) -> usize {
        self.amount.push(amount);
        self.amount.len() - 1
    }

    /// Connect two nodes that were already added
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<&mut Self, ScenarioError> {
        if let Some(node) = [a, b].into_iter().find(|node| *node >= self.amount.len()) {
            return Err(ScenarioError::BuilderUnknownNode { node });
        }
        self.edges.push([a, b]);
        Ok(self)
    }

    /// Record the reward a solver should return
    pub fn set_expected(&mut self, reward: i64) -> &mut Self {
        self.expected = Some(reward);
        self
    }

    pub fn build_spec(self) -> Result<ScenarioSpec, ScenarioError> {
        let bob = self.bob.ok_or(ScenarioError::MissingBob)?;
        let spec = ScenarioSpec {
            version: Some(1),
            name: self.name,
            edges: self.edges,
            bob,
            amount: self.amount,
            expected: self.expected,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn solve(self) -> Result<gatepath_core::Solution, ScenarioError> {
        let spec = self.build_spec()?;
        spec.solve()
    }
}
