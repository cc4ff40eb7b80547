use gatepath_core::TreeError;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for scenario loading, validation, building and solving.
pub enum ScenarioError {
    #[error("failed to read YAML file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("scenario has no nodes")]
    EmptyAmount,

    #[error("a tree on {nodes} nodes needs {expected} edges, got {actual}")]
    EdgeCount {
        nodes: usize,
        expected: usize,
        actual: usize,
    },

    #[error("edge {edge_index} references unknown node {node}")]
    NodeOutOfRange { edge_index: usize, node: usize },

    #[error("edge {edge_index} connects node {node} to itself")]
    SelfLoop { edge_index: usize, node: usize },

    #[error("bob starts at unknown node {bob} (scenario has {nodes} nodes)")]
    BobOutOfRange { bob: usize, nodes: usize },

    #[error("expected reward {expected}, solver returned {actual}")]
    UnexpectedReward { expected: i64, actual: i64 },

    #[error("missing bob start node")]
    MissingBob,

    #[error("builder referenced unknown node {node}")]
    BuilderUnknownNode { node: usize },

    #[error("solver rejected the scenario: {0}")]
    Tree(#[from] TreeError),
}
