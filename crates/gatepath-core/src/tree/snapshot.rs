use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SolutionSnapshot {
    pub schema_version: u32,
    pub reward: i64,
    pub best_leaf: usize,
    pub alice_path: Vec<usize>,
    /// Ordered by arrival time, Bob's start first
    pub bob_path: Vec<ArrivalSnapshot>,
    pub leaves_visited: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArrivalSnapshot {
    pub node: usize,
    pub time: usize,
}

impl SolutionSnapshot {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
