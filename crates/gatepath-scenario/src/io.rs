use std::{fs, path::Path};

use gatepath_core::Solution;

use crate::{ScenarioError, ScenarioSpec};

/// Load a scenario from YAML on disk.
/// Only the YAML shape is checked here; tree invariants are checked when solving.
pub fn load_yaml(path: impl AsRef<Path>) -> Result<ScenarioSpec, ScenarioError> {
    let yaml = fs::read_to_string(path)?;
    let spec: ScenarioSpec = serde_yaml::from_str(&yaml)?;
    Ok(spec)
}

/// Load a scenario file and solve it with the default configuration.
/// Returns Alice's best reward and walk together with Bob's arrival times. The file's
/// `expected` field is ignored; use `ScenarioSpec::check` to compare against it.
pub fn solve_yaml(path: impl AsRef<Path>) -> Result<Solution, ScenarioError> {
    let spec = load_yaml(path)?;
    spec.solve()
}

/// Write a scenario as YAML. Unset `name` and `expected` fields are omitted.
pub fn save_yaml(path: impl AsRef<Path>, spec: &ScenarioSpec) -> Result<(), ScenarioError> {
    let yaml = serde_yaml::to_string(spec)?;
    fs::write(path, yaml)?;
    Ok(())
}
