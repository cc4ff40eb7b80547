use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

const DEFAULT_SOLVE_CONFIG_YAML: &str = include_str!("../../config/solve.default.yaml");

/// Order in which Alice's search frontier is expanded.
/// Both visit every leaf exactly once and report the same maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierOrder {
    /// FIFO queue, level by level
    #[default]
    BreadthFirst,
    /// LIFO stack, one branch at a time
    DepthFirst,
}

/// Configuration for a single solve call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    pub frontier: FrontierOrder,
    /// Reject edge lists that do not form a tree.
    pub validate: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            frontier: FrontierOrder::BreadthFirst,
            validate: true,
        }
    }
}

impl SolveConfig {
    /// Parse a solve config from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SolveConfigError> {
        serde_yaml::from_str(yaml).map_err(SolveConfigError::Yaml)
    }

    /// Parse a solve config from a YAML file path.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, SolveConfigError> {
        let yaml = fs::read_to_string(path).map_err(SolveConfigError::Io)?;
        Self::from_yaml_str(&yaml)
    }

    /// Return the default YAML config included with this crate.
    pub fn default_yaml() -> &'static str {
        DEFAULT_SOLVE_CONFIG_YAML
    }

    /// Parse the default YAML config included with this crate.
    pub fn from_default_yaml() -> Result<Self, SolveConfigError> {
        Self::from_yaml_str(Self::default_yaml())
    }
}

/// Error type for loading `SolveConfig`.
#[derive(Debug)]
pub enum SolveConfigError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

impl fmt::Display for SolveConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveConfigError::Io(err) => write!(f, "failed to read config file: {err}"),
            SolveConfigError::Yaml(err) => write!(f, "failed to parse config YAML: {err}"),
        }
    }
}

impl std::error::Error for SolveConfigError {}
