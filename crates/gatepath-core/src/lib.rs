mod tree;

pub use tree::adjacency::Adjacency;
pub use tree::config::{FrontierOrder, SolveConfig, SolveConfigError};
pub use tree::error::TreeError;
pub use tree::explorer::{Exploration, LeafRecord, explore, gate_share};
pub use tree::ids::{NodeId, ROOT};
pub use tree::resolver::{ArrivalTimes, resolve_arrival_times};
pub use tree::snapshot::{ArrivalSnapshot, SolutionSnapshot};
pub use tree::solve::{Solution, most_profitable_path, solve, solve_with_hook};
