mod builder;
mod error;
mod generator;
mod io;
mod spec;

pub use builder::ScenarioBuilder;
pub use error::ScenarioError;
pub use generator::TreeGenerator;
pub use io::{load_yaml, save_yaml, solve_yaml};
pub use spec::ScenarioSpec;
