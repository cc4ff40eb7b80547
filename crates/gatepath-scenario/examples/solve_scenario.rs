use std::path::PathBuf;

use gatepath_scenario::load_yaml;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/gatepath-scenario/examples/sample.scenario.yaml"));

    let spec = load_yaml(&path).expect("failed to load scenario YAML");
    let solution = spec.check().expect("scenario failed");

    println!(
        "reward={} best_leaf={} leaves_visited={}",
        solution.reward,
        solution.best_leaf.index(),
        solution.leaves_visited
    );
    println!(
        "{}",
        solution
            .snapshot()
            .to_json()
            .expect("snapshot should serialize")
    );
}
