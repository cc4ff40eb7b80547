use crate::{FrontierOrder, NodeId, SolveConfig, TreeError, most_profitable_path, solve};

const EDGES: [[usize; 2]; 4] = [[0, 1], [1, 2], [1, 3], [3, 4]];
const AMOUNT: [i64; 5] = [-2, 4, 2, -4, 6];

#[test]
fn reference_scenario_yields_six() {
    assert_eq!(most_profitable_path(&EDGES, 3, &AMOUNT), Ok(6));
}

#[test]
fn bob_at_root_halves_only_the_root() {
    let reward = most_profitable_path(&[[0, 1], [0, 2]], 0, &[-3, 5, 7]).expect("valid input");
    assert_eq!(reward, -1 + 7);
}

#[test]
fn single_node_tree_is_a_tie_at_the_root() {
    assert_eq!(most_profitable_path(&[], 0, &[7]), Ok(3));
    assert_eq!(most_profitable_path(&[], 0, &[-3]), Ok(-1));
}

#[test]
fn two_node_tree_reaches_the_only_leaf() {
    // Bob opens node 1 at time 0 and reaches the root after Alice left it.
    assert_eq!(most_profitable_path(&[[0, 1]], 1, &[-2, 4]), Ok(-2));
}

#[test]
fn repeated_calls_are_identical() {
    let config = SolveConfig::default();
    let first = solve(&EDGES, 3, &AMOUNT, &config).expect("valid input");
    let second = solve(&EDGES, 3, &AMOUNT, &config).expect("valid input");
    assert_eq!(first, second);
}

#[test]
fn solution_carries_both_walks() {
    let solution = solve(&EDGES, 3, &AMOUNT, &SolveConfig::default()).expect("valid input");

    assert_eq!(solution.best_leaf, NodeId::from(4));
    assert_eq!(
        solution.path.iter().map(NodeId::index).collect::<Vec<_>>(),
        vec![0, 1, 3, 4]
    );
    assert_eq!(
        solution.arrivals.path().iter().map(NodeId::index).collect::<Vec<_>>(),
        vec![3, 1, 0]
    );
}

#[test]
fn snapshot_serializes_to_json() {
    let solution = solve(&EDGES, 3, &AMOUNT, &SolveConfig::default()).expect("valid input");
    let json = solution.snapshot().to_json().expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["reward"], 6);
    assert_eq!(value["alice_path"], serde_json::json!([0, 1, 3, 4]));
    assert_eq!(value["bob_path"][0]["node"], 3);
    assert_eq!(value["bob_path"][2]["time"], 2);
}

#[test]
fn invalid_tree_is_rejected_by_default() {
    let err = most_profitable_path(&[[0, 1], [1, 2], [2, 0]], 2, &[1, 1, 1]).expect_err("cycle");
    assert!(matches!(err, TreeError::Cycle { .. }));
}

#[test]
fn cyclic_input_terminates_when_validation_is_off() {
    let config = SolveConfig {
        frontier: FrontierOrder::BreadthFirst,
        validate: false,
    };
    let solution = solve(&[[0, 1], [1, 2], [2, 0], [2, 3]], 3, &[1, 1, 4, 1], &config)
        .expect("search still terminates");

    assert_eq!(solution.best_leaf, NodeId::from(3));
    assert_eq!(solution.reward, 1 + 4 / 2);
    assert_eq!(
        solution.path.iter().map(NodeId::index).collect::<Vec<_>>(),
        vec![0, 2, 3]
    );
}

#[test]
fn default_yaml_matches_default_config() {
    let config = SolveConfig::from_default_yaml().expect("bundled yaml parses");
    let default = SolveConfig::default();

    assert_eq!(config.frontier, default.frontier);
    assert_eq!(config.validate, default.validate);
}

#[test]
fn yaml_config_fills_missing_fields_with_defaults() {
    let config = SolveConfig::from_yaml_str("frontier: depth_first\n").expect("valid yaml");

    assert_eq!(config.frontier, FrontierOrder::DepthFirst);
    assert!(config.validate);
}
