use gatepath_core::{
    FrontierOrder, NodeId, SolveConfig, TreeError, most_profitable_path, solve, solve_with_hook,
};

#[test]
fn public_reference_scenario() {
    let edges = [[0, 1], [1, 2], [1, 3], [3, 4]];
    let reward = most_profitable_path(&edges, 3, &[-2, 4, 2, -4, 6]).expect("valid input");
    assert_eq!(reward, 6);
}

#[test]
fn public_star_with_bob_on_a_leaf() {
    // Bob opens node 1 first and reaches the root only after Alice left it.
    let edges = [[0, 1], [0, 2], [0, 3]];
    let amount = [-4, 100, 3, 9];
    let solution = solve(&edges, 1, &amount, &SolveConfig::default()).expect("valid input");

    assert_eq!(solution.reward, -4 + 9);
    assert_eq!(solution.best_leaf, NodeId::from(3));
    assert_eq!(solution.leaves_visited, 3);
}

#[test]
fn public_hook_observes_leaves_in_depth_first_order() {
    let edges = [[0, 1], [0, 2]];
    let config = SolveConfig {
        frontier: FrontierOrder::DepthFirst,
        validate: true,
    };
    let mut leaves = Vec::new();
    solve_with_hook(&edges, 2, &[0, 1, 1], &config, |record| {
        leaves.push(record.leaf.index())
    })
    .expect("valid input");

    // The stack pops the most recently queued neighbor first.
    assert_eq!(leaves, vec![2, 1]);
}

#[test]
fn public_errors_render_readable_messages() {
    let err = most_profitable_path(&[[0, 1]], 5, &[1, 2]).expect_err("bob out of range");
    assert_eq!(
        err,
        TreeError::BobOutOfRange {
            bob: 5,
            node_count: 2
        }
    );
    assert_eq!(err.to_string(), "bob starts at node 5 but the tree has 2 nodes");

    let err = most_profitable_path(&[], 0, &[]).expect_err("empty tree");
    assert_eq!(err.to_string(), "tree has no nodes");
}

#[test]
fn public_overflowing_amounts_return_an_error() {
    let err = most_profitable_path(&[[0, 1], [0, 2]], 0, &[i64::MAX, i64::MAX, 0])
        .expect_err("reward exceeds i64");
    assert_eq!(
        err,
        TreeError::RewardOverflow {
            node: NodeId::from(1)
        }
    );
}
