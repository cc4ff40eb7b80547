use crate::{Adjacency, NodeId, ROOT, TreeError, resolve_arrival_times};

fn ids(raw: &[usize]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId::from).collect()
}

#[test]
fn records_consecutive_times_along_bobs_walk() {
    let adjacency =
        Adjacency::from_edges(5, &[[0, 1], [1, 2], [1, 3], [3, 4]], true).expect("valid tree");
    let arrivals = resolve_arrival_times(&adjacency, NodeId::from(3)).expect("root reachable");

    assert_eq!(arrivals.len(), 3);
    assert_eq!(arrivals.get(NodeId::from(3)), Some(0));
    assert_eq!(arrivals.get(NodeId::from(1)), Some(1));
    assert_eq!(arrivals.get(ROOT), Some(2));
    assert_eq!(arrivals.get(NodeId::from(4)), None);
    assert_eq!(arrivals.path(), ids(&[3, 1, 0]));
}

#[test]
fn dead_end_branches_leave_no_entries() {
    // From node 2 the search tries leaves 3 and 4 before the edge towards the root.
    let edges = [[2, 3], [2, 4], [5, 4], [2, 1], [1, 0]];
    let adjacency = Adjacency::from_edges(6, &edges, true).expect("valid tree");
    let arrivals = resolve_arrival_times(&adjacency, NodeId::from(2)).expect("root reachable");

    assert_eq!(arrivals.path(), ids(&[2, 1, 0]));
    for dead_end in [3, 4, 5] {
        assert!(!arrivals.contains(NodeId::from(dead_end)));
    }
}

#[test]
fn bob_at_root_yields_single_entry() {
    let adjacency = Adjacency::from_edges(3, &[[0, 1], [0, 2]], true).expect("valid tree");
    let arrivals = resolve_arrival_times(&adjacency, ROOT).expect("already at root");

    assert_eq!(arrivals.len(), 1);
    assert_eq!(arrivals.get(ROOT), Some(0));
}

#[test]
fn bob_out_of_range_is_rejected() {
    let adjacency = Adjacency::from_edges(2, &[[0, 1]], true).expect("valid tree");
    let err = resolve_arrival_times(&adjacency, NodeId::from(2)).expect_err("no node 2");
    assert_eq!(
        err,
        TreeError::BobOutOfRange {
            bob: 2,
            node_count: 2
        }
    );
}

#[test]
fn disconnected_start_reports_unreachable_root() {
    let adjacency = Adjacency::from_edges(4, &[[0, 1], [2, 3]], false).expect("checks disabled");
    let err = resolve_arrival_times(&adjacency, NodeId::from(3)).expect_err("other component");
    assert_eq!(
        err,
        TreeError::RootUnreachable {
            bob: NodeId::from(3)
        }
    );
}

#[test]
fn long_chain_does_not_exhaust_the_call_stack() {
    let n = 200_000;
    let edges: Vec<[usize; 2]> = (1..n).map(|i| [i - 1, i]).collect();
    let adjacency = Adjacency::from_edges(n, &edges, true).expect("valid chain");
    let arrivals = resolve_arrival_times(&adjacency, NodeId::from(n - 1)).expect("root reachable");

    assert_eq!(arrivals.len(), n);
    assert_eq!(arrivals.get(ROOT), Some(n - 1));
}
