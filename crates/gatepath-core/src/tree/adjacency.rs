use crate::tree::{
    error::TreeError,
    ids::{NodeId, ROOT},
};

/// Undirected neighbor lists for a tree indexed `0..node_count`.
/// Neighbors keep the order in which their edges were given.
#[derive(Debug, Clone)]
pub struct Adjacency {
    neighbors: Vec<Vec<NodeId>>,
}

impl Adjacency {
    /// Build the adjacency list from an edge list.
    ///
    /// Endpoints are always range checked. With `validate` set, the edges must also form a
    /// tree: exactly `node_count - 1` of them, no self loops and no cycles. A forest of
    /// `node_count - 1` acyclic edges is necessarily connected, so that covers connectivity too.
    pub fn from_edges(
        node_count: usize,
        edges: &[[usize; 2]],
        validate: bool,
    ) -> Result<Self, TreeError> {
        if node_count == 0 {
            return Err(TreeError::EmptyTree);
        }

        if validate && edges.len() != node_count - 1 {
            return Err(TreeError::EdgeCount {
                expected: node_count - 1,
                actual: edges.len(),
            });
        }

        let mut neighbors = vec![Vec::new(); node_count];
        let mut components = DisjointSet::new(if validate { node_count } else { 0 });

        for (edge_index, &[a, b]) in edges.iter().enumerate() {
            for node in [a, b] {
                if node >= node_count {
                    return Err(TreeError::NodeOutOfRange {
                        edge_index,
                        node,
                        node_count,
                    });
                }
            }

            if validate {
                if a == b {
                    return Err(TreeError::SelfLoop {
                        edge_index,
                        node: NodeId::from(a),
                    });
                }
                if !components.union(a, b) {
                    return Err(TreeError::Cycle {
                        edge_index,
                        from: NodeId::from(a),
                        to: NodeId::from(b),
                    });
                }
            }

            neighbors[a].push(NodeId::from(b));
            neighbors[b].push(NodeId::from(a));
        }

        Ok(Adjacency { neighbors })
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check whether the id names a node of this tree
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.neighbors.len()
    }

    /// Neighbors of a node in edge order, empty for unknown ids
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.neighbors
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    /// A leaf is a non-root node with a single edge. The root only counts as a leaf when it
    /// has no edges at all, which happens for the single-node tree.
    pub fn is_leaf(&self, node: NodeId) -> bool {
        if node == ROOT {
            self.degree(node) == 0
        } else {
            self.degree(node) == 1
        }
    }
}

/// Union-find with path halving, used to spot cycle-closing edges.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    /// Join the sets of `a` and `b`; false if they were already joined.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}
