use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

use crate::ScenarioSpec;

#[derive(Debug, Clone)]
/// Seeded source of random tree scenarios.
pub struct TreeGenerator {
    rng: ChaCha8Rng,
    amount_range: RangeInclusive<i64>,
}

impl TreeGenerator {
    /// Create a generator with deterministic RNG seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            amount_range: -10_000..=10_000,
        }
    }

    /// Draw gate amounts from `range` instead of the default `-10_000..=10_000`.
    /// A reversed range such as `5..=1` is read as `1..=5`.
    pub fn with_amount_range(mut self, range: RangeInclusive<i64>) -> Self {
        let (start, end) = range.into_inner();
        self.amount_range = start.min(end)..=start.max(end);
        self
    }

    /// Sample one scenario with `nodes` nodes (at least one).
    ///
    /// Node `i > 0` is attached to a uniformly chosen earlier node, so the result is always a
    /// tree. Edge order and endpoint orientation are shuffled so that node indices carry no
    /// hint of the tree's shape.
    pub fn generate(&mut self, nodes: usize) -> ScenarioSpec {
        let nodes = nodes.max(1);
        let mut edges: Vec<[usize; 2]> = (1..nodes)
            .map(|child| {
                let parent = self.rng.gen_range(0..child);
                if self.rng.gen_bool(0.5) {
                    [parent, child]
                } else {
                    [child, parent]
                }
            })
            .collect();
        edges.shuffle(&mut self.rng);

        let amount = (0..nodes)
            .map(|_| self.rng.gen_range(self.amount_range.clone()))
            .collect();
        let bob = self.rng.gen_range(0..nodes);

        ScenarioSpec {
            version: Some(1),
            name: None,
            edges,
            bob,
            amount,
            expected: None,
        }
    }
}
