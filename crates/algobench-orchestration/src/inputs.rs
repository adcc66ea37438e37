//! Benchmark inputs: the Fibonacci index series and the sort arrays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use algobench_core::Element;

use crate::record::InputDescriptor;

/// Indices every strategy runs, including naive recursion.
pub const SMALL_SERIES: [i64; 17] = [5, 7, 10, 12, 15, 17, 20, 22, 25, 27, 30, 32, 35, 37, 40, 42, 45];

/// Roughly log-spaced indices for the efficient strategies only.
pub const BIG_SERIES: [i64; 16] = [
    501, 631, 794, 1000, 1259, 1585, 1995, 2512, 3162, 3981, 5012, 6310, 7943, 10000, 12589, 15849,
];

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_F1B0;

/// (length, inclusive upper bound) of each random array; values start at 0.
const RANDOM_SHAPES: [(usize, Element); 10] = [
    (10, 100),
    (50, 200),
    (100, 500),
    (150, 700),
    (200, 1000),
    (250, 1300),
    (300, 1500),
    (350, 1700),
    (400, 100),
    (400, 10),
];

/// A numbered sort input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArray {
    /// 1-based position in the generated set.
    pub id: usize,
    pub items: Vec<Element>,
}

impl SortArray {
    /// Descriptor stored in benchmark records.
    #[must_use]
    pub fn descriptor(&self) -> InputDescriptor {
        InputDescriptor::Array {
            id: self.id,
            len: self.items.len(),
        }
    }
}

/// Build the thirteen sort arrays: three hand-written (mixed, reversed,
/// sorted) followed by ten random ones drawn from `seed`.
#[must_use]
pub fn generate_sort_arrays(seed: u64) -> Vec<SortArray> {
    let mut rng = StdRng::seed_from_u64(seed);

    let fixed = [
        vec![5, 3, 8, 6, 2, 7, 4, 1],
        (1..=10).rev().collect(),
        (1..=10).collect(),
    ];
    let random = RANDOM_SHAPES.iter().map(|&(len, max)| {
        (0..len)
            .map(|_| rng.random_range(0..=max))
            .collect::<Vec<Element>>()
    });

    fixed
        .into_iter()
        .chain(random)
        .enumerate()
        .map(|(index, items)| SortArray {
            id: index + 1,
            items,
        })
        .collect()
}
