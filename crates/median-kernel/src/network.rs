//! Sorting-Network Median
//!
//! Fixed compare-exchange sequence with data-independent control flow. The
//! same comparators execute for every input, which keeps latency constant
//! and lets the compiler lower the exchanges to branchless min/max pairs.

use crate::{Sample, Window, MEDIAN_RANK};

/// Comparator wiring that leaves the median of nine inputs at index 4.
/// Machine-verified against all 362,880 permutations of distinct values
/// (see the exhaustive test below).
const COMPARATORS: [(usize, usize); 22] = [
    // Stage 1: sort adjacent pairs
    (0, 1),
    (2, 3),
    (4, 5),
    (6, 7),
    // Stage 2: merge pairs into fours
    (0, 2),
    (1, 3),
    (4, 6),
    (5, 7),
    // Stage 3: merge fours into eight
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
    // Stage 4
    (1, 4),
    (3, 6),
    // Stage 5
    (2, 4),
    (3, 5),
    // Stage 6: settle the median slot, folding in the ninth input
    (1, 2),
    (3, 4),
    (5, 6),
    (4, 8),
    (4, 5),
    (3, 4),
];

/// Median of a 3x3 window via a fixed sorting network.
///
/// Works on a local copy; the caller's window is never mutated. Total over
/// the full `Sample` range, no error states.
pub fn median9_network(window: &Window) -> Sample {
    let mut values = *window;

    for &(a, b) in COMPARATORS.iter() {
        let lo = values[a].min(values[b]);
        let hi = values[a].max(values[b]);
        values[a] = lo;
        values[b] = hi;
    }

    values[MEDIAN_RANK]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WINDOW_SIZE;

    #[test]
    fn test_shuffled_window() {
        assert_eq!(median9_network(&[4, 8, 2, 9, 5, 1, 7, 3, 6]), 5);
    }

    #[test]
    fn test_duplicates() {
        assert_eq!(median9_network(&[1, 2, 5, 5, 5, 5, 5, 8, 9]), 5);
        assert_eq!(median9_network(&[7; 9]), 7);
    }

    #[test]
    fn test_exhaustive_permutations() {
        // Heap's algorithm over nine distinct values. Every one of the
        // 9! = 362,880 orderings must leave the true median at index 4;
        // a miswired comparator fails only on some permutations, so
        // nothing short of the full sweep proves the table.
        let mut values: Window = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut counters = [0usize; WINDOW_SIZE];
        let mut checked = 1usize;

        assert_eq!(median9_network(&values), 5);

        let mut i = 0;
        while i < WINDOW_SIZE {
            if counters[i] < i {
                if i % 2 == 0 {
                    values.swap(0, i);
                } else {
                    values.swap(counters[i], i);
                }
                assert_eq!(median9_network(&values), 5, "failed for {values:?}");
                checked += 1;
                counters[i] += 1;
                i = 0;
            } else {
                counters[i] = 0;
                i += 1;
            }
        }

        assert_eq!(checked, 362_880);
    }
}
