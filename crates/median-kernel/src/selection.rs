//! Selection Median
//!
//! Iterative quickselect that converges on the element at sorted rank 4
//! without fully sorting the window. The loop is deliberately iterative
//! rather than recursive so stack usage stays O(1) regardless of pivot
//! quality.

use crate::{Sample, Window, MEDIAN_RANK, WINDOW_SIZE};

/// Median of a 3x3 window via iterative partition-based selection.
///
/// Works on a local copy; the caller's window is never mutated. Expected
/// O(n) over the nine elements; the all-equal worst case degenerates to
/// one-element range shrinkage per pass and still converges within nine
/// iterations.
pub fn median9_selection(window: &Window) -> Sample {
    let mut values = *window;
    let mut left = 0;
    let mut right = WINDOW_SIZE - 1;

    while left < right {
        // First element of the current range as pivot
        let pivot = values[left];
        let mut i = left + 1;
        let mut j = right;

        // Inward-moving cursors: <= pivot stays left, > pivot goes right
        while i <= j {
            while i <= right && values[i] <= pivot {
                i += 1;
            }
            while j >= left + 1 && values[j] > pivot {
                j -= 1;
            }
            if i < j {
                values.swap(i, j);
            }
        }

        // Pivot lands at its final sorted position
        values[left] = values[j];
        values[j] = pivot;

        if j == MEDIAN_RANK {
            return values[j];
        }
        if j < MEDIAN_RANK {
            left = j + 1;
        } else {
            right = j - 1;
        }
    }

    values[left]
}
