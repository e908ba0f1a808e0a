//! Kernel Error Types

use crate::Sample;
use thiserror::Error;

/// Errors from the counting median. The network and selection variants are
/// total functions and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MedianError {
    /// Sample value exceeds the histogram's domain bound
    #[error("sample {value} at index {index} exceeds domain bound {bound}")]
    DomainViolation {
        index: usize,
        value: Sample,
        bound: Sample,
    },
}
