//! Median-of-9 Denoising Kernel
//!
//! Provides three interchangeable implementations of the 3x3 window median
//! used for impulse-noise removal: a fixed sorting network, an iterative
//! selection (quickselect) variant, and a counting-sort variant for the
//! bounded 12-bit sample domain. All three return the identical value for
//! any permutation of the same nine samples.

mod counting;
mod error;
mod network;
mod selection;

pub use counting::{median9_counting, median9_counting_with, HistogramConfig};
pub use error::MedianError;
pub use network::median9_network;
pub use selection::median9_selection;

/// One sensor sample, valid in the 12-bit range [0, `SAMPLE_MAX`].
pub type Sample = u16;

/// Number of samples in a 3x3 window.
pub const WINDOW_SIZE: usize = 9;

/// Rank (0-based) of the median in a sorted window.
pub const MEDIAN_RANK: usize = 4;

/// Largest representable 12-bit sample value.
pub const SAMPLE_MAX: Sample = 4095;

/// A 3x3 denoising window in row-major order. Callers own the storage;
/// no implementation mutates it.
pub type Window = [Sample; WINDOW_SIZE];
