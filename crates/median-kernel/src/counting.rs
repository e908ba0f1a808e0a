//! Counting Median
//!
//! Histogram-based median that exploits the bounded 12-bit sample domain:
//! O(1) per sample to tally, one forward scan of the value range to find
//! the fifth occupied slot. Trades O(domain) transient memory for the
//! comparison work the other variants spend.

use crate::{MedianError, Sample, Window, MEDIAN_RANK, SAMPLE_MAX};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of histogram buckets for the fixed 12-bit domain.
const DOMAIN_SIZE: usize = SAMPLE_MAX as usize + 1;

/// Histogram configuration for the parameterized counting median.
///
/// Widening the bound grows the transient histogram allocation linearly;
/// the fixed-domain [`median9_counting`] keeps a 4 KiB stack histogram and
/// should be preferred when samples are known to be 12-bit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistogramConfig {
    /// Largest sample value the histogram accepts
    pub domain_bound: Sample,
}

impl Default for HistogramConfig {
    fn default() -> Self {
        Self {
            domain_bound: SAMPLE_MAX,
        }
    }
}

/// Median of a 3x3 window via a fixed 12-bit histogram.
///
/// Every sample is validated against [`SAMPLE_MAX`] before it is counted;
/// an out-of-domain sample is rejected with
/// [`MedianError::DomainViolation`] rather than clamped or wrapped. The
/// caller's window is never mutated.
pub fn median9_counting(window: &Window) -> Result<Sample, MedianError> {
    let mut counts = [0u8; DOMAIN_SIZE];

    for (index, &value) in window.iter().enumerate() {
        check_domain(index, value, SAMPLE_MAX)?;
        counts[value as usize] += 1;
    }

    Ok(scan_for_median(&counts))
}

/// Median of a 3x3 window via a histogram sized to a configured bound.
///
/// Allocates `domain_bound + 1` buckets per call, so tight bounds keep the
/// transient allocation small while wide bounds pay proportionally more.
pub fn median9_counting_with(
    config: &HistogramConfig,
    window: &Window,
) -> Result<Sample, MedianError> {
    let bound = config.domain_bound;
    let mut counts = vec![0u8; bound as usize + 1];

    for (index, &value) in window.iter().enumerate() {
        check_domain(index, value, bound)?;
        counts[value as usize] += 1;
    }

    Ok(scan_for_median(&counts))
}

/// Reject a sample before it can index past the histogram.
fn check_domain(index: usize, value: Sample, bound: Sample) -> Result<(), MedianError> {
    if value > bound {
        warn!(index, value, bound, "sample outside histogram domain");
        return Err(MedianError::DomainViolation {
            index,
            value,
            bound,
        });
    }
    Ok(())
}

/// Scan buckets from value 0 upward; the first bucket where the running
/// count passes the median rank holds the median.
fn scan_for_median(counts: &[u8]) -> Sample {
    let mut seen = 0u32;
    for (value, &count) in counts.iter().enumerate() {
        seen += u32::from(count);
        if seen > MEDIAN_RANK as u32 {
            return value as Sample;
        }
    }
    // Never reached: nine counted samples always push the running count
    // past the median rank.
    0
}
