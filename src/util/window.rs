//! Window functions for spectral analysis.

use std::f64::consts::TAU;

/// A Hann window of length `size`.
///
/// Uses the symmetric form `w[n] = 0.5 * (1 - cos(2πn / (N - 1)))`, which
/// tapers to exactly zero at both endpoints. At 50% overlap the envelopes of
/// successive windows sum to (very nearly) unity, so overlap-add needs no
/// gain compensation at that ratio.
pub fn hann(size: usize) -> Vec<f64> {
    let mut vec = vec![0.0; size];
    hann_in_place(&mut vec);
    vec
}

/// In-place variant of `hann()`.
pub fn hann_in_place(slice: &mut [f64]) {
    let size = slice.len();

    if size < 2 {
        slice.fill(1.0);
        return;
    }

    let denom = (size - 1) as f64;

    for (n, x) in slice.iter_mut().enumerate() {
        *x = 0.5 * (1.0 - (TAU * n as f64 / denom).cos());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::within_tolerance;

    #[test]
    fn test_hann_endpoints_and_symmetry() {
        let w = hann(256);

        assert!(within_tolerance(w[0], 0.0, f64::EPSILON));
        assert!(within_tolerance(w[255], 0.0, f64::EPSILON));

        for n in 0..128 {
            assert!(within_tolerance(w[n], w[255 - n], 1e-15));
        }
    }

    #[test]
    fn test_hann_peak() {
        // odd length puts the peak exactly on the middle sample
        let w = hann(257);
        assert!(within_tolerance(w[128], 1.0, f64::EPSILON));
    }

    #[test]
    fn test_hann_degenerate_sizes() {
        assert_eq!(hann(0), Vec::<f64>::new());
        assert_eq!(hann(1), vec![1.0]);
    }

    #[test]
    fn test_hann_half_overlap_sums_to_unity() {
        let size = 256;
        let hop = size / 2;
        let w = hann(size);

        // interior samples see exactly two overlapping windows
        for n in 0..hop {
            let sum = w[n] + w[n + hop];
            assert!(within_tolerance(sum, 1.0, 0.01), "sum = {sum}");
        }
    }
}
