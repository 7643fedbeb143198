//! Spectral frequency masking.

use super::SpectralFilterError;
use rustfft::num_complex::Complex;
use std::ops::{Deref, DerefMut};

/// An EQ "spectral mask" — the half-spectrum of a real filter, stored as
/// complex coefficients from DC (index `0`) to Nyquist (index `fft_size /
/// 2`).
///
/// The mask is treated as opaque filter data: DC and Nyquist bins of a
/// physically meaningful minimum-phase mask are real-valued, but nothing
/// here enforces that — the coefficients are applied exactly as given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpectralMask {
    bins: Vec<Complex<f64>>,
}

impl Deref for SpectralMask {
    type Target = Vec<Complex<f64>>;

    fn deref(&self) -> &Self::Target {
        &self.bins
    }
}

impl DerefMut for SpectralMask {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bins
    }
}

impl SpectralMask {
    /// Creates a mask from its half-spectrum coefficients.
    pub fn new(bins: Vec<Complex<f64>>) -> Self {
        Self { bins }
    }

    /// Creates an identity (unity gain, zero phase) mask for `fft_size`.
    ///
    /// # Panics
    ///
    /// Panics if `fft_size` is odd.
    pub fn identity(fft_size: usize) -> Self {
        assert!(fft_size % 2 == 0);
        Self { bins: vec![Complex::new(1.0, 0.0); fft_size / 2 + 1] }
    }

    /// The number of half-spectrum bins, `fft_size / 2 + 1` for a valid
    /// mask.
    pub fn num_bins(&self) -> usize {
        self.bins.len()
    }

    /// The FFT size this mask was designed for, inferred from the bin
    /// count.
    pub fn fft_size(&self) -> usize {
        self.bins.len().saturating_sub(1) * 2
    }

    /// Returns the frequency of the bin with index `idx` for a mask of
    /// `num_bins` half-spectrum bins at `sample_rate`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= num_bins`, or if `num_bins < 2`.
    pub fn bin_freq(idx: usize, num_bins: usize, sample_rate: f64) -> f64 {
        assert!(idx < num_bins && num_bins >= 2);
        let nyquist = sample_rate / 2.0;

        idx as f64 * (nyquist / (num_bins - 1) as f64)
    }

    /// Expands the half-spectrum into the full Hermitian-symmetric spectrum
    /// of length `fft_size`.
    ///
    /// With `H = fft_size / 2 + 1`:
    /// - `full[i] == half[i]` for `i < H` (DC through Nyquist pass through
    ///   unchanged),
    /// - `full[fft_size - k] == conj(half[k])` for `k` in `1 ..= H - 2`.
    ///
    /// This is the spectrum of a real-valued impulse response, so applying
    /// it to the DFT of a real frame yields a (numerically) real result.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralFilterError::InvalidMaskLength`] if the mask does
    /// not hold exactly `fft_size / 2 + 1` bins.
    pub fn to_full_spectrum(
        &self,
        fft_size: usize,
    ) -> Result<Vec<Complex<f64>>, SpectralFilterError> {
        let num_bins = fft_size / 2 + 1;

        if self.bins.len() != num_bins {
            return Err(SpectralFilterError::InvalidMaskLength {
                len: self.bins.len(),
                expected: num_bins,
                fft_size,
            });
        }

        let mut full = vec![Complex::default(); fft_size];
        full[..num_bins].copy_from_slice(&self.bins);

        for k in 1..=(num_bins - 2) {
            full[fft_size - k] = self.bins[k].conj();
        }

        Ok(full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn test_full_spectrum_odd_half_size() {
        // fft_size = 6 gives an odd fft_size / 2 of 3
        let mask = SpectralMask::new(vec![
            c(1.0, 0.0),
            c(0.5, 0.25),
            c(-0.5, 1.0),
            c(2.0, 0.0),
        ]);
        let full = mask.to_full_spectrum(6).unwrap();

        assert_eq!(
            full,
            vec![
                c(1.0, 0.0),
                c(0.5, 0.25),
                c(-0.5, 1.0),
                c(2.0, 0.0),
                c(-0.5, -1.0),
                c(0.5, -0.25),
            ]
        );
    }

    #[test]
    fn test_full_spectrum_even_half_size() {
        // fft_size = 8 gives an even fft_size / 2 of 4
        let mask = SpectralMask::new(vec![
            c(1.0, 0.0),
            c(0.0, 1.0),
            c(2.0, -1.0),
            c(3.0, 0.5),
            c(4.0, 0.0),
        ]);
        let full = mask.to_full_spectrum(8).unwrap();

        assert_eq!(full[0], c(1.0, 0.0));
        assert_eq!(full[4], c(4.0, 0.0));
        assert_eq!(full[7], c(0.0, -1.0));
        assert_eq!(full[6], c(2.0, 1.0));
        assert_eq!(full[5], c(3.0, -0.5));
    }

    #[test]
    fn test_full_spectrum_rejects_wrong_length() {
        let mask = SpectralMask::new(vec![c(1.0, 0.0); 4]);

        assert!(matches!(
            mask.to_full_spectrum(8),
            Err(SpectralFilterError::InvalidMaskLength {
                len: 4,
                expected: 5,
                fft_size: 8,
            })
        ));
    }

    #[test]
    fn test_identity_mask_expands_to_all_ones() {
        let full = SpectralMask::identity(16).to_full_spectrum(16).unwrap();

        assert_eq!(full.len(), 16);
        assert!(full.iter().all(|bin| *bin == c(1.0, 0.0)));
    }

    #[test]
    fn test_bin_freq() {
        // 129 bins at 16 kHz spans DC to the 8 kHz Nyquist
        assert_eq!(SpectralMask::bin_freq(0, 129, 16000.0), 0.0);
        assert_eq!(SpectralMask::bin_freq(128, 129, 16000.0), 8000.0);
        assert_eq!(SpectralMask::bin_freq(64, 129, 16000.0), 4000.0);
    }
}
