//! Overlap-add spectral filtering.
//!
//! A [`SpectralFilter`] applies a precomputed complex EQ mask to an audio
//! signal in the frequency domain: the signal is cut into overlapping Hann
//! windowed frames, each frame is transformed, multiplied bin-wise by the
//! mask, transformed back, and summed into the output at its frame offset.

use crate::util::window::hann;
use rustfft::{num_complex::Complex, Fft, FftPlanner};
use std::sync::Arc;
use thiserror::Error;

pub mod mask;
use mask::SpectralMask;

/// Input-validation failures of the spectral filter.
///
/// All of these are detected before any frame processing begins; the filter
/// performs no partial work.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralFilterError {
    /// The FFT size is zero or odd.
    #[error("invalid FFT size {0}: must be even and non-zero")]
    InvalidFftSize(usize),

    /// The overlap ratio is outside `[0, 1)`, which would yield a hop size
    /// of zero.
    #[error("invalid overlap ratio {0}: must be in [0, 1)")]
    InvalidOverlapRatio(f64),

    /// The mask's half-spectrum bin count does not match the FFT size.
    #[error(
        "invalid mask length {len}: expected {expected} bins \
         for FFT size {fft_size}"
    )]
    InvalidMaskLength { len: usize, expected: usize, fft_size: usize },
}

/// A spectral filtering processor, which accepts a [`SpectralMask`] as a
/// frequency mask and applies it to an audio signal via STFT overlap-add.
///
/// The processor itself is stateless between calls: the FFT plans and the
/// window are fixed per `fft_size`, and every [`process()`](Self::process)
/// call is an independent, deterministic transform of its input.
pub struct SpectralFilter {
    fft_size: usize,
    hop_size: usize,

    /// analysis window, fixed per FFT size
    window: Vec<f64>,

    /// forward fft plan
    fft: Arc<dyn Fft<f64>>,

    /// inverse fft plan
    ifft: Arc<dyn Fft<f64>>,
}

impl SpectralFilter {
    /// Creates a filter for the given FFT size and frame overlap ratio.
    ///
    /// The hop size between successive frames is
    /// `floor(fft_size * (1 - overlap_ratio))`.
    ///
    /// # Errors
    ///
    /// - [`SpectralFilterError::InvalidFftSize`] if `fft_size` is zero or
    ///   odd.
    /// - [`SpectralFilterError::InvalidOverlapRatio`] if `overlap_ratio` is
    ///   outside `[0, 1)` (a ratio of `1.0` or more would never advance).
    pub fn new(
        fft_size: usize,
        overlap_ratio: f64,
    ) -> Result<Self, SpectralFilterError> {
        if fft_size == 0 || fft_size % 2 != 0 {
            return Err(SpectralFilterError::InvalidFftSize(fft_size));
        }
        if !(0.0..1.0).contains(&overlap_ratio) {
            return Err(SpectralFilterError::InvalidOverlapRatio(
                overlap_ratio,
            ));
        }

        let hop_size = (fft_size as f64 * (1.0 - overlap_ratio)) as usize;
        if hop_size == 0 {
            return Err(SpectralFilterError::InvalidOverlapRatio(
                overlap_ratio,
            ));
        }

        let mut planner = FftPlanner::new();

        Ok(Self {
            fft_size,
            hop_size,
            window: hann(fft_size),
            fft: planner.plan_fft_forward(fft_size),
            ifft: planner.plan_fft_inverse(fft_size),
        })
    }

    /// The FFT size of the filter.
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// The hop size between successive analysis frames.
    pub fn hop_size(&self) -> usize {
        self.hop_size
    }

    /// The number of analysis frames needed to cover `signal_len` samples.
    ///
    /// Signals shorter than one frame still produce a single (zero-padded)
    /// frame.
    pub fn num_frames(&self, signal_len: usize) -> usize {
        if signal_len <= self.fft_size {
            1
        } else {
            (signal_len - self.fft_size).div_ceil(self.hop_size) + 1
        }
    }

    /// Filters `signal` through `mask`, returning a new signal of the same
    /// length.
    ///
    /// The mask's full Hermitian spectrum is reconstructed once up front
    /// (it is frame-invariant), then each frame is processed and summed
    /// into a zero-initialized accumulator of `signal.len() + fft_size`
    /// samples, which is finally truncated to the input length.
    ///
    /// With a Hann window at 50% overlap the window envelopes sum to unity,
    /// so no gain compensation is applied; at other ratios any overall gain
    /// correction is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralFilterError::InvalidMaskLength`] if the mask does
    /// not hold `fft_size / 2 + 1` bins.
    pub fn process(
        &self,
        signal: &[f64],
        mask: &SpectralMask,
    ) -> Result<Vec<f64>, SpectralFilterError> {
        let full_mask = mask.to_full_spectrum(self.fft_size)?;

        let mut output = vec![0.0; signal.len() + self.fft_size];
        let mut frame = vec![Complex::default(); self.fft_size];
        let mut scratch = vec![
            Complex::default();
            self.fft
                .get_inplace_scratch_len()
                .max(self.ifft.get_inplace_scratch_len())
        ];

        // largest imaginary residue left after the inverse transform; for
        // a Hermitian mask this is rounding noise only
        let mut residual_imag = 0.0f64;

        for i in 0..self.num_frames(signal.len()) {
            let start = i * self.hop_size;

            self.process_frame(
                signal,
                start,
                &full_mask,
                &mut frame,
                &mut scratch,
            );

            for (out, bin) in
                output[start..start + self.fft_size].iter_mut().zip(&frame)
            {
                *out += bin.re;
                residual_imag = residual_imag.max(bin.im.abs());
            }
        }

        if residual_imag > 1e-9 {
            log::warn!(
                "non-negligible imaginary residue {residual_imag:.3e} after \
                 inverse transform; mask may not be Hermitian-consistent"
            );
        }

        output.truncate(signal.len());
        Ok(output)
    }

    /// Processes the single frame starting at sample `start` into `frame`.
    ///
    /// Samples past the end of the signal are zero-padded, so a frame
    /// hanging off the signal tail (or starting beyond it entirely) is
    /// valid.
    fn process_frame(
        &self,
        signal: &[f64],
        start: usize,
        full_mask: &[Complex<f64>],
        frame: &mut [Complex<f64>],
        scratch: &mut [Complex<f64>],
    ) {
        let available =
            signal.len().saturating_sub(start).min(self.fft_size);

        // extract and window the input
        for (n, bin) in frame.iter_mut().enumerate() {
            let sample = if n < available { signal[start + n] } else { 0.0 };
            *bin = Complex::new(sample * self.window[n], 0.0);
        }

        // to freq domain
        self.fft.process_with_scratch(frame, scratch);

        // apply the mask
        for (bin, mask_bin) in frame.iter_mut().zip(full_mask) {
            *bin *= mask_bin;
        }

        // back to time domain; rustfft's inverse is unnormalized
        self.ifft.process_with_scratch(frame, scratch);

        let norm = (self.fft_size as f64).recip();
        for bin in frame.iter_mut() {
            *bin *= norm;
        }
    }
}

/// Convenience wrapper: filters `signal` through `mask` in one call.
///
/// # Errors
///
/// See [`SpectralFilter::new`] and [`SpectralFilter::process`].
pub fn filter_signal(
    signal: &[f64],
    mask: &SpectralMask,
    fft_size: usize,
    overlap_ratio: f64,
) -> Result<Vec<f64>, SpectralFilterError> {
    SpectralFilter::new(fft_size, overlap_ratio)?.process(signal, mask)
}
