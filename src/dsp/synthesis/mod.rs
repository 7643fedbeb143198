//! Test-signal synthesis.

use rand::Rng;

/// A primitive white noise oscillator.
#[derive(Debug, Clone, Copy)]
pub struct NoiseOsc;

impl NoiseOsc {
    /// Produces a single noise sample at 0.0 dBFS.
    pub fn process<R: Rng>(rng: &mut R) -> f64 {
        rng.random::<f64>().mul_add(2.0, -1.0)
    }
}

/// Generates `num_samples` of uniform white noise in `[-1, 1)`.
pub fn white_noise(num_samples: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..num_samples).map(|_| NoiseOsc::process(&mut rng)).collect()
}
