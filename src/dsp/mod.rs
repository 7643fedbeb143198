//! Digital signal processors and utilities.

pub mod spectral;
pub mod synthesis;

pub use spectral::spectral_filter::{
    mask::SpectralMask, SpectralFilter, SpectralFilterError,
};
pub use synthesis::{white_noise, NoiseOsc};
