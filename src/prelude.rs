//! Project-wide exports for easy access.

pub use crate::dsp::{
    spectral::spectral_filter::{
        mask::SpectralMask, SpectralFilter, SpectralFilterError,
    },
    synthesis::white_noise,
};
pub use crate::settings::*;
pub use crate::util::*;
pub use rustfft::num_complex::Complex;
pub use std::f64::consts::{FRAC_PI_2, PI, TAU};

pub const MINUS_INFINITY_DB: f64 = -100.0;
pub const MINUS_INFINITY_GAIN: f64 = 1e-5;
