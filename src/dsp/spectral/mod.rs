//! Module for spectral (frequency domain) processing.

pub mod spectral_filter;

pub use spectral_filter::{SpectralFilter, SpectralFilterError};
