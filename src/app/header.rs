//! EQ mask deserialization from C header files.
//!
//! Masks are exported by the designer tool as an interleaved float array:
//!
//! ```c
//! float eq_mask[258] = {
//!     1.000000f, 0.000000f,   // bin 0: real, imag
//!     0.998823f, -0.012001f,  // bin 1: real, imag
//!     ...
//! };
//! ```

use crate::dsp::SpectralMask;
use lazy_static::lazy_static;
use regex::Regex;
use rustfft::num_complex::Complex;
use thiserror::Error;

lazy_static! {
    static ref MASK_ARRAY: Regex =
        Regex::new(r"float\s+eq_mask\[(\d+)\]\s*=\s*\{([^}]+)\}").unwrap();
    static ref FLOAT_LITERAL: Regex =
        Regex::new(r"([-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?)f").unwrap();
}

/// Failures while extracting an EQ mask from header text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HeaderError {
    /// No `eq_mask` array definition was found.
    #[error("could not find an eq_mask array in the header")]
    MaskNotFound,

    /// The declared array size does not match the number of float literals.
    #[error("expected {expected} values, found {found}")]
    ValueCountMismatch { expected: usize, found: usize },

    /// The value count cannot form real/imaginary pairs.
    #[error("odd value count {0}: values must be real/imaginary pairs")]
    OddValueCount(usize),

    /// A float literal failed to parse.
    #[error("unparsable float literal \"{0}\"")]
    BadFloat(String),
}

/// Parses the interleaved `eq_mask` array from header `source` into a
/// half-spectrum mask of `size / 2` complex bins.
///
/// # Errors
///
/// See [`HeaderError`].
pub fn parse_eq_mask(source: &str) -> Result<SpectralMask, HeaderError> {
    let captures =
        MASK_ARRAY.captures(source).ok_or(HeaderError::MaskNotFound)?;

    let declared_size: usize = captures[1]
        .parse()
        .map_err(|_| HeaderError::BadFloat(captures[1].to_string()))?;
    let body = &captures[2];

    let values = FLOAT_LITERAL
        .captures_iter(body)
        .map(|c| {
            let literal = &c[1];
            literal
                .parse::<f64>()
                .map_err(|_| HeaderError::BadFloat(literal.to_string()))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if values.len() != declared_size {
        return Err(HeaderError::ValueCountMismatch {
            expected: declared_size,
            found: values.len(),
        });
    }
    if values.len() % 2 != 0 {
        return Err(HeaderError::OddValueCount(values.len()));
    }

    let bins = values
        .chunks_exact(2)
        .map(|pair| Complex::new(pair[0], pair[1]))
        .collect();

    Ok(SpectralMask::new(bins))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLAT_HEADER: &str = "\
// Auto-generated EQ mask
#ifndef EQ_MASK_H
#define EQ_MASK_H

float eq_mask[10] = {
    1.000000f, 0.000000f,
    0.950000f, -0.050000f,
    0.900000f, 0.100000f,
    0.850000f, -0.150000f,
    0.800000f, 0.000000f,
};

#endif
";

    #[test]
    fn test_parse_interleaved_mask() {
        let mask = parse_eq_mask(FLAT_HEADER).unwrap();

        assert_eq!(mask.num_bins(), 5);
        assert_eq!(mask.fft_size(), 8);
        assert_eq!(mask[0], Complex::new(1.0, 0.0));
        assert_eq!(mask[1], Complex::new(0.95, -0.05));
        assert_eq!(mask[4], Complex::new(0.8, 0.0));
    }

    #[test]
    fn test_parse_scientific_notation() {
        let header = "float eq_mask[2] = { 1.5e-3f, -2.0E+1f };";
        let mask = parse_eq_mask(header).unwrap();

        assert_eq!(mask[0], Complex::new(0.0015, -20.0));
    }

    #[test]
    fn test_missing_array() {
        let header = "int not_a_mask[2] = { 1, 2 };";
        assert_eq!(parse_eq_mask(header), Err(HeaderError::MaskNotFound));
    }

    #[test]
    fn test_value_count_mismatch() {
        let header = "float eq_mask[4] = { 1.0f, 0.0f };";
        assert_eq!(
            parse_eq_mask(header),
            Err(HeaderError::ValueCountMismatch { expected: 4, found: 2 })
        );
    }

    #[test]
    fn test_odd_value_count() {
        let header = "float eq_mask[3] = { 1.0f, 0.0f, 0.5f };";
        assert_eq!(parse_eq_mask(header), Err(HeaderError::OddValueCount(3)));
    }
}
