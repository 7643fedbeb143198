//! Program-wide default values.

/// The default processing sample rate in Hz. Input audio is resampled to
/// this rate before filtering.
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// The default FFT size used by the overlap-add filter.
pub const DEFAULT_FFT_SIZE: usize = 256;

/// The default analysis frame overlap ratio.
pub const DEFAULT_OVERLAP_RATIO: f64 = 0.5;

/// The default peak level the original signal is normalized to, in dBFS.
pub const DEFAULT_TARGET_DB: f64 = -12.0;

/// The default duration of generated white noise, in seconds.
pub const DEFAULT_NOISE_DURATION: f64 = 5.0;
