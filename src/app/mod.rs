//! The filtering tool: argument handling, file formats, and the run
//! pipeline tying them to the DSP core.

use crate::prelude::*;
use thiserror::Error;

pub mod args;
pub mod header;
pub mod wav;

pub use args::Arguments;
pub use header::HeaderError;
pub use wav::WavError;

/// Top-level failures of a filtering run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read header file: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error(transparent)]
    Wav(#[from] WavError),

    #[error(transparent)]
    Filter(#[from] SpectralFilterError),
}

/// Runs the full pipeline: load the mask, obtain the input signal,
/// normalize it, filter it, and write the stereo comparison file.
///
/// The output's left channel holds the original signal normalized to
/// [`DEFAULT_TARGET_DB`], and the right channel the un-normalized filtered
/// signal.
///
/// # Errors
///
/// See [`Error`].
pub fn run(args: &Arguments) -> Result<(), Error> {
    let sample_rate = DEFAULT_SAMPLE_RATE;

    print_banner("Audio Filter");

    println!("\nLoading EQ mask from: {}", args.header);
    let header_text = std::fs::read_to_string(&args.header)?;
    let mask = header::parse_eq_mask(&header_text)?;
    println!("Loaded {} complex FFT bins", mask.num_bins());

    let signal = if args.noise {
        println!(
            "\nGenerating {} seconds of white noise at {sample_rate} Hz",
            args.duration
        );
        white_noise((args.duration * f64::from(sample_rate)) as usize)
    } else {
        println!("\nLoading audio from: {}", args.input);
        let signal = wav::load_mono(&args.input, sample_rate)?;
        println!(
            "Loaded {} samples ({:.2} seconds)",
            signal.len(),
            signal.len() as f64 / f64::from(sample_rate)
        );
        signal
    };

    println!(
        "\nNormalizing original signal to {DEFAULT_TARGET_DB} dB max"
    );
    let normalized = normalize_peak(&signal, DEFAULT_TARGET_DB);

    println!(
        "\nApplying frequency-domain filter (FFT size: {}, {:.0}% overlap)",
        args.fft_size,
        args.overlap_ratio * 100.0
    );
    let filter = SpectralFilter::new(args.fft_size, args.overlap_ratio)?;
    log::debug!(
        "hop size {}, {} frames",
        filter.hop_size(),
        filter.num_frames(normalized.len())
    );
    let filtered = filter.process(&normalized, &mask)?;

    println!("\nSignal levels:");
    println!("  Original (normalized): {:.2} dB peak", peak_db(&normalized));
    println!(
        "  Filtered (un-normalized): {:.2} dB peak",
        peak_db(&filtered)
    );

    println!("\nSaving stereo output to: {}", args.output);
    println!("  Left channel:  Original (normalized to {DEFAULT_TARGET_DB} dB)");
    println!("  Right channel: Filtered (un-normalized)");
    wav::save_stereo(&args.output, &normalized, &filtered, sample_rate)?;

    print_banner("Processing complete!");
    Ok(())
}

fn print_banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}
