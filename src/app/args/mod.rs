//! Command-line argument handling.

use crate::settings::*;

pub const USAGE: &str = "\
usage: eqfilter [options]

options:
    --noise             generate white noise instead of loading audio
    --input <FILE>      input WAV file (default: audio.input)
    --header <FILE>     EQ mask header file (default: test.h)
    --output <FILE>     output WAV file (default: filtered_output.wav)
    --duration <SECS>   white noise duration in seconds (default: 5.0)
    --fft-size <N>      FFT size, must be even (default: 256)
    --overlap <RATIO>   frame overlap ratio in [0, 1) (default: 0.5)";

/// Parsed command-line arguments with the original tool's defaults filled
/// in.
#[derive(Debug, Clone)]
pub struct Arguments {
    pub noise: bool,
    pub input: String,
    pub header: String,
    pub output: String,
    pub duration: f64,
    pub fft_size: usize,
    pub overlap_ratio: f64,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            noise: false,
            input: String::from("audio.input"),
            header: String::from("test.h"),
            output: String::from("filtered_output.wav"),
            duration: DEFAULT_NOISE_DURATION,
            fft_size: DEFAULT_FFT_SIZE,
            overlap_ratio: DEFAULT_OVERLAP_RATIO,
        }
    }
}

impl Arguments {
    /// Parses the arguments of the current process.
    pub fn from_env() -> Result<Self, String> {
        Self::parse(std::env::args().skip(1))
    }

    fn parse<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--noise" => parsed.noise = true,
                "--input" => parsed.input = value_for(&arg, &mut args)?,
                "--header" => parsed.header = value_for(&arg, &mut args)?,
                "--output" => parsed.output = value_for(&arg, &mut args)?,
                "--duration" => {
                    parsed.duration = parse_value(&arg, &mut args)?;
                }
                "--fft-size" => {
                    parsed.fft_size = parse_value(&arg, &mut args)?;
                }
                "--overlap" => {
                    parsed.overlap_ratio = parse_value(&arg, &mut args)?;
                }
                other => {
                    return Err(format!("unrecognized argument \"{other}\""));
                }
            }
        }

        Ok(parsed)
    }
}

fn value_for<I>(flag: &str, args: &mut I) -> Result<String, String>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or_else(|| format!("missing value for {flag}"))
}

fn parse_value<T, I>(flag: &str, args: &mut I) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    I: Iterator<Item = String>,
{
    value_for(flag, args)?
        .parse()
        .map_err(|e| format!("invalid value for {flag}: {e}"))
}
