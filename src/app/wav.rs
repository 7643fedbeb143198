//! WAV file loading and saving.

use crate::util::lerp;
use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use std::path::Path;
use thiserror::Error;

/// WAV loading/saving failures.
#[derive(Debug, Error)]
pub enum WavError {
    /// An underlying read/write failure.
    #[error("WAV I/O error: {0}")]
    Hound(#[from] hound::Error),

    /// The file's sample encoding is not one this tool reads.
    #[error("unsupported sample format {format:?} at {bits} bits per sample")]
    UnsupportedFormat { format: SampleFormat, bits: u16 },

    /// The file decoded to zero samples.
    #[error("audio file contains no samples")]
    EmptyFile,
}

/// Loads a WAV file as a mono signal at `target_sample_rate`.
///
/// Multi-channel audio is down-mixed by averaging the channels of each
/// frame; a differing file sample rate is bridged by linear-interpolation
/// resampling. 16-bit and 32-bit integer PCM and 32-bit float formats are
/// supported.
///
/// # Errors
///
/// See [`WavError`].
pub fn load_mono(
    path: impl AsRef<Path>,
    target_sample_rate: u32,
) -> Result<Vec<f64>, WavError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let samples: Vec<f64> = match (spec.sample_format, spec.bits_per_sample)
    {
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|x| f64::from(x) / 32768.0))
            .collect::<Result<_, _>>()?,
        (SampleFormat::Int, 32) => reader
            .samples::<i32>()
            .map(|s| s.map(|x| f64::from(x) / 2_147_483_648.0))
            .collect::<Result<_, _>>()?,
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<Result<_, _>>()?,
        (format, bits) => {
            return Err(WavError::UnsupportedFormat { format, bits });
        }
    };

    let mono = downmix(&samples, usize::from(spec.channels));

    if mono.is_empty() {
        return Err(WavError::EmptyFile);
    }

    if spec.sample_rate == target_sample_rate {
        return Ok(mono);
    }

    let num_output = mono.len() * target_sample_rate as usize
        / spec.sample_rate as usize;
    Ok(resample_linear(&mono, num_output))
}

/// Saves `left` and `right` as a stereo 16-bit PCM WAV file.
///
/// The shorter channel is zero-padded to the longer one's length, and
/// samples are clipped to `[-1, 1]`.
///
/// # Errors
///
/// See [`WavError`].
pub fn save_stereo(
    path: impl AsRef<Path>,
    left: &[f64],
    right: &[f64],
    sample_rate: u32,
) -> Result<(), WavError> {
    let spec = WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec)?;

    for frame in 0..left.len().max(right.len()) {
        writer.write_sample(to_pcm_i16(
            left.get(frame).copied().unwrap_or(0.0),
        ))?;
        writer.write_sample(to_pcm_i16(
            right.get(frame).copied().unwrap_or(0.0),
        ))?;
    }

    writer.finalize()?;
    Ok(())
}

/// Averages interleaved frames down to a mono signal.
fn downmix(samples: &[f64], num_channels: usize) -> Vec<f64> {
    if num_channels <= 1 {
        return samples.to_vec();
    }

    samples
        .chunks_exact(num_channels)
        .map(|frame| frame.iter().sum::<f64>() / num_channels as f64)
        .collect()
}

/// Resamples `input` to `num_output` samples by linear interpolation.
fn resample_linear(input: &[f64], num_output: usize) -> Vec<f64> {
    if input.is_empty() || num_output == 0 {
        return Vec::new();
    }
    if input.len() == 1 || num_output == 1 {
        return vec![input[0]; num_output];
    }

    let step = (input.len() - 1) as f64 / (num_output - 1) as f64;

    (0..num_output)
        .map(|i| {
            let pos = i as f64 * step;
            let idx = (pos.floor() as usize).min(input.len() - 2);
            lerp(input[idx], input[idx + 1], pos - idx as f64)
        })
        .collect()
}

fn to_pcm_i16(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0) as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::within_tolerance;

    #[test]
    fn test_downmix_averages_channels() {
        let interleaved = [0.5, -0.5, 1.0, 0.0, -0.25, 0.75];
        let mono = downmix(&interleaved, 2);

        assert_eq!(mono, vec![0.0, 0.5, 0.25]);
    }

    #[test]
    fn test_resample_preserves_endpoints() {
        let input = [0.0, 0.5, 1.0, 0.5, 0.0];
        let output = resample_linear(&input, 9);

        assert_eq!(output.len(), 9);
        assert!(within_tolerance(output[0], 0.0, 1e-12));
        assert!(within_tolerance(output[4], 1.0, 1e-12));
        assert!(within_tolerance(output[8], 0.0, 1e-12));
    }

    #[test]
    fn test_pcm_conversion_clips() {
        assert_eq!(to_pcm_i16(0.0), 0);
        assert_eq!(to_pcm_i16(1.0), 32767);
        assert_eq!(to_pcm_i16(2.0), 32767);
        assert_eq!(to_pcm_i16(-2.0), -32767);
    }

    #[test]
    fn test_stereo_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.wav");

        let left = vec![0.0, 0.25, -0.25, 0.5];
        let right = vec![0.5, -0.5];
        save_stereo(&path, &left, &right, 16000).unwrap();

        let mut reader = WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, 16000);

        let samples: Vec<i16> =
            reader.samples::<i16>().map(Result::unwrap).collect();

        // 4 frames, right channel padded with silence
        assert_eq!(samples.len(), 8);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[1], 16383);
        assert_eq!(samples[5], 0);
        assert_eq!(samples[7], 0);
    }

    #[test]
    fn test_load_mono_resamples_and_downmixes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.wav");

        let left = vec![0.5; 800];
        let right = vec![0.25; 800];
        save_stereo(&path, &left, &right, 8000).unwrap();

        let mono = load_mono(&path, 16000).unwrap();

        assert_eq!(mono.len(), 1600);
        // mean of the two channels, within 16-bit quantization error
        assert!(within_tolerance(mono[100], 0.375, 1e-3));
    }
}
