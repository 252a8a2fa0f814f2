//! Converting rendered samples to integer PCM.

use std::path::Path;

use log::info;
use snafu::ResultExt;

use crate::error::{Result, WavSnafu};
use crate::waveform::SAMPLE_RATE;

fn to_i16(sample: f64) -> i16 {
    // `as` saturates, so stray values past [-1, 1] clip instead of wrapping.
    (sample * i16::MAX as f64) as i16
}

/// 16-bit signed big-endian mono PCM.
pub fn to_pcm16_be(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|s| to_i16(*s).to_be_bytes())
        .collect()
}

/// Write a mono 16-bit WAV file at `SAMPLE_RATE`.
pub fn write_wav(path: &Path, samples: &[f64]) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).context(WavSnafu)?;
    for sample in samples {
        writer.write_sample(to_i16(*sample)).context(WavSnafu)?;
    }
    writer.finalize().context(WavSnafu)?;
    info!("wrote {} samples to {}", samples.len(), path.display());
    Ok(())
}
