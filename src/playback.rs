//! Playing a rendered buffer on the default output device.

use std::sync::mpsc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::{error, info};

use crate::error::{Error, Result};
use crate::waveform::SAMPLE_RATE;

fn audio_error(message: impl Into<String>) -> Error {
    Error::Audio {
        message: message.into(),
    }
}

/// Linear interpolation into `buffer` at a fractional index; silence past the end.
fn sample_at(buffer: &[f32], position: f64) -> f32 {
    let index = position.floor() as usize;
    let Some(&current) = buffer.get(index) else {
        return 0.0;
    };
    let next = buffer.get(index + 1).copied().unwrap_or(0.0);
    let t = (position - index as f64) as f32;
    current + (next - current) * t
}

/// Play mono samples at `SAMPLE_RATE` and block until they have been played.
///
/// The buffer is resampled to the device rate and copied to every channel.
pub fn play(samples: &[f64]) -> Result<()> {
    if samples.is_empty() {
        return Ok(());
    }

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| audio_error("no output audio device available"))?;

    let config = device
        .default_output_config()
        .map_err(|e| audio_error(format!("failed to get default output config: {}", e)))?;

    let device_rate = config.sample_rate() as f64;
    let channels = (config.channels() as usize).max(1);
    let step = SAMPLE_RATE as f64 / device_rate;
    info!(
        "playing {} samples on {} Hz x {} channels",
        samples.len(),
        device_rate,
        channels
    );

    let buffer: Vec<f32> = samples.iter().map(|s| *s as f32).collect();
    let end = buffer.len() as f64;
    let (done_tx, done_rx) = mpsc::channel::<()>();
    let mut done_tx = Some(done_tx);
    let mut position = 0.0_f64;

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    frame.fill(sample_at(&buffer, position));
                    position += step;
                }
                if position >= end {
                    if let Some(tx) = done_tx.take() {
                        let _ = tx.send(());
                    }
                }
            },
            move |err| {
                error!("audio stream error: {}", err);
            },
            None,
        )
        .map_err(|e| audio_error(format!("failed to build output stream: {}", e)))?;

    stream
        .play()
        .map_err(|e| audio_error(format!("failed to play stream: {}", e)))?;

    let expected = Duration::from_secs_f64(end / SAMPLE_RATE as f64);
    done_rx
        .recv_timeout(expected + Duration::from_secs(2))
        .map_err(|_| audio_error("playback did not finish"))?;

    // Let the device drain its last buffer before the stream is dropped.
    std::thread::sleep(Duration::from_millis(100));
    Ok(())
}
