//! Periodic waveform generators.
//!
//! A generator turns a frequency and a duration into an enveloped, normalized
//! buffer. The same generator is used for every note of a render.

use std::f64::consts::PI;

use clap::ValueEnum;

use crate::envelope::{self, Envelope};

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Peak amplitude of the raw shapes before enveloping.
const RAW_AMPLITUDE: f64 = 0.5;

/// Number of samples covering `duration` seconds.
pub fn sample_count(duration: f64) -> usize {
    (SAMPLE_RATE as f64 * duration).round() as usize
}

/// Anything that can produce the samples for one pitched note.
pub trait WaveformGenerator {
    fn generate(&self, frequency: f64, duration: f64) -> Vec<f64>;
}

impl<F> WaveformGenerator for F
where
    F: Fn(f64, f64) -> Vec<f64>,
{
    fn generate(&self, frequency: f64, duration: f64) -> Vec<f64> {
        self(frequency, duration)
    }
}

/// Basic periodic shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Waveform {
    #[default]
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

impl Waveform {
    /// Raw 0.5-peak samples, before any envelope.
    pub fn raw(self, frequency: f64, duration: f64) -> Vec<f64> {
        (0..sample_count(duration))
            .map(|i| {
                let t = i as f64 / SAMPLE_RATE as f64;
                RAW_AMPLITUDE * self.shape(frequency * t)
            })
            .collect()
    }

    /// Unit-amplitude shape at `cycles` periods since the start.
    fn shape(self, cycles: f64) -> f64 {
        match self {
            Waveform::Sine => (2.0 * PI * cycles).sin(),
            Waveform::Square => sign((2.0 * PI * cycles).sin()),
            Waveform::Sawtooth => 2.0 * frac(cycles) - 1.0,
            Waveform::Triangle => 2.0 * (2.0 * frac(cycles) - 1.0).abs() - 1.0,
        }
    }
}

impl WaveformGenerator for Waveform {
    fn generate(&self, frequency: f64, duration: f64) -> Vec<f64> {
        Synth::new(*self).generate(frequency, duration)
    }
}

// f64::signum maps 0.0 to 1.0; a zero crossing should stay silent.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn frac(x: f64) -> f64 {
    x - x.floor()
}

/// A waveform played through an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Synth {
    pub waveform: Waveform,
    pub envelope: Envelope,
}

impl Synth {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            envelope: Envelope::default(),
        }
    }

    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }
}

impl WaveformGenerator for Synth {
    fn generate(&self, frequency: f64, duration: f64) -> Vec<f64> {
        let raw = self.waveform.raw(frequency, duration);
        envelope::normalize(&self.envelope.apply(&raw))
    }
}
