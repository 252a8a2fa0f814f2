//! Amplitude shaping applied to every generated buffer.

use crate::waveform::SAMPLE_RATE;

/// Attack-decay-sustain-release shape, applied over a whole buffer.
///
/// Each phase is measured in samples from `SAMPLE_RATE` and then clamped to a
/// quarter of the buffer, so short notes keep all four phases in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    /// Time in seconds to go from 0.0 to 1.0
    pub attack: f64,
    /// Time in seconds to go from 1.0 to `sustain`
    pub decay: f64,
    /// Level held between decay and release (0.0..=1.0)
    pub sustain: f64,
    /// Time in seconds to go from `sustain` to 0.0
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.02,
            decay: 0.05,
            sustain: 0.7,
            release: 0.05,
        }
    }
}

impl Envelope {
    /// Shape `samples` and return a buffer of the same length.
    pub fn apply(&self, samples: &[f64]) -> Vec<f64> {
        let len = samples.len();
        let quarter = len / 4;
        let attack = phase_samples(self.attack).min(quarter);
        let decay = phase_samples(self.decay).min(quarter);
        let release = phase_samples(self.release).min(quarter);
        let sustain = self.sustain;

        let mut out = vec![0.0; len];

        for i in 0..attack {
            out[i] = samples[i] * (i as f64 / attack as f64);
        }

        for i in attack..attack + decay {
            let gain = 1.0 - (1.0 - sustain) * (i - attack) as f64 / decay as f64;
            out[i] = samples[i] * gain;
        }

        // Empty when the buffer is too short for a held part.
        for i in attack + decay..len - release {
            out[i] = samples[i] * sustain;
        }

        let release_start = len - release;
        for i in release_start..len {
            let gain = sustain * (1.0 - (i - release_start) as f64 / release as f64);
            out[i] = samples[i] * gain;
        }

        out
    }
}

fn phase_samples(seconds: f64) -> usize {
    (seconds * SAMPLE_RATE as f64) as usize
}

/// Scale so the loudest sample has magnitude 1.0. Silence is returned as is.
pub fn normalize(samples: &[f64]) -> Vec<f64> {
    let peak = samples.iter().fold(0.0_f64, |max, s| max.max(s.abs()));
    let peak = if peak == 0.0 { 1.0 } else { peak };
    samples.iter().map(|s| s / peak).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ones(len: usize) -> Vec<f64> {
        vec![1.0; len]
    }

    #[test]
    fn test_default_phase_lengths() {
        // 20ms attack, 50ms decay, 50ms release at 44.1kHz
        let out = Envelope::default().apply(&ones(44100));
        assert_eq!(out[0], 0.0);
        assert!((out[441] - 0.5).abs() < 1e-12);
        assert_eq!(out[882], 1.0);
        assert!((out[882 + 2205] - 0.7).abs() < 1e-12);
        assert!((out[20000] - 0.7).abs() < 1e-12);
        assert!((out[44100 - 2205] - 0.7).abs() < 1e-12);
        assert!(out[44099] > 0.0 && out[44099] < 0.001);
    }

    #[test]
    fn test_preserves_length() {
        for len in [0, 1, 3, 4, 7, 100, 11025] {
            assert_eq!(Envelope::default().apply(&ones(len)).len(), len);
        }
    }

    #[test]
    fn test_short_buffer_clamps_to_quarter() {
        // 8 samples: every phase is clamped to 2 samples
        let out = Envelope::default().apply(&ones(8));
        let expected = [0.0, 0.5, 1.0, 0.85, 0.7, 0.7, 0.7, 0.35];
        for (got, want) in out.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{} != {}", got, want);
        }
    }

    #[test]
    fn test_tiny_buffers_do_not_panic() {
        assert_eq!(Envelope::default().apply(&ones(1)), vec![0.7]);
        assert_eq!(Envelope::default().apply(&ones(3)), vec![0.7; 3]);
    }

    #[test]
    fn test_custom_sustain() {
        let env = Envelope {
            attack: 0.0,
            decay: 0.0,
            sustain: 0.25,
            release: 0.0,
        };
        assert_eq!(env.apply(&ones(10)), vec![0.25; 10]);
    }

    #[test]
    fn test_normalize_scales_to_unit_peak() {
        let out = normalize(&[0.1, -0.4, 0.2]);
        assert_eq!(out, vec![0.25, -1.0, 0.5]);
    }

    #[test]
    fn test_normalize_silence() {
        let out = normalize(&[0.0; 16]);
        assert_eq!(out, vec![0.0; 16]);
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_normalize_is_noop_at_unit_peak() {
        let input = vec![0.5, -1.0, 0.25, 1.0];
        assert_eq!(normalize(&input), input);
    }
}
