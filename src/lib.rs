//! Render symbolic scores (notes, chords, bars, tracks) to mono PCM samples.
//!
//! ```
//! use scoresynth::{Bar, Note, Song, TimeSignature, Track, Waveform};
//!
//! let mut bar = Bar::new("C", TimeSignature::default());
//! bar.add_event(Note::new("A", 4, "qtr")?);
//! let mut track = Track::new("lead", "C");
//! track.add_bar(bar);
//! let mut song = Song::new("C", TimeSignature::default());
//! song.add_track(track);
//!
//! let samples = scoresynth::render(&song, Waveform::Sine);
//! assert_eq!(samples.len(), 11025);
//! # Ok::<(), scoresynth::Error>(())
//! ```

pub mod chord;
pub mod demo;
pub mod duration;
pub mod envelope;
pub mod error;
pub mod event;
pub mod instrument;
pub mod mix;
pub mod parser;
pub mod pcm;
pub mod pitch;
pub mod playback;
pub mod score;
pub mod waveform;

pub use envelope::Envelope;
pub use error::{Error, Result};
pub use event::{Chord, Event, Note};
pub use pitch::{PitchName, resolve_frequency};
pub use score::{Bar, Song, TimeSignature, Track};
pub use waveform::{SAMPLE_RATE, Synth, Waveform, WaveformGenerator};

/// Render `song` with the default envelope: 44100 Hz mono, samples in [-1, 1].
pub fn render(song: &Song, waveform: Waveform) -> Vec<f64> {
    song.render(&waveform)
}
