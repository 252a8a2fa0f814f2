//! Bars, tracks and songs.
//!
//! Inside a track everything plays back to back. Tracks of a song all start
//! at time zero and are mixed together.

use std::fmt;

use log::debug;

use crate::envelope::normalize;
use crate::event::Event;
use crate::mix::{concatenate, mix};
use crate::waveform::{SAMPLE_RATE, WaveformGenerator};

/// Beats per bar and the note value of one beat, e.g. 3/4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSignature {
    pub beats: u8,
    pub beat_unit: u8,
}

impl TimeSignature {
    pub fn new(beats: u8, beat_unit: u8) -> Self {
        Self { beats, beat_unit }
    }
}

impl Default for TimeSignature {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.beats, self.beat_unit)
    }
}

/// A run of notes and chords played one after the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub key: String,
    pub time_signature: TimeSignature,
    events: Vec<Event>,
}

impl Bar {
    pub fn new(key: &str, time_signature: TimeSignature) -> Self {
        Self {
            key: key.to_string(),
            time_signature,
            events: Vec::new(),
        }
    }

    pub fn add_event(&mut self, event: impl Into<Event>) {
        self.events.push(event.into());
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn render(&self, generator: &impl WaveformGenerator) -> Vec<f64> {
        let buffers: Vec<Vec<f64>> = self.events.iter().map(|e| e.render(generator)).collect();
        concatenate(&buffers)
    }
}

/// A sequence of bars for one voice of the song.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: String,
    pub key: String,
    bars: Vec<Bar>,
}

impl Track {
    pub fn new(name: &str, key: &str) -> Self {
        Self {
            name: name.to_string(),
            key: key.to_string(),
            bars: Vec::new(),
        }
    }

    pub fn add_bar(&mut self, bar: Bar) {
        self.bars.push(bar);
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.bars
            .iter()
            .flat_map(|bar| bar.events())
            .map(Event::duration)
            .sum()
    }

    pub fn render(&self, generator: &impl WaveformGenerator) -> Vec<f64> {
        let buffers: Vec<Vec<f64>> = self.bars.iter().map(|b| b.render(generator)).collect();
        let out = concatenate(&buffers);
        debug!(
            "rendered track '{}': {} bars, {} samples",
            self.name,
            self.bars.len(),
            out.len()
        );
        out
    }
}

/// Several tracks sounding together.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub key: String,
    pub time_signature: TimeSignature,
    tracks: Vec<Track>,
}

impl Song {
    pub fn new(key: &str, time_signature: TimeSignature) -> Self {
        Self {
            key: key.to_string(),
            time_signature,
            tracks: Vec::new(),
        }
    }

    pub fn add_track(&mut self, track: Track) {
        self.tracks.push(track);
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Length of the longest track in seconds
    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .map(Track::duration)
            .fold(0.0, f64::max)
    }

    /// Render every track, mix them in insertion order and normalize.
    pub fn render(&self, generator: &impl WaveformGenerator) -> Vec<f64> {
        let buffers: Vec<Vec<f64>> = self.tracks.iter().map(|t| t.render(generator)).collect();
        let out = normalize(&mix(&buffers));
        debug!(
            "mixed {} tracks into {} samples ({:.2}s)",
            self.tracks.len(),
            out.len(),
            out.len() as f64 / SAMPLE_RATE as f64
        );
        out
    }
}
