//! Notes, chords, and the events a bar is made of.

use std::fmt;

use log::trace;

use crate::chord;
use crate::duration::note_type_duration;
use crate::envelope::normalize;
use crate::error::{Error, Result};
use crate::mix::add_into;
use crate::pitch::{MAX_OCTAVE, PitchName};
use crate::waveform::{WaveformGenerator, sample_count};

/// A single pitched note, or a rest when `pitch` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pitch: Option<PitchName>,
    octave: u8,
    note_type: String,
    duration: f64,
    frequency: f64,
}

impl Note {
    /// A pitched note. Sharp spellings are accepted for `pitch`.
    pub fn new(pitch: &str, octave: u8, note_type: &str) -> Result<Self> {
        let invalid = || Error::InvalidNote {
            name: pitch.to_string(),
            octave,
        };
        let name = PitchName::parse(pitch).ok_or_else(invalid)?;
        let frequency = name.frequency(octave).ok_or_else(invalid)?;
        Ok(Self {
            pitch: Some(name),
            octave,
            note_type: note_type.to_string(),
            duration: note_type_duration(note_type),
            frequency,
        })
    }

    /// Silence lasting `note_type`.
    pub fn rest(note_type: &str) -> Self {
        Self {
            pitch: None,
            octave: 0,
            note_type: note_type.to_string(),
            duration: note_type_duration(note_type),
            frequency: 0.0,
        }
    }

    pub fn pitch(&self) -> Option<PitchName> {
        self.pitch
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    pub fn is_rest(&self) -> bool {
        self.pitch.is_none()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Frequency in Hz (0.0 for a rest)
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn render(&self, generator: &impl WaveformGenerator) -> Vec<f64> {
        match self.pitch {
            None => vec![0.0; sample_count(self.duration)],
            Some(_) => generator.generate(self.frequency, self.duration),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pitch {
            Some(pitch) => write!(f, "{}{}:{}", pitch, self.octave, self.note_type),
            None => write!(f, "rest:{}", self.note_type),
        }
    }
}

/// Several pitches built from a root and a chord quality, sounding together.
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    root: PitchName,
    quality: String,
    octave: u8,
    note_type: String,
    duration: f64,
    frequencies: Vec<f64>,
}

impl Chord {
    /// Build a chord on `root` in `octave`.
    ///
    /// Chord tones that would land above octave 8 are left out.
    pub fn new(root: &str, quality: &str, note_type: &str, octave: u8) -> Result<Self> {
        let intervals = chord::intervals(quality)?;
        let root_name = PitchName::parse(root).ok_or_else(|| Error::InvalidChord {
            message: format!("unknown root note '{}'", root),
        })?;

        let mut frequencies = Vec::with_capacity(intervals.len());
        for &interval in intervals {
            let position = root_name.index() + interval as usize;
            let target_octave = octave as usize + position / 12;
            if target_octave > MAX_OCTAVE as usize {
                trace!(
                    "dropping {} chord tone +{} above octave {}",
                    quality, interval, MAX_OCTAVE
                );
                continue;
            }
            let frequency = PitchName::from_index(position % 12)
                .and_then(|pitch| pitch.frequency(target_octave as u8));
            if let Some(frequency) = frequency {
                frequencies.push(frequency);
            }
        }

        Ok(Self {
            root: root_name,
            quality: quality.to_string(),
            octave,
            note_type: note_type.to_string(),
            duration: note_type_duration(note_type),
            frequencies,
        })
    }

    pub fn root(&self) -> PitchName {
        self.root
    }

    pub fn quality(&self) -> &str {
        &self.quality
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Frequencies of the chord tones that fit in the table, lowest interval first.
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn render(&self, generator: &impl WaveformGenerator) -> Vec<f64> {
        let mut out = vec![0.0; sample_count(self.duration)];
        for &frequency in &self.frequencies {
            add_into(&mut out, &generator.generate(frequency, self.duration));
        }
        normalize(&out)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}:{}",
            self.root, self.octave, self.quality, self.note_type
        )
    }
}

/// Something that can sit in a bar.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Note(Note),
    Chord(Chord),
}

impl Event {
    pub fn render(&self, generator: &impl WaveformGenerator) -> Vec<f64> {
        match self {
            Event::Note(note) => note.render(generator),
            Event::Chord(chord) => chord.render(generator),
        }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        match self {
            Event::Note(note) => note.duration(),
            Event::Chord(chord) => chord.duration(),
        }
    }
}

impl From<Note> for Event {
    fn from(note: Note) -> Self {
        Event::Note(note)
    }
}

impl From<Chord> for Event {
    fn from(chord: Chord) -> Self {
        Event::Chord(chord)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Note(note) => note.fmt(f),
            Event::Chord(chord) => chord.fmt(f),
        }
    }
}
