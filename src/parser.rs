//! Text score format.
//!
//! ```text
//! # Mary had a little lamb
//! key: C
//! time_signature: 4/4
//!
//! [track: melody]
//! E4:qtr D4:qtr C4:qtr D4:qtr | E4:qtr E4:qtr E4:h |
//!
//! [track: chords]
//! C3:Major:h G3:7:h | C3:Major:w |
//! ```
//!
//! A note is `<pitch><octave>:<duration>`, a rest is `rest:<duration>` and a
//! chord is `<root><octave>:<quality>:<duration>`. `|` ends a bar; bars may
//! span several lines. Events before the first `[track: ...]` header go to a
//! track named `default`.

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::event::{Chord, Event, Note};
use crate::score::{Bar, Song, TimeSignature, Track};

/// Track and bar currently being filled.
struct Builder {
    song: Song,
    track: Option<Track>,
    bar: Vec<Event>,
}

impl Builder {
    fn close_bar(&mut self) {
        if self.bar.is_empty() {
            return;
        }
        let mut bar = Bar::new(&self.song.key, self.song.time_signature);
        for event in self.bar.drain(..) {
            bar.add_event(event);
        }
        let key = self.song.key.clone();
        self.track
            .get_or_insert_with(|| Track::new("default", &key))
            .add_bar(bar);
    }

    fn close_track(&mut self) {
        self.close_bar();
        if let Some(track) = self.track.take() {
            if !track.bars().is_empty() {
                debug!("parsed track '{}' with {} bars", track.name, track.bars().len());
                self.song.add_track(track);
            }
        }
    }
}

/// Parse a score into a song.
pub fn parse(input: &str) -> Result<Song> {
    let mut builder = Builder {
        song: Song::new("C", TimeSignature::default()),
        track: None,
        bar: Vec::new(),
    };

    for (line_idx, line) in input.lines().enumerate() {
        let line_num = line_idx + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(value) = trimmed.strip_prefix("key:") {
            builder.song.key = value.trim().to_string();
            continue;
        }
        if let Some(value) = trimmed.strip_prefix("time_signature:") {
            builder.song.time_signature = parse_time_signature(value.trim(), line_num)?;
            continue;
        }

        // Track header: [track: name]
        if let Some(name) = trimmed
            .strip_prefix("[track:")
            .and_then(|rest| rest.strip_suffix(']'))
        {
            builder.close_track();
            builder.track = Some(Track::new(name.trim(), &builder.song.key));
            continue;
        }

        let spaced = trimmed.replace('|', " | ");
        for token in spaced.split_whitespace() {
            if token == "|" {
                builder.close_bar();
            } else {
                builder.bar.push(parse_event(token, line_num)?);
            }
        }
    }

    builder.close_track();
    Ok(builder.song)
}

fn parse_time_signature(value: &str, line: usize) -> Result<TimeSignature> {
    let invalid = || Error::Parse {
        line,
        message: format!("invalid time signature '{}'", value),
    };
    let (beats, unit) = value.split_once('/').ok_or_else(invalid)?;
    let beats = beats.trim().parse().map_err(|_| invalid())?;
    let unit = unit.trim().parse().map_err(|_| invalid())?;
    Ok(TimeSignature::new(beats, unit))
}

/// Parse one note, rest or chord token.
pub fn parse_event(token: &str, line: usize) -> Result<Event> {
    let invalid = || Error::InvalidEventType {
        token: token.to_string(),
        line,
    };
    let parts: Vec<&str> = token.split(':').collect();
    let event = match parts.as_slice() {
        ["rest" | "-", note_type] => Note::rest(note_type).into(),
        [pitch, note_type] => {
            let (name, octave) = split_octave(pitch).ok_or_else(invalid)?;
            Note::new(name, octave, note_type)?.into()
        }
        [root, quality, note_type] => {
            let (name, octave) = split_octave(root).ok_or_else(invalid)?;
            Chord::new(name, quality, note_type, octave)?.into()
        }
        _ => return Err(invalid()),
    };
    trace!("line {}: {}", line, event);
    Ok(event)
}

/// Split `"C#4"` into `("C#", 4)`.
fn split_octave(token: &str) -> Option<(&str, u8)> {
    let digits = token.find(|c: char| c.is_ascii_digit())?;
    let (name, octave) = token.split_at(digits);
    if name.is_empty() {
        return None;
    }
    Some((name, octave.parse().ok()?))
}
