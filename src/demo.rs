//! Built-in demo score, played when no score file is given.

use crate::error::Result;
use crate::event::{Chord, Event, Note};
use crate::score::{Bar, Song, TimeSignature, Track};

fn bar(events: Vec<Event>) -> Bar {
    let mut bar = Bar::new("C", TimeSignature::default());
    for event in events {
        bar.add_event(event);
    }
    bar
}

fn n(pitch: &str, note_type: &str) -> Result<Event> {
    Ok(Note::new(pitch, 4, note_type)?.into())
}

fn c(root: &str, quality: &str, note_type: &str) -> Result<Event> {
    Ok(Chord::new(root, quality, note_type, 3)?.into())
}

/// "Mary Had a Little Lamb" in C major: a melody track over a chord track.
pub fn mary_had_a_little_lamb() -> Result<Song> {
    let mut melody = Track::new("melody", "C");
    melody.add_bar(bar(vec![
        n("E", "qtr")?,
        n("D", "qtr")?,
        n("C", "qtr")?,
        n("D", "qtr")?,
    ]));
    melody.add_bar(bar(vec![n("E", "qtr")?, n("E", "qtr")?, n("E", "h")?]));
    melody.add_bar(bar(vec![n("D", "qtr")?, n("D", "qtr")?, n("D", "h")?]));
    melody.add_bar(bar(vec![n("E", "qtr")?, n("G", "qtr")?, n("G", "h")?]));

    let mut chords = Track::new("chords", "C");
    chords.add_bar(bar(vec![c("C", "Major", "h")?, c("G", "7", "h")?]));
    chords.add_bar(bar(vec![c("C", "Major", "w")?]));
    chords.add_bar(bar(vec![c("G", "7", "w")?]));
    chords.add_bar(bar(vec![c("C", "Major", "w")?]));

    let mut song = Song::new("C", TimeSignature::default());
    song.add_track(melody);
    song.add_track(chords);
    Ok(song)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::waveform::Waveform;

    #[test]
    fn test_demo_structure() {
        let song = mary_had_a_little_lamb().unwrap();
        assert_eq!(song.tracks().len(), 2);
        assert_eq!(song.tracks()[0].bars().len(), 4);
        assert_eq!(song.tracks()[1].bars().len(), 4);
        assert_eq!(song.duration(), 4.0);
    }

    #[test]
    fn test_demo_renders_four_seconds() {
        let out = mary_had_a_little_lamb().unwrap().render(&Waveform::Sine);
        assert_eq!(out.len(), 4 * 44100);
        assert!(out.iter().all(|s| s.abs() <= 1.0));
    }

    #[test]
    fn test_demo_matches_text_score() {
        let text = "\
key: C
time_signature: 4/4

[track: melody]
E4:qtr D4:qtr C4:qtr D4:qtr | E4:qtr E4:qtr E4:h |
D4:qtr D4:qtr D4:h | E4:qtr G4:qtr G4:h |

[track: chords]
C3:Major:h G3:7:h | C3:Major:w | G3:7:w | C3:Major:w |
";
        assert_eq!(parser::parse(text).unwrap(), mary_had_a_little_lamb().unwrap());
    }
}
