use scoresynth::{Bar, Chord, Error, Note, Song, TimeSignature, Track, Waveform, parser};

fn single_note_song(note: Note) -> Song {
    let mut bar = Bar::new("C", TimeSignature::default());
    bar.add_event(note);
    let mut track = Track::new("lead", "C");
    track.add_bar(bar);
    let mut song = Song::new("C", TimeSignature::default());
    song.add_track(track);
    song
}

fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |m, s| m.max(s.abs()))
}

#[test]
fn quarter_note_a4_sine() {
    let song = single_note_song(Note::new("A", 4, "qtr").unwrap());
    let samples = scoresynth::render(&song, Waveform::Sine);
    assert_eq!(samples.len(), 11025);
    assert_eq!(samples[0], 0.0);
    assert!((peak(&samples) - 1.0).abs() < 1e-12);
}

#[test]
fn every_waveform_stays_in_range() {
    let song = parser::parse("C4:qtr E4:eigth rest:sixteenth | C3:maj9:h |\n[track: bass]\nC2:w").unwrap();
    for wave in [
        Waveform::Sine,
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Triangle,
    ] {
        let samples = scoresynth::render(&song, wave);
        assert_eq!(samples.len(), 44100);
        assert!(samples.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
    }
}

#[test]
fn rest_only_song_is_silent() {
    let song = single_note_song(Note::rest("qtr"));
    let samples = scoresynth::render(&song, Waveform::Square);
    assert_eq!(samples.len(), 11025);
    assert!(samples.iter().all(|s| *s == 0.0));
}

#[test]
fn high_chord_drops_tones_without_error() {
    let chord = Chord::new("A", "maj13", "h", 8).unwrap();
    assert_eq!(chord.frequencies(), &[7040.00]);

    let mut bar = Bar::new("A", TimeSignature::default());
    bar.add_event(chord);
    assert_eq!(bar.render(&Waveform::Sine).len(), 22050);
}

#[test]
fn render_is_deterministic() {
    let song = scoresynth::demo::mary_had_a_little_lamb().unwrap();
    assert_eq!(
        scoresynth::render(&song, Waveform::Triangle),
        scoresynth::render(&song, Waveform::Triangle)
    );
}

#[test]
fn parse_errors_abort() {
    let err = parser::parse("[track: a]\nC4:qtr | C4:Major:qtr |\nC4:qtr ??").unwrap_err();
    assert!(matches!(err, Error::InvalidEventType { line: 3, .. }));
    assert_eq!(err.to_string(), "line 3: '??' is not a note, rest or chord");
}
