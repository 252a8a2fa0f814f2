//! Chord qualities as semitone offsets above a root.

use crate::error::{Error, Result};

/// Ordered semitone intervals for a chord quality name.
pub fn intervals(quality: &str) -> Result<&'static [u8]> {
    let intervals: &'static [u8] = match quality {
        // triads
        "Major" => &[0, 4, 7],
        "Minor" => &[0, 3, 7],
        "Diminished" => &[0, 3, 6],
        "Augmented" => &[0, 4, 8],
        "5" => &[0, 7],

        // sevenths
        "7" => &[0, 4, 7, 10],
        "maj7" => &[0, 4, 7, 11],
        "m7" => &[0, 3, 7, 10],
        "m7b5" => &[0, 3, 6, 10],
        "dim7" => &[0, 3, 6, 9],
        "aug7" => &[0, 4, 8, 10],
        "mMaj7" => &[0, 3, 7, 11],
        "maj7b5" => &[0, 4, 6, 11],
        "m7#5" => &[0, 3, 8, 10],

        // sixths
        "6" => &[0, 4, 7, 9],
        "m6" => &[0, 3, 7, 9],
        "6/9" => &[0, 4, 7, 9, 14],
        "m6/9" => &[0, 3, 7, 9, 14],

        // ninths
        "9" => &[0, 4, 7, 10, 14],
        "m9" => &[0, 3, 7, 10, 14],
        "maj9" => &[0, 4, 7, 11, 14],
        "7#9" => &[0, 4, 7, 10, 15],
        "7b9" => &[0, 4, 7, 10, 13],
        "aug9" => &[0, 4, 8, 10, 14],

        // extended and altered
        "11" => &[0, 4, 7, 10, 14, 17],
        "m11" => &[0, 3, 7, 10, 14, 17],
        "13" => &[0, 4, 7, 10, 14, 17, 21],
        "m13" => &[0, 3, 7, 10, 14, 17, 21],
        "sus2" => &[0, 2, 7],
        "sus4" => &[0, 5, 7],
        "7sus4" => &[0, 5, 7, 10],
        "maj7#11" => &[0, 4, 7, 11, 14, 18],
        // dominant with b9, #9 and b13
        "7alt" => &[0, 4, 7, 10, 13, 15, 21],
        "7b13" => &[0, 4, 7, 10, 14, 20],
        "13b9" => &[0, 4, 7, 10, 13, 17, 21],
        "13sus4" => &[0, 5, 7, 10, 14, 17, 21],
        "maj13" => &[0, 4, 7, 11, 14, 17, 21],

        _ => {
            return Err(Error::InvalidChord {
                message: format!("unknown quality '{}'", quality),
            });
        }
    };
    Ok(intervals)
}
