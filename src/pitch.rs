//! Pitch names and the fixed frequency table.

use std::fmt;

use crate::error::{Error, Result};

/// Highest octave present in the frequency table.
pub const MAX_OCTAVE: u8 = 8;

/// The twelve pitch classes, spelled with flats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchName {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

/// Chromatic order, starting at C.
pub const CHROMATIC_SCALE: [PitchName; 12] = [
    PitchName::C,
    PitchName::Db,
    PitchName::D,
    PitchName::Eb,
    PitchName::E,
    PitchName::F,
    PitchName::Gb,
    PitchName::G,
    PitchName::Ab,
    PitchName::A,
    PitchName::Bb,
    PitchName::B,
];

// Rows follow CHROMATIC_SCALE, columns are octaves 0 through 8.
const FREQUENCIES: [[f64; 9]; 12] = [
    [16.35, 32.70, 65.41, 130.81, 261.63, 523.25, 1046.50, 2093.00, 4186.01],
    [17.32, 34.65, 69.30, 138.59, 277.18, 554.37, 1108.73, 2217.46, 4434.92],
    [18.35, 36.71, 73.42, 146.83, 293.66, 587.33, 1174.66, 2349.32, 4698.63],
    [19.45, 38.89, 77.78, 155.56, 311.13, 622.25, 1244.51, 2489.02, 4978.03],
    [20.60, 41.20, 82.41, 164.81, 329.63, 659.25, 1318.51, 2637.02, 5274.04],
    [21.83, 43.65, 87.31, 174.61, 349.23, 698.46, 1396.91, 2793.83, 5587.65],
    [23.12, 46.25, 92.50, 185.00, 369.99, 739.99, 1479.98, 2959.96, 5919.91],
    [24.50, 49.00, 98.00, 196.00, 392.00, 783.99, 1567.98, 3135.96, 6271.93],
    [25.96, 51.91, 103.83, 207.65, 415.30, 830.61, 1661.22, 3322.44, 6644.88],
    [27.50, 55.00, 110.00, 220.00, 440.00, 880.00, 1760.00, 3520.00, 7040.00],
    [29.14, 58.27, 116.54, 233.08, 466.16, 932.33, 1864.66, 3729.31, 7458.62],
    [30.87, 61.74, 123.47, 246.94, 493.88, 987.77, 1975.53, 3951.07, 7902.13],
];

/// Map a sharp spelling onto its flat equivalent. Other names pass through.
pub fn resolve_alias(name: &str) -> &str {
    match name {
        "C#" => "Db",
        "D#" => "Eb",
        "F#" => "Gb",
        "G#" => "Ab",
        "A#" => "Bb",
        other => other,
    }
}

impl PitchName {
    /// Position within the octave (C=0, B=11)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a pitch name, accepting sharp spellings.
    pub fn parse(name: &str) -> Option<Self> {
        let canonical = resolve_alias(name);
        CHROMATIC_SCALE
            .iter()
            .copied()
            .find(|p| p.as_str() == canonical)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        CHROMATIC_SCALE.get(index).copied()
    }

    /// Tabulated frequency in Hz, or `None` past the top octave.
    pub fn frequency(self, octave: u8) -> Option<f64> {
        FREQUENCIES[self.index()].get(octave as usize).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PitchName::C => "C",
            PitchName::Db => "Db",
            PitchName::D => "D",
            PitchName::Eb => "Eb",
            PitchName::E => "E",
            PitchName::F => "F",
            PitchName::Gb => "Gb",
            PitchName::G => "G",
            PitchName::Ab => "Ab",
            PitchName::A => "A",
            PitchName::Bb => "Bb",
            PitchName::B => "B",
        }
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the frequency of a named pitch, accepting sharp aliases.
pub fn resolve_frequency(name: &str, octave: u8) -> Result<f64> {
    PitchName::parse(name)
        .and_then(|pitch| pitch.frequency(octave))
        .ok_or_else(|| Error::InvalidNote {
            name: name.to_string(),
            octave,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_frequencies() {
        assert_eq!(resolve_frequency("A", 4).unwrap(), 440.00);
        assert_eq!(resolve_frequency("C", 4).unwrap(), 261.63);
        assert_eq!(resolve_frequency("C", 0).unwrap(), 16.35);
        assert_eq!(resolve_frequency("B", 8).unwrap(), 7902.13);
        assert_eq!(resolve_frequency("Gb", 5).unwrap(), 739.99);
    }

    #[test]
    fn test_every_pitch_and_octave_resolves() {
        let expected: [(&str, [f64; 9]); 12] = [
            ("C", [16.35, 32.70, 65.41, 130.81, 261.63, 523.25, 1046.50, 2093.00, 4186.01]),
            ("Db", [17.32, 34.65, 69.30, 138.59, 277.18, 554.37, 1108.73, 2217.46, 4434.92]),
            ("D", [18.35, 36.71, 73.42, 146.83, 293.66, 587.33, 1174.66, 2349.32, 4698.63]),
            ("Eb", [19.45, 38.89, 77.78, 155.56, 311.13, 622.25, 1244.51, 2489.02, 4978.03]),
            ("E", [20.60, 41.20, 82.41, 164.81, 329.63, 659.25, 1318.51, 2637.02, 5274.04]),
            ("F", [21.83, 43.65, 87.31, 174.61, 349.23, 698.46, 1396.91, 2793.83, 5587.65]),
            ("Gb", [23.12, 46.25, 92.50, 185.00, 369.99, 739.99, 1479.98, 2959.96, 5919.91]),
            ("G", [24.50, 49.00, 98.00, 196.00, 392.00, 783.99, 1567.98, 3135.96, 6271.93]),
            ("Ab", [25.96, 51.91, 103.83, 207.65, 415.30, 830.61, 1661.22, 3322.44, 6644.88]),
            ("A", [27.50, 55.00, 110.00, 220.00, 440.00, 880.00, 1760.00, 3520.00, 7040.00]),
            ("Bb", [29.14, 58.27, 116.54, 233.08, 466.16, 932.33, 1864.66, 3729.31, 7458.62]),
            ("B", [30.87, 61.74, 123.47, 246.94, 493.88, 987.77, 1975.53, 3951.07, 7902.13]),
        ];
        for (name, row) in expected {
            for (octave, want) in row.iter().enumerate() {
                let octave = octave as u8;
                assert_eq!(
                    resolve_frequency(name, octave).unwrap(),
                    *want,
                    "{}{}",
                    name,
                    octave
                );
            }
        }
        assert_eq!(MAX_OCTAVE, 8);
    }

    #[test]
    fn test_sharp_aliases() {
        assert_eq!(
            resolve_frequency("C#", 4).unwrap(),
            resolve_frequency("Db", 4).unwrap()
        );
        assert_eq!(PitchName::parse("A#"), Some(PitchName::Bb));
        assert_eq!(PitchName::parse("F#"), Some(PitchName::Gb));
        assert_eq!(PitchName::parse("Db"), Some(PitchName::Db));
        assert_eq!(PitchName::parse("db"), None);
        assert_eq!(resolve_alias("E"), "E");
    }

    #[test]
    fn test_unknown_pitch_is_invalid_note() {
        assert!(matches!(
            resolve_frequency("H", 4),
            Err(Error::InvalidNote { .. })
        ));
        // E# and B# have no alias entry
        assert!(resolve_frequency("E#", 4).is_err());
    }

    #[test]
    fn test_octave_out_of_range() {
        assert!(matches!(
            resolve_frequency("A", 9),
            Err(Error::InvalidNote { octave: 9, .. })
        ));
    }

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(PitchName::C.index(), 0);
        assert_eq!(PitchName::B.index(), 11);
        assert_eq!(PitchName::from_index(9), Some(PitchName::A));
        assert_eq!(PitchName::from_index(12), None);
    }
}
