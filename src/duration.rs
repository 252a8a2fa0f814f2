//! Note-type names and their lengths.

/// Length in seconds of a note-type name such as `"qtr"` or `"half"`.
///
/// Unrecognized names give `0.0`, which renders as an empty buffer.
pub fn note_type_duration(name: &str) -> f64 {
    match name {
        "whole" | "w" => 1.0,
        "half" | "h" => 0.5,
        "quarter" | "qtr" => 0.25,
        "eighth" | "eigth" => 0.125,
        "sixteenth" => 0.0625,
        _ => 0.0,
    }
}
