//! Errors raised while building or loading a score.

use std::path::PathBuf;

use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("invalid note: {}{}", name, octave))]
    InvalidNote { name: String, octave: u8 },

    #[snafu(display("invalid chord: {}", message))]
    InvalidChord { message: String },

    #[snafu(display("line {}: '{}' is not a note, rest or chord", line, token))]
    InvalidEventType { token: String, line: usize },

    #[snafu(display("line {}: {}", line, message))]
    Parse { line: usize, message: String },

    #[snafu(display("reading {}: {}", path.display(), source))]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("writing wav: {}", source))]
    Wav { source: hound::Error },

    #[snafu(display("audio output: {}", message))]
    Audio { message: String },
}
