//! Envelope settings loaded from `.instr` files.
//!
//! ```text
//! # ADSR envelope (times in seconds, sustain 0..1)
//! attack: 0.02
//! decay: 0.05
//! sustain: 0.7
//! release: 0.05
//! ```
//!
//! Keys left out keep their default value.

use std::fs;
use std::path::Path;

use snafu::ResultExt;

use crate::envelope::Envelope;
use crate::error::{Error, IoSnafu, Result};

/// Parse a single "key: value" line. Returns `None` for blanks and comments.
fn parse_line(line: &str, line_num: usize) -> Result<Option<(&str, f64)>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let (key, value) = trimmed.split_once(':').ok_or_else(|| Error::Parse {
        line: line_num,
        message: format!("expected 'key: value', got '{}'", trimmed),
    })?;
    let value = value.trim().parse::<f64>().map_err(|_| Error::Parse {
        line: line_num,
        message: format!("invalid number '{}'", value.trim()),
    })?;
    Ok(Some((key.trim(), value)))
}

/// Parse the contents of an instrument file.
pub fn parse(content: &str) -> Result<Envelope> {
    let mut envelope = Envelope::default();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let Some((key, value)) = parse_line(line, line_num)? else {
            continue;
        };
        match key {
            "attack" => envelope.attack = value.max(0.0),
            "decay" => envelope.decay = value.max(0.0),
            "sustain" => envelope.sustain = value.clamp(0.0, 1.0),
            "release" => envelope.release = value.max(0.0),
            _ => {
                return Err(Error::Parse {
                    line: line_num,
                    message: format!("unknown key '{}'", key),
                });
            }
        }
    }

    Ok(envelope)
}

/// Load an instrument from a `.instr` file.
pub fn load(path: &Path) -> Result<Envelope> {
    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    parse(&content)
}
