use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// The two calibration positions read from a race log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Samples {
    pub x1: f64, // position after the first tick
    pub x2: f64, // position after the second tick
}

/// Parse the calibration samples from the text of a race log.
///
/// Line 1 is a header. Lines 2 and 3 hold whitespace separated fields, the
/// second of which is the total distance travelled at that tick.
pub fn parse_samples(text: &str) -> Result<Samples> {
    let mut lines = text.lines().skip(1);
    let x1 = parse_position(lines.next(), 2)?;
    let x2 = parse_position(lines.next(), 3)?;
    Ok(Samples { x1, x2 })
}

fn parse_position(line: Option<&str>, number: usize) -> Result<f64> {
    let line = line.ok_or(Error::MissingLine(number))?;
    let field = line
        .split_whitespace()
        .nth(1)
        .ok_or(Error::MissingField(number))?;
    field.parse().map_err(|source| Error::InvalidNumber {
        line: number,
        text: field.to_string(),
        source,
    })
}

/// Read a race log fully and parse its calibration samples.
pub fn read_samples(path: &Path) -> Result<Samples> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(&text)?;
    debug!(path = %path.display(), x1 = samples.x1, x2 = samples.x2, "Read log samples");
    Ok(samples)
}
