//! Line scanner producing heading records in document order

use super::error::ScanError;
use super::heading::Heading;

/// Literal substring opening a heading tag
const HEADING_TAG: &str = "<h";

/// Lazy iterator over the heading occurrences of a line sequence
///
/// Finite and consumed once; re-derive by scanning the same lines again.
/// Only the first `<h` occurrence per line is considered, so a line is
/// assumed to hold at most one heading; closing tags and nested markup on
/// the same line are ignored for detection.
pub struct HeadingScanner<'a> {
    lines: &'a [String],
    line_index: usize,
    sequence_index: usize,
}

impl<'a> HeadingScanner<'a> {
    /// Create a scanner over the document's lines
    pub fn new(lines: &'a [String]) -> Self {
        Self {
            lines,
            line_index: 0,
            sequence_index: 0,
        }
    }
}

impl Iterator for HeadingScanner<'_> {
    type Item = Result<Heading, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.line_index < self.lines.len() {
            let line_index = self.line_index;
            let line = &self.lines[line_index];
            self.line_index += 1;

            let Some(found) = line.find(HEADING_TAG) else {
                continue;
            };

            let level = match parse_level(line, found, line_index) {
                Ok(level) => level,
                Err(e) => return Some(Err(e)),
            };

            let heading = Heading {
                level,
                sequence_index: self.sequence_index,
                source_line_index: line_index,
                raw_line: line.clone(),
            };
            self.sequence_index += 1;
            return Some(Ok(heading));
        }

        None
    }
}

/// Scan all lines and collect the heading records in document order
pub fn scan_headings(lines: &[String]) -> Result<Vec<Heading>, ScanError> {
    HeadingScanner::new(lines).collect()
}

/// Interpret the character directly after the `<h` marker as the level
///
/// No tolerance for malformed tags: anything other than a digit in 1..=6
/// at that offset is a scan error, so lines carrying `<hr>`, `<header>` or
/// `<html>` abort the scan rather than being skipped.
fn parse_level(line: &str, found: usize, line_index: usize) -> Result<usize, ScanError> {
    // `<` and `h` are single-byte, so found + 2 is a char boundary
    let level_char = line[found + HEADING_TAG.len()..].chars().next();

    let digit = match level_char {
        Some(c) if c.is_ascii_digit() => c as usize - '0' as usize,
        other => {
            return Err(ScanError::InvalidLevel {
                line: line_index + 1,
                found: other,
            })
        }
    };

    if !(1..=6).contains(&digit) {
        return Err(ScanError::LevelOutOfRange {
            line: line_index + 1,
            level: digit,
        });
    }

    Ok(digit)
}
