//! # Command Pre-scan
//!
//! The counting pass. It reads the whole source once and counts lines that
//! look like reset commands, without interpreting them. The structural parse
//! later reconciles its own command count against this number, which catches
//! silent drift between the file format and the parser.
//!
//! A line qualifies when it starts with one of `MOPGERD` followed by a space,
//! or when it is exactly `S`. The `S` rule has no trailing-space check and `$`
//! never qualifies; the reconciliation in the parser depends on both.

use std::io::{self, BufRead};

use crate::source::LineSource;

/// Codes counted by the pre-scan when followed by a space.
pub const COUNTED_CODES: &str = "MOPGERD";

/// Whether `line` (terminator already stripped) counts as a command line.
pub fn is_command_line(line: &str) -> bool {
    let mut chars = line.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(' ')) => COUNTED_CODES.contains(first),
        (Some('S'), None) => true,
        _ => false,
    }
}

/// Count qualifying command lines from the current position to end of input.
///
/// Lines that are not valid UTF-8 are decoded lossily; a replacement
/// character never qualifies.
pub fn count_commands<R: BufRead>(reader: R) -> io::Result<usize> {
    let mut lines = LineSource::new(reader);
    let mut count = 0;
    while let Some((_, line)) = lines.next_line()? {
        if is_command_line(&String::from_utf8_lossy(line)) {
            count += 1;
        }
    }
    Ok(count)
}
