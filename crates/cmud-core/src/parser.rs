//! # Zone File Parser
//!
//! Turns a `.zon` source into a [`ZoneRecord`] in two passes over the same
//! input:
//!
//! 1. **Pre-scan** ([`crate::prescan`]): count lines that look like reset
//!    commands. A zone with none is rejected as empty.
//! 2. **Structural parse**: rewind, skip three header lines, read the
//!    `#<number>` line, the `~`-terminated name, the numeric constants
//!    line, then reset commands up to `S` or `$`.
//!
//! The parse must account for every command the pre-scan counted
//! (`expected == parsed + 1`, the `+1` being the terminal `S`); any drift is
//! reported as [`ZoneParseError::CountMismatch`].
//!
//! ## Command grammar
//!
//! ```text
//! M|O|E|P|D  <if_flag> <arg1> <arg2> <arg3> [comment]
//! other      <if_flag> <arg1> <arg2> [comment]
//! *...       comment line, ignored
//! S | $      end of script
//! ```
//!
//! Unknown codes are accepted with the three-integer form. Whether a code
//! names a supported reset action is for consumers of the record to decide.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Seek, SeekFrom};
use std::path::Path;

use crate::error::{ZoneParseError, ZoneResult};
use crate::prescan;
use crate::source::LineSource;
use crate::zone::{ResetCommand, ZoneRecord};

/// Lines at the top of every zone file that carry no parsed data.
pub const HEADER_SKIP_LINES: usize = 3;

/// Parse a zone definition from a rewindable source.
///
/// `identifier` names the source in diagnostics (usually the file path).
/// The source is read from its start twice; it is dropped when parsing
/// finishes, on success or failure.
///
/// # Errors
///
/// Returns the first [`ZoneParseError`] encountered. No partial record is
/// ever produced.
pub fn parse_zone<R: BufRead + Seek>(mut source: R, identifier: &str) -> ZoneResult<ZoneRecord> {
    source
        .seek(SeekFrom::Start(0))
        .map_err(|e| io_error(identifier, e))?;
    let expected = prescan::count_commands(&mut source).map_err(|e| io_error(identifier, e))?;
    tracing::debug!(zone_file = identifier, expected, "pre-scan complete");

    if expected == 0 {
        return Err(ZoneParseError::EmptyZone {
            identifier: identifier.to_string(),
        });
    }

    source
        .seek(SeekFrom::Start(0))
        .map_err(|e| io_error(identifier, e))?;

    ZoneFileParser {
        identifier,
        lines: LineSource::new(source),
    }
    .parse(expected)
}

/// Parse a zone definition held in memory.
pub fn parse_zone_str(text: &str, identifier: &str) -> ZoneResult<ZoneRecord> {
    parse_zone(Cursor::new(text.as_bytes()), identifier)
}

/// Open and parse a zone file. The path's display form is the identifier.
pub fn parse_zone_file(path: &Path) -> ZoneResult<ZoneRecord> {
    let identifier = path.display().to_string();
    let file = File::open(path).map_err(|e| io_error(&identifier, e))?;
    parse_zone(BufReader::new(file), &identifier)
}

fn io_error(identifier: &str, source: io::Error) -> ZoneParseError {
    ZoneParseError::Io {
        identifier: identifier.to_string(),
        source,
    }
}

/// Structural pass over a rewound source.
struct ZoneFileParser<'a, R> {
    identifier: &'a str,
    lines: LineSource<R>,
}

impl<'a, R: BufRead> ZoneFileParser<'a, R> {
    fn parse(mut self, expected: usize) -> ZoneResult<ZoneRecord> {
        for _ in 0..HEADER_SKIP_LINES {
            let identifier = self.identifier;
            let skipped = self
                .lines
                .next_line()
                .map_err(|e| io_error(identifier, e))?;
            if skipped.is_none() {
                return Err(self.header_eof("zone file header"));
            }
        }

        let number = self.zone_number()?;
        let name = self.zone_name()?;
        let [bottom, top, lifespan, reset_mode] = self.numeric_constants(number)?;
        let commands = self.commands()?;

        if commands.len() != expected {
            return Err(ZoneParseError::CountMismatch {
                identifier: self.identifier.to_string(),
                expected,
                actual: commands.len(),
            });
        }

        tracing::debug!(
            zone_file = self.identifier,
            zone = number,
            commands = commands.len(),
            "zone parsed"
        );

        Ok(ZoneRecord {
            number,
            name,
            bottom,
            top,
            lifespan,
            reset_mode,
            commands,
        })
    }

    /// The next line, which must be valid UTF-8.
    fn next_text(&mut self) -> ZoneResult<Option<(usize, String)>> {
        let identifier = self.identifier;
        match self
            .lines
            .next_line()
            .map_err(|e| io_error(identifier, e))?
        {
            Some((line, bytes)) => Ok(Some((line, decode(identifier, line, bytes)?.to_string()))),
            None => Ok(None),
        }
    }

    fn header_eof(&self, expecting: &str) -> ZoneParseError {
        ZoneParseError::HeaderFormat {
            identifier: self.identifier.to_string(),
            line: self.lines.line() + 1,
            detail: format!("unexpected end of file reading {expecting}"),
        }
    }

    /// `#<number>`
    fn zone_number(&mut self) -> ZoneResult<i32> {
        let Some((line, text)) = self.next_text()? else {
            return Err(self.header_eof("zone number"));
        };
        text.strip_prefix('#')
            .and_then(|rest| rest.trim().parse::<i32>().ok())
            .ok_or_else(|| ZoneParseError::HeaderFormat {
                identifier: self.identifier.to_string(),
                line,
                detail: format!("expected '#<zone number>', found {text:?}"),
            })
    }

    /// Zone name, with `~` and everything after it discarded.
    fn zone_name(&mut self) -> ZoneResult<String> {
        let Some((_, mut text)) = self.next_text()? else {
            return Err(self.header_eof("zone name"));
        };
        if let Some(end) = text.find('~') {
            text.truncate(end);
        }
        Ok(text)
    }

    /// `<bottom> <top> <lifespan> <reset_mode>`; extra fields are ignored.
    fn numeric_constants(&mut self, zone: i32) -> ZoneResult<[i32; 4]> {
        let Some((line, text)) = self.next_text()? else {
            return Err(ZoneParseError::NumericFormat {
                identifier: self.identifier.to_string(),
                line: self.lines.line() + 1,
                detail: "unexpected end of file".to_string(),
            });
        };
        let numeric_error = |detail: String| ZoneParseError::NumericFormat {
            identifier: self.identifier.to_string(),
            line,
            detail,
        };

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(numeric_error(format!(
                "expected 4 integers, found {} field(s)",
                fields.len()
            )));
        }

        let mut values = [0i32; 4];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field
                .parse()
                .map_err(|_| numeric_error(format!("{field:?} is not an integer")))?;
        }

        let [bottom, top, ..] = values;
        if bottom > top {
            return Err(ZoneParseError::Range {
                identifier: self.identifier.to_string(),
                line,
                zone,
                bottom,
                top,
            });
        }
        Ok(values)
    }

    /// Reset commands up to and including the terminal `S`.
    fn commands(&mut self) -> ZoneResult<Vec<ResetCommand>> {
        let identifier = self.identifier;
        let mut commands = Vec::new();

        loop {
            let last_line = self.lines.line();
            let Some((line_no, raw)) = self
                .lines
                .next_line()
                .map_err(|e| io_error(identifier, e))?
            else {
                return Err(ZoneParseError::UnexpectedEof {
                    identifier: identifier.to_string(),
                    line: last_line,
                });
            };

            // Blank and `*` lines are skipped without decoding.
            match raw.iter().find(|b| !b.is_ascii_whitespace()) {
                None | Some(b'*') => continue,
                Some(_) => {}
            }

            let raw = decode(identifier, line_no, raw)?;
            let line = raw.trim_start();
            let Some(code) = line.chars().next() else {
                continue;
            };

            match code {
                'S' | '$' => {
                    commands.push(ResetCommand::stop(line_no));
                    return Ok(commands);
                }
                _ => {
                    let command = parse_command(code, &line[code.len_utf8()..], line_no)
                        .ok_or_else(|| ZoneParseError::CommandFormat {
                            identifier: identifier.to_string(),
                            line: line_no,
                            text: raw.to_string(),
                        })?;
                    commands.push(command);
                }
            }
        }
    }
}

fn decode<'b>(identifier: &str, line: usize, bytes: &'b [u8]) -> ZoneResult<&'b str> {
    std::str::from_utf8(bytes).map_err(|e| ZoneParseError::Encoding {
        identifier: identifier.to_string(),
        line,
        valid_up_to: e.valid_up_to(),
    })
}

/// Parse the part of a command line after its code letter.
fn parse_command(code: char, rest: &str, source_line: usize) -> Option<ResetCommand> {
    let args = rest.trim();
    let (if_flag, arg1, arg2, arg3, comment) = if ResetCommand::takes_arg3(code) {
        let ([if_flag, arg1, arg2, arg3], comment) = take_uints::<4>(args)?;
        (if_flag, arg1, arg2, Some(arg3), comment)
    } else {
        let ([if_flag, arg1, arg2], comment) = take_uints::<3>(args)?;
        (if_flag, arg1, arg2, None, comment)
    };

    Some(ResetCommand {
        code,
        if_flag,
        arg1,
        arg2,
        arg3,
        comment: comment.to_string(),
        source_line,
    })
}

/// Read `N` whitespace-separated runs of ASCII digits from the start of
/// `input`, returning them and the trimmed remainder.
///
/// Each run is maximal, and the remainder starts right after the last one,
/// so `"1 2 3abc"` yields `[1, 2, 3]` and `"abc"`.
fn take_uints<const N: usize>(input: &str) -> Option<([u32; N], &str)> {
    let mut rest = input;
    let mut values = [0u32; N];
    for (i, value) in values.iter_mut().enumerate() {
        if i > 0 {
            let trimmed = rest.trim_start();
            if trimmed.len() == rest.len() {
                return None;
            }
            rest = trimmed;
        }
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        *value = rest[..end].parse().ok()?;
        rest = &rest[end..];
    }
    Some((values, rest.trim()))
}
