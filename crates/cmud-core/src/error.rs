//! # Error Types — Zone Parse Failures
//!
//! Every failure the zone parser can report. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations, and every variant
//! carries the identifier of the source being parsed so a single `Display`
//! line is an actionable diagnostic.
//!
//! ## Design
//!
//! - The first error encountered ends the parse; nothing is retried.
//! - Errors carry a 1-based line number wherever one exists.
//! - The parser never terminates the process; callers decide whether to
//!   skip a file, abort a batch, or exit.

use thiserror::Error;

/// Errors that can occur while parsing a zone definition.
#[derive(Debug, Error)]
pub enum ZoneParseError {
    /// No line in the source qualifies as a reset command, not even `S`.
    #[error("{identifier} is empty: no reset commands found")]
    EmptyZone {
        /// Source name, usually the file path.
        identifier: String,
    },

    /// The `#<number>` header, or one of the lines before it, is missing or malformed.
    #[error("format error in {identifier}, line {line}: {detail}")]
    HeaderFormat {
        /// Source name, usually the file path.
        identifier: String,
        /// Line that was expected to hold the header field.
        line: usize,
        /// What was expected and what was found.
        detail: String,
    },

    /// The `bottom top lifespan reset_mode` line is missing or malformed.
    #[error("format error in numeric constant line of {identifier}, line {line}: {detail}")]
    NumericFormat {
        /// Source name, usually the file path.
        identifier: String,
        /// Line of the numeric constants.
        line: usize,
        /// Which field failed and why.
        detail: String,
    },

    /// The zone's room bounds are inverted.
    #[error("{identifier}, line {line}: zone {zone} bottom ({bottom}) > top ({top})")]
    Range {
        /// Source name, usually the file path.
        identifier: String,
        /// Line of the numeric constants.
        line: usize,
        /// Zone number from the `#` header.
        zone: i32,
        /// Lowest room number.
        bottom: i32,
        /// Highest room number.
        top: i32,
    },

    /// A reset command line does not carry the integers its code requires.
    #[error("format error in {identifier}, line {line}: {text:?}")]
    CommandFormat {
        /// Source name, usually the file path.
        identifier: String,
        /// Line of the offending command.
        line: usize,
        /// The command line as read.
        text: String,
    },

    /// The counting pre-scan and the structural parse disagree.
    #[error("zone command count mismatch for {identifier}: estimated {expected}, actual {actual}")]
    CountMismatch {
        /// Source name, usually the file path.
        identifier: String,
        /// Commands counted by the pre-scan.
        expected: usize,
        /// Commands produced by the parse, terminal `S` included.
        actual: usize,
    },

    /// The source ended inside the command list, before `S` or `$`.
    #[error("format error in {identifier}: premature end of file after line {line}")]
    UnexpectedEof {
        /// Source name, usually the file path.
        identifier: String,
        /// Last line read.
        line: usize,
    },

    /// An interpreted line is not valid UTF-8. Skipped header lines and `*`
    /// comment lines are never decoded strictly.
    #[error("encoding error in {identifier}, line {line}: invalid UTF-8 after byte {valid_up_to}")]
    Encoding {
        /// Source name, usually the file path.
        identifier: String,
        /// Line holding the invalid bytes.
        line: usize,
        /// Length of the valid prefix of the line.
        valid_up_to: usize,
    },

    /// Reading or rewinding the source failed.
    #[error("I/O error reading {identifier}: {source}")]
    Io {
        /// Source name, usually the file path.
        identifier: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Discriminant of a [`ZoneParseError`], for callers that branch on the kind
/// without caring about the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneErrorKind {
    /// [`ZoneParseError::EmptyZone`]
    EmptyZone,
    /// [`ZoneParseError::HeaderFormat`]
    HeaderFormat,
    /// [`ZoneParseError::NumericFormat`]
    NumericFormat,
    /// [`ZoneParseError::Range`]
    Range,
    /// [`ZoneParseError::CommandFormat`]
    CommandFormat,
    /// [`ZoneParseError::CountMismatch`]
    CountMismatch,
    /// [`ZoneParseError::UnexpectedEof`]
    UnexpectedEof,
    /// [`ZoneParseError::Encoding`]
    Encoding,
    /// [`ZoneParseError::Io`]
    Io,
}

impl ZoneParseError {
    /// The kind of failure.
    pub fn kind(&self) -> ZoneErrorKind {
        match self {
            Self::EmptyZone { .. } => ZoneErrorKind::EmptyZone,
            Self::HeaderFormat { .. } => ZoneErrorKind::HeaderFormat,
            Self::NumericFormat { .. } => ZoneErrorKind::NumericFormat,
            Self::Range { .. } => ZoneErrorKind::Range,
            Self::CommandFormat { .. } => ZoneErrorKind::CommandFormat,
            Self::CountMismatch { .. } => ZoneErrorKind::CountMismatch,
            Self::UnexpectedEof { .. } => ZoneErrorKind::UnexpectedEof,
            Self::Encoding { .. } => ZoneErrorKind::Encoding,
            Self::Io { .. } => ZoneErrorKind::Io,
        }
    }

    /// Identifier of the source that failed to parse.
    pub fn identifier(&self) -> &str {
        match self {
            Self::EmptyZone { identifier }
            | Self::HeaderFormat { identifier, .. }
            | Self::NumericFormat { identifier, .. }
            | Self::Range { identifier, .. }
            | Self::CommandFormat { identifier, .. }
            | Self::CountMismatch { identifier, .. }
            | Self::UnexpectedEof { identifier, .. }
            | Self::Encoding { identifier, .. }
            | Self::Io { identifier, .. } => identifier,
        }
    }

    /// 1-based line number the error refers to, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::HeaderFormat { line, .. }
            | Self::NumericFormat { line, .. }
            | Self::Range { line, .. }
            | Self::CommandFormat { line, .. }
            | Self::UnexpectedEof { line, .. }
            | Self::Encoding { line, .. } => Some(*line),
            Self::EmptyZone { .. } | Self::CountMismatch { .. } | Self::Io { .. } => None,
        }
    }
}

/// Result type alias for zone parsing.
pub type ZoneResult<T> = Result<T, ZoneParseError>;

/// Errors raised by [`ZoneTable`](crate::table::ZoneTable) when registering zones.
#[derive(Debug, Error)]
pub enum TableError {
    /// A zone with the same virtual number is already registered.
    #[error("duplicate zone #{number}: already loaded as rnum {existing}")]
    DuplicateZone {
        /// Zone number of the rejected record.
        number: i32,
        /// Rank of the zone already holding that number.
        existing: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_zone_display() {
        let err = ZoneParseError::EmptyZone {
            identifier: "30.zon".to_string(),
        };
        assert_eq!(format!("{err}"), "30.zon is empty: no reset commands found");
    }

    #[test]
    fn command_format_display_carries_line_and_text() {
        let err = ZoneParseError::CommandFormat {
            identifier: "30.zon".to_string(),
            line: 12,
            text: "M 0 3000".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("30.zon"));
        assert!(msg.contains("line 12"));
        assert!(msg.contains("M 0 3000"));
    }

    #[test]
    fn count_mismatch_display_carries_both_counts() {
        let err = ZoneParseError::CountMismatch {
            identifier: "30.zon".to_string(),
            expected: 7,
            actual: 6,
        };
        let msg = format!("{err}");
        assert!(msg.contains("estimated 7"));
        assert!(msg.contains("actual 6"));
    }

    #[test]
    fn range_display() {
        let err = ZoneParseError::Range {
            identifier: "30.zon".to_string(),
            line: 6,
            zone: 30,
            bottom: 3099,
            top: 3000,
        };
        assert!(format!("{err}").contains("zone 30 bottom (3099) > top (3000)"));
    }

    #[test]
    fn kind_and_line_accessors() {
        let err = ZoneParseError::HeaderFormat {
            identifier: "x".to_string(),
            line: 4,
            detail: "expected '#'".to_string(),
        };
        assert_eq!(err.kind(), ZoneErrorKind::HeaderFormat);
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.identifier(), "x");

        let err = ZoneParseError::CountMismatch {
            identifier: "x".to_string(),
            expected: 1,
            actual: 2,
        };
        assert_eq!(err.kind(), ZoneErrorKind::CountMismatch);
        assert_eq!(err.line(), None);
    }

    #[test]
    fn io_error_display() {
        let err = ZoneParseError::Io {
            identifier: "30.zon".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert!(format!("{err}").contains("access denied"));
        assert_eq!(err.kind(), ZoneErrorKind::Io);
    }

    #[test]
    fn encoding_error_is_located() {
        let err = ZoneParseError::Encoding {
            identifier: "30.zon".to_string(),
            line: 5,
            valid_up_to: 3,
        };
        assert_eq!(err.kind(), ZoneErrorKind::Encoding);
        assert_eq!(err.line(), Some(5));
        let msg = format!("{err}");
        assert!(msg.contains("line 5"), "{msg}");
        assert!(msg.contains("byte 3"), "{msg}");
    }

    #[test]
    fn duplicate_zone_display() {
        let err = TableError::DuplicateZone {
            number: 30,
            existing: 2,
        };
        assert!(format!("{err}").contains("#30"));
        assert!(format!("{err}").contains("rnum 2"));
    }
}
