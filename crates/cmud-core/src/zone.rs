//! # Zone Records
//!
//! The structured form of a parsed `.zon` file: a [`ZoneRecord`] holding the
//! zone header and its ordered reset script of [`ResetCommand`]s.
//!
//! ```text
//! ZoneRecord
//! ├── number / name
//! ├── bottom..=top (room bounds)
//! ├── lifespan / reset_mode
//! └── commands: [ResetCommand, ..., S]
//! ```
//!
//! Field names are stable; downstream projections are written against them.

use serde::{Deserialize, Serialize};

/// Code of the synthetic terminal command appended at the end of every script.
pub const STOP_CODE: char = 'S';

/// Codes whose command lines carry four integers (`if_flag arg1 arg2 arg3`).
///
/// Every other non-terminal code carries three.
pub const FOUR_ARG_CODES: &str = "MOEPD";

/// A parsed zone definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Virtual zone number from the `#<n>` header.
    pub number: i32,
    /// Display name, cut at the first `~`.
    pub name: String,
    /// Lowest room number in the zone (inclusive).
    pub bottom: i32,
    /// Highest room number in the zone (inclusive).
    pub top: i32,
    /// Minutes between automatic resets.
    pub lifespan: i32,
    /// Reset policy code.
    pub reset_mode: i32,
    /// Reset script in execution order, always ending with one `S` command.
    pub commands: Vec<ResetCommand>,
}

impl ZoneRecord {
    /// Whether `room` lies within `bottom..=top`.
    pub fn contains_room(&self, room: i32) -> bool {
        (self.bottom..=self.top).contains(&room)
    }

    /// The reset script without its terminal `S` marker.
    pub fn script(&self) -> &[ResetCommand] {
        match self.commands.split_last() {
            Some((last, rest)) if last.is_stop() => rest,
            _ => &self.commands,
        }
    }
}

/// One scripted reset action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetCommand {
    /// Operation kind as written in the source; not validated here.
    pub code: char,
    /// Non-zero when the command only runs if the previous one succeeded.
    pub if_flag: u32,
    /// First argument: the mob, object or room number, by code.
    pub arg1: u32,
    /// Second argument: a max-existing limit, exit or object, by code.
    pub arg2: u32,
    /// Present only for [`FOUR_ARG_CODES`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arg3: Option<u32>,
    /// Trailing annotation from the source line.
    #[serde(default)]
    pub comment: String,
    /// 1-based line in the source file.
    pub source_line: usize,
}

impl ResetCommand {
    /// The synthetic terminal command, recorded at the line that ended the script.
    pub fn stop(source_line: usize) -> Self {
        Self {
            code: STOP_CODE,
            if_flag: 0,
            arg1: 0,
            arg2: 0,
            arg3: None,
            comment: String::new(),
            source_line,
        }
    }

    /// Whether this is the terminal `S` command.
    pub fn is_stop(&self) -> bool {
        self.code == STOP_CODE
    }

    /// Whether `code` takes a fourth integer argument.
    pub fn takes_arg3(code: char) -> bool {
        FOUR_ARG_CODES.contains(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ZoneRecord {
        ZoneRecord {
            number: 30,
            name: "Northern Midgaard".to_string(),
            bottom: 3000,
            top: 3099,
            lifespan: 15,
            reset_mode: 2,
            commands: vec![
                ResetCommand {
                    code: 'M',
                    if_flag: 0,
                    arg1: 3010,
                    arg2: 1,
                    arg3: Some(3005),
                    comment: "the baker".to_string(),
                    source_line: 8,
                },
                ResetCommand::stop(9),
            ],
        }
    }

    #[test]
    fn four_arg_set_includes_equip() {
        for code in ['M', 'O', 'E', 'P', 'D'] {
            assert!(ResetCommand::takes_arg3(code), "{code}");
        }
        for code in ['G', 'R', 'S', 'X'] {
            assert!(!ResetCommand::takes_arg3(code), "{code}");
        }
    }

    #[test]
    fn stop_command_shape() {
        let stop = ResetCommand::stop(42);
        assert!(stop.is_stop());
        assert_eq!(stop.arg3, None);
        assert!(stop.comment.is_empty());
        assert_eq!(stop.source_line, 42);
    }

    #[test]
    fn contains_room_is_inclusive() {
        let zone = sample();
        assert!(zone.contains_room(3000));
        assert!(zone.contains_room(3099));
        assert!(!zone.contains_room(2999));
        assert!(!zone.contains_room(3100));
    }

    #[test]
    fn script_excludes_terminal() {
        let zone = sample();
        assert_eq!(zone.script().len(), 1);
        assert_eq!(zone.script()[0].code, 'M');
    }

    #[test]
    fn serializes_without_absent_arg3() {
        let give = ResetCommand {
            code: 'G',
            if_flag: 1,
            arg1: 200,
            arg2: 0,
            arg3: None,
            comment: "sword".to_string(),
            source_line: 10,
        };
        let value = serde_json::to_value(&give).unwrap();
        assert!(value.get("arg3").is_none());
        assert_eq!(value["code"], "G");
        assert_eq!(value["comment"], "sword");

        let back: ResetCommand = serde_json::from_value(value).unwrap();
        assert_eq!(back, give);
    }
}
