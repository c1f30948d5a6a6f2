//! # Zone Documents
//!
//! Projects a [`ZoneRecord`] into the document shape written to disk. The
//! positional `arg1..arg3` of each command are renamed after what they mean
//! for that command's kind:
//!
//! | code | `arg1` | `arg2`         | `arg3`      |
//! |------|--------|----------------|-------------|
//! | `M`  | `mob`  | `max_existing` | `room`      |
//! | `O`  | `obj`  | `max_existing` | `room`      |
//! | `G`  | `obj`  | `max_existing` |             |
//! | `E`  | `obj`  | `max_existing` | `eq_pos`    |
//! | `P`  | `obj`  | `max_existing` | `container` |
//! | `D`  | `room` | `exit`         | `state`     |
//! | `R`  | `room` | `obj`          |             |
//!
//! Fields a kind does not use are absent from the output, never `null`.
//! Keys follow the table column order, except that legacy `R` commands
//! write `room` before `obj`.

use cmud_core::{ResetCommand, ZoneRecord};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::kind::CommandKind;

/// How commands are named in the projected document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionStyle {
    /// `command` is the code letter; the terminal `S` is kept.
    Legacy,
    /// `command` is the long kind name; the zone carries `script: null`
    /// and the terminal `S` is dropped.
    Named,
}

/// A projected zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneDocument {
    pub number: i32,
    pub name: String,
    pub bot: i32,
    pub top: i32,
    pub lifespan: i32,
    pub reset_mode: i32,
    /// Outer `None` omits the key; `Some(None)` writes an explicit null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<Option<String>>,
    pub cmd: Vec<CommandDocument>,
}

/// A projected reset command. `None` fields are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandDocument {
    pub command: String,
    pub if_flag: u32,
    pub max_existing: Option<u32>,
    pub mob: Option<u32>,
    pub obj: Option<u32>,
    pub room: Option<u32>,
    pub eq_pos: Option<u32>,
    pub container: Option<u32>,
    pub exit: Option<u32>,
    pub state: Option<u32>,
    room_first: bool,
}

impl Serialize for CommandDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (first, second) = if self.room_first {
            (("room", self.room), ("obj", self.obj))
        } else {
            (("obj", self.obj), ("room", self.room))
        };
        let optional = [
            ("max_existing", self.max_existing),
            ("mob", self.mob),
            first,
            second,
            ("eq_pos", self.eq_pos),
            ("container", self.container),
            ("exit", self.exit),
            ("state", self.state),
        ];

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("command", &self.command)?;
        map.serialize_entry("if_flag", &self.if_flag)?;
        for (key, value) in optional {
            if let Some(value) = value {
                map.serialize_entry(key, &value)?;
            }
        }
        map.end()
    }
}

impl ZoneDocument {
    pub fn project(zone: &ZoneRecord, style: ProjectionStyle) -> Self {
        let commands = zone.commands.iter();
        let cmd = match style {
            ProjectionStyle::Legacy => commands
                .map(|command| CommandDocument::project(command, style))
                .collect(),
            ProjectionStyle::Named => commands
                .take_while(|command| !command.is_stop())
                .map(|command| CommandDocument::project(command, style))
                .collect(),
        };

        Self {
            number: zone.number,
            name: zone.name.clone(),
            bot: zone.bottom,
            top: zone.top,
            lifespan: zone.lifespan,
            reset_mode: zone.reset_mode,
            script: match style {
                ProjectionStyle::Legacy => None,
                ProjectionStyle::Named => Some(None),
            },
            cmd,
        }
    }
}

impl CommandDocument {
    /// Project one command. Unknown codes keep their letter and only the
    /// common fields, and are reported with a warning.
    pub fn project(command: &ResetCommand, style: ProjectionStyle) -> Self {
        let kind = CommandKind::from_code(command.code);

        let mut doc = CommandDocument {
            command: match (kind, style) {
                (Some(kind), ProjectionStyle::Named) => kind.name().to_string(),
                _ => command.code.to_string(),
            },
            if_flag: command.if_flag,
            max_existing: Some(command.arg2),
            ..Default::default()
        };

        let Some(kind) = kind else {
            tracing::warn!(
                code = %command.code,
                line = command.source_line,
                "unknown reset command"
            );
            return doc;
        };

        if !kind.has_max_existing() {
            doc.max_existing = None;
        }

        match kind {
            CommandKind::SpawnMob => {
                doc.mob = Some(command.arg1);
                doc.room = command.arg3;
            }
            CommandKind::SpawnObject => {
                doc.obj = Some(command.arg1);
                doc.room = command.arg3;
            }
            CommandKind::GiveObject => {
                doc.obj = Some(command.arg1);
            }
            CommandKind::EquipMob => {
                doc.obj = Some(command.arg1);
                doc.eq_pos = command.arg3;
            }
            CommandKind::PutObject => {
                doc.obj = Some(command.arg1);
                doc.container = command.arg3;
            }
            CommandKind::DoorState => {
                doc.room = Some(command.arg1);
                doc.exit = Some(command.arg2);
                doc.state = command.arg3;
            }
            CommandKind::RemoveObject => {
                doc.room = Some(command.arg1);
                doc.obj = Some(command.arg2);
                doc.room_first = style == ProjectionStyle::Legacy;
            }
            CommandKind::Stop => {}
        }
        doc
    }
}
