//! # Reset Command Kinds
//!
//! The parser records whatever code letter a command line starts with. This
//! module is where a code is classified as a supported reset action, or
//! reported as unknown.

use std::fmt;

/// A supported reset action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `M`: load a mobile into a room.
    SpawnMob,
    /// `O`: load an object into a room.
    SpawnObject,
    /// `G`: give an object to the last loaded mobile.
    GiveObject,
    /// `E`: equip the last loaded mobile with an object.
    EquipMob,
    /// `P`: put an object into a container.
    PutObject,
    /// `D`: set the state of a door.
    DoorState,
    /// `R`: remove an object from a room.
    RemoveObject,
    /// `S`: end of the reset script.
    Stop,
}

impl CommandKind {
    /// All kinds, in code order `M O G E P D R S`.
    pub const ALL: [CommandKind; 8] = [
        Self::SpawnMob,
        Self::SpawnObject,
        Self::GiveObject,
        Self::EquipMob,
        Self::PutObject,
        Self::DoorState,
        Self::RemoveObject,
        Self::Stop,
    ];

    /// Classify a code letter. `None` for codes with no known action.
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    pub fn code(self) -> char {
        match self {
            Self::SpawnMob => 'M',
            Self::SpawnObject => 'O',
            Self::GiveObject => 'G',
            Self::EquipMob => 'E',
            Self::PutObject => 'P',
            Self::DoorState => 'D',
            Self::RemoveObject => 'R',
            Self::Stop => 'S',
        }
    }

    /// Long name used by the YAML projection.
    pub fn name(self) -> &'static str {
        match self {
            Self::SpawnMob => "spawn_mob",
            Self::SpawnObject => "spawn_object",
            Self::GiveObject => "give_object",
            Self::EquipMob => "equip_mob",
            Self::PutObject => "put_object",
            Self::DoorState => "door_state",
            Self::RemoveObject => "remove_object",
            Self::Stop => "stop",
        }
    }

    /// Whether `arg2` is a "max existing" limit for this kind.
    ///
    /// Doors use `arg2` as the exit direction and removals as the object.
    pub fn has_max_existing(self) -> bool {
        !matches!(self, Self::DoorState | Self::RemoveObject)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
