//! # Zone Table
//!
//! Holds parsed zones in load order and hands out their rank ([`ZoneRnum`]).
//! The parser itself is stateless; assigning ranks is the job of whoever
//! loads a batch of files, and this table is that bookkeeping.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::zone::ZoneRecord;

/// Rank of a zone in its table: 0 for the first zone loaded, 1 for the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ZoneRnum(usize);

impl ZoneRnum {
    /// The rank as a plain index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ZoneRnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Loaded zones, indexed by rank.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    zones: Vec<ZoneRecord>,
}

impl ZoneTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone and return its rank.
    ///
    /// # Errors
    ///
    /// [`TableError::DuplicateZone`] if a zone with the same number is
    /// already registered; the table is left unchanged.
    pub fn push(&mut self, zone: ZoneRecord) -> Result<ZoneRnum, TableError> {
        if let Some(existing) = self.find_by_number(zone.number) {
            return Err(TableError::DuplicateZone {
                number: zone.number,
                existing: existing.index(),
            });
        }
        let rnum = ZoneRnum(self.zones.len());
        tracing::debug!(zone = zone.number, %rnum, "zone registered");
        self.zones.push(zone);
        Ok(rnum)
    }

    /// The zone at `rnum`, if it is in this table.
    pub fn get(&self, rnum: ZoneRnum) -> Option<&ZoneRecord> {
        self.zones.get(rnum.0)
    }

    /// Number of zones loaded.
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Whether no zone has been loaded.
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Zones in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (ZoneRnum, &ZoneRecord)> {
        self.zones
            .iter()
            .enumerate()
            .map(|(i, zone)| (ZoneRnum(i), zone))
    }

    /// Rank of the zone with virtual number `number`.
    pub fn find_by_number(&self, number: i32) -> Option<ZoneRnum> {
        self.zones
            .iter()
            .position(|zone| zone.number == number)
            .map(ZoneRnum)
    }

    /// Rank of the first zone whose room bounds contain `room`.
    pub fn zone_for_room(&self, room: i32) -> Option<ZoneRnum> {
        self.zones
            .iter()
            .position(|zone| zone.contains_room(room))
            .map(ZoneRnum)
    }
}
