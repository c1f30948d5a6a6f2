#![deny(missing_docs)]

//! # cmud-core — Zone Definition Parser
//!
//! Reads legacy CircleMUD zone files (`.zon`) into validated, structured
//! [`ZoneRecord`]s. A zone file names a range of rooms and carries the reset
//! script that repopulates them:
//!
//! ```text
//! <three header lines, ignored>
//! #30
//! Northern Midgaard~
//! 3000 3099 15 2
//! M 0 3010 1 3005     the baker
//! G 1 3011 100        bread
//! S
//! ```
//!
//! ## Modules
//!
//! - [`zone`] — `ZoneRecord` and `ResetCommand`.
//! - [`prescan`] — the counting pass over command-like lines.
//! - [`parser`] — the structural pass and the public entry points.
//! - [`table`] — rank assignment for batches of loaded zones.
//! - [`error`] — the parse error taxonomy.
//!
//! ## Crate Policy
//!
//! - No global state: every parse is independent and reentrant.
//! - Errors are returned, never turned into process exits.
//! - No `unsafe`, no `.unwrap()` outside tests.

pub mod error;
pub mod parser;
pub mod prescan;
mod source;
pub mod table;
pub mod zone;

// Re-export primary types for ergonomic imports.
pub use error::{TableError, ZoneErrorKind, ZoneParseError, ZoneResult};
pub use parser::{parse_zone, parse_zone_file, parse_zone_str};
pub use table::{ZoneRnum, ZoneTable};
pub use zone::{ResetCommand, ZoneRecord};
