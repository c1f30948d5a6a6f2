//! # cmud-convert — Zone Document Projections
//!
//! Turns parsed [`cmud_core::ZoneRecord`]s into documents that modern tooling
//! can read:
//!
//! - **JSON** (`.json5`): legacy command letters, terminal `S` kept,
//!   four-space indentation.
//!
//! - **YAML** (`.yaml`): long command names (`spawn_mob`, `door_state`, ...),
//!   terminal `S` dropped, `script: null` placeholder.
//!
//! Positional command arguments are renamed per command kind and fields a
//! kind does not use are left out. Every written file is read back and
//! parsed before the conversion counts as done.
//!
//! ## Crate Policy
//!
//! - Depends only on `cmud-core` internally.
//! - Never re-parses or re-validates zone files; input is an already
//!   validated record.

pub mod document;
pub mod emit;
pub mod error;
pub mod kind;

pub use document::{CommandDocument, ProjectionStyle, ZoneDocument};
pub use emit::{output_path, render, render_document, verify, write_document, OutputFormat};
pub use error::{ConvertError, ConvertResult};
pub use kind::CommandKind;
