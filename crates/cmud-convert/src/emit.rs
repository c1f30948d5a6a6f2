//! # Rendering and Writing Documents
//!
//! Renders a [`ZoneDocument`] as JSON or YAML, writes it next to its source
//! (or into an output directory), and reads the written file back to make
//! sure it parses.

use std::path::{Path, PathBuf};

use cmud_core::ZoneRecord;
use serde::{Deserialize, Serialize};

use crate::document::{ProjectionStyle, ZoneDocument};
use crate::error::{ConvertError, ConvertResult};

/// Output document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty JSON (4-space indent), legacy command letters.
    #[default]
    Json,
    /// YAML, long command names.
    Yaml,
}

impl OutputFormat {
    /// Extension appended to the source file name.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json5",
            Self::Yaml => "yaml",
        }
    }

    pub fn style(self) -> ProjectionStyle {
        match self {
            Self::Json => ProjectionStyle::Legacy,
            Self::Yaml => ProjectionStyle::Named,
        }
    }
}

/// Project and render `zone` in `format`.
pub fn render(zone: &ZoneRecord, format: OutputFormat) -> ConvertResult<String> {
    render_document(&ZoneDocument::project(zone, format.style()), format)
}

/// Render an already projected document.
pub fn render_document(doc: &ZoneDocument, format: OutputFormat) -> ConvertResult<String> {
    match format {
        OutputFormat::Json => {
            let mut buf = Vec::new();
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            doc.serialize(&mut ser)?;
            Ok(String::from_utf8(buf)?)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(doc)?),
    }
}

/// Check that `text` parses as a `format` document.
pub fn verify(text: &str, format: OutputFormat) -> Result<(), String> {
    match format {
        OutputFormat::Json => serde_json::from_str::<serde_json::Value>(text)
            .map(drop)
            .map_err(|e| e.to_string()),
        OutputFormat::Yaml => serde_yaml::from_str::<serde_yaml::Value>(text)
            .map(drop)
            .map_err(|e| e.to_string()),
    }
}

/// Where the converted document for `input` goes: `<file name>.<ext>`,
/// inside `output_dir` if given, else beside the input.
pub fn output_path(input: &Path, output_dir: Option<&Path>, format: OutputFormat) -> PathBuf {
    let mut file_name = input
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "zone".into());
    file_name.push(".");
    file_name.push(format.extension());

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Render `zone`, write it to `path`, then read it back and verify it.
pub fn write_document(zone: &ZoneRecord, format: OutputFormat, path: &Path) -> ConvertResult<()> {
    let text = render(zone, format)?;
    std::fs::write(path, &text).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), ?format, "document written");

    let written = std::fs::read_to_string(path).map_err(|e| ConvertError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    verify(&written, format).map_err(|detail| ConvertError::Verification {
        path: path.to_path_buf(),
        detail,
    })?;
    tracing::debug!(path = %path.display(), "document verified");
    Ok(())
}
