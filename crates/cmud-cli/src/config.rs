//! # CLI Configuration
//!
//! Optional YAML file passed with `--config`. Every field has a default, so
//! an empty file is a valid configuration.
//!
//! ```yaml
//! zone_dir: lib/world/zon
//! output_dir: build/zones
//! format: yaml
//! keep_going: true
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use cmud_convert::OutputFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Base directory relative zone paths are resolved against.
    pub zone_dir: Option<PathBuf>,
    /// Directory converted documents are written to. Defaults to beside
    /// the input file.
    pub output_dir: Option<PathBuf>,
    /// Default conversion format.
    pub format: OutputFormat,
    /// Keep validating after the first failing file.
    pub keep_going: bool,
}

impl CliConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        // An empty document deserializes as unit, not as an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `path` if given, else the defaults; then apply the
    /// `--output-dir` override.
    pub fn resolve(path: Option<&Path>, output_dir: Option<PathBuf>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if output_dir.is_some() {
            config.output_dir = output_dir;
        }
        Ok(config)
    }

    /// Resolve a zone path against `zone_dir`, if one is configured.
    pub fn zone_path(&self, path: &Path) -> PathBuf {
        match &self.zone_dir {
            Some(base) => crate::resolve_path(path, base),
            None => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(text: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmud.yaml");
        std::fs::write(&path, text).unwrap();
        (dir, path)
    }

    #[test]
    fn full_config_loads() {
        let (_dir, path) = write_config(
            "zone_dir: lib/world/zon\noutput_dir: out\nformat: yaml\nkeep_going: true\n",
        );
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.zone_dir, Some(PathBuf::from("lib/world/zon")));
        assert_eq!(config.output_dir, Some(PathBuf::from("out")));
        assert_eq!(config.format, OutputFormat::Yaml);
        assert!(config.keep_going);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let (_dir, path) = write_config("keep_going: true\n");
        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.zone_dir.is_none());
        assert!(config.keep_going);
    }

    #[test]
    fn empty_file_is_default() {
        let (_dir, path) = write_config("");
        assert_eq!(CliConfig::load(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let (_dir, path) = write_config("zone_directory: lib\n");
        let err = CliConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("zone_directory"), "{err:#}");
    }

    #[test]
    fn bad_format_is_rejected() {
        let (_dir, path) = write_config("format: toml\n");
        assert!(CliConfig::load(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn output_dir_flag_overrides_config() {
        let (_dir, path) = write_config("output_dir: from-config\n");
        let config = CliConfig::resolve(Some(&path), Some(PathBuf::from("from-flag"))).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("from-flag")));

        let config = CliConfig::resolve(Some(&path), None).unwrap();
        assert_eq!(config.output_dir, Some(PathBuf::from("from-config")));
    }

    #[test]
    fn zone_path_without_zone_dir_is_unchanged() {
        assert_eq!(
            CliConfig::default().zone_path(Path::new("30.zon")),
            PathBuf::from("30.zon")
        );
    }

    #[test]
    fn zone_path_prefers_existing_file_in_zone_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("30.zon"), "").unwrap();
        let config = CliConfig {
            zone_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        assert_eq!(config.zone_path(Path::new("30.zon")), dir.path().join("30.zon"));
        assert_eq!(config.zone_path(Path::new("31.zon")), PathBuf::from("31.zon"));
    }
}
