use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::ConvertOptions;
use crate::source::Delimiter;

/// Global configuration loaded from `~/.config/credconv/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvConfig {
    /// Source delimiter: "auto" (detect) or a single character such as ";" or "tab".
    #[serde(with = "delimiter_str")]
    pub delimiter: Delimiter,
    /// Replace an existing output file without `--force`.
    pub overwrite: bool,
    /// Number of lines `credconv preview` shows by default.
    pub preview_rows: usize,
}

impl Default for ConvConfig {
    fn default() -> Self {
        Self {
            delimiter: Delimiter::Auto,
            overwrite: false,
            preview_rows: 20,
        }
    }
}

impl ConvConfig {
    /// Converter options, with `delimiter` overriding the configured one when given.
    pub fn convert_options(&self, delimiter: Option<Delimiter>) -> ConvertOptions {
        ConvertOptions {
            delimiter: delimiter.unwrap_or(self.delimiter),
        }
    }
}

mod delimiter_str {
    use crate::source::Delimiter;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Delimiter, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&d.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Delimiter, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("credconv")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ConvConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ConvConfig> {
    if !path.exists() {
        let default_cfg = ConvConfig::default();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, render(&default_cfg)?)
            .with_context(|| format!("write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: ConvConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Pretty TOML for `cfg`.
pub fn render(cfg: &ConvConfig) -> Result<String> {
    Ok(toml::to_string_pretty(cfg)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_values() {
        let cfg = ConvConfig::default();
        assert_eq!(cfg.delimiter, Delimiter::Auto);
        assert!(!cfg.overwrite);
        assert_eq!(cfg.preview_rows, 20);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ConvConfig {
            delimiter: Delimiter::Fixed(b'\t'),
            overwrite: true,
            preview_rows: 5,
        };
        let parsed: ConvConfig = toml::from_str(&render(&cfg).unwrap()).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_partial_uses_defaults() {
        let cfg: ConvConfig = toml::from_str(r#"delimiter = ";""#).unwrap();
        assert_eq!(cfg.delimiter, Delimiter::Fixed(b';'));
        assert!(!cfg.overwrite);
        assert_eq!(cfg.preview_rows, 20);
    }

    #[test]
    fn config_toml_rejects_bad_delimiter() {
        assert!(toml::from_str::<ConvConfig>(r#"delimiter = "ab""#).is_err());
    }

    #[test]
    fn cli_delimiter_overrides_config() {
        let cfg = ConvConfig {
            delimiter: Delimiter::Fixed(b';'),
            ..ConvConfig::default()
        };
        assert_eq!(cfg.convert_options(None).delimiter, Delimiter::Fixed(b';'));
        assert_eq!(
            cfg.convert_options(Some(Delimiter::Auto)).delimiter,
            Delimiter::Auto
        );
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(created, ConvConfig::default());

        fs::write(&path, "overwrite = true\npreview_rows = 3\n").unwrap();
        let loaded = load_or_init_at(&path).unwrap();
        assert!(loaded.overwrite);
        assert_eq!(loaded.preview_rows, 3);
    }
}
