use std::path::PathBuf;

use serde::Deserialize;

/// Raw-content host the catalog links point at when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/Ramadani1t/DB-TTML-ID/main/";

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/lirik-index/config.toml` or `~/.config/lirik-index/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `LIRIK_INDEX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub scan: ScanSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Directory that relative paths and links are computed against.
    pub project_root: PathBuf,
    /// Directory holding the audio files, relative to `project_root`.
    pub audio_dir: PathBuf,
    /// Catalog file to write, relative to `project_root`.
    pub output: PathBuf,
    /// Prefix for `audio_link` / `lirik_link`.
    pub base_url: String,
    /// Spaces per indentation level in the written JSON.
    pub indent: usize,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            audio_dir: PathBuf::from("TTML"),
            output: PathBuf::from("json").join("metadata.json"),
            base_url: DEFAULT_BASE_URL.to_string(),
            indent: 4,
        }
    }
}

impl CatalogSettings {
    /// Directory the walk starts from.
    pub fn audio_root(&self) -> PathBuf {
        self.project_root.join(&self.audio_dir)
    }

    /// Where the catalog document ends up.
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanSettings {
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            follow_links: false,
            include_hidden: true,
            max_depth: None,
        }
    }
}
