use std::env;
use std::path::{Path, PathBuf};

use super::schema::Settings;

/// Env var naming a config file that replaces the user and project files.
pub const CONFIG_PATH_VAR: &str = "LIRIK_INDEX_CONFIG_PATH";
/// Config file looked up at the top of the project tree.
pub const PROJECT_CONFIG_FILE: &str = "lirik-index.toml";

impl Settings {
    /// Load settings for a build of `project_root` (the current directory when `None`).
    ///
    /// Layers, lowest first: struct defaults, user config, `lirik-index.toml`
    /// in the project root, `LIRIK_INDEX__*` environment variables. An explicit
    /// `project_root` always ends up in `catalog.project_root`.
    pub fn load(project_root: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        for path in config_files(project_root) {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix("LIRIK_INDEX")
                .separator("__")
                .try_parsing(true),
        );

        let mut settings: Settings = builder.build()?.try_deserialize()?;
        if let Some(root) = project_root {
            settings.catalog.project_root = root.to_path_buf();
        }
        Ok(settings)
    }

    /// Check the loaded settings, reporting every problem at once.
    pub fn validate(&self) -> Result<(), String> {
        let catalog = &self.catalog;
        let mut problems = Vec::new();

        let base = catalog.base_url.trim();
        if base.is_empty() {
            problems.push("catalog.base_url must not be empty".to_string());
        } else if !(base.starts_with("http://") || base.starts_with("https://")) {
            problems.push(format!("catalog.base_url must be an http(s) URL, got {base:?}"));
        }
        if catalog.audio_dir.as_os_str().is_empty() {
            problems.push("catalog.audio_dir must not be empty".to_string());
        }
        if catalog.output.as_os_str().is_empty() {
            problems.push("catalog.output must not be empty".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems.join("; "))
        }
    }
}

/// Config files to layer, lowest precedence first.
pub fn config_files(project_root: Option<&Path>) -> Vec<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_PATH_VAR) {
        return vec![PathBuf::from(p)];
    }

    let project = project_root
        .unwrap_or_else(|| Path::new("."))
        .join(PROJECT_CONFIG_FILE);
    user_config_path().into_iter().chain([project]).collect()
}

/// `$XDG_CONFIG_HOME/lirik-index/config.toml`, else `~/.config/lirik-index/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join("lirik-index").join("config.toml"))
}
