//! Configuration file support for the exporter.
//!
//! Loads optional `modernsite.toml` from the working directory (or the path
//! given with `--config`). Every field is optional; command-line flags win
//! over the file, the file wins over built-in defaults.

use modernsite::RenderOptions;
use modernsite::menu::MenuState;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "modernsite.toml";

/// Default output directory for `build`.
pub const DEFAULT_OUT_DIR: &str = "dist";

/// Default file name for `build`.
pub const DEFAULT_FILE_NAME: &str = "index.html";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title
    pub title: Option<String>,
    /// `lang` attribute on `<html>`
    pub lang: Option<String>,
    /// Output directory for `build`
    pub out_dir: Option<PathBuf>,
    /// Output file name for `build`
    pub file_name: Option<String>,
    /// Ship the inline menu script
    pub interactive: Option<bool>,
    /// Menu state baked into the exported page
    pub initial_menu: Option<MenuState>,
}

/// Render-related flags given on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOverrides {
    /// `--menu`
    pub menu: Option<MenuState>,
    /// `--static`
    pub static_only: bool,
}

impl SiteConfig {
    /// Load config from `modernsite.toml` in the given directory.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Merge file values and command-line overrides into render options.
    pub fn render_options(&self, overrides: RenderOverrides) -> RenderOptions {
        let defaults = RenderOptions::default();
        RenderOptions {
            title: self.title.clone().unwrap_or(defaults.title),
            lang: self.lang.clone().unwrap_or(defaults.lang),
            initial_menu: overrides
                .menu
                .or(self.initial_menu)
                .unwrap_or(defaults.initial_menu),
            interactive: if overrides.static_only {
                false
            } else {
                self.interactive.unwrap_or(defaults.interactive)
            },
        }
    }

    /// Output directory: flag, then file, then `dist`.
    pub fn out_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.out_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    /// Output file name: flag, then file, then `index.html`.
    pub fn file_name(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.file_name.clone())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        let options = config.render_options(RenderOverrides::default());
        assert_eq!(options, RenderOptions::default());
        assert_eq!(config.out_dir(None), PathBuf::from("dist"));
        assert_eq!(config.file_name(None), "index.html");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
title = "Acme"
lang = "de"
out_dir = "public"
file_name = "landing.html"
interactive = false
initial_menu = "open"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path());
        assert_eq!(config.title.as_deref(), Some("Acme"));
        assert_eq!(config.initial_menu, Some(MenuState::Open));

        let options = config.render_options(RenderOverrides::default());
        assert_eq!(options.title, "Acme");
        assert_eq!(options.lang, "de");
        assert!(!options.interactive);
        assert_eq!(options.initial_menu, MenuState::Open);
        assert_eq!(config.out_dir(None), PathBuf::from("public"));
        assert_eq!(config.file_name(None), "landing.html");
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "title = [unterminated").expect("write config");
        let config = SiteConfig::load(temp.path());
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_flags_win_over_file() {
        let config = SiteConfig {
            initial_menu: Some(MenuState::Open),
            interactive: Some(true),
            out_dir: Some(PathBuf::from("public")),
            ..Default::default()
        };
        let options = config.render_options(RenderOverrides {
            menu: Some(MenuState::Closed),
            static_only: true,
        });
        assert_eq!(options.initial_menu, MenuState::Closed);
        assert!(!options.interactive);
        assert_eq!(config.out_dir(Some(PathBuf::from("out"))), PathBuf::from("out"));
    }
}
