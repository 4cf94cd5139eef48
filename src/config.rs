//! Generation settings, loaded from an optional TOML file and overridden by
//! command-line flags.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Args;
use crate::tokens::TokenMode;

/// Default values as constants
pub mod defaults {
    pub const THEMES_DIR: &str = "./themes";
    pub const OUTPUT_FILE: &str = "./src/styles/theme.css";
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory scanned for theme files.
    pub themes_dir: PathBuf,
    /// Destination of the rendered tokens.
    pub output_file: PathBuf,
    /// Theme used when the requested one is missing.
    pub default_theme: Option<String>,
    /// Emit role-based tokens instead of raw ANSI slot tokens.
    pub semantic_mapping: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from(defaults::THEMES_DIR),
            output_file: PathBuf::from(defaults::OUTPUT_FILE),
            default_theme: None,
            semantic_mapping: false,
        }
    }
}

impl Config {
    /// Load from a TOML file. Relative paths inside it are resolved against
    /// the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml(&content)
            .with_context(|| format!("invalid config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.themes_dir = base.join(&config.themes_dir);
            config.output_file = base.join(&config.output_file);
        }
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Build the effective configuration for a command line.
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        Ok(config.merge_args(args))
    }

    /// Apply command-line overrides field by field.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(dir) = &args.themes_dir {
            self.themes_dir = dir.clone();
        }
        if let Some(output) = &args.output {
            self.output_file = output.clone();
        }
        if let Some(name) = &args.default_theme {
            self.default_theme = Some(name.clone());
        }
        if args.semantic {
            self.semantic_mapping = true;
        }
        self
    }

    pub fn token_mode(&self) -> TokenMode {
        TokenMode::from_semantic_flag(self.semantic_mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.themes_dir, PathBuf::from("./themes"));
        assert_eq!(config.output_file, PathBuf::from("./src/styles/theme.css"));
        assert_eq!(config.default_theme, None);
        assert_eq!(config.token_mode(), TokenMode::Direct);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = Config::from_toml("default_theme = \"gruvbox\"\nsemantic_mapping = true\n").unwrap();
        assert_eq!(config.default_theme.as_deref(), Some("gruvbox"));
        assert_eq!(config.token_mode(), TokenMode::Semantic);
        assert_eq!(config.themes_dir, PathBuf::from(defaults::THEMES_DIR));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_toml("themesDir = \"./themes\"\n").is_err());
    }

    #[test]
    fn load_resolves_paths_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("termtokens.toml");
        std::fs::write(&path, "themes_dir = \"themes\"\noutput_file = \"out/theme.css\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.themes_dir, dir.path().join("themes"));
        assert_eq!(config.output_file, dir.path().join("out/theme.css"));
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Config::load(Path::new("/nonexistent/termtokens.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn args_override_config() {
        let config = Config::from_toml("default_theme = \"gruvbox\"\n").unwrap();
        let args = Args::parse_from([
            "termtokens",
            "--themes-dir",
            "/tmp/themes",
            "--default-theme",
            "nord",
            "--semantic",
        ]);
        let config = config.merge_args(&args);
        assert_eq!(config.themes_dir, PathBuf::from("/tmp/themes"));
        assert_eq!(config.default_theme.as_deref(), Some("nord"));
        assert!(config.semantic_mapping);
        assert_eq!(config.output_file, PathBuf::from(defaults::OUTPUT_FILE));
    }
}
