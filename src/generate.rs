use std::path::PathBuf;

use anyhow::Result;
use tracing::{info, warn};

use crate::color::ThemeColors;
use crate::config::Config;
use crate::registry::{select_theme, ThemeDescriptor, ThemeRegistry};
use crate::tokens::{render, write_tokens};

/// Result of a generation attempt that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Tokens for `theme` were written to `path`.
    Written { theme: String, path: PathBuf },
    /// The themes directory held no usable theme; nothing was written.
    NoThemes,
}

/// A loaded and rendered theme, ready to be written or printed.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub theme: ThemeDescriptor,
    pub colors: ThemeColors,
    pub tokens: String,
}

/// Runs discover → select → load → render → write for one configuration.
pub struct Generator {
    registry: ThemeRegistry,
    config: Config,
}

impl Generator {
    pub fn new(registry: ThemeRegistry, config: Config) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn discover(&self) -> Vec<ThemeDescriptor> {
        self.registry.discover_themes(&self.config.themes_dir)
    }

    /// Load and render the selected theme without writing anything.
    ///
    /// Returns `Ok(None)` when no theme was discovered.
    pub fn render(&self, requested: Option<&str>) -> Result<Option<Rendered>> {
        let themes = self.discover();
        let Some(theme) = select_theme(&themes, requested, self.config.default_theme.as_deref())
        else {
            warn!(dir = %self.config.themes_dir.display(), "no themes found");
            return Ok(None);
        };
        info!(theme = %theme.name, adapter = theme.adapter.name(), "using theme");

        let colors = self.registry.load_theme(&theme.path, theme.adapter.as_ref())?;
        let tokens = render(&colors, self.config.token_mode());
        Ok(Some(Rendered {
            theme: theme.clone(),
            colors,
            tokens,
        }))
    }

    /// One full generation attempt, writing to the configured output file.
    pub fn run(&self, requested: Option<&str>) -> Result<Outcome> {
        let Some(rendered) = self.render(requested)? else {
            return Ok(Outcome::NoThemes);
        };
        let path = self.config.output_file.clone();
        write_tokens(&path, &rendered.tokens)?;
        info!(path = %path.display(), "generated theme tokens");
        Ok(Outcome::Written {
            theme: rendered.theme.name,
            path,
        })
    }
}
