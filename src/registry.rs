use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::adapters::{builtin_adapters, ThemeAdapter};
use crate::color::ThemeColors;

/// A theme file found during discovery.
#[derive(Clone)]
pub struct ThemeDescriptor {
    /// File name without its extension.
    pub name: String,
    pub path: PathBuf,
    pub adapter: Arc<dyn ThemeAdapter>,
}

impl std::fmt::Debug for ThemeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeDescriptor")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("adapter", &self.adapter.name())
            .finish()
    }
}

/// Ordered set of adapters keyed by name.
///
/// Built once and read-only afterwards, so it can be shared across threads.
pub struct ThemeRegistry {
    adapters: Vec<Arc<dyn ThemeAdapter>>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        for adapter in builtin_adapters() {
            registry.register_adapter(adapter);
        }
        registry
    }
}

impl ThemeRegistry {
    /// Registry with the built-in adapters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            adapters: Vec::new(),
        }
    }

    /// Register an adapter. A later adapter with the same name replaces the
    /// earlier one in place, keeping its position in the match order.
    pub fn register_adapter(&mut self, adapter: Arc<dyn ThemeAdapter>) {
        match self.adapters.iter_mut().find(|a| a.name() == adapter.name()) {
            Some(slot) => *slot = adapter,
            None => self.adapters.push(adapter),
        }
    }

    pub fn adapters(&self) -> impl Iterator<Item = &Arc<dyn ThemeAdapter>> {
        self.adapters.iter()
    }

    /// First registered adapter handling `extension`.
    pub fn adapter_for(&self, extension: &str) -> Option<&Arc<dyn ThemeAdapter>> {
        self.adapters.iter().find(|a| a.handles(extension))
    }

    /// List the regular files in `dir` (non-recursive) that some adapter
    /// handles, sorted by file name.
    ///
    /// An unreadable directory yields an empty list and a warning.
    pub fn discover_themes(&self, dir: &Path) -> Vec<ThemeDescriptor> {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), %err, "could not read themes directory");
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.path())
            .collect();
        paths.sort();

        paths
            .into_iter()
            .filter_map(|path| {
                let descriptor = self.describe(&path);
                if descriptor.is_none() {
                    debug!(path = %path.display(), "no adapter for file, skipping");
                }
                descriptor
            })
            .collect()
    }

    fn describe(&self, path: &Path) -> Option<ThemeDescriptor> {
        let extension = path.extension()?.to_str()?;
        let name = path.file_stem()?.to_str()?.to_string();
        let adapter = self.adapter_for(extension)?;
        debug!(theme = %name, adapter = adapter.name(), "discovered theme");
        Some(ThemeDescriptor {
            name,
            path: path.to_path_buf(),
            adapter: Arc::clone(adapter),
        })
    }

    /// Read a theme file and parse it with `adapter`.
    pub fn load_theme(&self, path: &Path, adapter: &dyn ThemeAdapter) -> Result<ThemeColors> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file: {}", path.display()))?;
        Ok(adapter.parse(&content))
    }
}

/// Pick a theme: the requested name if discovered, else the default name,
/// else the first discovered theme.
pub fn select_theme<'a>(
    themes: &'a [ThemeDescriptor],
    requested: Option<&str>,
    default: Option<&str>,
) -> Option<&'a ThemeDescriptor> {
    let by_name = |name: &str| themes.iter().find(|t| t.name == name);
    requested
        .and_then(by_name)
        .or_else(|| default.and_then(by_name))
        .or_else(|| themes.first())
}
