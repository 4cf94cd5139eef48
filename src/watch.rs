//! Regenerate tokens whenever the themes directory changes.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, DebouncedEvent, Debouncer};
use tracing::{debug, error, info, warn};

use crate::generate::{Generator, Outcome};

/// Debounce duration for filesystem events.
pub const DEBOUNCE_MS: u64 = 100;

/// Run one generation attempt, logging instead of returning failures.
pub fn regenerate(generator: &Generator, requested: Option<&str>) -> Option<Outcome> {
    match generator.run(requested) {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            error!("failed to generate theme: {err:#}");
            None
        }
    }
}

/// Debounced, non-recursive watcher on a themes directory.
///
/// A directory that does not exist yet is waited for by watching its parent;
/// once it appears the watch moves onto the directory itself.
pub struct ThemeWatcher {
    debouncer: Debouncer<RecommendedWatcher>,
    receiver: Receiver<DebounceEventResult>,
    dir: PathBuf,
    /// Parent being watched while `dir` is missing.
    parent: Option<PathBuf>,
}

impl ThemeWatcher {
    pub fn new(dir: &Path) -> Result<Self> {
        let (tx, receiver) = mpsc::channel();
        let debouncer = new_debouncer(
            Duration::from_millis(DEBOUNCE_MS),
            move |res: DebounceEventResult| {
                let _ = tx.send(res);
            },
        )
        .context("failed to create filesystem watcher")?;

        let mut watcher = Self {
            debouncer,
            receiver,
            dir: dir.to_path_buf(),
            parent: None,
        };

        if dir.is_dir() {
            watcher.watch_path(dir)?;
        } else {
            let parent = dir
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf();
            warn!(
                dir = %dir.display(),
                parent = %parent.display(),
                "themes directory does not exist, waiting for it"
            );
            watcher.watch_path(&parent)?;
            watcher.parent = Some(parent);
        }
        Ok(watcher)
    }

    /// The path currently under watch.
    pub fn watched_path(&self) -> &Path {
        self.parent.as_deref().unwrap_or(&self.dir)
    }

    /// Block until the next debounced batch. `None` once the watcher is gone.
    pub fn recv(&self) -> Option<DebounceEventResult> {
        self.receiver.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<DebounceEventResult> {
        self.receiver.recv_timeout(timeout).ok()
    }

    /// Paths from `events` that concern the themes directory. Moves the watch
    /// onto the directory if it has just been created.
    pub fn changed_paths(&mut self, events: Vec<DebouncedEvent>) -> Vec<PathBuf> {
        let changed: Vec<PathBuf> = events
            .into_iter()
            .map(|event| event.path)
            .filter(|path| !is_hidden(path))
            .filter(|path| self.parent.is_none() || self.is_themes_dir(path))
            .collect();

        if self.parent.is_some() && !changed.is_empty() && self.dir.is_dir() {
            self.attach();
        }
        changed
    }

    fn is_themes_dir(&self, path: &Path) -> bool {
        path.starts_with(&self.dir) || path.file_name() == self.dir.file_name()
    }

    fn attach(&mut self) {
        let dir = self.dir.clone();
        if let Err(err) = self.watch_path(&dir) {
            warn!("{err:#}");
            return;
        }
        info!(dir = %dir.display(), "themes directory created");
        if let Some(parent) = self.parent.take() {
            if let Err(err) = self.debouncer.watcher().unwatch(&parent) {
                debug!(%err, parent = %parent.display(), "failed to unwatch parent");
            }
        }
    }

    fn watch_path(&mut self, path: &Path) -> Result<()> {
        self.debouncer
            .watcher()
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch path: {}", path.display()))
    }
}

/// Generate once, then block regenerating after every debounced batch of
/// changes in the themes directory.
pub fn watch(generator: &Generator, requested: Option<&str>) -> Result<()> {
    regenerate(generator, requested);

    let mut watcher = ThemeWatcher::new(&generator.config().themes_dir)?;
    info!(path = %watcher.watched_path().display(), "watching for theme changes");

    while let Some(res) = watcher.recv() {
        match res {
            Ok(events) => {
                let changed = watcher.changed_paths(events);
                if changed.is_empty() {
                    continue;
                }
                for path in &changed {
                    info!(path = %path.display(), "theme file changed");
                }
                regenerate(generator, requested);
            }
            Err(err) => warn!(%err, "filesystem watch error"),
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}
