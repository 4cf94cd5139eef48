//! Terminal color themes to CSS design tokens.
//!
//! Theme files in emulator-specific formats are parsed by a [`ThemeAdapter`]
//! into the canonical [`ThemeColors`] model, then rendered as `@theme` CSS
//! custom properties in either direct or semantic mode.

pub mod adapters;
pub mod cli;
pub mod color;
pub mod config;
pub mod generate;
pub mod preview;
pub mod registry;
pub mod tokens;
pub mod watch;

pub use adapters::ThemeAdapter;
pub use color::{normalize_color, ThemeColors};
pub use registry::{select_theme, ThemeDescriptor, ThemeRegistry};
pub use tokens::{render, TokenMode};
