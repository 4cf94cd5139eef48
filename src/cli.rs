use std::path::PathBuf;

use clap::Parser;

/// Generate CSS design tokens from terminal emulator color themes.
#[derive(Parser, Debug)]
#[command(name = "termtokens", version, about)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing theme files
    #[arg(long)]
    pub themes_dir: Option<PathBuf>,

    /// Write tokens to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Theme used when the requested theme is not found
    #[arg(long)]
    pub default_theme: Option<String>,

    /// Theme to generate tokens for
    #[arg(short, long, env = "THEME")]
    pub theme: Option<String>,

    /// Emit role-based tokens (primary, destructive, ...) instead of ANSI slots
    #[arg(long)]
    pub semantic: bool,

    /// List discovered themes and exit
    #[arg(long)]
    pub list: bool,

    /// Print tokens to stdout instead of writing the output file
    #[arg(long, conflicts_with = "watch")]
    pub stdout: bool,

    /// Print a colored terminal preview of the selected theme
    #[arg(long)]
    pub preview: bool,

    /// Regenerate whenever the themes directory changes
    #[arg(short, long)]
    pub watch: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
