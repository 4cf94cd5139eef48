use std::path::Path;

use anyhow::{Context, Result};

use crate::color::{ThemeColors, SLOT_NAMES};

/// How theme colors map onto design tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenMode {
    /// One token per ANSI slot, named after the slot.
    #[default]
    Direct,
    /// Role-based tokens (`primary`, `destructive`, ...) bound to fixed slots.
    Semantic,
}

impl TokenMode {
    pub fn from_semantic_flag(semantic: bool) -> Self {
        if semantic {
            TokenMode::Semantic
        } else {
            TokenMode::Direct
        }
    }
}

/// Where a semantic token takes its value from.
#[derive(Debug, Clone, Copy)]
enum Source {
    Background,
    Foreground,
    /// ANSI palette index.
    Slot(usize),
}

const SEMANTIC_TOKENS: [(&str, Source); 18] = [
    ("background", Source::Background),
    ("foreground", Source::Foreground),
    ("primary", Source::Slot(4)),
    ("primary-foreground", Source::Background),
    ("secondary", Source::Slot(6)),
    ("secondary-foreground", Source::Background),
    ("accent", Source::Slot(5)),
    ("accent-foreground", Source::Background),
    ("destructive", Source::Slot(1)),
    ("destructive-foreground", Source::Slot(7)),
    ("muted", Source::Slot(8)),
    ("muted-foreground", Source::Slot(7)),
    ("border", Source::Slot(8)),
    ("input", Source::Slot(8)),
    ("ring", Source::Slot(4)),
    ("success", Source::Slot(2)),
    ("warning", Source::Slot(3)),
    ("info", Source::Slot(6)),
];

impl Source {
    fn resolve(self, colors: &ThemeColors) -> &str {
        match self {
            Source::Background => &colors.background,
            Source::Foreground => &colors.foreground,
            Source::Slot(index) => colors.colors.slots()[index],
        }
    }
}

/// Render theme colors as CSS custom properties inside an `@theme` block.
pub fn render(colors: &ThemeColors, mode: TokenMode) -> String {
    let mut tokens: Vec<(&str, &str)> = match mode {
        TokenMode::Direct => {
            let mut tokens = vec![
                ("background", colors.background.as_str()),
                ("foreground", colors.foreground.as_str()),
            ];
            tokens.extend(SLOT_NAMES.into_iter().zip(colors.colors.slots()));
            tokens
        }
        TokenMode::Semantic => SEMANTIC_TOKENS
            .iter()
            .map(|(name, source)| (*name, source.resolve(colors)))
            .collect(),
    };

    if let Some(cursor) = &colors.cursor {
        tokens.push(("cursor", cursor.as_str()));
    }
    if let Some(selection) = &colors.selection {
        tokens.push(("selection", selection.background.as_str()));
        if let Some(foreground) = &selection.foreground {
            tokens.push(("selection-foreground", foreground.as_str()));
        }
    }

    let mut out = String::from("@theme {\n");
    for (name, value) in tokens {
        out.push_str(&format!("  --color-{name}: {value};\n"));
    }
    out.push_str("}\n");
    out
}

/// Write rendered tokens to `path`, creating parent directories as needed.
pub fn write_tokens(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory: {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write tokens to {}", path.display()))?;
    Ok(())
}
