use std::collections::HashMap;

use crate::color::{normalize_color, AnsiColors, Selection, ThemeColors, DEFAULT_PALETTE};

use super::{non_empty, strip_quotes, ThemeAdapter};

const QUOTES: [char; 3] = ['`', '"', '\''];

/// Ghostty terminal theme adapter (flat `key = value` format).
pub struct GhosttyAdapter;

impl ThemeAdapter for GhosttyAdapter {
    fn name(&self) -> &str {
        "ghostty"
    }

    fn extensions(&self) -> &[&str] {
        &["conf", "config"]
    }

    fn parse(&self, content: &str) -> ThemeColors {
        let config = parse_pairs(content);
        let slots = resolve_palette(&config);

        let selection_background = non_empty(config.get("selection-background"))
            .map(normalize_color)
            .unwrap_or_else(|| slots[8].clone());

        ThemeColors {
            background: normalize_color(non_empty(config.get("background")).unwrap_or("#000000")),
            foreground: normalize_color(non_empty(config.get("foreground")).unwrap_or("#ffffff")),
            cursor: non_empty(config.get("cursor-color")).map(normalize_color),
            selection: Some(Selection {
                background: selection_background,
                foreground: non_empty(config.get("selection-foreground")).map(normalize_color),
            }),
            colors: AnsiColors::from_slots(slots),
        }
    }
}

/// Collect `key = value` lines into a table.
///
/// Keys are unique, so a repeated key such as `palette` keeps only its last
/// value.
fn parse_pairs(content: &str) -> HashMap<String, String> {
    let mut config = HashMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let value = strip_quotes(value.trim(), &QUOTES);
        config.insert(key.trim().to_string(), value.to_string());
    }
    config
}

/// Resolve the 16 ANSI slots from the surviving `palette` entry, falling
/// back to the default palette per slot.
fn resolve_palette(config: &HashMap<String, String>) -> [String; 16] {
    let entry = config.get("palette");
    std::array::from_fn(|i| {
        entry
            .and_then(|value| value.strip_prefix(&format!("{i}=")))
            .map(|rest| rest.split('=').next().unwrap_or(rest))
            .filter(|color| !color.is_empty())
            .map(normalize_color)
            .unwrap_or_else(|| DEFAULT_PALETTE[i].to_string())
    })
}
