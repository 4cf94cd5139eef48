use std::collections::HashMap;

use crate::color::{normalize_color, AnsiColors, Selection, ThemeColors, DEFAULT_PALETTE};

use super::{non_empty, strip_quotes, ThemeAdapter};

const QUOTES: [char; 2] = ['"', '\''];

const ANSI_KEYS: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Warp terminal theme adapter (YAML subset).
///
/// Section headers open a nested table under the current one, or under the
/// root when unindented. Only one current table is tracked, so scalars keep
/// landing in the last opened table until another header moves the pointer.
/// This covers `terminal_colors.normal`; lists, flow mappings and general
/// nesting are not supported.
pub struct WarpAdapter;

impl ThemeAdapter for WarpAdapter {
    fn name(&self) -> &str {
        "warp"
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn parse(&self, content: &str) -> ThemeColors {
        let doc = Document::parse(content);
        let normal = doc.table(&["terminal_colors", "normal"]);
        let bright = doc.table(&["terminal_colors", "bright"]);

        let slots: [String; 16] = std::array::from_fn(|i| {
            let table = if i < 8 { normal } else { bright };
            normalize_color(scalar_in(table, ANSI_KEYS[i % 8]).unwrap_or(DEFAULT_PALETTE[i]))
        });

        let background = doc.scalar("background").unwrap_or("#000000");
        let foreground = doc.scalar("foreground").unwrap_or("#ffffff");
        let accent = doc
            .scalar("accent")
            .or_else(|| scalar_in(normal, "blue"))
            .unwrap_or("#0000ff");

        ThemeColors {
            background: normalize_color(background),
            foreground: normalize_color(foreground),
            cursor: doc.scalar("cursor").map(normalize_color),
            selection: Some(Selection {
                background: normalize_color(accent),
                foreground: Some(normalize_color(foreground)),
            }),
            colors: AnsiColors::from_slots(slots),
        }
    }
}

#[derive(Debug)]
enum Entry {
    Scalar(String),
    Table(Table),
}

type Table = HashMap<String, Entry>;

fn scalar_in<'a>(table: Option<&'a Table>, key: &str) -> Option<&'a str> {
    match table?.get(key)? {
        Entry::Scalar(value) => non_empty(Some(value)),
        Entry::Table(_) => None,
    }
}

/// Walk `path` down from `table`, stopping at anything that is not a table.
fn table_mut<'a>(table: &'a mut Table, path: &[String]) -> Option<&'a mut Table> {
    path.iter().try_fold(table, |table, key| match table.get_mut(key) {
        Some(Entry::Table(child)) => Some(child),
        _ => None,
    })
}

/// Indentation-based key/value document with a single current-table pointer.
#[derive(Debug, Default)]
struct Document {
    root: Table,
}

impl Document {
    fn parse(content: &str) -> Self {
        let mut root = Table::new();
        // Path from the root to the table scalars are written into.
        let mut current: Vec<String> = Vec::new();

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((key, value)) = trimmed.split_once(':') else {
                continue;
            };
            let key = key.trim().to_string();
            let value = value.trim();
            let indent = line.len() - line.trim_start().len();

            if value.is_empty() {
                if indent == 0 {
                    current.clear();
                }
                if let Some(table) = table_mut(&mut root, &current) {
                    table.insert(key.clone(), Entry::Table(Table::new()));
                    current.push(key);
                }
            } else if let Some(table) = table_mut(&mut root, &current) {
                let value = strip_quotes(value, &QUOTES).to_string();
                table.insert(key, Entry::Scalar(value));
            }
        }
        Document { root }
    }

    fn scalar(&self, key: &str) -> Option<&str> {
        scalar_in(Some(&self.root), key)
    }

    fn table(&self, path: &[&str]) -> Option<&Table> {
        path.iter().try_fold(&self.root, |table, key| match table.get(*key)? {
            Entry::Table(child) => Some(child),
            Entry::Scalar(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLARIZED: &str = "
name: Test Theme
background: '#002b36'
foreground: '#839496'
terminal_colors:
  normal:
    black: '#073642'
    red: '#dc322f'
    green: '#859900'
  bright:
    black: '#002b36'
    red: '#cb4b16'
    green: '#586e75'
";

    #[test]
    fn parses_top_level_colors() {
        let theme = WarpAdapter.parse(SOLARIZED);
        assert_eq!(theme.background, "#002b36");
        assert_eq!(theme.foreground, "#839496");
    }

    #[test]
    fn parses_normal_section_with_defaults() {
        let theme = WarpAdapter.parse(SOLARIZED);
        assert_eq!(theme.colors.black, "#073642");
        assert_eq!(theme.colors.red, "#dc322f");
        assert_eq!(theme.colors.green, "#859900");
        assert_eq!(theme.colors.blue, "#000080");
        assert_eq!(theme.colors.white, "#c0c0c0");
    }

    #[test]
    fn bright_header_nests_inside_normal() {
        let theme = WarpAdapter.parse(SOLARIZED);
        assert_eq!(theme.colors.bright_black, "#808080");
        assert_eq!(theme.colors.bright_red, "#ff0000");
        assert_eq!(theme.colors.bright_green, "#00ff00");
        assert_eq!(theme.colors.bright_blue, "#0000ff");

        let doc = Document::parse(SOLARIZED);
        assert!(doc.table(&["terminal_colors", "bright"]).is_none());
        let nested = doc.table(&["terminal_colors", "normal", "bright"]);
        assert_eq!(scalar_in(nested, "red"), Some("#cb4b16"));
    }

    #[test]
    fn unindented_bright_section_is_not_terminal_colors() {
        let theme = WarpAdapter.parse("terminal_colors:\n  normal:\n    red: '#dc322f'\nbright:\n  red: '#cb4b16'\n");
        assert_eq!(theme.colors.red, "#dc322f");
        assert_eq!(theme.colors.bright_red, "#ff0000");
    }

    #[test]
    fn selection_prefers_accent_then_normal_blue() {
        let with_accent = WarpAdapter.parse("accent: '#268bd2'\nterminal_colors:\n  normal:\n    blue: '#111111'\n");
        assert_eq!(with_accent.selection.unwrap().background, "#268bd2");

        let with_blue = WarpAdapter.parse("terminal_colors:\n  normal:\n    blue: '#111111'\n");
        assert_eq!(with_blue.selection.unwrap().background, "#111111");

        let bare = WarpAdapter.parse("");
        assert_eq!(bare.selection.unwrap().background, "#0000ff");
    }

    #[test]
    fn selection_foreground_mirrors_foreground() {
        let theme = WarpAdapter.parse(SOLARIZED);
        assert_eq!(theme.selection.unwrap().foreground.as_deref(), Some("#839496"));

        let bare = WarpAdapter.parse("");
        assert_eq!(bare.selection.unwrap().foreground.as_deref(), Some("#ffffff"));
    }

    #[test]
    fn keys_after_a_section_stay_in_that_section() {
        let content = "
terminal_colors:
  normal:
    blue: '#111111'
accent: '#b58900'
cursor: 93a1a1
";
        let theme = WarpAdapter.parse(content);
        assert_eq!(theme.colors.blue, "#111111");
        assert_eq!(theme.cursor, None);
        assert_eq!(theme.selection.unwrap().background, "#111111");

        let doc = Document::parse(content);
        let normal = doc.table(&["terminal_colors", "normal"]);
        assert_eq!(scalar_in(normal, "accent"), Some("#b58900"));
    }

    #[test]
    fn unindented_header_resets_to_root() {
        let content = "colors:\n  nested:\n    x: '1'\nterminal_colors:\n  normal:\n    red: '#dc322f'\n";
        let theme = WarpAdapter.parse(content);
        assert_eq!(theme.colors.red, "#dc322f");
    }

    #[test]
    fn cursor_absent_when_missing() {
        assert_eq!(WarpAdapter.parse(SOLARIZED).cursor, None);
    }

    #[test]
    fn unquoted_and_double_quoted_values() {
        let content = "background: \"#101010\"\nforeground: eeeeee\n";
        let theme = WarpAdapter.parse(content);
        assert_eq!(theme.background, "#101010");
        assert_eq!(theme.foreground, "#eeeeee");
    }

    #[test]
    fn comments_and_lines_without_colon_are_skipped() {
        let content = "# header comment\nbackground '#ffffff'\n  # indented comment\nforeground: '#000000'\n";
        let theme = WarpAdapter.parse(content);
        assert_eq!(theme.background, "#000000");
        assert_eq!(theme.foreground, "#000000");
    }

    #[test]
    fn values_may_contain_colons() {
        let doc = Document::parse("details: a:b:c\n");
        assert_eq!(doc.scalar("details"), Some("a:b:c"));
    }
}
