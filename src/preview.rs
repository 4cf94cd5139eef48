use crossterm::style::{Color, Stylize};

use crate::color::{Rgb, ThemeColors};

const SLOT_LABELS: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];

/// Black or white label text, whichever reads better on `bg`.
fn label_color(bg: Rgb) -> Color {
    if bg.lightness() > 0.6 {
        Color::Black
    } else {
        Color::White
    }
}

/// A 7-column swatch. Values that are not `#rrggbb` are shown as plain text.
fn swatch(label: &str, value: &str) -> String {
    match Rgb::from_hex(value) {
        Ok(rgb) => format!("{label:^7}")
            .with(label_color(rgb))
            .on(Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            })
            .to_string(),
        Err(_) => format!("{:^7}", value),
    }
}

/// Render a terminal preview: background/foreground, then the normal and
/// bright ANSI rows.
pub fn render_preview(name: &str, colors: &ThemeColors) -> String {
    let mut out = format!("{name}\n");
    out.push_str(&format!(
        "  {} {}  bg {}  fg {}\n",
        swatch("bg", &colors.background),
        swatch("fg", &colors.foreground),
        colors.background,
        colors.foreground,
    ));

    let slots = colors.colors.slots();
    for row in slots.chunks(8) {
        out.push_str("  ");
        for (label, value) in SLOT_LABELS.iter().zip(row) {
            out.push_str(&swatch(label, value));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::AnsiColors;

    fn colors() -> ThemeColors {
        ThemeColors {
            background: "#1d2021".to_string(),
            foreground: "#ebdbb2".to_string(),
            cursor: None,
            selection: None,
            colors: AnsiColors::default(),
        }
    }

    #[test]
    fn preview_has_header_and_two_palette_rows() {
        let out = render_preview("gruvbox", &colors());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "gruvbox");
        assert!(lines[1].contains("bg #1d2021"));
        assert!(lines[2].contains("Red"));
        assert!(lines[3].contains("Wht"));
    }

    #[test]
    fn malformed_values_are_plain_text() {
        let mut theme = colors();
        theme.colors.red = "#nothex".to_string();
        let out = render_preview("broken", &theme);
        assert!(out.contains("#nothex"));
    }

    #[test]
    fn label_contrasts_with_background() {
        assert_eq!(label_color(Rgb::new(255, 255, 255)), Color::Black);
        assert_eq!(label_color(Rgb::new(0, 0, 0)), Color::White);
    }
}
