use anyhow::{bail, Result};
use palette::{IntoColor, Oklch, Srgb};

/// Standard terminal palette used for any ANSI slot a theme file leaves out.
pub const DEFAULT_PALETTE: [&str; 16] = [
    "#000000", "#800000", "#008000", "#808000", "#000080", "#800080", "#008080", "#c0c0c0",
    "#808080", "#ff0000", "#00ff00", "#ffff00", "#0000ff", "#ff00ff", "#00ffff", "#ffffff",
];

/// Token-style names of the 16 ANSI slots, in palette index order.
pub const SLOT_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright-black",
    "bright-red",
    "bright-green",
    "bright-yellow",
    "bright-blue",
    "bright-magenta",
    "bright-cyan",
    "bright-white",
];

/// Prefix `#` onto a color string that lacks one.
///
/// This is a syntactic fixup only: malformed hex passes through unchanged.
pub fn normalize_color(raw: &str) -> String {
    if raw.starts_with('#') {
        raw.to_string()
    } else {
        format!("#{raw}")
    }
}

/// The 16 ANSI colors of a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiColors {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
    pub bright_black: String,
    pub bright_red: String,
    pub bright_green: String,
    pub bright_yellow: String,
    pub bright_blue: String,
    pub bright_magenta: String,
    pub bright_cyan: String,
    pub bright_white: String,
}

impl AnsiColors {
    /// Build from slots in palette index order (0 = black .. 15 = bright white).
    pub fn from_slots(slots: [String; 16]) -> Self {
        let [
            black,
            red,
            green,
            yellow,
            blue,
            magenta,
            cyan,
            white,
            bright_black,
            bright_red,
            bright_green,
            bright_yellow,
            bright_blue,
            bright_magenta,
            bright_cyan,
            bright_white,
        ] = slots;
        Self {
            black,
            red,
            green,
            yellow,
            blue,
            magenta,
            cyan,
            white,
            bright_black,
            bright_red,
            bright_green,
            bright_yellow,
            bright_blue,
            bright_magenta,
            bright_cyan,
            bright_white,
        }
    }

    /// Slots in palette index order.
    pub fn slots(&self) -> [&str; 16] {
        [
            self.black.as_str(),
            self.red.as_str(),
            self.green.as_str(),
            self.yellow.as_str(),
            self.blue.as_str(),
            self.magenta.as_str(),
            self.cyan.as_str(),
            self.white.as_str(),
            self.bright_black.as_str(),
            self.bright_red.as_str(),
            self.bright_green.as_str(),
            self.bright_yellow.as_str(),
            self.bright_blue.as_str(),
            self.bright_magenta.as_str(),
            self.bright_cyan.as_str(),
            self.bright_white.as_str(),
        ]
    }
}

impl Default for AnsiColors {
    fn default() -> Self {
        Self::from_slots(DEFAULT_PALETTE.map(String::from))
    }
}

/// Selection highlight colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub background: String,
    pub foreground: Option<String>,
}

/// Canonical, format-independent theme colors produced by every adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: String,
    pub foreground: String,
    pub cursor: Option<String>,
    pub selection: Option<Selection>,
    pub colors: AnsiColors,
}

/// An sRGB color parsed from a hex string, used for terminal preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            bail!("invalid hex color: expected 6 hex digits, got {:?}", hex);
        }
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Oklch lightness in [0, 1].
    pub fn lightness(self) -> f32 {
        let srgb: Srgb<f32> = Srgb::new(self.r, self.g, self.b).into_format();
        let oklch: Oklch = srgb.into_color();
        oklch.l
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_adds_missing_hash() {
        assert_eq!(normalize_color("1d2021"), "#1d2021");
    }

    #[test]
    fn normalize_keeps_existing_hash() {
        assert_eq!(normalize_color("#1d2021"), "#1d2021");
    }

    #[test]
    fn normalize_passes_malformed_through() {
        assert_eq!(normalize_color("not-a-color"), "#not-a-color");
        assert_eq!(normalize_color(""), "#");
    }

    #[test]
    fn default_ansi_colors_match_palette() {
        let colors = AnsiColors::default();
        assert_eq!(colors.black, "#000000");
        assert_eq!(colors.red, "#800000");
        assert_eq!(colors.blue, "#000080");
        assert_eq!(colors.white, "#c0c0c0");
        assert_eq!(colors.bright_black, "#808080");
        assert_eq!(colors.bright_white, "#ffffff");
    }

    #[test]
    fn slots_preserve_index_order() {
        let slots: [String; 16] = std::array::from_fn(|i| format!("#{i:06}"));
        let colors = AnsiColors::from_slots(slots.clone());
        for (i, slot) in colors.slots().iter().enumerate() {
            assert_eq!(*slot, slots[i]);
        }
        assert_eq!(colors.bright_cyan, "#000014");
    }

    #[test]
    fn hex_parses_with_or_without_hash() {
        assert_eq!(Rgb::from_hex("#FF8800").unwrap(), Rgb::new(255, 136, 0));
        assert_eq!(Rgb::from_hex("1d2021").unwrap(), Rgb::new(29, 32, 33));
    }

    #[test]
    fn hex_rejects_bad_input() {
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("#ééé").is_err());
    }

    #[test]
    fn lightness_extremes() {
        let black = Rgb::new(0, 0, 0);
        let white = Rgb::new(255, 255, 255);
        assert!(black.lightness() < 0.01);
        assert!(white.lightness() > 0.99);
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(hex in "#?[0-9a-fA-F]{6}") {
            let once = normalize_color(&hex);
            prop_assert_eq!(normalize_color(&once), once.clone());
            prop_assert!(once.starts_with('#'));
        }
    }
}
