//! Color theme for Riffwire
//!
//! Maps semantic color names to RGB values. The default palette is the
//! app's metal look (black backgrounds, blood red, gold and silver
//! accents); individual entries can be overridden from the `[theme]`
//! table of the config file.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Closed set of semantic color names used by the UI.
///
/// Widgets always pick colors by name, never by literal value, so a theme
/// override changes every use site at once.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ColorName {
    Primary,
    Secondary,
    Accent,
    BackgroundBlack,
    BackgroundDark,
    BackgroundGray,
    TextWhite,
    TextGray,
    TextDark,
    Success,
    Warning,
    Error,
    MetalSilver,
    MetalGold,
    MetalCopper,
}

impl ColorName {
    /// All names, in palette order
    pub const ALL: [ColorName; 15] = [
        ColorName::Primary,
        ColorName::Secondary,
        ColorName::Accent,
        ColorName::BackgroundBlack,
        ColorName::BackgroundDark,
        ColorName::BackgroundGray,
        ColorName::TextWhite,
        ColorName::TextGray,
        ColorName::TextDark,
        ColorName::Success,
        ColorName::Warning,
        ColorName::Error,
        ColorName::MetalSilver,
        ColorName::MetalGold,
        ColorName::MetalCopper,
    ];

    /// The snake_case key used in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorName::Primary => "primary",
            ColorName::Secondary => "secondary",
            ColorName::Accent => "accent",
            ColorName::BackgroundBlack => "background_black",
            ColorName::BackgroundDark => "background_dark",
            ColorName::BackgroundGray => "background_gray",
            ColorName::TextWhite => "text_white",
            ColorName::TextGray => "text_gray",
            ColorName::TextDark => "text_dark",
            ColorName::Success => "success",
            ColorName::Warning => "warning",
            ColorName::Error => "error",
            ColorName::MetalSilver => "metal_silver",
            ColorName::MetalGold => "metal_gold",
            ColorName::MetalCopper => "metal_copper",
        }
    }
}

impl FromStr for ColorName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::InvalidColor(format!("unknown color name '{}'", s)))
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A 24-bit RGB value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` hex string
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(format!(
                "expected #RRGGBB, got '{}'",
                s
            )));
        }

        // Length and digits checked above, so these cannot fail
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Ok(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The resolved theme: one RGB value per semantic name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    primary: Rgb,
    secondary: Rgb,
    accent: Rgb,
    background_black: Rgb,
    background_dark: Rgb,
    background_gray: Rgb,
    text_white: Rgb,
    text_gray: Rgb,
    text_dark: Rgb,
    success: Rgb,
    warning: Rgb,
    error: Rgb,
    metal_silver: Rgb,
    metal_gold: Rgb,
    metal_copper: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Rgb::new(0xFF, 0x00, 0x00),
            secondary: Rgb::new(0x8B, 0x00, 0x00),
            accent: Rgb::new(0xFF, 0xD7, 0x00),
            background_black: Rgb::new(0x00, 0x00, 0x00),
            background_dark: Rgb::new(0x1A, 0x1A, 0x1A),
            background_gray: Rgb::new(0x2D, 0x2D, 0x2D),
            text_white: Rgb::new(0xFF, 0xFF, 0xFF),
            text_gray: Rgb::new(0xCC, 0xCC, 0xCC),
            text_dark: Rgb::new(0x66, 0x66, 0x66),
            success: Rgb::new(0x00, 0xFF, 0x00),
            warning: Rgb::new(0xFF, 0xA5, 0x00),
            error: Rgb::new(0xFF, 0x44, 0x44),
            metal_silver: Rgb::new(0xC0, 0xC0, 0xC0),
            metal_gold: Rgb::new(0xFF, 0xD7, 0x00),
            metal_copper: Rgb::new(0xB8, 0x73, 0x33),
        }
    }
}

impl Theme {
    /// Look up the RGB value for a semantic name
    pub fn resolve(&self, name: ColorName) -> Rgb {
        match name {
            ColorName::Primary => self.primary,
            ColorName::Secondary => self.secondary,
            ColorName::Accent => self.accent,
            ColorName::BackgroundBlack => self.background_black,
            ColorName::BackgroundDark => self.background_dark,
            ColorName::BackgroundGray => self.background_gray,
            ColorName::TextWhite => self.text_white,
            ColorName::TextGray => self.text_gray,
            ColorName::TextDark => self.text_dark,
            ColorName::Success => self.success,
            ColorName::Warning => self.warning,
            ColorName::Error => self.error,
            ColorName::MetalSilver => self.metal_silver,
            ColorName::MetalGold => self.metal_gold,
            ColorName::MetalCopper => self.metal_copper,
        }
    }

    /// Replace a single entry, used when applying config overrides
    pub fn set(&mut self, name: ColorName, value: Rgb) {
        match name {
            ColorName::Primary => self.primary = value,
            ColorName::Secondary => self.secondary = value,
            ColorName::Accent => self.accent = value,
            ColorName::BackgroundBlack => self.background_black = value,
            ColorName::BackgroundDark => self.background_dark = value,
            ColorName::BackgroundGray => self.background_gray = value,
            ColorName::TextWhite => self.text_white = value,
            ColorName::TextGray => self.text_gray = value,
            ColorName::TextDark => self.text_dark = value,
            ColorName::Success => self.success = value,
            ColorName::Warning => self.warning = value,
            ColorName::Error => self.error = value,
            ColorName::MetalSilver => self.metal_silver = value,
            ColorName::MetalGold => self.metal_gold = value,
            ColorName::MetalCopper => self.metal_copper = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_name_round_trip() {
        for name in ColorName::ALL {
            let parsed: ColorName = name.as_str().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn test_color_name_unknown() {
        let result = "chrome".parse::<ColorName>();
        assert!(result.is_err());
    }

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#FF0000").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hex("#b87333").unwrap(), Rgb::new(0xB8, 0x73, 0x33));
        assert_eq!(Rgb::from_hex("C0C0C0").unwrap(), Rgb::new(0xC0, 0xC0, 0xC0));
    }

    #[test]
    fn test_rgb_from_hex_invalid() {
        assert!(Rgb::from_hex("#FFF").is_err());
        assert!(Rgb::from_hex("#GGGGGG").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#FF00007").is_err());
    }

    #[test]
    fn test_rgb_to_hex_round_trip() {
        let rgb = Rgb::new(0x8B, 0x00, 0x00);
        assert_eq!(rgb.to_hex(), "#8B0000");
        assert_eq!(Rgb::from_hex(&rgb.to_hex()).unwrap(), rgb);
    }

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.resolve(ColorName::Primary), Rgb::new(0xFF, 0x00, 0x00));
        assert_eq!(theme.resolve(ColorName::Secondary), Rgb::new(0x8B, 0x00, 0x00));
        assert_eq!(theme.resolve(ColorName::BackgroundDark), Rgb::new(0x1A, 0x1A, 0x1A));
        assert_eq!(theme.resolve(ColorName::MetalCopper), Rgb::new(0xB8, 0x73, 0x33));
        // Accent and gold are deliberately the same value in the stock palette
        assert_eq!(
            theme.resolve(ColorName::Accent),
            theme.resolve(ColorName::MetalGold)
        );
    }

    #[test]
    fn test_theme_set_overrides_one_entry() {
        let mut theme = Theme::default();
        theme.set(ColorName::Primary, Rgb::new(0x00, 0x00, 0xFF));

        assert_eq!(theme.resolve(ColorName::Primary), Rgb::new(0, 0, 255));
        // Everything else untouched
        assert_eq!(theme.resolve(ColorName::Secondary), Rgb::new(0x8B, 0x00, 0x00));
    }
}
