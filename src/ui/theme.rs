//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two Catppuccin variants are built in; custom
//! themes are loaded from a file path given in the plugin configuration.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme (default)
//! - `catppuccin-latte`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! checkbox_fg = "#a6e3a1"
//! error_fg = "#f38ba8"
//! spinner_fg = "#89dceb"
//! badge_colors = ["#e76f51", "#00b4d8", "#e9c46a"]
//! ```
//!
//! `badge_colors` may be omitted; the three defaults above are used.

use crate::domain::{CharpickError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Badge dot colors cycled across selected characters.
pub const DEFAULT_BADGE_COLORS: [&str; 3] = ["#e76f51", "#00b4d8", "#e9c46a"];

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Cursor row foreground.
    pub selection_fg: String,
    /// Cursor row background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, episode counts, thumbnails.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Checked checkbox color.
    pub checkbox_fg: String,
    /// Inline error line color.
    pub error_fg: String,
    /// Loading spinner color.
    pub spinner_fg: String,

    #[serde(default = "default_badge_colors")]
    pub badge_colors: Vec<String>,
}

fn default_badge_colors() -> Vec<String> {
    DEFAULT_BADGE_COLORS.iter().map(|c| (*c).to_string()).collect()
}

impl ThemeColors {
    /// Badge color for the `slot`-th selected character, cycling the palette.
    #[must_use]
    pub fn badge_color(&self, slot: usize) -> &str {
        if self.badge_colors.is_empty() {
            return DEFAULT_BADGE_COLORS[slot % DEFAULT_BADGE_COLORS.len()];
        }
        &self.badge_colors[slot % self.badge_colors.len()]
    }
}

impl Theme {
    /// Loads a built-in theme by name, or `None` if the name is unknown.
    ///
    /// ```
    /// use charpick::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// [`CharpickError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CharpickError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| CharpickError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Hex color to RGB; white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Mocha palette built in code, used if the embedded TOML cannot be read.
    fn fallback() -> Self {
        let c = |hex: &str| hex.to_string();
        Self {
            name: "catppuccin-mocha".to_string(),
            colors: ThemeColors {
                header_fg: c("#cdd6f4"),
                header_bg: None,
                selection_fg: c("#1e1e2e"),
                selection_bg: c("#f5c2e7"),
                text_normal: c("#cdd6f4"),
                text_dim: c("#6c7086"),
                border: c("#45475a"),
                search_bar_border: c("#f5c2e7"),
                match_highlight_fg: c("#1e1e2e"),
                match_highlight_bg: c("#f9e2af"),
                empty_state_fg: c("#89b4fa"),
                checkbox_fg: c("#a6e3a1"),
                error_fg: c("#f38ba8"),
                spinner_fg: c("#89dceb"),
                badge_colors: default_badge_colors(),
            },
        }
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha").unwrap_or_else(|| {
            tracing::error!("embedded catppuccin-mocha theme failed to parse");
            Self::fallback()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
            assert_eq!(theme.colors.badge_colors.len(), 3);
        }
    }

    #[test]
    fn embedded_default_matches_fallback() {
        assert_eq!(Theme::default(), Theme::fallback());
    }

    #[test]
    fn badge_colors_cycle() {
        let theme = Theme::default();
        assert_eq!(theme.colors.badge_color(0), "#e76f51");
        assert_eq!(theme.colors.badge_color(4), "#00b4d8");
    }

    #[test]
    fn custom_file_without_badges_gets_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut toml = toml::to_string(&Theme::default()).unwrap();
        toml = toml
            .lines()
            .filter(|l| !l.starts_with("badge_colors"))
            .collect::<Vec<_>>()
            .join("\n");
        file.write_all(toml.as_bytes()).unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.colors.badge_colors, default_badge_colors());
    }

    #[test]
    fn malformed_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = ").unwrap();
        assert!(matches!(Theme::from_file(file.path()), Err(CharpickError::Theme(_))));
    }

    #[test]
    fn bad_hex_renders_white() {
        assert_eq!(Theme::fg("#zz"), "\u{001b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("#1e1e2e"), "\u{001b}[48;2;30;30;46m");
    }
}
