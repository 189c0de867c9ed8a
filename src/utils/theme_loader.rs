use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Light or dark rendering mode. The navigation state only ever stores this
/// flag; the concrete palette is resolved from it at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeFile {
    #[allow(dead_code)]
    pub name: String,
    pub themes: Vec<ThemeVariant>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ThemeVariant {
    #[allow(dead_code)]
    pub name: String,
    pub mode: String, // "light" or "dark"
    pub colors: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct TuiTheme {
    pub background: Color,
    pub foreground: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub border: Color,
    pub badge_bg: Color,
    pub badge_fg: Color,
    pub muted: Color,
    pub accent: Color,
}

impl TuiTheme {
    /// Built-in palette used when no theme file is configured.
    pub fn builtin(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                selection_bg: Color::Black,
                selection_fg: Color::White,
                border: Color::DarkGray,
                badge_bg: Color::Yellow,
                badge_fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Yellow,
            },
            ThemeMode::Dark => Self {
                background: Color::Black,
                foreground: Color::Gray,
                selection_bg: Color::White,
                selection_fg: Color::Black,
                border: Color::Gray,
                badge_bg: Color::Yellow,
                badge_fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Yellow,
            },
        }
    }
}

impl Default for TuiTheme {
    fn default() -> Self {
        Self::builtin(ThemeMode::Light)
    }
}

/// Load the palette for `mode` from a JSON theme file. Falls back to the
/// first variant when no variant declares the requested mode.
pub fn load_theme(path: &Path, mode: ThemeMode) -> Result<TuiTheme> {
    let content = fs::read_to_string(path).context("Failed to read theme file")?;
    let theme_file: ThemeFile =
        serde_json::from_str(&content).context("Failed to parse theme JSON")?;

    let variant = theme_file
        .themes
        .iter()
        .find(|t| t.mode == mode.as_str())
        .or_else(|| theme_file.themes.first())
        .context("No matching theme variant found")?;

    let builtin = TuiTheme::builtin(mode);
    let color = |key: &str, fallback: Color| {
        variant
            .colors
            .get(key)
            .map(|hex| parse_color(hex))
            .unwrap_or(fallback)
    };

    Ok(TuiTheme {
        background: color("background", builtin.background),
        foreground: color("foreground", builtin.foreground),
        selection_bg: color("selection.background", builtin.selection_bg),
        selection_fg: color("selection.foreground", builtin.selection_fg),
        border: color("border", builtin.border),
        badge_bg: color("badge.background", builtin.badge_bg),
        badge_fg: color("badge.foreground", builtin.badge_fg),
        muted: color("muted.foreground", builtin.muted),
        accent: color("accent.foreground", builtin.accent),
    })
}

fn parse_color(hex: &str) -> Color {
    if let Ok(c) = hex.parse::<Color>() {
        return c;
    }

    let hex = hex.trim_start_matches('#');
    match hex.len() {
        6 | 8 => {
            // For 8-char hex (with alpha), ignore the alpha and use the RGB components.
            let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_toggles_both_ways() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!(ThemeMode::parse("Light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse(" DARK "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("solarized"), None);
    }

    #[test]
    fn parse_color_handles_hex_and_named() {
        assert_eq!(parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#ff0000cc"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("not-a-color"), Color::Reset);
    }

    #[test]
    fn load_theme_picks_matching_variant() {
        let json = r##"{
            "name": "Test",
            "themes": [
                {"name": "Test Light", "mode": "light", "colors": {"background": "#ffffff"}},
                {"name": "Test Dark", "mode": "dark", "colors": {"background": "#101010"}}
            ]
        }"##;
        let dir = std::env::temp_dir().join("tui-blog-app-theme-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("test.json");
        std::fs::write(&path, json).unwrap();

        let dark = load_theme(&path, ThemeMode::Dark).unwrap();
        assert_eq!(dark.background, Color::Rgb(16, 16, 16));

        let light = load_theme(&path, ThemeMode::Light).unwrap();
        assert_eq!(light.background, Color::Rgb(255, 255, 255));

        let _ = std::fs::remove_file(path);
    }
}
