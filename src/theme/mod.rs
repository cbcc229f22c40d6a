//! Theme tokens and style resolution

use anyhow::{anyhow, Context, Result};
use indexmap::IndexMap;
use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::model::Company;

/// Documented defaults used when a theme omits a token entirely.
pub const DEFAULT_PRIMARY_COLOR: &str = "#0A0A0A";
pub const DEFAULT_ACCENT_COLOR: &str = "#F5C55A";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#0F0F0F";
pub const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
pub const DEFAULT_PRIMARY_FONT: &str = "IBM Plex Sans";

/// Built-in preset names, in the order `themes` lists them.
pub const PRESETS: [&str; 4] = ["obsidian", "graphite", "ivory", "midnight"];

/// Theme definition with every token optional.
///
/// Themes come from built-in presets, TOML files, or a `[theme]` table in a
/// site config. Absent fields fall back through the resolver chain, so a
/// partial theme is always renderable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: Option<String>,
    pub colors: Option<ThemeColors>,
    pub typography: Option<ThemeTypography>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTypography {
    pub primary_font: Option<String>,
    pub secondary_font: Option<String>,
}

impl Theme {
    /// Look up a built-in preset by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "obsidian" => Some(Self::obsidian()),
            "graphite" => Some(Self::graphite()),
            "ivory" => Some(Self::ivory()),
            "midnight" => Some(Self::midnight()),
            _ => None,
        }
    }

    /// Load a theme from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read theme file {}", path.display()))?;
        let theme: Theme = toml::from_str(&content)
            .with_context(|| format!("failed to parse theme file {}", path.display()))?;
        Ok(theme)
    }

    /// Resolve a theme reference from config: a `.toml` path or a preset name.
    pub fn load(name_or_path: &str) -> Result<Self> {
        if name_or_path.ends_with(".toml") {
            return Self::from_file(Path::new(name_or_path));
        }
        Self::from_name(name_or_path).ok_or_else(|| {
            anyhow!(
                "unknown theme '{}' (built-ins: {})",
                name_or_path,
                PRESETS.join(", ")
            )
        })
    }

    /// Dark gold-on-black house style; mirrors the token defaults.
    pub fn obsidian() -> Self {
        Self::preset(
            "obsidian",
            "#0A0A0A",
            "#F5C55A",
            "#0F0F0F",
            "#FFFFFF",
            "IBM Plex Sans",
            "IBM Plex Serif",
        )
    }

    /// Cool slate with an ice-blue accent.
    pub fn graphite() -> Self {
        Self::preset(
            "graphite",
            "#14161A",
            "#5AC8F5",
            "#1A1D23",
            "#E8EAED",
            "Inter",
            "Inter",
        )
    }

    /// Light editorial theme for print-leaning brands.
    pub fn ivory() -> Self {
        Self::preset(
            "ivory",
            "#1C1B18",
            "#8C6D2F",
            "#FAF7F0",
            "#221F1A",
            "Source Serif Pro",
            "Source Sans Pro",
        )
    }

    /// Deep navy with a brass accent.
    pub fn midnight() -> Self {
        Self::preset(
            "midnight",
            "#0B1026",
            "#C8A24B",
            "#101631",
            "#EDF0FA",
            "Libre Franklin",
            "Libre Baskerville",
        )
    }

    fn preset(
        name: &str,
        primary: &str,
        accent: &str,
        background: &str,
        text: &str,
        primary_font: &str,
        secondary_font: &str,
    ) -> Self {
        Self {
            name: Some(name.to_string()),
            colors: Some(ThemeColors {
                primary: Some(primary.to_string()),
                accent: Some(accent.to_string()),
                background: Some(background.to_string()),
                text: Some(text.to_string()),
            }),
            typography: Some(ThemeTypography {
                primary_font: Some(primary_font.to_string()),
                secondary_font: Some(secondary_font.to_string()),
            }),
        }
    }
}

/// First candidate that is present and non-blank, else the fallback.
///
/// All six style tokens resolve through this one function so the fallback
/// order lives in exactly one place.
pub fn resolve_token<'a>(candidates: &[Option<&'a str>], fallback: &'a str) -> &'a str {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|value| !value.trim().is_empty())
        .unwrap_or(fallback)
}

/// The six resolved style tokens a page is guaranteed to have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTokens {
    pub primary_color: String,
    pub accent_color: String,
    pub background_color: String,
    pub text_color: String,
    pub primary_font: String,
    pub secondary_font: String,
}

impl StyleTokens {
    /// Resolve tokens for a render: theme field → company font field (fonts
    /// only) → literal default, in that priority order.
    pub fn resolve(theme: Option<&Theme>, company: &Company) -> Self {
        let colors = theme.and_then(|t| t.colors.as_ref());
        let typography = theme.and_then(|t| t.typography.as_ref());

        let primary_color = resolve_token(
            &[colors.and_then(|c| c.primary.as_deref())],
            DEFAULT_PRIMARY_COLOR,
        );
        let accent_color = resolve_token(
            &[colors.and_then(|c| c.accent.as_deref())],
            DEFAULT_ACCENT_COLOR,
        );
        let background_color = resolve_token(
            &[colors.and_then(|c| c.background.as_deref())],
            DEFAULT_BACKGROUND_COLOR,
        );
        let text_color = resolve_token(
            &[colors.and_then(|c| c.text.as_deref())],
            DEFAULT_TEXT_COLOR,
        );
        let primary_font = resolve_token(
            &[
                typography.and_then(|t| t.primary_font.as_deref()),
                company.primary_font_family.as_deref(),
            ],
            DEFAULT_PRIMARY_FONT,
        );
        let secondary_font = resolve_token(
            &[
                typography.and_then(|t| t.secondary_font.as_deref()),
                company.secondary_font_family.as_deref(),
            ],
            primary_font,
        );

        Self {
            primary_color: primary_color.to_string(),
            accent_color: accent_color.to_string(),
            background_color: background_color.to_string(),
            text_color: text_color.to_string(),
            primary_font: primary_font.to_string(),
            secondary_font: secondary_font.to_string(),
        }
    }

    /// The custom properties exposed to descendant styling, in the
    /// documented order.
    pub fn css_variables(&self) -> IndexMap<&'static str, &str> {
        IndexMap::from([
            ("--primary-color", self.primary_color.as_str()),
            ("--accent-color", self.accent_color.as_str()),
            ("--background-color", self.background_color.as_str()),
            ("--text-color", self.text_color.as_str()),
            ("--primary-font", self.primary_font.as_str()),
            ("--secondary-font", self.secondary_font.as_str()),
        ])
    }
}

/// Print the built-in presets with their palettes.
pub fn print_themes() {
    println!(
        "{:<10} {:<9} {:<9} {:<9} {:<9} FONT",
        "NAME", "PRIMARY", "ACCENT", "BG", "TEXT"
    );
    println!("{}", "-".repeat(70));

    for name in PRESETS {
        if let Some(theme) = Theme::from_name(name) {
            let colors = theme.colors.unwrap_or_default();
            let typography = theme.typography.unwrap_or_default();
            println!(
                "{:<10} {:<9} {:<9} {:<9} {:<9} {}",
                name,
                colors.primary.as_deref().unwrap_or(DEFAULT_PRIMARY_COLOR),
                colors.accent.as_deref().unwrap_or(DEFAULT_ACCENT_COLOR),
                colors.background.as_deref().unwrap_or(DEFAULT_BACKGROUND_COLOR),
                colors.text.as_deref().unwrap_or(DEFAULT_TEXT_COLOR),
                typography.primary_font.as_deref().unwrap_or(DEFAULT_PRIMARY_FONT)
            );
        }
    }
}

/// Derive an `#RRGGBBAA` value from a hex color and an alpha fraction.
///
/// Unparseable colors keep the raw-suffix behavior: the alpha byte is
/// appended to whatever string was given.
pub fn with_alpha(color: &str, alpha: f32) -> String {
    let byte = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    match color.trim().parse::<Srgb<u8>>() {
        Ok(rgb) => format!("#{:02X}{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue, byte),
        Err(_) => format!("{color}{byte:02X}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn company() -> Company {
        Company::new("Acme Capital")
    }

    #[test]
    fn absent_theme_resolves_every_default() {
        let tokens = StyleTokens::resolve(None, &company());
        assert_eq!(tokens.primary_color, DEFAULT_PRIMARY_COLOR);
        assert_eq!(tokens.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(tokens.background_color, DEFAULT_BACKGROUND_COLOR);
        assert_eq!(tokens.text_color, DEFAULT_TEXT_COLOR);
        assert_eq!(tokens.primary_font, DEFAULT_PRIMARY_FONT);
        assert_eq!(tokens.secondary_font, DEFAULT_PRIMARY_FONT);
    }

    #[test]
    fn partial_theme_fills_gaps_from_defaults() {
        let theme = Theme {
            name: None,
            colors: Some(ThemeColors {
                primary: Some("#112233".to_string()),
                accent: None,
                background: None,
                text: Some(String::new()),
            }),
            typography: None,
        };

        let tokens = StyleTokens::resolve(Some(&theme), &company());
        assert_eq!(tokens.primary_color, "#112233");
        assert_eq!(tokens.accent_color, DEFAULT_ACCENT_COLOR);
        assert_eq!(tokens.background_color, DEFAULT_BACKGROUND_COLOR);
        // Blank strings count as absent: tokens are never empty.
        assert_eq!(tokens.text_color, DEFAULT_TEXT_COLOR);
    }

    #[test]
    fn company_fonts_sit_between_theme_and_default() {
        let mut company = company();
        company.primary_font_family = Some("Georgia".to_string());
        company.secondary_font_family = Some("Verdana".to_string());

        let tokens = StyleTokens::resolve(None, &company);
        assert_eq!(tokens.primary_font, "Georgia");
        assert_eq!(tokens.secondary_font, "Verdana");

        let theme = Theme {
            typography: Some(ThemeTypography {
                primary_font: Some("Inter".to_string()),
                secondary_font: None,
            }),
            ..Theme::default()
        };
        let tokens = StyleTokens::resolve(Some(&theme), &company);
        assert_eq!(tokens.primary_font, "Inter");
        // Theme has no secondary, so the company field wins before defaults.
        assert_eq!(tokens.secondary_font, "Verdana");
    }

    #[test]
    fn secondary_font_falls_back_to_resolved_primary() {
        let theme = Theme {
            typography: Some(ThemeTypography {
                primary_font: Some("Inter".to_string()),
                secondary_font: None,
            }),
            ..Theme::default()
        };
        let tokens = StyleTokens::resolve(Some(&theme), &company());
        assert_eq!(tokens.secondary_font, "Inter");
    }

    #[test]
    fn css_variables_keep_documented_order() {
        let tokens = StyleTokens::resolve(None, &company());
        let names: Vec<&str> = tokens.css_variables().keys().copied().collect();
        assert_eq!(
            names,
            vec![
                "--primary-color",
                "--accent-color",
                "--background-color",
                "--text-color",
                "--primary-font",
                "--secondary-font",
            ]
        );
    }

    #[test]
    fn presets_define_every_token() {
        for name in PRESETS {
            let theme = Theme::from_name(name).unwrap();
            let colors = theme.colors.expect("preset colors");
            let typography = theme.typography.expect("preset typography");
            assert!(colors.primary.is_some(), "{name} missing primary");
            assert!(colors.accent.is_some(), "{name} missing accent");
            assert!(colors.background.is_some(), "{name} missing background");
            assert!(colors.text.is_some(), "{name} missing text");
            assert!(typography.primary_font.is_some(), "{name} missing font");
            assert!(typography.secondary_font.is_some());
        }
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(Theme::from_name("tokyo-night").is_none());
    }

    #[test]
    fn theme_file_round_trip() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        write!(
            file,
            r##"
name = "house"

[colors]
accent = "#F5C55A"

[typography]
primary_font = "IBM Plex Sans"
"##
        )
        .unwrap();

        let theme = Theme::from_file(file.path()).unwrap();
        assert_eq!(theme.name.as_deref(), Some("house"));
        let tokens = StyleTokens::resolve(Some(&theme), &company());
        assert_eq!(tokens.accent_color, "#F5C55A");
        assert_eq!(tokens.background_color, DEFAULT_BACKGROUND_COLOR);
    }

    #[test]
    fn alpha_matches_the_badge_suffix() {
        assert_eq!(with_alpha("#F5C55A", 48.0 / 255.0), "#F5C55A30");
        assert_eq!(with_alpha("#f5c55a", 48.0 / 255.0), "#F5C55A30");
        assert_eq!(with_alpha("gold", 48.0 / 255.0), "gold30");
    }
}
