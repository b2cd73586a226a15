//! Role-based theme catalog and resolver
//!
//! Every family member role gets its own visual theme:
//! - Adult: calm teal and navy, compact layout
//! - Teen: violet and electric pink
//! - Child: bright sunshine palette with larger type and rounder shapes
//!
//! Themes are built once per role on first access and shared as
//! `Arc<Theme>`; they are never mutated afterwards.
//!
//! # Usage
//!
//! ```rust
//! use family_ui::theme::{resolve_theme, resolve_theme_tag, ColorToken};
//! use family_core::Role;
//!
//! let theme = resolve_theme(Some(Role::Child));
//! let primary = theme.colors.get(ColorToken::Primary);
//!
//! // Unknown tags fall back to the adult theme
//! assert_eq!(resolve_theme_tag(Some("pirate")).name, Role::Adult);
//! ```

use family_core::Role;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::tokens::{radius, sizing, spacing};

// =============================================================================
// Color Types
// =============================================================================

/// A color as a hex string (`#RRGGBB`) or a CSS `rgba(...)` string
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// Check that a color is `#RRGGBB` or `rgba(r, g, b, a)`
pub fn is_valid_color(color: &str) -> bool {
    if color.starts_with('#') {
        return color.len() == 7 && parse_hex_color(color).is_some();
    }

    let Some(inner) = color
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return false;
    }
    let channels_ok = parts[..3].iter().all(|p| p.parse::<u8>().is_ok());
    let alpha_ok = parts[3]
        .parse::<f32>()
        .map(|a| (0.0..=1.0).contains(&a))
        .unwrap_or(false);
    channels_ok && alpha_ok
}

// =============================================================================
// Color Tokens
// =============================================================================

/// Semantic color token names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    /// Main brand color
    Primary,
    /// Supporting brand color
    Secondary,
    /// Highlight color for calls to action
    Accent,
    /// Screen background
    Background,
    /// Raised surface (sheets, inputs)
    Surface,
    /// Card background
    Card,
    /// Primary text
    Text,
    /// Muted text
    TextSecondary,
    /// Text on primary-colored backgrounds
    TextInverted,
    /// Border and divider color
    Border,
    /// Success background
    Success,
    /// Success text
    SuccessText,
    /// Warning background
    Warning,
    /// Danger background
    Danger,
    /// Danger text
    DangerText,
    /// Dark overlay for modals
    OverlayDark,
    /// Light overlay for pressed states
    OverlayLight,
    /// Active tab icon
    TabActive,
    /// Inactive tab icon
    TabInactive,
    /// Progress bar track
    ProgressTrack,
    /// Progress bar fill
    ProgressFill,
    /// Tribs coin color
    Tribs,
}

impl ColorToken {
    /// Every token, in declaration order
    pub const ALL: [ColorToken; 22] = [
        ColorToken::Primary,
        ColorToken::Secondary,
        ColorToken::Accent,
        ColorToken::Background,
        ColorToken::Surface,
        ColorToken::Card,
        ColorToken::Text,
        ColorToken::TextSecondary,
        ColorToken::TextInverted,
        ColorToken::Border,
        ColorToken::Success,
        ColorToken::SuccessText,
        ColorToken::Warning,
        ColorToken::Danger,
        ColorToken::DangerText,
        ColorToken::OverlayDark,
        ColorToken::OverlayLight,
        ColorToken::TabActive,
        ColorToken::TabInactive,
        ColorToken::ProgressTrack,
        ColorToken::ProgressFill,
        ColorToken::Tribs,
    ];

    /// camelCase key, as used in serialized token sets
    pub fn key(&self) -> &'static str {
        match self {
            ColorToken::Primary => "primary",
            ColorToken::Secondary => "secondary",
            ColorToken::Accent => "accent",
            ColorToken::Background => "background",
            ColorToken::Surface => "surface",
            ColorToken::Card => "card",
            ColorToken::Text => "text",
            ColorToken::TextSecondary => "textSecondary",
            ColorToken::TextInverted => "textInverted",
            ColorToken::Border => "border",
            ColorToken::Success => "success",
            ColorToken::SuccessText => "successText",
            ColorToken::Warning => "warning",
            ColorToken::Danger => "danger",
            ColorToken::DangerText => "dangerText",
            ColorToken::OverlayDark => "overlayDark",
            ColorToken::OverlayLight => "overlayLight",
            ColorToken::TabActive => "tabActive",
            ColorToken::TabInactive => "tabInactive",
            ColorToken::ProgressTrack => "progressTrack",
            ColorToken::ProgressFill => "progressFill",
            ColorToken::Tribs => "tribs",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The full set of semantic colors for one theme
///
/// One field per [`ColorToken`], so every theme defines every token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    /// Main brand color
    pub primary: Color,
    /// Supporting brand color
    pub secondary: Color,
    /// Highlight color for calls to action
    pub accent: Color,
    /// Screen background
    pub background: Color,
    /// Raised surface (sheets, inputs)
    pub surface: Color,
    /// Card background
    pub card: Color,
    /// Primary text
    pub text: Color,
    /// Muted text
    pub text_secondary: Color,
    /// Text on primary-colored backgrounds
    pub text_inverted: Color,
    /// Border and divider color
    pub border: Color,
    /// Success background
    pub success: Color,
    /// Success text
    pub success_text: Color,
    /// Warning background
    pub warning: Color,
    /// Danger background
    pub danger: Color,
    /// Danger text
    pub danger_text: Color,
    /// Dark overlay for modals
    pub overlay_dark: Color,
    /// Light overlay for pressed states
    pub overlay_light: Color,
    /// Active tab icon
    pub tab_active: Color,
    /// Inactive tab icon
    pub tab_inactive: Color,
    /// Progress bar track
    pub progress_track: Color,
    /// Progress bar fill
    pub progress_fill: Color,
    /// Tribs coin color
    pub tribs: Color,
}

impl ColorTokens {
    /// Get a color by token
    pub fn get(&self, token: ColorToken) -> &str {
        match token {
            ColorToken::Primary => &self.primary,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Accent => &self.accent,
            ColorToken::Background => &self.background,
            ColorToken::Surface => &self.surface,
            ColorToken::Card => &self.card,
            ColorToken::Text => &self.text,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::TextInverted => &self.text_inverted,
            ColorToken::Border => &self.border,
            ColorToken::Success => &self.success,
            ColorToken::SuccessText => &self.success_text,
            ColorToken::Warning => &self.warning,
            ColorToken::Danger => &self.danger,
            ColorToken::DangerText => &self.danger_text,
            ColorToken::OverlayDark => &self.overlay_dark,
            ColorToken::OverlayLight => &self.overlay_light,
            ColorToken::TabActive => &self.tab_active,
            ColorToken::TabInactive => &self.tab_inactive,
            ColorToken::ProgressTrack => &self.progress_track,
            ColorToken::ProgressFill => &self.progress_fill,
            ColorToken::Tribs => &self.tribs,
        }
    }

    /// Iterate over `(token, color)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, &str)> + '_ {
        ColorToken::ALL.iter().map(move |token| (*token, self.get(*token)))
    }
}

// =============================================================================
// Layout Tokens
// =============================================================================

/// Layout constants that vary by theme
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutTokens {
    /// Base spacing unit
    pub spacing: f32,
    /// Horizontal screen padding
    pub screen_padding: f32,
    /// Button and input corner radius
    pub border_radius: f32,
    /// Card corner radius
    pub card_radius: f32,
    /// Primary button height
    pub button_height: f32,
    /// Member avatar size
    pub avatar_size: f32,
    /// Icon size
    pub icon_size: f32,
    /// Progress bar height
    pub progress_height: f32,
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    /// Role this theme belongs to
    pub name: Role,
    /// Semantic colors
    pub colors: ColorTokens,
    /// Layout constants
    pub layout: LayoutTokens,
    /// Font family name
    pub font_family: String,
    /// Base body font size in pixels
    pub font_size_base: f32,
}

fn adult() -> Theme {
    Theme {
        name: Role::Adult,
        colors: ColorTokens {
            primary: "#2A9D8F".to_string(),    // Teal
            secondary: "#264653".to_string(),  // Deep navy
            accent: "#E9C46A".to_string(),     // Sand gold
            background: "#F7F9FA".to_string(),
            surface: "#FFFFFF".to_string(),
            card: "#FFFFFF".to_string(),
            text: "#1D2A30".to_string(),
            text_secondary: "#5F6F77".to_string(),
            text_inverted: "#FFFFFF".to_string(),
            border: "#DDE3E6".to_string(),
            success: "#D8F3E8".to_string(),
            success_text: "#1B7A4E".to_string(),
            warning: "#F4A261".to_string(),
            danger: "#FDE2E1".to_string(),
            danger_text: "#C0392B".to_string(),
            overlay_dark: "rgba(0, 0, 0, 0.5)".to_string(),
            overlay_light: "rgba(255, 255, 255, 0.2)".to_string(),
            tab_active: "#2A9D8F".to_string(),
            tab_inactive: "#9AA7AD".to_string(),
            progress_track: "#E4EBEE".to_string(),
            progress_fill: "#2A9D8F".to_string(),
            tribs: "#E9B949".to_string(),
        },
        layout: LayoutTokens {
            spacing: spacing::SPACE_SM,
            screen_padding: spacing::SPACE_LG,
            border_radius: radius::MD,
            card_radius: radius::LG,
            button_height: sizing::button::MD_HEIGHT,
            avatar_size: sizing::avatar::MD,
            icon_size: sizing::icon::MD,
            progress_height: 8.0,
        },
        font_family: "System".to_string(),
        font_size_base: 16.0,
    }
}

fn teen() -> Theme {
    Theme {
        name: Role::Teen,
        colors: ColorTokens {
            primary: "#7B2CBF".to_string(),    // Violet
            secondary: "#FF4D8D".to_string(),  // Electric pink
            accent: "#3DDC97".to_string(),     // Mint
            background: "#F5F3FA".to_string(),
            surface: "#FFFFFF".to_string(),
            card: "#FFFFFF".to_string(),
            text: "#1E1433".to_string(),
            text_secondary: "#6B6280".to_string(),
            text_inverted: "#FFFFFF".to_string(),
            border: "#E2DCF0".to_string(),
            success: "#D9F7EA".to_string(),
            success_text: "#168A5A".to_string(),
            warning: "#FFB347".to_string(),
            danger: "#FFE0E8".to_string(),
            danger_text: "#D1204F".to_string(),
            overlay_dark: "rgba(20, 8, 40, 0.6)".to_string(),
            overlay_light: "rgba(255, 255, 255, 0.25)".to_string(),
            tab_active: "#7B2CBF".to_string(),
            tab_inactive: "#A69DB8".to_string(),
            progress_track: "#EAE4F5".to_string(),
            progress_fill: "#FF4D8D".to_string(),
            tribs: "#FFC93C".to_string(),
        },
        layout: LayoutTokens {
            spacing: spacing::SPACE_SM,
            screen_padding: spacing::SPACE_LG,
            border_radius: radius::LG,
            card_radius: radius::XL,
            button_height: sizing::button::MD_HEIGHT,
            avatar_size: sizing::avatar::MD,
            icon_size: sizing::icon::MD,
            progress_height: 10.0,
        },
        font_family: "System".to_string(),
        font_size_base: 16.0,
    }
}

fn child() -> Theme {
    Theme {
        name: Role::Child,
        colors: ColorTokens {
            primary: "#FF8C42".to_string(),    // Tangerine
            secondary: "#FFD23F".to_string(),  // Sunshine
            accent: "#3BCEAC".to_string(),     // Lagoon
            background: "#FFF8EC".to_string(),
            surface: "#FFFFFF".to_string(),
            card: "#FFFFFF".to_string(),
            text: "#3D2C1E".to_string(),
            text_secondary: "#7A6552".to_string(),
            text_inverted: "#FFFFFF".to_string(),
            border: "#F3DFC1".to_string(),
            success: "#DFF7E3".to_string(),
            success_text: "#2E8B3E".to_string(),
            warning: "#FFB400".to_string(),
            danger: "#FFE3DC".to_string(),
            danger_text: "#D7443E".to_string(),
            overlay_dark: "rgba(61, 44, 30, 0.5)".to_string(),
            overlay_light: "rgba(255, 255, 255, 0.3)".to_string(),
            tab_active: "#FF8C42".to_string(),
            tab_inactive: "#C4AE96".to_string(),
            progress_track: "#FCE9CF".to_string(),
            progress_fill: "#3BCEAC".to_string(),
            tribs: "#FFC300".to_string(),
        },
        layout: LayoutTokens {
            spacing: spacing::SPACE_MD,
            screen_padding: spacing::SPACE_XL,
            border_radius: radius::XL,
            card_radius: radius::XXL,
            button_height: sizing::button::LG_HEIGHT,
            avatar_size: sizing::avatar::LG,
            icon_size: sizing::icon::LG,
            progress_height: 14.0,
        },
        font_family: "Nunito".to_string(),
        font_size_base: 18.0,
    }
}

// =============================================================================
// Catalog
// =============================================================================

fn build(theme: Theme) -> Arc<Theme> {
    debug_assert!(
        theme.colors.iter().all(|(_, color)| is_valid_color(color)),
        "{} theme has a malformed color",
        theme.name
    );
    Arc::new(theme)
}

static ADULT: Lazy<Arc<Theme>> = Lazy::new(|| build(adult()));
static TEEN: Lazy<Arc<Theme>> = Lazy::new(|| build(teen()));
static CHILD: Lazy<Arc<Theme>> = Lazy::new(|| build(child()));

/// The adult theme
pub fn adult_theme() -> Arc<Theme> {
    Arc::clone(&ADULT)
}

/// The teen theme
pub fn teen_theme() -> Arc<Theme> {
    Arc::clone(&TEEN)
}

/// The child theme
pub fn child_theme() -> Arc<Theme> {
    Arc::clone(&CHILD)
}

/// Get the theme for a role
pub fn get_theme(role: Role) -> Arc<Theme> {
    match role {
        Role::Adult => adult_theme(),
        Role::Teen => teen_theme(),
        Role::Child => child_theme(),
    }
}

/// All catalog themes, one per role
pub fn all_themes() -> [Arc<Theme>; 3] {
    [adult_theme(), teen_theme(), child_theme()]
}

/// Pick the theme for an optional role; no role means adult
pub fn resolve_theme(role: Option<Role>) -> Arc<Theme> {
    get_theme(role.unwrap_or_default())
}

/// Pick the theme for a raw role tag
///
/// Total: unknown, empty or missing tags resolve to the adult theme.
pub fn resolve_theme_tag(tag: Option<&str>) -> Arc<Theme> {
    get_theme(Role::from_tag(tag))
}

impl Theme {
    /// Shorthand for `self.colors.get(token)`
    pub fn color(&self, token: ColorToken) -> &str {
        self.colors.get(token)
    }

    /// Check if this is the playful child theme
    pub fn is_playful(&self) -> bool {
        self.name.is_child()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn token_keys(theme: &Theme) -> BTreeSet<String> {
        let value = serde_json::to_value(&theme.colors).unwrap();
        value.as_object().unwrap().keys().cloned().collect()
    }

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#2A9D8F"), Some((42, 157, 143)));
        assert_eq!(parse_hex_color("#FF"), None);
        assert_eq!(parse_hex_color("#ZZZZZZ"), None);
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("#FF8C42"));
        assert!(is_valid_color("rgba(0, 0, 0, 0.5)"));
        assert!(!is_valid_color("#FFF"));
        assert!(!is_valid_color("rgba(0, 0, 0)"));
        assert!(!is_valid_color("rgba(300, 0, 0, 0.5)"));
        assert!(!is_valid_color("tomato"));
    }

    // ==========================================================================
    // Token Set Tests
    // ==========================================================================

    #[test]
    fn test_token_key_parity_across_roles() {
        let adult = token_keys(&adult_theme());
        assert_eq!(adult, token_keys(&teen_theme()));
        assert_eq!(adult, token_keys(&child_theme()));
        assert_eq!(adult.len(), ColorToken::ALL.len());
    }

    #[test]
    fn test_token_keys_match_serialized_names() {
        let keys = token_keys(&adult_theme());
        for token in ColorToken::ALL {
            assert!(keys.contains(token.key()), "missing key {}", token);
            let serialized = serde_json::to_string(&token).unwrap();
            assert_eq!(serialized, format!("\"{}\"", token.key()));
        }
    }

    #[test]
    fn test_get_matches_serialized_values() {
        for theme in all_themes() {
            let value = serde_json::to_value(&theme.colors).unwrap();
            for (token, color) in theme.colors.iter() {
                assert_eq!(value[token.key()], color);
            }
        }
    }

    #[test]
    fn test_all_colors_are_valid() {
        for theme in all_themes() {
            for (token, color) in theme.colors.iter() {
                assert!(
                    is_valid_color(color),
                    "{} theme has invalid {}: {}",
                    theme.name,
                    token,
                    color
                );
            }
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "malformed color")]
    fn test_build_rejects_malformed_color() {
        let mut theme = adult();
        theme.colors.accent = "sand".to_string();
        build(theme);
    }

    // ==========================================================================
    // Resolver Tests
    // ==========================================================================

    #[test]
    fn test_resolve_theme() {
        assert_eq!(resolve_theme(Some(Role::Child)).name, Role::Child);
        assert_eq!(resolve_theme(Some(Role::Teen)).name, Role::Teen);
        assert_eq!(resolve_theme(Some(Role::Adult)).name, Role::Adult);
        assert_eq!(resolve_theme(None).name, Role::Adult);
    }

    #[test]
    fn test_resolve_theme_tag_falls_back_to_adult() {
        assert_eq!(resolve_theme_tag(Some("child")).name, Role::Child);
        assert_eq!(resolve_theme_tag(Some("teen")).name, Role::Teen);
        assert_eq!(resolve_theme_tag(Some("adult")).name, Role::Adult);
        assert_eq!(resolve_theme_tag(None).name, Role::Adult);
        assert_eq!(resolve_theme_tag(Some("unknown-garbage")).name, Role::Adult);
    }

    #[test]
    fn test_catalog_instances_are_shared() {
        assert!(Arc::ptr_eq(&child_theme(), &resolve_theme(Some(Role::Child))));
        assert!(Arc::ptr_eq(&adult_theme(), &resolve_theme_tag(Some("nope"))));
    }

    // ==========================================================================
    // Theme Content Tests
    // ==========================================================================

    #[test]
    fn test_child_theme_is_larger() {
        let adult = adult_theme();
        let child = child_theme();
        assert!(child.font_size_base > adult.font_size_base);
        assert!(child.layout.button_height > adult.layout.button_height);
        assert!(child.layout.border_radius > adult.layout.border_radius);
        assert!(child.is_playful());
        assert!(!adult.is_playful());
    }

    #[test]
    fn test_theme_color_shorthand() {
        let theme = adult_theme();
        assert_eq!(theme.color(ColorToken::Primary), "#2A9D8F");
        assert_eq!(theme.color(ColorToken::OverlayDark), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn test_theme_serialization() {
        let theme = teen_theme();
        let json = serde_json::to_string(theme.as_ref()).unwrap();
        assert!(json.contains(r#""name":"teen""#));
        assert!(json.contains(r#""fontSizeBase":16.0"#));
        let deserialized: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(&deserialized, theme.as_ref());
    }

    proptest! {
        #[test]
        fn prop_any_tag_resolves(tag in ".*") {
            let theme = resolve_theme_tag(Some(&tag));
            let expected = match tag.trim().to_lowercase().as_str() {
                "child" => Role::Child,
                "teen" => Role::Teen,
                _ => Role::Adult,
            };
            prop_assert_eq!(theme.name, expected);
            prop_assert_eq!(theme.colors.iter().count(), ColorToken::ALL.len());
        }
    }
}
