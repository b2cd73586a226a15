//! Derived component styles
//!
//! [`StyleTokens::from_theme`] turns a theme into the concrete styles screens
//! apply. It is a pure function: the same theme always yields equal tokens,
//! so the host framework can memoize on the theme.

use serde::{Deserialize, Serialize};

use crate::theme::{ColorToken, Theme};
use crate::tokens::{border, font_weight, radius, sizing, FontScale};

/// Line height multiplier for body text
const BODY_LINE_HEIGHT: f32 = 1.4;

/// Line height multiplier for titles
const TITLE_LINE_HEIGHT: f32 = 1.2;

/// A text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Text color
    pub color: String,
    /// Font family name
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (400-800)
    pub font_weight: u16,
    /// Line height in pixels
    pub line_height: f32,
}

/// A container style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStyle {
    /// Background color
    pub background: String,
    /// Border color
    pub border_color: String,
    /// Border width
    pub border_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Inner padding
    pub padding: f32,
}

/// A button style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStyle {
    /// Button container
    pub container: ViewStyle,
    /// Button label
    pub label: TextStyle,
    /// Button height
    pub height: f32,
}

/// A progress bar style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressBarStyle {
    /// Track color
    pub track: String,
    /// Fill color
    pub fill: String,
    /// Bar height
    pub height: f32,
    /// Corner radius
    pub radius: f32,
}

impl ProgressBarStyle {
    /// Width of the fill for a percentage of `track_width`
    pub fn fill_width(&self, percent: u8, track_width: f32) -> f32 {
        track_width * f32::from(percent.min(100)) / 100.0
    }
}

/// An avatar style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarStyle {
    /// Diameter
    pub size: f32,
    /// Diameter on the profile screen
    pub profile_size: f32,
    /// Ring color around the avatar
    pub ring: String,
}

/// All derived styles for one theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleTokens {
    /// Font sizes
    pub font_scale: FontScale,
    /// Screen container
    pub screen: ViewStyle,
    /// Card container
    pub card: ViewStyle,
    /// Modal backdrop
    pub overlay: ViewStyle,
    /// Primary call-to-action
    pub primary_button: ButtonStyle,
    /// Secondary action
    pub secondary_button: ButtonStyle,
    /// Destructive action
    pub danger_button: ButtonStyle,
    /// Header title on the gradient
    pub header_title: TextStyle,
    /// Body text
    pub body: TextStyle,
    /// Muted caption text
    pub caption: TextStyle,
    /// Tribs balance text
    pub tribs_badge: TextStyle,
    /// Progress bar
    pub progress_bar: ProgressBarStyle,
    /// Member avatar
    pub avatar: AvatarStyle,
    /// Header height
    pub header_height: f32,
}

impl StyleTokens {
    /// Derive styles from a theme
    pub fn from_theme(theme: &Theme) -> Self {
        let scale = FontScale::from_base(theme.font_size_base);
        let layout = &theme.layout;

        let text = |token: ColorToken, size: f32, weight: u16, line_height: f32| TextStyle {
            color: theme.color(token).to_string(),
            font_family: theme.font_family.clone(),
            font_size: size,
            font_weight: weight,
            line_height: size * line_height,
        };

        let view = |background: ColorToken, border_token: ColorToken, width: f32, r: f32, pad: f32| {
            ViewStyle {
                background: theme.color(background).to_string(),
                border_color: theme.color(border_token).to_string(),
                border_width: width,
                border_radius: r,
                padding: pad,
            }
        };

        let button = |background: ColorToken, label: ColorToken| ButtonStyle {
            container: view(
                background,
                background,
                border::THIN,
                layout.border_radius,
                layout.spacing * 2.0,
            ),
            label: text(label, scale.lg, font_weight::BOLD, TITLE_LINE_HEIGHT),
            height: layout.button_height,
        };

        Self {
            font_scale: scale,
            screen: view(
                ColorToken::Background,
                ColorToken::Background,
                0.0,
                radius::NONE,
                layout.screen_padding,
            ),
            card: view(
                ColorToken::Card,
                ColorToken::Border,
                border::HAIRLINE,
                layout.card_radius,
                layout.spacing * 2.0,
            ),
            overlay: view(
                ColorToken::OverlayDark,
                ColorToken::OverlayDark,
                0.0,
                radius::NONE,
                0.0,
            ),
            primary_button: button(ColorToken::Primary, ColorToken::TextInverted),
            secondary_button: button(ColorToken::Surface, ColorToken::Primary),
            danger_button: button(ColorToken::Danger, ColorToken::DangerText),
            header_title: text(
                ColorToken::TextInverted,
                scale.title,
                font_weight::HEAVY,
                TITLE_LINE_HEIGHT,
            ),
            body: text(ColorToken::Text, scale.md, font_weight::NORMAL, BODY_LINE_HEIGHT),
            caption: text(
                ColorToken::TextSecondary,
                scale.xs,
                font_weight::NORMAL,
                BODY_LINE_HEIGHT,
            ),
            tribs_badge: text(
                ColorToken::Tribs,
                scale.lg,
                font_weight::SEMI_BOLD,
                TITLE_LINE_HEIGHT,
            ),
            progress_bar: ProgressBarStyle {
                track: theme.color(ColorToken::ProgressTrack).to_string(),
                fill: theme.color(ColorToken::ProgressFill).to_string(),
                height: layout.progress_height,
                radius: layout.progress_height / 2.0,
            },
            avatar: AvatarStyle {
                size: layout.avatar_size,
                profile_size: sizing::avatar::PROFILE,
                ring: theme.color(ColorToken::Accent).to_string(),
            },
            header_height: sizing::HEADER_HEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{adult_theme, all_themes, child_theme};

    #[test]
    fn test_styles_are_deterministic() {
        for theme in all_themes() {
            assert_eq!(StyleTokens::from_theme(&theme), StyleTokens::from_theme(&theme));
        }
    }

    #[test]
    fn test_styles_draw_from_theme() {
        let theme = adult_theme();
        let styles = StyleTokens::from_theme(&theme);
        assert_eq!(styles.screen.background, theme.colors.background);
        assert_eq!(styles.primary_button.container.background, theme.colors.primary);
        assert_eq!(styles.primary_button.label.color, theme.colors.text_inverted);
        assert_eq!(styles.danger_button.label.color, theme.colors.danger_text);
        assert_eq!(styles.overlay.background, "rgba(0, 0, 0, 0.5)");
        assert_eq!(styles.body.font_family, "System");
        assert_eq!(styles.body.font_size, 16.0);
    }

    #[test]
    fn test_child_styles_are_bigger() {
        let adult = StyleTokens::from_theme(&adult_theme());
        let child = StyleTokens::from_theme(&child_theme());
        assert!(child.body.font_size > adult.body.font_size);
        assert!(child.primary_button.height > adult.primary_button.height);
        assert!(child.progress_bar.height > adult.progress_bar.height);
        assert_eq!(child.body.font_family, "Nunito");
    }

    #[test]
    fn test_line_height_scales_with_size() {
        let styles = StyleTokens::from_theme(&adult_theme());
        assert!(styles.header_title.line_height > styles.body.line_height);
        assert!((styles.body.line_height - 16.0 * 1.4).abs() < f32::EPSILON * 32.0);
    }

    #[test]
    fn test_progress_fill_width() {
        let styles = StyleTokens::from_theme(&adult_theme());
        let bar = &styles.progress_bar;
        assert_eq!(bar.fill_width(0, 200.0), 0.0);
        assert_eq!(bar.fill_width(50, 200.0), 100.0);
        assert_eq!(bar.fill_width(100, 200.0), 200.0);
        assert_eq!(bar.fill_width(255, 200.0), 200.0);
        assert_eq!(bar.radius, bar.height / 2.0);
    }
}
