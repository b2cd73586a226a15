//! Per-screen header gradients
//!
//! Each screen's header is a two-stop gradient drawn from the active theme's
//! color tokens. The screen-to-token table is fixed; a screen that is not in
//! it has no design and is reported as an error instead of getting a default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::theme::{ColorToken, ColorTokens};

/// Header lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    /// No gradient is registered for this screen
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
}

/// Result type for header lookups
pub type Result<T> = std::result::Result<T, HeaderError>;

/// Screens that carry a gradient header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderName {
    /// Family dashboard
    Home,
    /// Shared calendar
    Calendar,
    /// Chores
    Tasks,
    /// Shopping lists
    Shopping,
    /// Member directory
    Family,
    /// Reward shop
    Rewards,
    /// Member profile
    Profile,
    /// App settings
    Settings,
}

impl HeaderName {
    /// Every screen with a header
    pub const ALL: [HeaderName; 8] = [
        HeaderName::Home,
        HeaderName::Calendar,
        HeaderName::Tasks,
        HeaderName::Shopping,
        HeaderName::Family,
        HeaderName::Rewards,
        HeaderName::Profile,
        HeaderName::Settings,
    ];

    /// Gradient start and end tokens
    pub fn token_pair(&self) -> (ColorToken, ColorToken) {
        match self {
            HeaderName::Home => (ColorToken::Primary, ColorToken::Secondary),
            HeaderName::Calendar => (ColorToken::Secondary, ColorToken::Primary),
            HeaderName::Tasks => (ColorToken::Accent, ColorToken::Primary),
            HeaderName::Shopping => (ColorToken::Primary, ColorToken::Accent),
            HeaderName::Family => (ColorToken::Secondary, ColorToken::Accent),
            HeaderName::Rewards => (ColorToken::Tribs, ColorToken::Accent),
            HeaderName::Profile => (ColorToken::Primary, ColorToken::ProgressFill),
            HeaderName::Settings => (ColorToken::Secondary, ColorToken::TextSecondary),
        }
    }

    /// Lowercase screen name
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderName::Home => "home",
            HeaderName::Calendar => "calendar",
            HeaderName::Tasks => "tasks",
            HeaderName::Shopping => "shopping",
            HeaderName::Family => "family",
            HeaderName::Rewards => "rewards",
            HeaderName::Profile => "profile",
            HeaderName::Settings => "settings",
        }
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = HeaderError;

    fn from_str(s: &str) -> Result<Self> {
        HeaderName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| HeaderError::UnknownScreen(s.to_string()))
    }
}

/// A resolved two-color header gradient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderGradient {
    /// Top/left color
    pub start: String,
    /// Bottom/right color
    pub end: String,
}

impl HeaderGradient {
    /// Colors as an ordered `[start, end]` array
    pub fn colors(&self) -> [&str; 2] {
        [&self.start, &self.end]
    }
}

/// Resolve the gradient for a known screen
pub fn header_gradient(screen: HeaderName, tokens: &ColorTokens) -> HeaderGradient {
    let (start, end) = screen.token_pair();
    HeaderGradient {
        start: tokens.get(start).to_string(),
        end: tokens.get(end).to_string(),
    }
}

/// Resolve the gradient for a screen given by name
pub fn header_gradient_for(screen: &str, tokens: &ColorTokens) -> Result<HeaderGradient> {
    let name = screen.parse::<HeaderName>().map_err(|err| {
        tracing::error!(screen, "No header gradient registered for screen");
        err
    })?;
    Ok(header_gradient(name, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{adult_theme, all_themes, child_theme};

    #[test]
    fn test_home_gradient() {
        let theme = adult_theme();
        let gradient = header_gradient(HeaderName::Home, &theme.colors);
        assert_eq!(
            gradient.colors(),
            [theme.colors.primary.as_str(), theme.colors.secondary.as_str()]
        );
    }

    #[test]
    fn test_tasks_gradient() {
        let theme = child_theme();
        let gradient = header_gradient_for("tasks", &theme.colors).unwrap();
        assert_eq!(gradient.start, theme.colors.accent);
        assert_eq!(gradient.end, theme.colors.primary);
    }

    #[test]
    fn test_unknown_screen() {
        let theme = adult_theme();
        assert_eq!(
            header_gradient_for("nonexistent-screen", &theme.colors),
            Err(HeaderError::UnknownScreen("nonexistent-screen".to_string()))
        );
    }

    #[test]
    fn test_screen_names_are_case_sensitive() {
        assert!("Home".parse::<HeaderName>().is_err());
        assert_eq!("home".parse::<HeaderName>(), Ok(HeaderName::Home));
    }

    #[test]
    fn test_every_screen_resolves_for_every_theme() {
        for theme in all_themes() {
            for screen in HeaderName::ALL {
                let by_name = header_gradient_for(screen.as_str(), &theme.colors).unwrap();
                assert_eq!(by_name, header_gradient(screen, &theme.colors));
                assert!(!by_name.start.is_empty() && !by_name.end.is_empty());
            }
        }
    }

    #[test]
    fn test_header_name_serde_matches_display() {
        for screen in HeaderName::ALL {
            let json = serde_json::to_string(&screen).unwrap();
            assert_eq!(json, format!("\"{}\"", screen));
        }
    }
}
