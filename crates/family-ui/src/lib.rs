//! User interface theming for Family Hub
//!
//! This crate provides the role-based design system screens consume:
//! themes per family role, the active theme context, per-screen header
//! gradients, and derived component styles.
//!
//! # Design System
//!
//! Three themes are supported, one per [`family_core::Role`]:
//! - Adult - calm teal and navy
//! - Teen - violet and electric pink
//! - Child - bright and playful, with larger type and rounder shapes
//!
//! # Modules
//!
//! - [`theme`] - Theme catalog, color tokens, and the role resolver
//! - [`context`] - Active theme context passed to screens
//! - [`header`] - Header gradients per screen
//! - [`styles`] - Component styles derived from a theme
//! - [`tokens`] - Design tokens (spacing, sizing, radius, typography)
//!
//! # Example
//!
//! ```rust
//! use family_core::Role;
//! use family_ui::context::ThemeContext;
//! use family_ui::header::HeaderName;
//!
//! let ctx = ThemeContext::new(Role::Child);
//! let styles = ctx.styles();
//! let gradient = ctx.header(HeaderName::Home);
//! assert_eq!(gradient.start, ctx.theme().colors.primary);
//! assert_eq!(styles.body.font_family, "Nunito");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod header;
pub mod styles;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use theme::{
    adult_theme, all_themes, child_theme, get_theme, resolve_theme, resolve_theme_tag,
    teen_theme, Color, ColorToken, ColorTokens, LayoutTokens, Theme,
};

pub use context::{SharedTheme, ThemeContext};

pub use header::{header_gradient, header_gradient_for, HeaderError, HeaderGradient, HeaderName};

pub use styles::{AvatarStyle, ButtonStyle, ProgressBarStyle, StyleTokens, TextStyle, ViewStyle};

pub use tokens::{border, font_weight, radius, sizing, spacing, FontScale};
