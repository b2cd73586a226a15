//! Design tokens for Family Hub
//!
//! The shared scales the role themes pick from. Theme-specific values live
//! in [`crate::theme::LayoutTokens`]; styles read the rest directly.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Gaps and padding, on a 4px grid
pub mod spacing {
    /// 8px - base gap for adult and teen layouts
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - base gap for the roomier child layout
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - screen edge padding
    pub const SPACE_LG: f32 = 16.0;
    /// 20px - wide screen edge padding
    pub const SPACE_XL: f32 = 20.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Component dimensions
pub mod sizing {
    /// Tab bar and list icons
    pub mod icon {
        /// 20px
        pub const MD: f32 = 20.0;
        /// 24px, for the child theme
        pub const LG: f32 = 24.0;
    }

    /// Member avatars
    pub mod avatar {
        /// 48px list avatar
        pub const MD: f32 = 48.0;
        /// 64px list avatar, for the child theme
        pub const LG: f32 = 64.0;
        /// 96px avatar on the profile screen
        pub const PROFILE: f32 = 96.0;
    }

    /// Primary button heights
    pub mod button {
        /// 44px, the minimum comfortable hit target
        pub const MD_HEIGHT: f32 = 44.0;
        /// 56px, for small fingers
        pub const LG_HEIGHT: f32 = 56.0;
    }

    /// Screen header height, gradient included
    pub const HEADER_HEIGHT: f32 = 120.0;
}

// =============================================================================
// Corner Tokens
// =============================================================================

/// Corner radii
pub mod radius {
    /// Square corners
    pub const NONE: f32 = 0.0;
    /// 8px
    pub const MD: f32 = 8.0;
    /// 12px
    pub const LG: f32 = 12.0;
    /// 16px
    pub const XL: f32 = 16.0;
    /// 24px, child cards
    pub const XXL: f32 = 24.0;
}

/// Border widths
pub mod border {
    /// Card outline (0.5px)
    pub const HAIRLINE: f32 = 0.5;
    /// Button outline (1px)
    pub const THIN: f32 = 1.0;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font weights
pub mod font_weight {
    /// Body text (400)
    pub const NORMAL: u16 = 400;
    /// Tribs badge (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Button labels (700)
    pub const BOLD: u16 = 700;
    /// Header titles (800)
    pub const HEAVY: u16 = 800;
}

/// Font sizes derived from a theme's base size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontScale {
    /// Captions and badges
    pub xs: f32,
    /// Secondary text
    pub sm: f32,
    /// Body text
    pub md: f32,
    /// Emphasized body text
    pub lg: f32,
    /// Section titles
    pub xl: f32,
    /// Screen titles
    pub title: f32,
}

impl FontScale {
    /// Build a scale around `base`
    pub fn from_base(base: f32) -> Self {
        Self {
            xs: base - 4.0,
            sm: base - 2.0,
            md: base,
            lg: base + 2.0,
            xl: base + 6.0,
            title: base + 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_scale_from_base() {
        let scale = FontScale::from_base(16.0);
        assert_eq!(scale.md, 16.0);
        assert_eq!(scale.xs, 12.0);
        assert_eq!(scale.title, 28.0);
        assert!(scale.xs < scale.sm && scale.sm < scale.md);
        assert!(scale.lg < scale.xl && scale.xl < scale.title);
    }

    #[test]
    fn test_child_scale_is_larger_everywhere() {
        let adult = FontScale::from_base(16.0);
        let child = FontScale::from_base(18.0);
        assert!(child.xs > adult.xs);
        assert!(child.title > adult.title);
    }
}
