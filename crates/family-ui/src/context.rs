//! Active theme context
//!
//! The active theme is passed to screens explicitly. A [`ThemeContext`] is
//! built once the signed-in member's role is known and replaced as a whole
//! when the role changes. [`SharedTheme`] wraps one behind a lock for
//! components that keep a handle across render passes; readers clone the
//! `Arc<Theme>` and always see one complete theme.

use family_core::{Member, Role};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::header::{header_gradient, HeaderGradient, HeaderName};
use crate::styles::StyleTokens;
use crate::theme::{get_theme, Theme};

/// The theme selected for one role
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    role: Role,
    theme: Arc<Theme>,
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Role::default())
    }
}

impl ThemeContext {
    /// Context for a role
    pub fn new(role: Role) -> Self {
        Self {
            role,
            theme: get_theme(role),
        }
    }

    /// Context for an optional role; no role means adult
    pub fn from_role(role: Option<Role>) -> Self {
        Self::new(role.unwrap_or_default())
    }

    /// Context for the signed-in member
    pub fn for_member(member: &Member) -> Self {
        Self::new(member.role)
    }

    /// A replacement context for another role
    pub fn with_role(&self, role: Role) -> Self {
        Self::new(role)
    }

    /// Role the theme was selected for
    pub fn role(&self) -> Role {
        self.role
    }

    /// The active theme
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// Style tokens for the active theme
    pub fn styles(&self) -> StyleTokens {
        StyleTokens::from_theme(&self.theme)
    }

    /// Header gradient for a screen in the active theme
    pub fn header(&self, screen: HeaderName) -> HeaderGradient {
        header_gradient(screen, &self.theme.colors)
    }
}

/// Cloneable handle to the current [`ThemeContext`]
#[derive(Debug, Clone, Default)]
pub struct SharedTheme {
    inner: Arc<RwLock<ThemeContext>>,
}

impl SharedTheme {
    /// Create a handle starting at `role`
    pub fn new(role: Role) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ThemeContext::new(role))),
        }
    }

    /// Snapshot of the current context
    pub fn context(&self) -> ThemeContext {
        self.inner.read().clone()
    }

    /// The current theme
    pub fn current(&self) -> Arc<Theme> {
        Arc::clone(self.inner.read().theme())
    }

    /// The current role
    pub fn role(&self) -> Role {
        self.inner.read().role()
    }

    /// Switch to the theme for `role`
    ///
    /// Returns `true` if the theme changed.
    pub fn set_role(&self, role: Role) -> bool {
        let mut guard = self.inner.write();
        if guard.role() == role {
            return false;
        }
        let previous = guard.role();
        let next = guard.with_role(role);
        *guard = next;
        tracing::info!(from = %previous, to = %role, "Switched theme");
        true
    }

    /// Switch to the theme for the signed-in member
    pub fn set_member(&self, member: &Member) -> bool {
        self.set_role(member.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{adult_theme, child_theme, teen_theme};

    fn member(role: Role) -> Member {
        Member {
            id: "m1".to_string(),
            name: "Mia".to_string(),
            role,
            tribs: 10,
            max_tribs: 100,
            avatar: None,
            color: None,
        }
    }

    #[test]
    fn test_context_default_is_adult() {
        let ctx = ThemeContext::default();
        assert_eq!(ctx.role(), Role::Adult);
        assert!(Arc::ptr_eq(ctx.theme(), &adult_theme()));
        assert_eq!(ThemeContext::from_role(None), ctx);
    }

    #[test]
    fn test_context_for_member() {
        let ctx = ThemeContext::for_member(&member(Role::Child));
        assert!(Arc::ptr_eq(ctx.theme(), &child_theme()));
    }

    #[test]
    fn test_with_role_leaves_original() {
        let ctx = ThemeContext::new(Role::Adult);
        let teen = ctx.with_role(Role::Teen);
        assert_eq!(ctx.role(), Role::Adult);
        assert_eq!(teen.role(), Role::Teen);
    }

    #[test]
    fn test_context_helpers() {
        let ctx = ThemeContext::new(Role::Teen);
        assert_eq!(ctx.styles(), StyleTokens::from_theme(&teen_theme()));
        assert_eq!(ctx.header(HeaderName::Home).start, teen_theme().colors.primary);
    }

    #[test]
    fn test_shared_theme_switch() {
        let shared = SharedTheme::new(Role::Adult);
        let reader = shared.clone();
        let before = reader.current();

        assert!(shared.set_member(&member(Role::Child)));
        assert_eq!(reader.role(), Role::Child);
        assert!(Arc::ptr_eq(&reader.current(), &child_theme()));

        // Snapshot taken before the switch still holds the complete old theme
        assert_eq!(before.name, Role::Adult);
    }

    #[test]
    fn test_shared_theme_same_role_is_noop() {
        let shared = SharedTheme::new(Role::Teen);
        assert!(!shared.set_role(Role::Teen));
        assert_eq!(shared.context().role(), Role::Teen);
    }

    #[test]
    fn test_shared_theme_across_threads() {
        let shared = SharedTheme::default();
        let writer = shared.clone();
        let handle = std::thread::spawn(move || writer.set_role(Role::Child));
        for _ in 0..100 {
            let theme = shared.current();
            assert!(theme.name == Role::Adult || theme.name == Role::Child);
        }
        assert!(handle.join().unwrap());
        assert_eq!(shared.role(), Role::Child);
    }
}
