//! Family Hub
//!
//! Facade over the workspace crates: family records and progress
//! computations from [`family_core`], role-based theming from [`family_ui`],
//! and logging setup for hosts embedding the library.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logging;

pub use family_core;
pub use family_ui;

pub use family_core::{AppConfig, Family, Member, Role};
pub use family_ui::{SharedTheme, StyleTokens, Theme, ThemeContext};
