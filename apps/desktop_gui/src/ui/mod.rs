//! UI layer for the desktop app: app shell, card widgets, and theme.

pub mod app;
pub mod theme;

pub use app::{DesktopGuiApp, StartupConfig};
