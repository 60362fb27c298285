//! UI layer for the desktop editor: app shell, themes, and small widgets.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::CatalogGuiApp;
