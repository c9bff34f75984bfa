//! Shelfcase Application
//!
//! The application shell wiring core shelf state to the egui widgets:
//! event routing, cover loading, and animation driving.

mod app;
mod covers;
mod ui;

pub use app::ShelfApp;
pub use covers::{CoverLoader, CoverStatus};
pub use ui::UiAction;
