//! Reusable egui components for the shelfcase shelf.
//!
//! This crate provides the visual vocabulary of the widget:
//!
//! - **Tones**: the six-tone spine palette with contrast helpers
//! - **Spine**: the clickable tilted book spine
//! - **Detail panel**: title, narrative fragments, cover with fallback
//! - **Layout**: shelf plank and small chrome helpers
//!
//! Components take plain view data; mapping from application state is
//! the caller's job, so this crate depends on egui alone.

pub mod detail_panel;
pub mod layout;
pub mod spine;
pub mod tones;

pub use detail_panel::{detail_panel, CoverArt, DetailPanelResponse, DetailView};
pub use layout::{section_label, shelf_plank};
pub use spine::{paint_spine, Spine};
pub use tones::{tone_for, Tone, TONES};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Spine width in points.
    pub const SPINE_WIDTH: f32 = 44.0;
    /// Gap between spines in a row.
    pub const SPINE_GAP: f32 = 10.0;
    /// Shelf plank thickness.
    pub const PLANK_HEIGHT: f32 = 12.0;
    /// How far a spine rises on hover.
    pub const HOVER_LIFT: f32 = 6.0;
    /// Corner radius for spines.
    pub const CORNER_RADIUS: u8 = 3;
    /// Panel corner radius.
    pub const PANEL_RADIUS: u8 = 8;
    /// Detail cover height.
    pub const COVER_HEIGHT: f32 = 190.0;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(250, 250, 252, 250);
    /// Room background behind the shelves
    pub const WALL_BG: Color32 = Color32::from_rgb(246, 241, 233);
    /// Shelf plank wood
    pub const PLANK: Color32 = Color32::from_rgb(141, 103, 72);
    /// Shelf plank front edge
    pub const PLANK_EDGE: Color32 = Color32::from_rgb(110, 78, 52);
}
