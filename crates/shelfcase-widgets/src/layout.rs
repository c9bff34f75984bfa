//! Shelf chrome: plank painter and small layout helpers.

use egui::{Pos2, Rect, Stroke, Ui};

use crate::theme;

/// Paint a shelf plank into `rect` (the strip directly under a row of
/// spines).
pub fn shelf_plank(ui: &Ui, rect: Rect) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    ui.painter()
        .rect_filled(rect, egui::CornerRadius::same(2), theme::PLANK);

    // Front edge highlight line.
    let y = rect.top() + 1.5;
    ui.painter().line_segment(
        [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
        Stroke::new(1.0, theme::PLANK_EDGE),
    );
}

/// Draw a section label (small, muted text).
pub fn section_label(ui: &mut Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(10.0)
            .color(theme::TEXT_MUTED),
    );
}
