//! The detail panel: title, narrative fragments, cover with fallback.

use egui::{
    Align2, Color32, CornerRadius, CursorIcon, FontId, Frame, Margin, Rect, RichText, Sense,
    Stroke, TextureHandle, Ui, vec2,
};

use crate::{sizing, theme, tones::Tone};

/// What the cover area should draw.
pub enum CoverArt<'a> {
    /// A loaded cover texture.
    Texture(&'a TextureHandle),
    /// No cover (absent or failed to load): flat tone plus initials.
    Fallback { tone: &'a Tone, initials: &'a str },
}

/// View data for one selected item.
///
/// Mirrors the application's detail content without depending on it, so
/// this crate stays a leaf.
pub struct DetailView<'a> {
    /// Panel title.
    pub title: &'a str,
    /// Quoted line, shown in italics.
    pub quote: Option<&'a str>,
    /// Free-form summary paragraph.
    pub summary: Option<&'a str>,
    /// Category label.
    pub category: Option<&'a str>,
    /// External link URL.
    pub link: Option<&'a str>,
    /// Label for the link row.
    pub link_label: &'a str,
    /// Cover area content.
    pub cover: CoverArt<'a>,
}

/// Response from showing the detail panel.
pub struct DetailPanelResponse {
    /// The close control was clicked.
    pub close_clicked: bool,
}

/// Standard panel frame with shadow.
pub fn panel_frame() -> Frame {
    Frame::new()
        .fill(theme::PANEL_BG)
        .corner_radius(CornerRadius::same(sizing::PANEL_RADIUS))
        .stroke(Stroke::new(1.0, theme::BORDER))
        .shadow(egui::epaint::Shadow {
            spread: 0,
            blur: 8,
            offset: [0, 2],
            color: Color32::from_black_alpha(15),
        })
        .inner_margin(Margin::same(12))
}

/// Show the detail contents; `None` renders the idle placeholder prompt.
pub fn detail_panel(
    ui: &mut Ui,
    view: Option<&DetailView<'_>>,
    placeholder: &str,
) -> DetailPanelResponse {
    let Some(view) = view else {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(placeholder).color(theme::TEXT_MUTED).italics());
        });
        return DetailPanelResponse {
            close_clicked: false,
        };
    };

    let mut close_clicked = false;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(view.title)
                .size(18.0)
                .strong()
                .color(theme::TEXT),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            close_clicked = close_button(ui);
        });
    });
    ui.add_space(8.0);

    cover_art(ui, &view.cover);
    ui.add_space(10.0);

    if let Some(quote) = view.quote {
        ui.label(
            RichText::new(format!("\u{201c}{quote}\u{201d}"))
                .italics()
                .color(theme::TEXT),
        );
        ui.add_space(6.0);
    }
    if let Some(summary) = view.summary {
        ui.label(RichText::new(summary).color(theme::TEXT));
        ui.add_space(6.0);
    }
    if let Some(category) = view.category {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Category:").strong().color(theme::TEXT));
            ui.label(RichText::new(category).color(theme::TEXT));
        });
        ui.add_space(6.0);
    }
    if let Some(link) = view.link {
        ui.hyperlink_to(view.link_label, link);
    }

    DetailPanelResponse { close_clicked }
}

/// Draw the cover region: the texture if loaded, otherwise a flat tone
/// with the item's initials.
pub fn cover_art(ui: &mut Ui, art: &CoverArt<'_>) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(vec2(width, sizing::COVER_HEIGHT), Sense::hover());
    if !ui.is_rect_visible(rect) || rect.width() <= 0.0 {
        return;
    }

    match art {
        CoverArt::Texture(texture) => {
            let size = texture.size_vec2();
            let scale = (rect.width() / size.x).min(rect.height() / size.y).min(1.0);
            let fitted = Rect::from_center_size(rect.center(), size * scale);
            ui.painter().image(
                texture.id(),
                fitted,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        CoverArt::Fallback { tone, initials } => {
            ui.painter().rect_filled(
                rect,
                CornerRadius::same(sizing::CORNER_RADIUS),
                tone.fill,
            );
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                initials,
                FontId::proportional(48.0),
                tone.ink(),
            );
        }
    }
}

/// Small "✕" close control. Returns true when clicked.
fn close_button(ui: &mut Ui) -> bool {
    let (rect, response) = ui.allocate_exact_size(vec2(22.0, 22.0), Sense::click());

    if ui.is_rect_visible(rect) {
        let bg = if response.hovered() {
            Color32::from_gray(235)
        } else {
            Color32::TRANSPARENT
        };
        ui.painter()
            .rect_filled(rect, CornerRadius::same(sizing::CORNER_RADIUS), bg);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "✕",
            FontId::proportional(13.0),
            theme::TEXT_MUTED,
        );
    }

    let clicked = response.clicked();
    response.on_hover_cursor(CursorIcon::PointingHand);
    clicked
}
