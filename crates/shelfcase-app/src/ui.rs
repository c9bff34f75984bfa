//! Shelf and detail rendering.
//!
//! Render functions are pure with respect to application state: they
//! read, and report what the user did as a [`UiAction`] for the app to
//! apply after the frame's widget pass.

use egui::{
    Align2, Color32, CornerRadius, FontId, Id, Order, Rect, Sense, Stroke, StrokeKind,
    TextureHandle, Ui, vec2,
};

use shelfcase_core::detail::LINK_LABEL;
use shelfcase_core::layout::HEIGHT_POOL;
use shelfcase_core::{
    Catalog, DetailContent, DetailFragment, IDLE_PROMPT, PickupFrame, SelectionController,
    ShelfLayout, Slot,
};
use shelfcase_widgets::{
    CoverArt, DetailView, Spine, Tone, detail_panel, paint_spine, shelf_plank, sizing, tone_for,
};

use crate::covers::CoverLoader;

/// Vertical space under each plank.
const ROW_SPACING: f32 = 30.0;

/// Action produced by the UI this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// A spine was clicked. Geometry is captured here, while the resting
    /// rect is known, so the pickup animation can return to it exactly.
    SpineClicked {
        item: usize,
        rect: Rect,
        tilt_deg: f32,
    },
    /// The close control (or Escape) asked for the detail to close.
    CloseDetail,
}

/// Render every shelf row. Returns the action triggered this frame, if
/// any. `hidden_item` is currently drawn by the pickup overlay instead.
pub fn render_shelf(
    ui: &mut Ui,
    layout: &ShelfLayout,
    catalog: &Catalog,
    selection: &SelectionController,
    hidden_item: Option<usize>,
) -> Option<UiAction> {
    let mut action = None;
    let row_height = HEIGHT_POOL.iter().copied().fold(0.0f32, f32::max) + sizing::HOVER_LIFT;

    for row in layout.rows() {
        let slots = row.len() as f32;
        let row_width = slots * sizing::SPINE_WIDTH + (slots - 1.0).max(0.0) * sizing::SPINE_GAP;

        ui.allocate_ui_with_layout(
            vec2(ui.available_width(), row_height),
            egui::Layout::left_to_right(egui::Align::BOTTOM),
            |ui| {
                ui.spacing_mut().item_spacing.x = sizing::SPINE_GAP;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));

                for slot in row {
                    match slot {
                        Slot::Book { item, visual } => {
                            let name = catalog
                                .get(*item)
                                .map(|i| i.name.as_str())
                                .unwrap_or_default();
                            let mut spine = Spine::new(name, tone_for(visual.tone))
                                .height(visual.height)
                                .tilt_deg(visual.tilt_deg)
                                .active(selection.is_active(*item));
                            if hidden_item == Some(*item) {
                                spine = spine.hidden();
                            }

                            let response = spine.show(ui);
                            if response.clicked() {
                                action = Some(UiAction::SpineClicked {
                                    item: *item,
                                    rect: response.rect,
                                    tilt_deg: visual.tilt_deg,
                                });
                            }
                        }
                        Slot::Decor(visual) => {
                            Spine::new("", tone_for(visual.tone))
                                .height(visual.height)
                                .tilt_deg(visual.tilt_deg)
                                .decor()
                                .show(ui);
                        }
                    }
                }
            },
        );

        let (plank_rect, _) = ui.allocate_exact_size(
            vec2(ui.available_width(), sizing::PLANK_HEIGHT),
            Sense::hover(),
        );
        shelf_plank(ui, plank_rect);
        ui.add_space(ROW_SPACING);
    }

    action
}

/// Render the detail panel (or its idle prompt).
pub fn render_detail(
    ui: &mut Ui,
    detail: Option<&DetailContent>,
    active_item: Option<usize>,
    tone: &'static Tone,
    covers: &CoverLoader,
) -> Option<UiAction> {
    let view = match (detail, active_item) {
        (Some(content), Some(item)) => {
            let cover = match covers.texture(item) {
                Some(texture) => CoverArt::Texture(texture),
                None => CoverArt::Fallback {
                    tone,
                    initials: &content.initials,
                },
            };
            Some(view_from_content(content, cover))
        }
        _ => None,
    };

    let response = detail_panel(ui, view.as_ref(), IDLE_PROMPT);
    response.close_clicked.then_some(UiAction::CloseDetail)
}

fn view_from_content<'a>(content: &'a DetailContent, cover: CoverArt<'a>) -> DetailView<'a> {
    let mut view = DetailView {
        title: &content.title,
        quote: None,
        summary: None,
        category: None,
        link: None,
        link_label: LINK_LABEL,
        cover,
    };
    for fragment in &content.fragments {
        match fragment {
            DetailFragment::Quote(text) => view.quote = Some(text),
            DetailFragment::Summary(text) => view.summary = Some(text),
            DetailFragment::Category(text) => view.category = Some(text),
            DetailFragment::Link(url) => view.link = Some(url),
        }
    }
    view
}

/// Show the lifted element on the foreground layer.
///
/// Below half flip the element still reads as a spine; past it, the
/// cover face (texture or tone + initials). The element stays clickable
/// while lifted: it is the active item, so a click toggles it closed.
/// Returns true on click.
pub fn show_pickup(
    ctx: &egui::Context,
    frame: &PickupFrame,
    label: &str,
    initials: &str,
    tone: &'static Tone,
    texture: Option<&TextureHandle>,
) -> bool {
    let rect = to_egui_rect(frame.rect);
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return false;
    }

    let response = egui::Area::new(Id::new("shelf-pickup"))
        .order(Order::Foreground)
        .fixed_pos(rect.min)
        .show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(rect.size(), Sense::click());
            paint_lifted(ui, rect, frame, label, initials, tone, texture);
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        })
        .inner;

    response.clicked()
}

fn paint_lifted(
    ui: &Ui,
    rect: Rect,
    frame: &PickupFrame,
    label: &str,
    initials: &str,
    tone: &'static Tone,
    texture: Option<&TextureHandle>,
) {
    let painter = ui.painter();

    if frame.flip < 0.5 {
        paint_spine(painter, rect, tone, frame.tilt_deg as f32, false, Some(label));
        return;
    }

    painter.rect_filled(rect, CornerRadius::same(4), tone.fill);
    match texture {
        Some(texture) => {
            let size = texture.size_vec2();
            let scale = (rect.width() / size.x).min(rect.height() / size.y);
            let fitted = Rect::from_center_size(rect.center(), size * scale);
            painter.image(
                texture.id(),
                fitted,
                Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        None => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                initials,
                FontId::proportional(rect.height() * 0.22),
                tone.ink(),
            );
        }
    }
    painter.rect_stroke(
        rect,
        CornerRadius::same(4),
        Stroke::new(1.0, tone.edge),
        StrokeKind::Inside,
    );
}

pub(crate) fn to_egui_rect(rect: kurbo::Rect) -> Rect {
    Rect::from_min_max(
        egui::pos2(rect.x0 as f32, rect.y0 as f32),
        egui::pos2(rect.x1 as f32, rect.y1 as f32),
    )
}

pub(crate) fn to_kurbo_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}
