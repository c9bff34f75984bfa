//! The clickable book spine.

use egui::{
    epaint::TextShape, Color32, CursorIcon, FontId, Painter, Pos2, Rect, Response, Sense, Shape,
    Stroke, Ui, vec2,
};

use crate::{sizing, theme, tones::Tone};

/// A book spine drawn as a tilted slab with its title along the length.
///
/// The widget is stateless; tone, height and tilt come from the shelf
/// layout so a spine keeps its look across frames.
pub struct Spine<'a> {
    label: &'a str,
    tone: &'a Tone,
    height: f32,
    tilt_deg: f32,
    active: bool,
    decor: bool,
    hidden: bool,
}

impl<'a> Spine<'a> {
    /// Create a spine for a real item.
    pub fn new(label: &'a str, tone: &'a Tone) -> Self {
        Self {
            label,
            tone,
            height: 200.0,
            tilt_deg: 0.0,
            active: false,
            decor: false,
            hidden: false,
        }
    }

    /// Spine height in points.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Resting lean angle in degrees.
    pub fn tilt_deg(mut self, tilt_deg: f32) -> Self {
        self.tilt_deg = tilt_deg;
        self
    }

    /// Mark the spine as the active selection.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Decorative filler: drawn, but inert to pointer interaction and
    /// without a title.
    pub fn decor(mut self) -> Self {
        self.decor = true;
        self
    }

    /// Reserve the slot without painting (the spine is currently picked
    /// up and drawn by the animation overlay instead).
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Show the spine, bottom-aligned in the current layout.
    pub fn show(self, ui: &mut Ui) -> Response {
        let size = vec2(sizing::SPINE_WIDTH, self.height);
        let sense = if self.decor || self.hidden {
            Sense::hover()
        } else {
            Sense::click()
        };
        let (rect, response) = ui.allocate_exact_size(size, sense);

        if self.hidden || !ui.is_rect_visible(rect) {
            return response;
        }

        let lifted = !self.decor && (self.active || response.hovered());
        let rect = if lifted {
            rect.translate(vec2(0.0, -sizing::HOVER_LIFT))
        } else {
            rect
        };

        let label = if self.decor { None } else { Some(self.label) };
        paint_spine(ui.painter(), rect, self.tone, self.tilt_deg, self.active, label);

        if self.decor {
            response
        } else {
            response.on_hover_cursor(CursorIcon::PointingHand)
        }
    }
}

/// Paint a spine into `rect`.
///
/// Shared with the pickup overlay so a lifted spine matches its resting
/// look exactly.
pub fn paint_spine(
    painter: &Painter,
    rect: Rect,
    tone: &Tone,
    tilt_deg: f32,
    active: bool,
    label: Option<&str>,
) {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let angle = tilt_deg.to_radians();
    let corners = rotated_corners(rect, angle);

    painter.add(Shape::convex_polygon(
        corners.to_vec(),
        tone.fill,
        Stroke::new(1.0, tone.edge),
    ));

    // Bound edge: a darker strip along the left of the slab.
    let strip = Rect::from_min_size(rect.min, vec2(6.0, rect.height()));
    painter.add(Shape::convex_polygon(
        rotated_about(strip, rect.center(), angle).to_vec(),
        tone.edge,
        Stroke::NONE,
    ));

    if active {
        let outline = rotated_corners(rect.expand(2.0), angle);
        painter.add(Shape::closed_line(
            outline.to_vec(),
            Stroke::new(2.0, theme::ACCENT),
        ));
    }

    if let Some(label) = label {
        paint_spine_label(painter, rect, angle, label, tone.ink());
    }
}

/// Title running down the spine, elided to fit.
fn paint_spine_label(painter: &Painter, rect: Rect, angle: f32, label: &str, ink: Color32) {
    let font = FontId::proportional(12.5);
    let max_run = rect.height() - 28.0;
    if max_run <= 0.0 {
        return;
    }

    let mut galley = painter.layout_no_wrap(label.to_owned(), font.clone(), ink);
    if galley.size().x > max_run {
        let chars = label.chars().count();
        let keep = ((max_run / galley.size().x) * chars as f32) as usize;
        let short: String = label.chars().take(keep.saturating_sub(1)).collect();
        galley = painter.layout_no_wrap(format!("{short}…"), font, ink);
    }

    // Rotate a quarter turn plus the tilt so the run follows the slab,
    // anchored so the galley's center lands on the spine center.
    let text_angle = std::f32::consts::FRAC_PI_2 + angle;
    let (sin, cos) = text_angle.sin_cos();
    let half = galley.size() / 2.0;
    let center = rect.center();
    let pos = Pos2::new(
        center.x - (half.x * cos - half.y * sin),
        center.y - (half.x * sin + half.y * cos),
    );

    painter.add(TextShape::new(pos, galley, ink).with_angle(text_angle));
}

/// Corners of `rect` rotated by `angle` around its center.
fn rotated_corners(rect: Rect, angle: f32) -> [Pos2; 4] {
    rotated_about(rect, rect.center(), angle)
}

fn rotated_about(rect: Rect, pivot: Pos2, angle: f32) -> [Pos2; 4] {
    let (sin, cos) = angle.sin_cos();
    let rotate = |p: Pos2| -> Pos2 {
        let dx = p.x - pivot.x;
        let dy = p.y - pivot.y;
        Pos2::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    };
    [
        rotate(rect.left_top()),
        rotate(rect.right_top()),
        rotate(rect.right_bottom()),
        rotate(rect.left_bottom()),
    ]
}
