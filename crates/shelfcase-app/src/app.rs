//! Application state and frame loop.

use std::path::PathBuf;

use shelfcase_core::layout::TONE_COUNT;
use shelfcase_core::{
    Catalog, DetailContent, PickupAnimator, PickupPhase, SelectionChange, SelectionController,
    ShelfConfig, ShelfLayout, ViewportFraction,
};
use shelfcase_widgets::{Tone, detail_panel::panel_frame, theme, tone_for};

use crate::covers::CoverLoader;
use crate::ui::{self, UiAction};

/// Width of the detail side panel.
const DETAIL_WIDTH: f32 = 320.0;

/// The shelf application: core state wired to the egui widgets.
pub struct ShelfApp {
    config: ShelfConfig,
    catalog: Catalog,
    layout: ShelfLayout,
    selection: SelectionController,
    animator: PickupAnimator,
    strategy: ViewportFraction,
    covers: CoverLoader,
    detail: Option<DetailContent>,
}

impl ShelfApp {
    /// Build the app: load config and catalog, lay out the shelf.
    ///
    /// A missing or malformed catalog degrades to a decorative-only
    /// shelf rather than failing startup.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = ShelfConfig::load_or_default("shelfcase.json");
        let catalog = match Catalog::load(&config.catalog_path) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("{}; rendering a decorative shelf", e);
                Catalog::default()
            }
        };
        log::info!("{} items on the shelf", catalog.len());

        let layout = ShelfLayout::build(catalog.len(), config.rows, config.min_slots_per_row);

        Self {
            config,
            catalog,
            layout,
            selection: SelectionController::new(),
            animator: PickupAnimator::new(),
            strategy: ViewportFraction::default(),
            covers: CoverLoader::new(),
            detail: None,
        }
    }

    /// Tone of an item's resting spine, for the cover fallback.
    fn tone_of(&self, item: usize) -> &'static Tone {
        let index = self
            .layout
            .visual_of(item)
            .map(|visual| visual.tone)
            .unwrap_or(item % TONE_COUNT);
        tone_for(index)
    }

    fn open_detail(&mut self, item: usize) {
        self.detail = self.catalog.get(item).map(DetailContent::from_item);
        match self
            .catalog
            .get(item)
            .and_then(|i| i.cover_path(&self.config.image_dir))
        {
            Some(path) => self.covers.request(item, PathBuf::from(path)),
            None => self.covers.mark_missing(item),
        }
    }

    fn close_detail(&mut self, now: f64) {
        self.detail = None;
        self.animator.release(now);
    }

    fn start_pickup(&mut self, item: usize, rect: egui::Rect, tilt_deg: f32, viewport: kurbo::Rect, now: f64) {
        if !self.config.pickup_animation {
            return;
        }
        self.animator.pick_up(
            item,
            ui::to_kurbo_rect(rect),
            tilt_deg as f64,
            viewport,
            &self.strategy,
            now,
        );
    }

    fn apply_action(&mut self, action: UiAction, viewport: kurbo::Rect, now: f64) {
        match action {
            UiAction::SpineClicked {
                item,
                rect,
                tilt_deg,
            } => match self.selection.select(item) {
                SelectionChange::Opened(item) => {
                    self.open_detail(item);
                    self.start_pickup(item, rect, tilt_deg, viewport, now);
                }
                SelectionChange::Switched { to, .. } => {
                    // Fully settle the previous pickup before the next one
                    // starts, so only one element is ever lifted.
                    self.animator.settle();
                    self.open_detail(to);
                    self.start_pickup(to, rect, tilt_deg, viewport, now);
                }
                SelectionChange::Closed(_) => self.close_detail(now),
                SelectionChange::Unchanged => {}
            },
            UiAction::CloseDetail => {
                if let SelectionChange::Closed(_) = self.selection.close() {
                    self.close_detail(now);
                }
            }
        }
    }
}

impl eframe::App for ShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.covers.poll(ctx);
        let now = ctx.input(|i| i.time);

        // Advance the animator first so the shelf knows which spine the
        // overlay owns this frame (and re-shows one that just settled).
        let pickup = self.animator.frame(now);

        let mut action = None;
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            action = Some(UiAction::CloseDetail);
        }

        let detail_action = egui::SidePanel::right("detail")
            .resizable(false)
            .exact_width(DETAIL_WIDTH)
            .frame(panel_frame())
            .show(ctx, |ui| {
                ui::render_detail(
                    ui,
                    self.detail.as_ref(),
                    self.selection.active(),
                    self.selection.active().map_or(&shelfcase_widgets::TONES[0], |i| self.tone_of(i)),
                    &self.covers,
                )
            })
            .inner;

        let shelf_action = egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::WALL_BG)
                    .inner_margin(egui::Margin::same(24)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .show(ui, |ui| {
                        ui.add_space(8.0);
                        ui::render_shelf(
                            ui,
                            &self.layout,
                            &self.catalog,
                            &self.selection,
                            pickup.map(|f| f.item),
                        )
                    })
                    .inner
            })
            .inner;

        let viewport = ui::to_kurbo_rect(ctx.input(|i| i.content_rect()));
        if let Some(action) = action.or(shelf_action).or(detail_action) {
            self.apply_action(action, viewport, now);
        }

        // A click this frame may have started a new pickup; re-reading at
        // the same `now` is idempotent for an unchanged animator.
        if let Some(frame) = self.animator.frame(now) {
            let (label, initials) = match self.catalog.get(frame.item) {
                Some(item) => (item.name.clone(), item.initials()),
                None => Default::default(),
            };
            let clicked = ui::show_pickup(
                ctx,
                &frame,
                &label,
                &initials,
                self.tone_of(frame.item),
                self.covers.texture(frame.item),
            );
            // The lifted element is the active item; clicking it toggles
            // the detail closed, same as clicking its resting spine.
            if clicked {
                self.apply_action(UiAction::CloseDetail, viewport, now);
            }
        }

        if matches!(
            self.animator.phase(),
            PickupPhase::Lifting | PickupPhase::Returning
        ) {
            ctx.request_repaint();
        }
    }
}
