//! Shelf layout: row construction, item distribution, filler padding.
//!
//! Items fill rows left-to-right, top-to-bottom. Rows are then padded
//! with decorative filler so a shelf never looks sparse, even with very
//! few (or zero) real items.

use rand::Rng;

/// Default number of shelf rows.
pub const DEFAULT_ROWS: usize = 3;
/// Minimum total slots per row after filler padding.
pub const MIN_SLOTS_PER_ROW: usize = 5;
/// Spine heights in points, cycled across real items.
pub const HEIGHT_POOL: [f32; 6] = [210.0, 220.0, 190.0, 200.0, 180.0, 230.0];
/// Number of color tones in the palette (must match the widgets crate).
pub const TONE_COUNT: usize = 6;

/// Tilt bound for real spines, degrees.
const ITEM_TILT: f32 = 4.0;
/// Tilt bound for decorative spines, degrees.
const DECOR_TILT: f32 = 3.0;

/// Visual variance assigned to a spine when the layout is built.
///
/// Tone and height are deterministic for real items (cyclic by index) so
/// adjacent spines differ predictably; tilt is cosmetic and random, but
/// assigned once here so spines do not jitter frame-to-frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpineVisual {
    /// Index into the tone palette.
    pub tone: usize,
    /// Spine height in points.
    pub height: f32,
    /// Resting lean angle in degrees.
    pub tilt_deg: f32,
}

/// A slot in a shelf row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// A real item, by index into the catalog.
    Book { item: usize, visual: SpineVisual },
    /// Decorative filler with no underlying item.
    Decor(SpineVisual),
}

impl Slot {
    /// The catalog index, for real items.
    pub fn item(&self) -> Option<usize> {
        match self {
            Slot::Book { item, .. } => Some(*item),
            Slot::Decor(_) => None,
        }
    }
}

/// Rows of slots, built once per catalog and configuration.
#[derive(Debug, Clone, Default)]
pub struct ShelfLayout {
    rows: Vec<Vec<Slot>>,
}

/// Items per row for `item_count` items over `rows` shelves.
pub fn per_row(item_count: usize, rows: usize) -> usize {
    item_count.div_ceil(rows.max(1)).max(1)
}

/// Row index holding item `index`. The last row absorbs any remainder.
pub fn row_for(index: usize, per_row: usize, rows: usize) -> usize {
    (index / per_row.max(1)).min(rows.max(1) - 1)
}

impl ShelfLayout {
    /// Build a layout for `item_count` items across `rows` shelves, each
    /// padded to at least `min_slots` total slots.
    ///
    /// Rebuilding replaces the previous layout wholesale, so the
    /// operation is idempotent for a given catalog size.
    pub fn build(item_count: usize, rows: usize, min_slots: usize) -> Self {
        let rows = rows.max(1);
        let min_slots = min_slots.max(MIN_SLOTS_PER_ROW);
        let per_row = per_row(item_count, rows);

        let mut rng = rand::thread_rng();
        let mut shelf: Vec<Vec<Slot>> = vec![Vec::new(); rows];

        for item in 0..item_count {
            let row = row_for(item, per_row, rows);
            shelf[row].push(Slot::Book {
                item,
                visual: item_visual(item, &mut rng),
            });
        }

        let target = per_row.max(min_slots);
        for row in &mut shelf {
            while row.len() < target {
                row.push(Slot::Decor(decor_visual(&mut rng)));
            }
        }

        log::debug!(
            "shelf layout: {} items over {} rows ({} per row, {} slots each)",
            item_count,
            rows,
            per_row,
            target
        );

        Self { rows: shelf }
    }

    /// The rows, top to bottom.
    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The visual assigned to a real item, if it is on the shelf.
    pub fn visual_of(&self, item: usize) -> Option<SpineVisual> {
        self.rows.iter().flatten().find_map(|slot| match slot {
            Slot::Book { item: i, visual } if *i == item => Some(*visual),
            _ => None,
        })
    }
}

fn item_visual(index: usize, rng: &mut impl Rng) -> SpineVisual {
    SpineVisual {
        tone: index % TONE_COUNT,
        height: HEIGHT_POOL[index % HEIGHT_POOL.len()],
        tilt_deg: rng.gen_range(-ITEM_TILT..=ITEM_TILT),
    }
}

fn decor_visual(rng: &mut impl Rng) -> SpineVisual {
    SpineVisual {
        tone: rng.gen_range(0..TONE_COUNT),
        height: HEIGHT_POOL[rng.gen_range(0..HEIGHT_POOL.len())],
        tilt_deg: rng.gen_range(-DECOR_TILT..=DECOR_TILT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed_items(layout: &ShelfLayout) -> Vec<(usize, usize)> {
        let mut placed = Vec::new();
        for (row_index, row) in layout.rows().iter().enumerate() {
            for slot in row {
                if let Slot::Book { item, .. } = slot {
                    placed.push((*item, row_index));
                }
            }
        }
        placed
    }

    #[test]
    fn test_every_item_placed_exactly_once() {
        for &(n, r) in &[(0usize, 1usize), (1, 1), (5, 3), (7, 3), (12, 4), (3, 8)] {
            let layout = ShelfLayout::build(n, r, 5);
            let mut items: Vec<usize> = placed_items(&layout).iter().map(|&(i, _)| i).collect();
            items.sort_unstable();
            assert_eq!(items, (0..n).collect::<Vec<_>>(), "n={} r={}", n, r);
        }
    }

    #[test]
    fn test_row_assignment_monotonic() {
        for &(n, r) in &[(7usize, 3usize), (12, 4), (20, 3), (5, 5)] {
            let layout = ShelfLayout::build(n, r, 5);
            let rows: Vec<usize> = placed_items(&layout).iter().map(|&(_, row)| row).collect();
            for pair in rows.windows(2) {
                assert!(pair[0] <= pair[1], "n={} r={} rows={:?}", n, r, rows);
            }
        }
    }

    #[test]
    fn test_minimum_slots_after_filler() {
        for &(n, r) in &[(0usize, 3usize), (1, 3), (4, 2), (30, 3)] {
            let layout = ShelfLayout::build(n, r, 5);
            for row in layout.rows() {
                assert!(row.len() >= 5, "n={} r={} len={}", n, r, row.len());
            }
        }
    }

    #[test]
    fn test_only_last_row_absorbs_remainder() {
        // 7 items over 3 rows: per_row = 3, so rows hold 3, 3, 1 real items.
        let layout = ShelfLayout::build(7, 3, 5);
        let real: Vec<usize> = layout
            .rows()
            .iter()
            .map(|row| row.iter().filter(|s| s.item().is_some()).count())
            .collect();
        assert_eq!(real, vec![3, 3, 1]);
    }

    #[test]
    fn test_empty_dataset_fills_with_decor() {
        let layout = ShelfLayout::build(0, 3, 5);
        assert_eq!(layout.row_count(), 3);
        for row in layout.rows() {
            assert_eq!(row.len(), 5);
            assert!(row.iter().all(|s| s.item().is_none()));
        }
    }

    #[test]
    fn test_row_count_clamped_to_one() {
        let layout = ShelfLayout::build(4, 0, 5);
        assert_eq!(layout.row_count(), 1);
    }

    #[test]
    fn test_tone_and_height_cycle_deterministically() {
        let layout = ShelfLayout::build(8, 1, 5);
        let v0 = layout.visual_of(0).unwrap();
        let v6 = layout.visual_of(6).unwrap();
        assert_eq!(v0.tone, v6.tone);
        assert_eq!(v0.height, v6.height);

        let v1 = layout.visual_of(1).unwrap();
        assert_ne!(v0.tone, v1.tone);
    }

    #[test]
    fn test_tilt_within_bounds() {
        let layout = ShelfLayout::build(24, 3, 5);
        for row in layout.rows() {
            for slot in row {
                let (visual, bound) = match slot {
                    Slot::Book { visual, .. } => (visual, ITEM_TILT),
                    Slot::Decor(visual) => (visual, DECOR_TILT),
                };
                assert!(visual.tilt_deg.abs() <= bound);
                assert!(visual.tone < TONE_COUNT);
            }
        }
    }

    #[test]
    fn test_per_row_formula() {
        assert_eq!(per_row(0, 3), 1);
        assert_eq!(per_row(6, 3), 2);
        assert_eq!(per_row(7, 3), 3);
        assert_eq!(per_row(5, 0), 5);
    }
}
