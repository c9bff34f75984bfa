//! The single-selection state machine.

/// Result of a selection transition, returned so callers can sequence
/// side effects (detail rebuild, pickup animation) in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// Nothing was active; this item is now open.
    Opened(usize),
    /// `from` was deactivated, then `to` activated.
    Switched { from: usize, to: usize },
    /// The active item was deactivated.
    Closed(usize),
    /// No state change (e.g. close with nothing open).
    Unchanged,
}

/// Owns the single "active item" reference.
///
/// All selection mutation routes through [`select`](Self::select) and
/// [`close`](Self::close), so at most one item can ever be active.
#[derive(Debug, Default)]
pub struct SelectionController {
    active: Option<usize>,
}

impl SelectionController {
    /// Create a controller with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active item, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Whether `item` is the active one.
    pub fn is_active(&self, item: usize) -> bool {
        self.active == Some(item)
    }

    /// Whether the detail panel should be open.
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Handle a click on `item`.
    ///
    /// Clicking the already-active item toggles it closed; clicking a
    /// different item deactivates the previous one first.
    pub fn select(&mut self, item: usize) -> SelectionChange {
        let change = match self.active {
            None => {
                self.active = Some(item);
                SelectionChange::Opened(item)
            }
            Some(current) if current == item => {
                self.active = None;
                SelectionChange::Closed(item)
            }
            Some(current) => {
                self.active = Some(item);
                SelectionChange::Switched {
                    from: current,
                    to: item,
                }
            }
        };
        log::debug!("selection: {:?}", change);
        change
    }

    /// Explicit close (close control or Escape key).
    pub fn close(&mut self) -> SelectionChange {
        match self.active.take() {
            Some(current) => SelectionChange::Closed(current),
            None => SelectionChange::Unchanged,
        }
    }
}
