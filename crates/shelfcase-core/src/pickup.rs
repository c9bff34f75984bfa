//! The pickup/drop-back animation state machine.
//!
//! Selecting a spine lifts it off the shelf: its screen geometry is
//! captured, it detaches from row layout, and it travels to a clamped
//! viewport target while flipping face-on. Releasing reverses the path
//! back to the exact captured origin; only once the reverse duration has
//! fully elapsed does the element rejoin the shelf, so there is no
//! visible snap.
//!
//! Time is supplied by the caller as monotonic seconds, which keeps the
//! machine deterministic under test.

use kurbo::Rect;

/// Duration of the lift (and of the drop-back), in seconds.
pub const PICKUP_DURATION: f64 = 0.45;
/// Margin kept between a lifted element and the viewport edge.
pub const VIEWPORT_MARGIN: f64 = 24.0;

/// Computes where a picked-up element should travel.
///
/// The right target region is a matter of presentation, not a law, so
/// the computation is pluggable. Whatever a strategy returns is clamped
/// to the viewport afterwards.
pub trait TargetStrategy {
    /// Target rect for an element captured at `origin` inside `viewport`.
    fn target(&self, origin: Rect, viewport: Rect) -> Rect;
}

/// Default strategy: occupy a fixed fraction of the viewport height at a
/// fixed center point, widening the thin spine toward a cover-like
/// aspect.
#[derive(Debug, Clone, Copy)]
pub struct ViewportFraction {
    /// Fraction of the viewport height the lifted element occupies.
    pub height_fraction: f64,
    /// Horizontal center, as a fraction of viewport width.
    pub center_x: f64,
    /// Vertical center, as a fraction of viewport height.
    pub center_y: f64,
    /// Width/height aspect of the lifted face.
    pub aspect: f64,
}

impl Default for ViewportFraction {
    fn default() -> Self {
        Self {
            height_fraction: 0.55,
            center_x: 0.38,
            center_y: 0.46,
            aspect: 0.68,
        }
    }
}

impl TargetStrategy for ViewportFraction {
    fn target(&self, _origin: Rect, viewport: Rect) -> Rect {
        let height = viewport.height() * self.height_fraction;
        let width = height * self.aspect;
        let center = kurbo::Point::new(
            viewport.x0 + viewport.width() * self.center_x,
            viewport.y0 + viewport.height() * self.center_y,
        );
        Rect::from_center_size(center, kurbo::Size::new(width, height))
    }
}

/// Clamp `rect` to lie fully inside `viewport` shrunk by `margin`,
/// scaling it down first if it does not fit at all.
pub fn clamp_to_viewport(rect: Rect, viewport: Rect, margin: f64) -> Rect {
    let inner = Rect::new(
        viewport.x0 + margin,
        viewport.y0 + margin,
        (viewport.x1 - margin).max(viewport.x0 + margin),
        (viewport.y1 - margin).max(viewport.y0 + margin),
    );

    let mut width = rect.width();
    let mut height = rect.height();
    if width > inner.width() || height > inner.height() {
        let scale = (inner.width() / width.max(1e-6))
            .min(inner.height() / height.max(1e-6))
            .min(1.0);
        width *= scale;
        height *= scale;
    }

    let x0 = rect.x0.clamp(inner.x0, inner.x1 - width);
    let y0 = rect.y0.clamp(inner.y0, inner.y1 - height);
    Rect::new(x0, y0, x0 + width, y0 + height)
}

/// Phase of the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupPhase {
    /// Nothing lifted; the shelf owns every spine.
    Idle,
    /// Travelling from the shelf toward the target.
    Lifting,
    /// Resting at the target while the detail panel is open.
    Held,
    /// Travelling back toward the captured origin.
    Returning,
}

/// What the app should draw this frame for the lifted element.
#[derive(Debug, Clone, Copy)]
pub struct PickupFrame {
    /// Item being animated.
    pub item: usize,
    /// Where to draw, in screen coordinates.
    pub rect: Rect,
    /// Current lean angle, degrees (eases to zero while lifted).
    pub tilt_deg: f64,
    /// Flip progress in `0..=1` (0 = spine-on, 1 = face-on).
    pub flip: f64,
}

/// Geometry captured at pickup, required to put the element back exactly
/// where it came from. Discarded once the reverse animation settles.
#[derive(Debug, Clone, Copy)]
struct CapturedOrigin {
    rect: Rect,
    tilt_deg: f64,
}

/// Time-driven pickup state machine.
#[derive(Debug)]
pub struct PickupAnimator {
    phase: PickupPhase,
    item: Option<usize>,
    origin: Option<CapturedOrigin>,
    target: Rect,
    started: f64,
    duration: f64,
}

impl Default for PickupAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl PickupAnimator {
    /// Create an idle animator with the default duration.
    pub fn new() -> Self {
        Self {
            phase: PickupPhase::Idle,
            item: None,
            origin: None,
            target: Rect::ZERO,
            started: 0.0,
            duration: PICKUP_DURATION,
        }
    }

    /// Override the lift/drop duration (seconds, clamped to a sane
    /// minimum so progress math never divides by zero).
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds.max(0.01);
        self
    }

    /// Current phase.
    pub fn phase(&self) -> PickupPhase {
        self.phase
    }

    /// Item currently owned by the animator, if any.
    pub fn item(&self) -> Option<usize> {
        self.item
    }

    /// Whether the animator is fully at rest.
    pub fn is_idle(&self) -> bool {
        self.phase == PickupPhase::Idle
    }

    /// Whether the resting spine for `item` should be hidden from the
    /// shelf because the animator is drawing it instead.
    pub fn occupies(&self, item: usize) -> bool {
        self.item == Some(item) && self.phase != PickupPhase::Idle
    }

    /// Capture geometry and start lifting `item`.
    ///
    /// Any animation already in flight is settled first, preserving the
    /// at-most-one-lifted invariant no matter what the caller forgot.
    pub fn pick_up(
        &mut self,
        item: usize,
        origin: Rect,
        tilt_deg: f64,
        viewport: Rect,
        strategy: &dyn TargetStrategy,
        now: f64,
    ) {
        if !self.is_idle() {
            self.settle();
        }
        if viewport.width() <= 0.0 || viewport.height() <= 0.0 {
            // Degenerate surface: leave the spine on the shelf.
            return;
        }

        self.target = clamp_to_viewport(strategy.target(origin, viewport), viewport, VIEWPORT_MARGIN);
        self.origin = Some(CapturedOrigin {
            rect: origin,
            tilt_deg,
        });
        self.item = Some(item);
        self.started = now;
        self.phase = PickupPhase::Lifting;
    }

    /// Start the reverse animation toward the captured origin.
    ///
    /// If the lift is still in flight the clock is re-based so the return
    /// retraces the path from the current position (smoothstep is
    /// symmetric, so the interpolated rect is continuous across the
    /// reversal).
    pub fn release(&mut self, now: f64) {
        match self.phase {
            PickupPhase::Idle | PickupPhase::Returning => {}
            PickupPhase::Held => {
                self.started = now;
                self.phase = PickupPhase::Returning;
            }
            PickupPhase::Lifting => {
                let elapsed = (now - self.started).clamp(0.0, self.duration);
                self.started = now - (self.duration - elapsed);
                self.phase = PickupPhase::Returning;
            }
        }
    }

    /// Synchronously snap to resting state, discarding the capture.
    pub fn settle(&mut self) {
        self.phase = PickupPhase::Idle;
        self.item = None;
        self.origin = None;
    }

    /// Advance the machine and report what to draw, if anything.
    ///
    /// Returns `None` once the element has rejoined the shelf; a
    /// `Returning` animation settles exactly when its full duration has
    /// elapsed, never earlier.
    pub fn frame(&mut self, now: f64) -> Option<PickupFrame> {
        let item = self.item?;
        let origin = self.origin?;

        let t = ((now - self.started) / self.duration).clamp(0.0, 1.0);
        let eased = smoothstep(t);

        match self.phase {
            PickupPhase::Idle => None,
            PickupPhase::Lifting => {
                if t >= 1.0 {
                    self.phase = PickupPhase::Held;
                }
                Some(PickupFrame {
                    item,
                    rect: lerp_rect(origin.rect, self.target, eased),
                    tilt_deg: origin.tilt_deg * (1.0 - eased),
                    flip: eased,
                })
            }
            PickupPhase::Held => Some(PickupFrame {
                item,
                rect: self.target,
                tilt_deg: 0.0,
                flip: 1.0,
            }),
            PickupPhase::Returning => {
                if t >= 1.0 {
                    self.settle();
                    return None;
                }
                Some(PickupFrame {
                    item,
                    rect: lerp_rect(self.target, origin.rect, eased),
                    tilt_deg: origin.tilt_deg * eased,
                    flip: 1.0 - eased,
                })
            }
        }
    }
}

/// Hermite smoothstep easing over `0..=1`.
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    let lerp = |x: f64, y: f64| x + (y - x) * t;
    Rect::new(
        lerp(a.x0, b.x0),
        lerp(a.y0, b.y0),
        lerp(a.x1, b.x1),
        lerp(a.y1, b.y1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1200.0, 800.0);

    fn spine_origin() -> Rect {
        Rect::new(100.0, 500.0, 144.0, 710.0)
    }

    fn lifted(now: f64) -> PickupAnimator {
        let mut anim = PickupAnimator::new();
        anim.pick_up(
            0,
            spine_origin(),
            -3.0,
            VIEWPORT,
            &ViewportFraction::default(),
            now,
        );
        anim
    }

    fn rects_close(a: Rect, b: Rect) -> bool {
        (a.x0 - b.x0).abs() < 1e-9
            && (a.y0 - b.y0).abs() < 1e-9
            && (a.x1 - b.x1).abs() < 1e-9
            && (a.y1 - b.y1).abs() < 1e-9
    }

    fn inside(inner: Rect, outer: Rect) -> bool {
        inner.x0 >= outer.x0
            && inner.y0 >= outer.y0
            && inner.x1 <= outer.x1
            && inner.y1 <= outer.y1
    }

    #[test]
    fn test_lift_reaches_held_after_duration() {
        let mut anim = lifted(0.0);
        assert_eq!(anim.phase(), PickupPhase::Lifting);

        let frame = anim.frame(PICKUP_DURATION + 0.01).unwrap();
        assert_eq!(anim.phase(), PickupPhase::Held);
        assert!((frame.flip - 1.0).abs() < f64::EPSILON);
        assert!(frame.tilt_deg.abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_always_inside_viewport() {
        let strategy = ViewportFraction::default();
        for &(w, h) in &[(1200.0, 800.0), (300.0, 200.0), (80.0, 60.0), (2000.0, 400.0)] {
            let viewport = Rect::new(0.0, 0.0, w, h);
            let mut anim = PickupAnimator::new();
            anim.pick_up(0, spine_origin(), 2.0, viewport, &strategy, 0.0);
            let frame = anim.frame(PICKUP_DURATION * 2.0).unwrap();
            assert!(
                inside(frame.rect, viewport),
                "target {:?} escapes viewport {:?}",
                frame.rect,
                viewport
            );
        }
    }

    #[test]
    fn test_drop_back_restores_exact_origin() {
        let mut anim = lifted(0.0);
        anim.frame(1.0);
        anim.release(1.0);

        // Just before the reverse duration elapses the element is still
        // animator-owned and nearly home.
        let frame = anim.frame(1.0 + PICKUP_DURATION * 0.999).unwrap();
        assert_eq!(anim.phase(), PickupPhase::Returning);
        assert!((frame.rect.x0 - spine_origin().x0).abs() < 2.0);

        // Only after the full duration does it rejoin the shelf.
        assert!(anim.frame(1.0 + PICKUP_DURATION).is_none());
        assert!(anim.is_idle());
        assert!(!anim.occupies(0));
    }

    #[test]
    fn test_release_mid_lift_is_continuous() {
        let mut anim = lifted(0.0);
        let before = anim.frame(PICKUP_DURATION * 0.4).unwrap();
        anim.release(PICKUP_DURATION * 0.4);
        let after = anim.frame(PICKUP_DURATION * 0.4).unwrap();
        assert!(rects_close(before.rect, after.rect));
    }

    #[test]
    fn test_settle_mid_flight() {
        let mut anim = lifted(0.0);
        anim.frame(0.1);
        anim.settle();
        assert!(anim.is_idle());
        assert!(anim.frame(0.2).is_none());
    }

    #[test]
    fn test_pick_up_while_animating_settles_previous() {
        let mut anim = lifted(0.0);
        anim.frame(0.1);
        anim.pick_up(
            1,
            Rect::new(400.0, 500.0, 444.0, 690.0),
            1.5,
            VIEWPORT,
            &ViewportFraction::default(),
            0.1,
        );
        assert_eq!(anim.item(), Some(1));
        assert!(!anim.occupies(0));
        assert!(anim.occupies(1));
    }

    #[test]
    fn test_degenerate_viewport_is_noop() {
        let mut anim = PickupAnimator::new();
        anim.pick_up(
            0,
            spine_origin(),
            0.0,
            Rect::ZERO,
            &ViewportFraction::default(),
            0.0,
        );
        assert!(anim.is_idle());
    }

    #[test]
    fn test_clamp_shrinks_oversized_rect() {
        let viewport = Rect::new(0.0, 0.0, 200.0, 150.0);
        let huge = Rect::new(-50.0, -50.0, 500.0, 400.0);
        let clamped = clamp_to_viewport(huge, viewport, 10.0);
        assert!(inside(clamped, viewport));
        assert!(clamped.width() > 0.0 && clamped.height() > 0.0);
    }

    #[test]
    fn test_clamp_keeps_fitting_rect_size() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let rect = Rect::new(900.0, 700.0, 980.0, 780.0);
        let clamped = clamp_to_viewport(rect, viewport, 24.0);
        assert!((clamped.width() - rect.width()).abs() < 1e-9);
        assert!((clamped.height() - rect.height()).abs() < 1e-9);
        assert!(inside(clamped, viewport));
    }
}
