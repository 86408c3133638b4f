//! Edge-triggered autoscroll while a drag is active.
//!
//! While the user drags an element near the edge of a scrollable viewport,
//! the viewport should creep in that direction, faster the deeper the
//! pointer sits in the edge band. [`AutoscrollController`] is the small
//! state machine that drives this: the gesture layer feeds it pointer
//! lifecycle events, and it issues short animated scroll requests against a
//! host-provided [`Viewport`].
//!
//! The controller enforces a single in-flight scroll animation per viewport.
//! A pointer move arriving mid-animation is recorded but triggers nothing;
//! when the host reports the animation finished (via
//! [`AutoscrollController::on_scroll_finished`]) the controller re-evaluates
//! against the latest recorded position and, if the pointer is still in an
//! edge band, immediately requests the next step. Re-arming per short step,
//! rather than one long animation or a timer, keeps the loop responsive: the
//! moment the pointer leaves the band, the next evaluation simply requests
//! nothing.
//!
//! # Viewport contract
//!
//! [`Viewport::animate_to`] begins an animation and returns immediately.
//! When that animation completes, the host must call
//! [`AutoscrollController::on_scroll_finished`] exactly once. Pointer-up does
//! not need to abort a running animation; the controller just stops
//! re-arming.

use std::time::Duration;

use tracing::trace;

use crate::config::BoardConfig;
use crate::easing::Easing;
use crate::error::ViewportError;
use crate::geometry::{Axis, Point, Rect};

/// Floor applied to the edge-band penetration depth, in logical units.
///
/// Guarantees a useful minimum scroll step even when the pointer has barely
/// entered the band.
pub const OVER_DRAG_FLOOR: f32 = 20.0;

/// Proportional gain converting penetration depth into an offset step per
/// tick (1.5 / 5.0).
const OVER_DRAG_GAIN: f32 = 1.5 / 5.0;

/// A scrollable viewport as seen by the autoscroll controller.
///
/// Every query can fail with [`ViewportError::NotLaidOut`] before the first
/// layout pass; the controller skips that evaluation tick silently.
pub trait Viewport {
    /// Current scroll offset along the scroll axis.
    fn offset(&self) -> Result<f32, ViewportError>;

    /// Minimum scrollable offset.
    fn min_extent(&self) -> Result<f32, ViewportError>;

    /// Maximum scrollable offset.
    fn max_extent(&self) -> Result<f32, ViewportError>;

    /// Bounding box of the viewport in global coordinates.
    fn global_bounds(&self) -> Result<Rect, ViewportError>;

    /// Begin animating the offset to `offset` over `duration`.
    ///
    /// The host must call [`AutoscrollController::on_scroll_finished`] when
    /// the animation completes.
    fn animate_to(&mut self, offset: f32, duration: Duration, easing: Easing);
}

/// Ephemeral state of one drag gesture.
///
/// Owned by the controller and mutated only from its event entry points;
/// there is no parallelism to guard against in the single-threaded
/// cooperative model this crate targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragSession {
    pointer_down: bool,
    position: Option<Point>,
    scrolling: bool,
}

impl DragSession {
    /// Returns true if the pointer is currently down.
    pub fn is_pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// The last recorded pointer position, if any.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Returns true if a scroll animation is in flight.
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}

/// Drives edge-triggered autoscroll for one scrollable viewport.
#[derive(Debug)]
pub struct AutoscrollController {
    axis: Axis,
    margin: f32,
    step_duration: Duration,
    session: DragSession,
}

impl AutoscrollController {
    /// Create a controller for the given axis with an explicit margin band
    /// width and step duration.
    pub fn new(axis: Axis, margin: f32, step_duration: Duration) -> Self {
        Self {
            axis,
            margin,
            step_duration,
            session: DragSession::default(),
        }
    }

    /// Create a controller from a validated [`BoardConfig`].
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.axis, config.scroll_margin, config.scroll_step)
    }

    /// The current drag session state.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The pointer went down at `position`.
    pub fn on_pointer_down(&mut self, position: Point) {
        self.session.pointer_down = true;
        self.session.position = Some(position);
    }

    /// The pointer moved to `position`.
    ///
    /// While the pointer is down this records the position and runs one
    /// evaluation step against the viewport.
    pub fn on_pointer_move<V: Viewport>(&mut self, position: Point, viewport: &mut V) {
        if !self.session.pointer_down {
            return;
        }
        self.session.position = Some(position);
        self.evaluate(viewport);
    }

    /// The pointer was released.
    ///
    /// Any in-flight animation is left to finish; it will not re-arm.
    pub fn on_pointer_up(&mut self) {
        self.session.pointer_down = false;
    }

    /// The animation started by the last [`Viewport::animate_to`] finished.
    ///
    /// Clears the in-flight flag and, if the pointer is still down,
    /// re-evaluates against the latest recorded position. This is what turns
    /// individual short steps into continuous scrolling.
    pub fn on_scroll_finished<V: Viewport>(&mut self, viewport: &mut V) {
        self.session.scrolling = false;
        if self.session.pointer_down {
            self.evaluate(viewport);
        }
    }

    /// One evaluation step: decide whether the pointer sits in an edge band
    /// and, if so, request the next incremental scroll.
    fn evaluate<V: Viewport>(&mut self, viewport: &mut V) {
        if self.session.scrolling || !self.session.pointer_down {
            return;
        }
        let Some(position) = self.session.position else {
            return;
        };

        let Some(target) = self.target_offset(position, viewport) else {
            return;
        };

        self.session.scrolling = true;
        viewport.animate_to(target, self.step_duration, Easing::Linear);
    }

    /// Compute the next target offset, or `None` when no scroll is wanted.
    ///
    /// Returns `None` when the pointer is outside both edge bands, when the
    /// viewport is already at the relevant extent, or when the viewport is
    /// not laid out yet (the tick is skipped; the next pointer move
    /// re-triggers evaluation).
    fn target_offset<V: Viewport>(&self, position: Point, viewport: &V) -> Option<f32> {
        let queried = (|| -> Result<(f32, f32, f32, Rect), ViewportError> {
            Ok((
                viewport.offset()?,
                viewport.min_extent()?,
                viewport.max_extent()?,
                viewport.global_bounds()?,
            ))
        })();
        let (offset, min_extent, max_extent, bounds) = match queried {
            Ok(values) => values,
            Err(ViewportError::NotLaidOut) => {
                trace!(
                    target: "horizon_lattice_board::autoscroll",
                    "viewport not laid out, skipping tick"
                );
                return None;
            }
        };

        // Both branches project the pointer onto the scroll axis; the edge
        // bands are strips of `margin` width just inside the start and end
        // edges of the viewport.
        let coord = self.axis.coord(position);
        let start_band_edge = self.axis.start(&bounds) + self.margin;
        let end_band_edge = self.axis.end(&bounds) - self.margin;

        let target = if coord < start_band_edge && offset > min_extent {
            let over_drag = (start_band_edge - coord).max(OVER_DRAG_FLOOR);
            (offset - OVER_DRAG_GAIN * over_drag).max(min_extent)
        } else if coord > end_band_edge && offset < max_extent {
            let over_drag = (coord - end_band_edge).max(OVER_DRAG_FLOOR);
            (offset + OVER_DRAG_GAIN * over_drag).min(max_extent)
        } else {
            return None;
        };

        trace!(
            target: "horizon_lattice_board::autoscroll",
            coord,
            offset,
            new_offset = target,
            "edge band scroll step"
        );
        Some(target)
    }
}
