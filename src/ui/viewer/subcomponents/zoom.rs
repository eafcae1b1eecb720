// SPDX-License-Identifier: MPL-2.0
//! Double-tap zoom sub-component: scale toggling and zoom-rect computation.

use crate::ui::state::zoom::{ZoomScale, ZoomState};
use iced_core::{Point, Rectangle, Size};

/// Rectangle, centered on `tap` in pre-zoom content coordinates, that a
/// scroll container should zoom to in order to reach `target`.
///
/// The rectangle is not clamped against content edges; the scroll
/// container is responsible for clamping the final visible region.
/// Returns `None` for a degenerate viewport.
#[must_use]
pub fn zoom_rect(tap: Point, target: ZoomScale, viewport: Size) -> Option<Rectangle> {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return None;
    }

    let width = viewport.width / target.value();
    let height = viewport.height / target.value();
    let origin = Point::new(tap.x - width / 2.0, tap.y - height / 2.0);

    Some(Rectangle::new(origin, Size::new(width, height)))
}

/// Zoom sub-component state.
/// Encapsulates the existing `ZoomState` and adds handler logic.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The underlying zoom state (existing type).
    pub inner: ZoomState,
}

/// Messages for the zoom sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Double tap at a point in content coordinates.
    DoubleTap {
        /// Tap location in the content view's pre-zoom coordinate space.
        point: Point,
        /// Current viewport size of the scroll container.
        viewport: Size,
    },
    /// The scroll container reported a new zoom scale.
    ScaleChanged(f32),
    /// Reset to the minimum scale for a newly presented item.
    Reset,
}

/// Effects produced by zoom changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The scroll container should animate its zoom to `rect`.
    ZoomTo {
        /// Scale the container will settle at.
        scale: ZoomScale,
        /// Region, centered on the tap, to make visible.
        rect: Rectangle,
    },
}

impl State {
    /// Creates a zoom sub-component with a host-tuned near-maximum tolerance.
    #[must_use]
    pub fn with_snap_tolerance(snap_tolerance: f32) -> Self {
        Self {
            inner: ZoomState::with_snap_tolerance(snap_tolerance),
        }
    }

    /// Handle a zoom message.
    ///
    /// A `DoubleTap` does not mutate the tracked scale; the container
    /// confirms the actual scale later via `ScaleChanged`.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DoubleTap { point, viewport } => {
                let target = self.inner.toggle_target();
                match zoom_rect(point, target, viewport) {
                    Some(rect) => Effect::ZoomTo {
                        scale: target,
                        rect,
                    },
                    None => Effect::None,
                }
            }
            Message::ScaleChanged(scale) => {
                self.inner.set_scale(scale);
                Effect::None
            }
            Message::Reset => {
                self.inner.reset();
                Effect::None
            }
        }
    }

    /// Get the current zoom scale.
    #[must_use]
    pub fn current_scale(&self) -> ZoomScale {
        self.inner.current()
    }

    /// Check if the view is zoomed past the minimum scale.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.inner.is_zoomed_in()
    }
}
