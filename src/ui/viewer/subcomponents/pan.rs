// SPDX-License-Identifier: MPL-2.0
//! Pan/reveal state machine: drag-to-dismiss and detail-panel toggling.
//!
//! A vertical drag either follows the finger 1:1, dismisses the whole
//! screen (drag down with the panel hidden), or toggles the detail panel
//! (drag up to open, drag down to close). Threshold-triggered transitions
//! replace the live follow with an animated snap and end the in-flight
//! gesture; the caller reads that off [`Effect::ends_gesture`] instead of
//! mutating a recognizer from inside its own handler.

use crate::config::{DRAG_DEAD_ZONE, PANEL_ANIMATION_MS};
use crate::domain::gesture::{DragPhase, DragSample};
use crate::ui::state::panel::{LayoutOffsets, PanelAnimation, PanelState};
use std::time::Duration;

/// Geometry snapshot the state machine needs on each drag tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanContext {
    /// Height of the container view.
    pub view_height: f32,
    /// Height the image occupies on screen before any user zoom, when known.
    pub rendered_image_height: Option<f32>,
    /// Natural height of the detail panel.
    pub panel_height: f32,
}

/// Pan/reveal sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    /// Whether the detail panel is revealed.
    panel: PanelState,
    /// Vertical offset restored while the panel stays shown.
    saved_offset: f32,
    /// Translation a drag must exceed before the machine acts.
    dead_zone: f32,
    /// Duration of panel open/close animations.
    animation: Duration,
}

impl Default for State {
    fn default() -> Self {
        Self {
            panel: PanelState::Hidden,
            saved_offset: 0.0,
            dead_zone: DRAG_DEAD_ZONE,
            animation: Duration::from_millis(PANEL_ANIMATION_MS),
        }
    }
}

/// Effects produced by drag samples.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// 1:1 drag-follow offsets, applied without animation.
    Track(LayoutOffsets),
    /// The host should close the whole screen. The offsets keep following
    /// the finger while dismissal begins; the panel stays hidden.
    Dismiss(LayoutOffsets),
    /// Reveal the detail panel: animate to the enclosed targets.
    Open(PanelAnimation),
    /// Hide the detail panel: animate back to the resting layout.
    Close(PanelAnimation),
    /// The gesture ended mid-drag: snap offsets without animation.
    Settle(LayoutOffsets),
}

impl Effect {
    /// True when the caller must stop tracking the current gesture: a
    /// threshold-triggered panel transition supersedes the live follow.
    #[must_use]
    pub fn ends_gesture(&self) -> bool {
        matches!(self, Effect::Open(_) | Effect::Close(_))
    }
}

impl State {
    /// Creates a pan state machine with host-tuned thresholds.
    #[must_use]
    pub fn new(dead_zone: f32, animation: Duration) -> Self {
        Self {
            panel: PanelState::Hidden,
            saved_offset: 0.0,
            dead_zone,
            animation,
        }
    }

    /// Handle one drag observation.
    pub fn handle(&mut self, sample: DragSample, ctx: &PanContext) -> Effect {
        match sample.phase {
            DragPhase::Began => Effect::None,
            DragPhase::Changed => self.on_changed(sample.translation_y, ctx),
            DragPhase::Ended => Effect::Settle(self.resting_offsets()),
        }
    }

    fn on_changed(&mut self, dy: f32, ctx: &PanContext) -> Effect {
        // Live follow relative to the saved anchor; a transition below
        // supersedes it with an animated snap.
        let live = LayoutOffsets::follow(dy - self.saved_offset);

        if self.panel.is_hidden() && dy > self.dead_zone {
            return Effect::Dismiss(live);
        }

        if self.panel.is_shown() && dy > self.dead_zone {
            self.panel = PanelState::Hidden;
            self.saved_offset = 0.0;
            return Effect::Close(PanelAnimation {
                offsets: LayoutOffsets::ZERO,
                panel_height: 0.0,
                duration: self.animation,
            });
        }

        if self.panel.is_hidden() && dy < -self.dead_zone {
            let constraint = constraint_height(ctx);
            self.panel = PanelState::Shown;
            self.saved_offset = constraint;
            return Effect::Open(PanelAnimation {
                offsets: LayoutOffsets::pinned(constraint),
                panel_height: ctx.panel_height,
                duration: self.animation,
            });
        }

        Effect::Track(live)
    }

    /// Offsets the layout should rest at for the current panel state.
    fn resting_offsets(&self) -> LayoutOffsets {
        match self.panel {
            PanelState::Shown => LayoutOffsets::pinned(self.saved_offset),
            PanelState::Hidden => LayoutOffsets::ZERO,
        }
    }

    /// Returns the current panel state.
    #[must_use]
    pub fn panel(&self) -> PanelState {
        self.panel
    }

    /// Returns true while the detail panel is revealed.
    #[must_use]
    pub fn is_panel_shown(&self) -> bool {
        self.panel.is_shown()
    }

    /// Returns the saved vertical anchor offset.
    #[must_use]
    pub fn saved_offset(&self) -> f32 {
        self.saved_offset
    }

    /// Resets to the hidden panel and resting layout for a new item.
    pub fn reset(&mut self) {
        self.panel = PanelState::Hidden;
        self.saved_offset = 0.0;
    }
}

/// How far above its resting position the image must anchor so the panel
/// fits underneath: the panel height minus the letterbox band below the
/// rendered image. Zero when the rendered height is unknown.
fn constraint_height(ctx: &PanContext) -> f32 {
    match ctx.rendered_image_height {
        Some(height) => ctx.panel_height - (ctx.view_height - height) / 2.0,
        None => 0.0,
    }
}
