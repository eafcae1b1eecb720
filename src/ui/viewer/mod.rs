// SPDX-License-Identifier: MPL-2.0
//! Viewer screen orchestrator - zoom, centering, and pan/reveal together.
//!
//! This cluster groups the interaction logic of one photo-viewer screen,
//! where the pieces have strong internal coupling (e.g. the revealed
//! panel suppresses double-tap zoom, and the pan machine needs the same
//! fit geometry the centering math uses).
//!
//! ## Composition
//!
//! - `zoom::State`: double-tap toggling and zoom-rect computation
//! - `pan::State`: dismiss/open/close state machine over drag samples
//! - `centering`: pure content-inset math, invoked on zoom callbacks
//!
//! The host feeds [`Message`]s from its gesture recognizers and scroll
//! container, applies the returned [`Effect`]s to its own layout, and
//! stops tracking an in-flight gesture when [`Effect::ends_gesture`]
//! says so.

pub mod subcomponents;

use crate::config::Config;
use crate::diagnostics::{Collector, GestureEvent};
use crate::domain::gesture::DragSample;
use crate::domain::media::{AccentColor, DisplayItem};
use crate::ui::detail_panel::{self, PanelContent};
use crate::ui::state::panel::{LayoutOffsets, PanelAnimation};
use crate::ui::state::viewport::ViewGeometry;
use crate::ui::state::zoom::ZoomScale;
use crate::ui::viewer::subcomponents::{centering, pan, zoom};
use iced_core::{Padding, Point, Rectangle, Size};

/// Viewer screen state.
///
/// Combines zoom and pan/reveal into a cohesive unit together with the
/// latest geometry snapshot and the presented item.
#[derive(Debug, Clone)]
pub struct State {
    /// Zoom sub-component.
    pub zoom: zoom::State,
    /// Pan/reveal sub-component.
    pub pan: pan::State,
    /// Latest geometry snapshot from the host.
    geometry: ViewGeometry,
    /// The item currently presented, if any.
    item: Option<DisplayItem>,
    /// Natural height the detail panel reported.
    panel_height: f32,
    /// Whether the media transport control is currently visible.
    transport_visible: bool,
    /// Gesture activity capture.
    diagnostics: Collector,
}

/// Messages for the viewer screen.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new item is about to be displayed; resets zoom and panel state.
    Present {
        /// The item to display.
        item: DisplayItem,
        /// Geometry the screen is laid out with.
        geometry: ViewGeometry,
    },
    /// The screen is about to appear.
    WillAppear,
    /// The screen finished appearing.
    DidAppear,
    /// Container or content view bounds changed.
    GeometryChanged(ViewGeometry),
    /// The detail panel reported its natural height.
    PanelMeasured(f32),
    /// Double tap at a point in content coordinates.
    DoubleTap(Point),
    /// One pan-gesture observation.
    Drag(DragSample),
    /// The scroll container reported a new zoom scale.
    ScaleChanged(f32),
    /// The media transport control was shown or hidden.
    TransportVisibilityChanged(bool),
}

/// Effects produced by viewer messages.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Refresh the detail panel with the presented item.
    RefreshPanel(PanelContent),
    /// Forward to the host delegate: the screen is about to appear.
    WillAppear(DisplayItem),
    /// Forward to the host delegate: the screen finished appearing.
    DidAppear(DisplayItem),
    /// The scroll container should animate its zoom to `rect`.
    ZoomTo {
        /// Scale the container will settle at.
        scale: ZoomScale,
        /// Region, centered on the tap, to make visible.
        rect: Rectangle,
    },
    /// Content inset keeping the zoomed image centered.
    SetContentInset(Padding),
    /// 1:1 drag-follow offsets, applied without animation.
    TrackOffsets(LayoutOffsets),
    /// Close the whole screen; the panel stays hidden.
    RequestDismiss(LayoutOffsets),
    /// Reveal the detail panel.
    OpenPanel {
        /// Animated layout targets.
        animation: PanelAnimation,
        /// Accent color for the panel, when the item carries one.
        accent: Option<AccentColor>,
    },
    /// Hide the detail panel.
    ClosePanel(PanelAnimation),
    /// Snap offsets after a gesture ended mid-drag.
    SettleOffsets(LayoutOffsets),
}

impl Effect {
    /// True when the caller must stop tracking the current gesture.
    #[must_use]
    pub fn ends_gesture(&self) -> bool {
        matches!(self, Effect::OpenPanel { .. } | Effect::ClosePanel(_))
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl State {
    /// Creates a viewer screen tuned by `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            zoom: zoom::State::with_snap_tolerance(config.snap_tolerance()),
            pan: pan::State::new(config.dead_zone(), config.panel_animation()),
            geometry: ViewGeometry::default(),
            item: None,
            panel_height: 0.0,
            transport_visible: false,
            diagnostics: Collector::default(),
        }
    }

    /// Handle a viewer message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Present { item, geometry } => self.present(item, geometry),
            Message::WillAppear => match self.item {
                Some(item) => Effect::WillAppear(item),
                None => Effect::None,
            },
            Message::DidAppear => match self.item {
                Some(item) => Effect::DidAppear(item),
                None => Effect::None,
            },
            Message::GeometryChanged(geometry) => {
                self.geometry = geometry;
                Effect::None
            }
            Message::PanelMeasured(height) => {
                self.panel_height = height.max(0.0);
                Effect::None
            }
            Message::DoubleTap(point) => self.on_double_tap(point),
            Message::Drag(sample) => self.on_drag(sample),
            Message::ScaleChanged(scale) => self.on_scale_changed(scale),
            Message::TransportVisibilityChanged(visible) => {
                self.transport_visible = visible;
                Effect::None
            }
        }
    }

    fn present(&mut self, item: DisplayItem, geometry: ViewGeometry) -> Effect {
        self.item = Some(item);
        self.geometry = geometry;
        self.zoom.handle(zoom::Message::Reset);
        self.pan.reset();
        self.diagnostics.record(GestureEvent::ItemPresented {
            media: item.kind().into(),
        });

        Effect::RefreshPanel(PanelContent {
            item,
            map_height: detail_panel::map_height(geometry.view),
        })
    }

    fn on_double_tap(&mut self, point: Point) -> Effect {
        if self.pan.is_panel_shown() {
            return Effect::None;
        }
        if self.zoom_gesture_suppressed() {
            return Effect::None;
        }

        let effect = self.zoom.handle(zoom::Message::DoubleTap {
            point,
            viewport: self.geometry.content,
        });

        match effect {
            zoom::Effect::ZoomTo { scale, rect } => {
                self.diagnostics.record(GestureEvent::DoubleTapZoom {
                    target_scale: scale.value(),
                });
                Effect::ZoomTo { scale, rect }
            }
            zoom::Effect::None => Effect::None,
        }
    }

    /// No zoom for audio and video while the transport control is up.
    fn zoom_gesture_suppressed(&self) -> bool {
        self.transport_visible
            && self
                .item
                .is_some_and(|item| item.kind().has_transport_control())
    }

    fn on_drag(&mut self, sample: DragSample) -> Effect {
        let ctx = pan::PanContext {
            view_height: self.geometry.view.height,
            rendered_image_height: self
                .item
                .and_then(|item| self.geometry.rendered_height(item_size(&item))),
            panel_height: self.panel_height,
        };

        match self.pan.handle(sample, &ctx) {
            pan::Effect::None => Effect::None,
            pan::Effect::Track(offsets) => Effect::TrackOffsets(offsets),
            pan::Effect::Dismiss(offsets) => {
                self.diagnostics.record(GestureEvent::DismissRequested);
                Effect::RequestDismiss(offsets)
            }
            pan::Effect::Open(animation) => {
                self.diagnostics.record(GestureEvent::PanelOpened {
                    constraint_height: animation.offsets.bottom,
                });
                Effect::OpenPanel {
                    animation,
                    accent: self.item.and_then(|item| item.accent()),
                }
            }
            pan::Effect::Close(animation) => {
                self.diagnostics.record(GestureEvent::PanelClosed);
                Effect::ClosePanel(animation)
            }
            pan::Effect::Settle(offsets) => Effect::SettleOffsets(offsets),
        }
    }

    fn on_scale_changed(&mut self, scale: f32) -> Effect {
        self.zoom.handle(zoom::Message::ScaleChanged(scale));

        let Some(item) = self.item else {
            return Effect::None;
        };

        let padding = centering::content_inset(
            item_size(&item),
            self.geometry.content,
            self.zoom.current_scale().value(),
        );
        Effect::SetContentInset(padding)
    }

    /// Returns the currently presented item.
    #[must_use]
    pub fn item(&self) -> Option<DisplayItem> {
        self.item
    }

    /// Returns the latest geometry snapshot.
    #[must_use]
    pub fn geometry(&self) -> ViewGeometry {
        self.geometry
    }

    /// Returns true while the detail panel is revealed.
    #[must_use]
    pub fn is_panel_shown(&self) -> bool {
        self.pan.is_panel_shown()
    }

    /// Returns the captured gesture activity.
    #[must_use]
    pub fn diagnostics(&self) -> &Collector {
        &self.diagnostics
    }
}

// Image dimensions are typically < 16M pixels; f32 is exact up to 2^24,
// sufficient for any reasonable image.
#[allow(clippy::cast_precision_loss)]
fn item_size(item: &DisplayItem) -> Size {
    Size::new(item.width() as f32, item.height() as f32)
}
