// SPDX-License-Identifier: MPL-2.0
//! Detail-panel reveal state and the layout values that drive it.

use std::time::Duration;

/// Whether the metadata detail panel is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// The panel is off screen; the image rests in its normal position.
    #[default]
    Hidden,
    /// The panel is revealed; the image is anchored above it.
    Shown,
}

impl PanelState {
    /// Returns true when the panel is revealed.
    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, PanelState::Shown)
    }

    /// Returns true when the panel is off screen.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(self, PanelState::Hidden)
    }
}

/// Desired image-top and image-bottom constraint constants.
///
/// The host applies these to whatever layout mechanism it uses; the pair
/// always moves the image as a rigid body (`top == -bottom`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOffsets {
    /// Constant for the image's top constraint.
    pub top: f32,
    /// Constant for the image's bottom constraint.
    pub bottom: f32,
}

impl LayoutOffsets {
    /// The image at rest.
    pub const ZERO: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    /// 1:1 drag follow: the image moves with the finger by `delta`.
    #[must_use]
    pub fn follow(delta: f32) -> Self {
        Self {
            top: delta,
            bottom: -delta,
        }
    }

    /// Anchors the image `offset` points above its resting position,
    /// as while the detail panel is shown.
    #[must_use]
    pub fn pinned(offset: f32) -> Self {
        Self {
            top: -offset,
            bottom: offset,
        }
    }
}

/// Animated layout targets for a panel transition.
///
/// Fire-and-forget for the host: it animates the offsets and panel height
/// to these targets over `duration` and may ignore completion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelAnimation {
    /// Target image offsets.
    pub offsets: LayoutOffsets,
    /// Target panel height (its natural height when opening, zero when closing).
    pub panel_height: f32,
    /// Animation duration.
    pub duration: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_state_defaults_to_hidden() {
        assert!(PanelState::default().is_hidden());
        assert!(!PanelState::default().is_shown());
    }

    #[test]
    fn follow_moves_image_as_rigid_body() {
        let offsets = LayoutOffsets::follow(12.5);
        assert_eq!(offsets.top, 12.5);
        assert_eq!(offsets.bottom, -12.5);
    }

    #[test]
    fn pinned_lifts_image_above_rest() {
        let offsets = LayoutOffsets::pinned(40.0);
        assert_eq!(offsets.top, -40.0);
        assert_eq!(offsets.bottom, 40.0);
    }

    #[test]
    fn pinned_zero_is_rest() {
        assert_eq!(LayoutOffsets::pinned(0.0), LayoutOffsets::ZERO);
    }
}
