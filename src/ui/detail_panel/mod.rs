// SPDX-License-Identifier: MPL-2.0
//! Contract types for the metadata detail panel collaborator.
//!
//! The panel itself is host-owned; this module only fixes the data the
//! viewer core exchanges with it: the content refresh payload sent on
//! presentation and the height of the panel's map region.

use crate::config::MAP_HEIGHT_DIVISOR;
use crate::domain::media::DisplayItem;
use iced_core::Size;

/// Payload for the panel's `update` call when a screen is presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelContent {
    /// The item whose metadata the panel should show.
    pub item: DisplayItem,
    /// Height to give the panel's map region.
    pub map_height: f32,
}

/// Height of the map region inside the detail panel: one third of the
/// view's smaller dimension.
#[must_use]
pub fn map_height(view: Size) -> f32 {
    let shorter = if view.width < view.height {
        view.width
    } else {
        view.height
    };
    (shorter / MAP_HEIGHT_DIVISOR).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn portrait_view_uses_width() {
        assert_abs_diff_eq!(map_height(Size::new(600.0, 800.0)), 200.0);
    }

    #[test]
    fn landscape_view_uses_height() {
        assert_abs_diff_eq!(map_height(Size::new(800.0, 600.0)), 200.0);
    }

    #[test]
    fn degenerate_view_yields_zero() {
        assert_eq!(map_height(Size::ZERO), 0.0);
    }
}
