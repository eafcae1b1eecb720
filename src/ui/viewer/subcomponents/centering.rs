// SPDX-License-Identifier: MPL-2.0
//! Content-inset mathematics keeping zoomed media centered.

use crate::ui::state::viewport::fit_ratio;
use iced_core::{Padding, Size};

/// Symmetric content inset that keeps zoomed content visually centered
/// inside the scroll container, whatever the letterboxing between the
/// image's aspect ratio and the content view's.
///
/// Per axis: when the zoomed content overflows the viewport, center by
/// the overflow of the fitted size; otherwise center by the gap between
/// the viewport and the scaled content. At or below the minimum zoom
/// scale, and for any degenerate dimension, the inset is zero.
#[must_use]
pub fn content_inset(image: Size, content_view: Size, zoom_scale: f32) -> Padding {
    if zoom_scale <= 1.0 {
        return Padding::default();
    }

    let Some(ratio) = fit_ratio(image, content_view) else {
        return Padding::default();
    };

    let fit_width = image.width * ratio;
    let fit_height = image.height * ratio;

    let left = if fit_width * zoom_scale > content_view.width {
        0.5 * (fit_width - content_view.width)
    } else {
        0.5 * (content_view.width - fit_width * zoom_scale)
    };

    let top = if fit_height * zoom_scale > content_view.height {
        0.5 * (fit_height - content_view.height)
    } else {
        0.5 * (content_view.height - fit_height * zoom_scale)
    };

    Padding {
        top,
        right: left,
        bottom: top,
        left,
    }
}
