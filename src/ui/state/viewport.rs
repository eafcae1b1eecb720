// SPDX-License-Identifier: MPL-2.0
//! Geometry snapshots of the container and content views.
//!
//! The host reads these off its live layout and hands them over as plain
//! values; nothing here is bound to a view object.

use iced_core::Size;

/// Scale factor that fits `image` inside `container` while preserving
/// aspect ratio, before any user zoom is applied.
///
/// Returns `None` when either rectangle has a degenerate dimension.
#[must_use]
pub fn fit_ratio(image: Size, container: Size) -> Option<f32> {
    if image.width <= 0.0
        || image.height <= 0.0
        || container.width <= 0.0
        || container.height <= 0.0
    {
        return None;
    }

    Some((container.width / image.width).min(container.height / image.height))
}

/// Sizes of the container view and the scrollable content view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewGeometry {
    /// Bounds of the container view (the whole screen area).
    pub view: Size,
    /// Bounds of the content view the scroll container zooms.
    pub content: Size,
}

impl Default for ViewGeometry {
    fn default() -> Self {
        Self {
            view: Size::ZERO,
            content: Size::ZERO,
        }
    }
}

impl ViewGeometry {
    /// Creates a new geometry snapshot.
    #[must_use]
    pub fn new(view: Size, content: Size) -> Self {
        Self { view, content }
    }

    /// Snapshot where the content view fills the container, the common
    /// full-screen viewer layout.
    #[must_use]
    pub fn full_screen(view: Size) -> Self {
        Self {
            view,
            content: view,
        }
    }

    /// Rendered (unzoomed) size of `image` after aspect-fitting it into
    /// the content view.
    #[must_use]
    pub fn fitted_size(&self, image: Size) -> Option<Size> {
        let ratio = fit_ratio(image, self.content)?;
        Some(Size::new(image.width * ratio, image.height * ratio))
    }

    /// Height `image` actually occupies on screen before any user zoom.
    #[must_use]
    pub fn rendered_height(&self, image: Size) -> Option<f32> {
        self.fitted_size(image).map(|size| size.height)
    }
}
