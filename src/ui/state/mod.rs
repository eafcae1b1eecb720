// SPDX-License-Identifier: MPL-2.0
//! Screen state primitives shared by the viewer sub-components.

pub mod panel;
pub mod viewport;
pub mod zoom;

pub use panel::{LayoutOffsets, PanelAnimation, PanelState};
pub use viewport::ViewGeometry;
pub use zoom::{ZoomScale, ZoomState};
