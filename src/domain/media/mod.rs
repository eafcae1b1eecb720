// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! Pure value types describing the item a viewer screen displays.

mod types;

pub use types::{AccentColor, DisplayItem, MediaKind};
