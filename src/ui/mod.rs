// SPDX-License-Identifier: MPL-2.0
//! Viewer-facing state machines and geometry helpers.

pub mod detail_panel;
pub mod state;
pub mod viewer;
