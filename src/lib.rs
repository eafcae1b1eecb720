// SPDX-License-Identifier: MPL-2.0
//! `image_zoom` is the headless interaction core of a zoomable,
//! pannable photo-viewer screen.
//!
//! It models double-tap-to-zoom, content centering while zoomed, and a
//! vertical pan that either dismisses the screen or reveals a metadata
//! detail panel, all as plain state machines over geometry snapshots.
//! The host owns the view hierarchy, gesture recognizers, and
//! animations; this crate only decides the targets.

#![doc(html_root_url = "https://docs.rs/image_zoom/0.3.0")]

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
