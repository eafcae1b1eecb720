// SPDX-License-Identifier: MPL-2.0
//! Gesture event types for activity tracking.
//!
//! These events capture the meaningful outcomes of user gestures so a
//! host can understand what the viewer was doing when issues occurred.

use serde::{Deserialize, Serialize};

use crate::domain::media::MediaKind;

/// Media classification recorded with presentation events.
///
/// Kept separate from the domain type so the serialized form is owned by
/// the diagnostics layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaCategory {
    Image,
    Audio,
    Video,
}

impl From<MediaKind> for MediaCategory {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => MediaCategory::Image,
            MediaKind::Audio => MediaCategory::Audio,
            MediaKind::Video => MediaCategory::Video,
        }
    }
}

/// Gesture outcomes captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GestureEvent {
    /// A new item was presented on the screen.
    ItemPresented {
        /// Classification of the presented item.
        media: MediaCategory,
    },

    /// A double tap toggled the zoom scale.
    DoubleTapZoom {
        /// Scale the scroll container was asked to settle at.
        target_scale: f32,
    },

    /// A downward drag requested dismissal of the screen.
    DismissRequested,

    /// An upward drag revealed the detail panel.
    PanelOpened {
        /// Vertical offset the image was anchored at.
        constraint_height: f32,
    },

    /// A downward drag hid the detail panel.
    PanelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_snake_case_tags() {
        let json = serde_json::to_string(&GestureEvent::PanelOpened {
            constraint_height: 50.0,
        })
        .expect("serialize");

        assert_eq!(json, r#"{"event":"panel_opened","constraint_height":50.0}"#);
    }

    #[test]
    fn unit_events_serialize_to_a_bare_tag() {
        let json = serde_json::to_string(&GestureEvent::DismissRequested).expect("serialize");
        assert_eq!(json, r#"{"event":"dismiss_requested"}"#);
    }

    #[test]
    fn events_round_trip_through_serde() {
        let event = GestureEvent::ItemPresented {
            media: MediaCategory::Video,
        };
        let json = serde_json::to_string(&event).expect("serialize");
        let back: GestureEvent = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(back, event);
    }

    #[test]
    fn media_category_converts_from_domain_kind() {
        assert_eq!(MediaCategory::from(MediaKind::Audio), MediaCategory::Audio);
        assert_eq!(MediaCategory::from(MediaKind::Image), MediaCategory::Image);
    }
}
