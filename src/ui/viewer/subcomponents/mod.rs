// SPDX-License-Identifier: MPL-2.0
//! Viewer sub-components, each with its own `State`/`Message`/`Effect` set.

pub mod centering;
pub mod pan;
pub mod zoom;
