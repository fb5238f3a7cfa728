// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types of the responder: hover transitions, the tooltip handle, and
//! the navigation collaborator.

use alloc::string::String;

use kurbo::Point;
use peniko::Color;
use whorl_layout::WheelNode;

/// A hover transition event.
///
/// Returned by the controller's pointer methods so embedders can react to
/// individual enter/leave edges (accessibility hooks, sounds, logging). The
/// visual result never depends on replaying these: rendering derives from
/// the current state alone.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// Pointer entered the given region.
    Enter(WheelNode),
    /// Pointer left the given region.
    Leave(WheelNode),
}

/// The floating label shown while a wedge is hovered.
///
/// Exactly one tooltip can exist at a time: the controller owns it as an
/// `Option` acquired on wedge entry and released on the matching leave, on
/// any click, and on controller teardown. Its anchor is the pointer position
/// observed at entry; the rendering offset comes from the tooltip metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    /// Title of the hovered wedge.
    pub title: String,
    /// Background color, matching the hovered wedge.
    pub color: Color,
    /// Pointer position at the time the wedge was entered.
    pub anchor: Point,
}

/// The navigation collaborator invoked on click.
///
/// The wheel has no knowledge of how navigation is performed — in-page
/// routing, a full page load — and never retries or awaits it; the call is
/// synchronous and fire-and-forget.
pub trait Navigator {
    /// Navigate to the clicked entity's destination identifier.
    fn navigate(&mut self, destination: &str);
}
