// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wheel controller: pointer events in, transitions and navigation out.
//!
//! ## Overview
//!
//! [`WheelController`] owns the three pieces of mutable state a mounted wheel
//! has — nothing else in the system may touch them:
//!
//! - the [`Hover`] value,
//! - the [`Tooltip`] handle (an `Option`, at most one by construction),
//! - nothing more: geometry is immutable layout, and emphasis is derived.
//!
//! ## Event handling
//!
//! Everything runs synchronously on the caller's thread in delivery order;
//! the state is a strict function of the most recent event. Feed it raw
//! pointer positions ([`pointer_moved`](WheelController::pointer_moved),
//! [`pointer_left`](WheelController::pointer_left),
//! [`clicked`](WheelController::clicked)) and it hit-tests in polar space,
//! or drive region-level edges directly
//! ([`region_entered`](WheelController::region_entered) /
//! [`region_left`](WheelController::region_left)) when the host surface
//! already resolved the region.
//!
//! A pointer-leave is the only cancellation signal for a hover; there are no
//! timers. Clicks never change the hover value: they release the tooltip and
//! dispatch the clicked region's destination to the [`Navigator`], exactly
//! once, without retrying or awaiting.

use alloc::vec::Vec;

use kurbo::Point;
use whorl_geom::RadiusBand;
use whorl_layout::{QueryFilter, Wheel, WheelLayout, WheelMetrics, WheelNode};

use crate::hover::{Hover, HoverState};
use crate::types::{HoverEvent, Navigator, Tooltip};

/// Interaction engine for one mounted wheel.
#[derive(Clone, Debug)]
pub struct WheelController {
    layout: WheelLayout,
    hover: HoverState,
    tooltip: Option<Tooltip>,
}

impl WheelController {
    const PICK: QueryFilter = QueryFilter {
        visible_only: true,
        pickable_only: true,
    };

    /// Lay out `wheel` and create an idle controller for it.
    pub fn new(wheel: &Wheel, metrics: WheelMetrics) -> Self {
        Self::with_layout(WheelLayout::new(wheel, metrics))
    }

    /// Create an idle controller over an existing layout.
    pub fn with_layout(layout: WheelLayout) -> Self {
        Self {
            layout,
            hover: HoverState::new(),
            tooltip: None,
        }
    }

    /// The immutable layout this controller drives.
    pub fn layout(&self) -> &WheelLayout {
        &self.layout
    }

    /// The current hover value.
    pub fn hover(&self) -> Hover {
        self.hover.current()
    }

    /// The tooltip handle, present only while a wedge is hovered.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// The radial band a wedge should be drawn with right now: the base band,
    /// or the base band scaled by the hover factor while that wedge is
    /// hovered. Sibling wedges are never affected.
    pub fn wedge_band(&self, segment: usize, wedge: usize) -> RadiusBand {
        let base = self.layout.metrics().wedge_band;
        if self.hover() == (Hover::Wedge { segment, wedge }) {
            base.scaled(self.layout.metrics().hover_scale)
        } else {
            base
        }
    }

    /// Handle a pointer move to `pos` and return the hover transitions.
    ///
    /// Hit testing uses base radii; the hover enlargement is emphasis only.
    pub fn pointer_moved(&mut self, pos: Point) -> Vec<HoverEvent> {
        let target = self.layout.hit_test_point(pos, Self::PICK);
        self.transition(target, pos)
    }

    /// Handle the pointer leaving the wheel surface entirely.
    pub fn pointer_left(&mut self) -> Vec<HoverEvent> {
        // Position is irrelevant: leaving can only release state.
        self.transition(None, Point::ZERO)
    }

    /// Handle an externally resolved pointer-enter on `node` at `pos`.
    pub fn region_entered(&mut self, node: WheelNode, pos: Point) -> Vec<HoverEvent> {
        self.transition(Some(node), pos)
    }

    /// Handle an externally resolved pointer-leave of `node`.
    ///
    /// A stale leave (for a region that is no longer current) is ignored, so
    /// out-of-order enter/leave pairs from overlapping host regions cannot
    /// wipe a fresh hover.
    pub fn region_left(&mut self, node: WheelNode) -> Vec<HoverEvent> {
        if self.hover.current().node() == Some(node) {
            self.transition(None, Point::ZERO)
        } else {
            Vec::new()
        }
    }

    /// Handle a click at `pos`.
    ///
    /// Releases the tooltip unconditionally, leaves the hover value alone,
    /// and — when the click lands on a segment or wedge — invokes the
    /// navigator with that entity's destination, exactly once. Returns
    /// whether a navigation was dispatched.
    pub fn clicked(&mut self, pos: Point, navigator: &mut impl Navigator) -> bool {
        self.tooltip = None;
        let destination = match self.layout.hit_test_point(pos, Self::PICK) {
            Some(WheelNode::Segment(i)) => {
                self.layout.segments().get(i).map(|s| s.destination.as_str())
            }
            Some(WheelNode::Wedge { segment, wedge }) => self
                .layout
                .wedge(segment, wedge)
                .map(|w| w.destination.as_str()),
            Some(WheelNode::Hub) | None => None,
        };
        match destination {
            Some(destination) => {
                navigator.navigate(destination);
                true
            }
            None => false,
        }
    }

    /// Apply a hover change and keep the tooltip handle in sync with it.
    ///
    /// The tooltip is acquired on the wedge enter edge and released on the
    /// wedge leave edge; because the transitions are diffed, re-delivered
    /// enters cannot mint a second tooltip.
    fn transition(&mut self, target: Option<WheelNode>, pos: Point) -> Vec<HoverEvent> {
        let events = self.hover.update(target);
        for event in &events {
            match *event {
                HoverEvent::Leave(WheelNode::Wedge { .. }) => self.tooltip = None,
                HoverEvent::Enter(WheelNode::Wedge { segment, wedge }) => {
                    self.tooltip = self.layout.wedge(segment, wedge).map(|w| Tooltip {
                        title: w.title.clone(),
                        color: w.color,
                        anchor: pos,
                    });
                }
                _ => {}
            }
        }
        events
    }
}
