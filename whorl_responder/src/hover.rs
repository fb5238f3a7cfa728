// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state: a single owned value plus minimal enter/leave transitions.
//!
//! The wheel's hover model is flat: exactly one of "nothing", "a segment
//! band", or "a wedge" is hovered at any time, and only pointer events move
//! it. [`HoverState::update`] diffs the previous and next values and returns
//! the leave-then-enter sequence needed to get there; updating to the value
//! already held returns nothing, which is what makes repeated enter
//! deliveries harmless.

use alloc::vec::Vec;

use whorl_layout::WheelNode;

use crate::types::HoverEvent;

/// Which part of the wheel is hovered.
///
/// Hovering the hub counts as `Idle`: the center is a dead zone with no
/// emphasis and no tooltip.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Hover {
    /// Nothing is hovered.
    #[default]
    Idle,
    /// The segment band of segment `i` is hovered (fill emphasis).
    Segment(usize),
    /// A wedge is hovered (enlargement and tooltip).
    Wedge {
        /// Index of the owning segment.
        segment: usize,
        /// Index of the wedge within its segment.
        wedge: usize,
    },
}

impl Hover {
    /// The hovered region, if any.
    pub fn node(&self) -> Option<WheelNode> {
        match *self {
            Self::Idle => None,
            Self::Segment(i) => Some(WheelNode::Segment(i)),
            Self::Wedge { segment, wedge } => Some(WheelNode::Wedge { segment, wedge }),
        }
    }

    fn from_target(target: Option<WheelNode>) -> Self {
        match target {
            Some(WheelNode::Segment(i)) => Self::Segment(i),
            Some(WheelNode::Wedge { segment, wedge }) => Self::Wedge { segment, wedge },
            // The hub is not hoverable.
            Some(WheelNode::Hub) | None => Self::Idle,
        }
    }
}

/// The owned hover value of one wheel instance.
///
/// Mutated only through [`update`](Self::update) and [`clear`](Self::clear);
/// there is no other way to move the state, so visuals derived from it can
/// never disagree with the event stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    current: Hover,
}

impl HoverState {
    /// Create an idle hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current hover value.
    pub fn current(&self) -> Hover {
        self.current
    }

    /// Move to the region under the pointer and return the transitions.
    ///
    /// Leaves are emitted before enters. Updating to the current value is a
    /// no-op that returns no events.
    pub fn update(&mut self, target: Option<WheelNode>) -> Vec<HoverEvent> {
        let next = Hover::from_target(target);
        let mut out = Vec::new();
        if next == self.current {
            return out;
        }
        if let Some(node) = self.current.node() {
            out.push(HoverEvent::Leave(node));
        }
        if let Some(node) = next.node() {
            out.push(HoverEvent::Enter(node));
        }
        self.current = next;
        out
    }

    /// Return to idle, emitting the leave for the current region if any.
    pub fn clear(&mut self) -> Vec<HoverEvent> {
        self.update(None)
    }
}
