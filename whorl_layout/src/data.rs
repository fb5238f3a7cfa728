// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The immutable wheel dataset: segments and their sub-segments.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// A leaf entry of the wheel: one labeled, colored, clickable wedge.
#[derive(Clone, Debug)]
pub struct SubSegment {
    /// Label drawn inside the wedge and in its tooltip.
    pub title: String,
    /// Fill color of the wedge and its tooltip background.
    pub color: Color,
    /// Identifier handed to the navigation collaborator on click.
    pub destination: String,
}

impl SubSegment {
    /// Create a sub-segment.
    pub fn new(
        title: impl Into<String>,
        color: Color,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            color,
            destination: destination.into(),
        }
    }
}

/// A primary ring entry. Its sub-segments are placed in order, the first one
/// starting at the segment's own start angle.
#[derive(Clone, Debug)]
pub struct Segment {
    /// Label drawn curved along the segment band.
    pub title: String,
    /// Emphasis color of the segment band while hovered; also the label fill.
    pub color: Color,
    /// Identifier handed to the navigation collaborator on click.
    pub destination: String,
    /// Ordered sub-segments; order defines angular placement.
    pub sub_segments: Vec<SubSegment>,
}

impl Segment {
    /// Create a segment with its sub-segments.
    pub fn new(
        title: impl Into<String>,
        color: Color,
        destination: impl Into<String>,
        sub_segments: Vec<SubSegment>,
    ) -> Self {
        Self {
            title: title.into(),
            color,
            destination: destination.into(),
            sub_segments,
        }
    }
}

/// The wheel dataset: an ordered sequence of segments, read-only after
/// construction.
///
/// The dataset is supplied once at startup by an external data provider and
/// never mutated; layout and interaction state are derived from it. The only
/// defensive behavior layered on top is the partitioner's equal-split
/// fallback for all-empty sub-segment titles.
#[derive(Clone, Debug, Default)]
pub struct Wheel {
    segments: Vec<Segment>,
    hub_captions: Vec<String>,
}

impl Wheel {
    /// Create a wheel from its segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments,
            hub_captions: Vec::new(),
        }
    }

    /// Set the caption lines drawn inside the central hub disc.
    ///
    /// Captions are embedder-supplied chrome (a site name, a motto); the
    /// layout stacks them below the hub center at a fixed line step.
    pub fn with_hub_captions(mut self, captions: Vec<String>) -> Self {
        self.hub_captions = captions;
        self
    }

    /// The segments, in angular placement order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Caption lines for the hub disc.
    pub fn hub_captions(&self) -> &[String] {
        &self.hub_captions
    }
}
