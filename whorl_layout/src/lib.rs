// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Layout: from a wheel dataset to angular partitions, wrapped labels,
//! and hit-testable regions.
//!
//! ## Overview
//!
//! This crate turns an immutable [`Wheel`] dataset — segments with ordered
//! sub-segments — into a [`WheelLayout`]:
//!
//! - Each of N segments gets an equal `360/N`° span, assigned in dataset
//!   order from `0°`.
//! - Within a segment, each sub-segment's span is proportional to its title
//!   length in characters, so longer labels get more arc. Start angles come
//!   from a running accumulation; sibling spans tile the parent exactly.
//!   All-empty titles fall back to equal division instead of dividing by
//!   zero.
//! - Sub-segment titles are wrapped to a per-line character limit and sized
//!   by a non-increasing font-size table.
//! - Every part of the wheel becomes a [`Region`] — an annulus [`Sector`]
//!   with identity, z-order, and flags — and
//!   [`WheelLayout::hit_test_point`] answers pointer queries in polar space.
//!
//! Layout is a pure function of `(dataset, metrics)`. Interaction state and
//! scene emission live upstream in `whorl_responder`; path construction
//! primitives live downstream in [`whorl_geom`].
//!
//! ## Example
//!
//! ```rust
//! use peniko::color::palette::css;
//! use whorl_layout::{QueryFilter, Segment, SubSegment, Wheel, WheelLayout, WheelMetrics, WheelNode};
//!
//! let wheel = Wheel::new(vec![Segment::new(
//!     "Community",
//!     css::STEEL_BLUE,
//!     "/community",
//!     vec![
//!         SubSegment::new("Forums", css::DARK_ORANGE, "/community/forums"),
//!         SubSegment::new("Events", css::SEA_GREEN, "/community/events"),
//!     ],
//! )]);
//! let layout = WheelLayout::new(&wheel, WheelMetrics::default());
//!
//! // The lone segment owns the full circle; equal 6-char titles split it evenly.
//! assert_eq!(layout.segments()[0].wedges[0].range.span(), 180.0);
//!
//! // Pointer queries resolve in polar space.
//! let pt = layout.frame().point_at(217.5, 90.0);
//! let filter = QueryFilter { visible_only: true, pickable_only: true };
//! assert_eq!(
//!     layout.hit_test_point(pt, filter),
//!     Some(WheelNode::Wedge { segment: 0, wedge: 0 })
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod data;
mod layout;
mod metrics;
mod partition;
mod text;

pub use data::{Segment, SubSegment, Wheel};
pub use layout::{
    QueryFilter, Region, RegionFlags, SegmentLayout, WedgeLayout, WheelLayout, WheelNode,
};
pub use metrics::{TooltipMetrics, WheelMetrics};
pub use partition::{segment_ranges, wedge_ranges};
pub use text::{font_size_for, wrap_title};

// Re-export the geometry vocabulary so downstream crates name one source.
pub use whorl_geom::{AngleRange, RadiusBand, Sector, WheelFrame};
