// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The computed wheel layout and its polar hit testing.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use whorl_geom::{AngleRange, RadiusBand, Sector, WheelFrame};

use crate::data::Wheel;
use crate::metrics::WheelMetrics;
use crate::partition::{segment_ranges, wedge_ranges};
use crate::text::{font_size_for, wrap_title};

/// Identity of an interactive region of the wheel.
///
/// Stable for the lifetime of a layout: the wheel's region set is fixed once
/// the dataset is laid out.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum WheelNode {
    /// The central disc. Visible, never pickable.
    Hub,
    /// The segment band of segment `i`.
    Segment(usize),
    /// Sub-segment `wedge` of segment `segment`.
    Wedge {
        /// Index of the owning segment.
        segment: usize,
        /// Index of the sub-segment within its segment.
        wedge: usize,
    },
}

bitflags::bitflags! {
    /// Region flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct RegionFlags: u8 {
        /// Region is visible (participates in scene emission).
        const VISIBLE  = 0b0000_0001;
        /// Region is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for RegionFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// Filters applied during hit testing.
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider regions marked [`RegionFlags::VISIBLE`].
    pub visible_only: bool,
    /// If true, only consider regions marked [`RegionFlags::PICKABLE`].
    pub pickable_only: bool,
}

/// One hit-testable region: an annulus sector with identity and flags.
#[derive(Clone, Copy, Debug)]
pub struct Region {
    /// Which part of the wheel this region is.
    pub node: WheelNode,
    /// Polar extent of the region.
    pub sector: Sector,
    /// Stacking order; higher wins when band edges touch.
    pub z_index: i32,
    /// Visibility and picking flags.
    pub flags: RegionFlags,
}

/// Computed layout of one wedge (a sub-segment's annulus sector).
#[derive(Clone, Debug)]
pub struct WedgeLayout {
    /// Angular extent within the parent segment.
    pub range: AngleRange,
    /// The sub-segment title, unwrapped.
    pub title: String,
    /// Title wrapped to the metrics' per-line character limit.
    pub lines: Vec<String>,
    /// Font size derived from the title length.
    pub font_size: f64,
    /// Fill color.
    pub color: Color,
    /// Navigation destination.
    pub destination: String,
    /// Label rotation in degrees: the midpoint angle minus 90°, so text
    /// reads roughly radially outward.
    pub rotation_deg: f64,
}

/// Computed layout of one segment and its wedges.
#[derive(Clone, Debug)]
pub struct SegmentLayout {
    /// Angular extent of the segment.
    pub range: AngleRange,
    /// The segment title, drawn curved along the band midline.
    pub title: String,
    /// Hover emphasis and label color.
    pub color: Color,
    /// Navigation destination.
    pub destination: String,
    /// Wedges in placement order.
    pub wedges: Vec<WedgeLayout>,
}

/// The fully computed wheel: angular partitions, label layout, and the
/// region set used for hit testing.
///
/// A layout is a pure function of `(dataset, metrics)`; it never changes
/// after construction. Hover emphasis does not live here — rendering derives
/// it per pass from the interaction state, so no stale geometry can persist.
#[derive(Clone, Debug)]
pub struct WheelLayout {
    frame: WheelFrame,
    metrics: WheelMetrics,
    segments: Vec<SegmentLayout>,
    hub_captions: Vec<String>,
    regions: Vec<Region>,
}

impl WheelLayout {
    /// Lay out `wheel` with the given metrics.
    pub fn new(wheel: &Wheel, metrics: WheelMetrics) -> Self {
        let frame = WheelFrame::new(metrics.center);
        let ranges = segment_ranges(wheel.segments().len());

        let mut segments = Vec::with_capacity(wheel.segments().len());
        let mut regions = Vec::new();
        regions.push(Region {
            node: WheelNode::Hub,
            sector: Sector::new(
                RadiusBand::new(0.0, metrics.segment_band.inner),
                AngleRange::FULL,
            ),
            z_index: 0,
            flags: RegionFlags::VISIBLE,
        });

        for (i, (segment, range)) in wheel.segments().iter().zip(ranges).enumerate() {
            regions.push(Region {
                node: WheelNode::Segment(i),
                sector: Sector::new(metrics.segment_band, range),
                z_index: 1,
                flags: RegionFlags::default(),
            });

            let mut wedges = Vec::with_capacity(segment.sub_segments.len());
            for (j, (sub, sub_range)) in segment
                .sub_segments
                .iter()
                .zip(wedge_ranges(segment, range))
                .enumerate()
            {
                regions.push(Region {
                    node: WheelNode::Wedge {
                        segment: i,
                        wedge: j,
                    },
                    sector: Sector::new(metrics.wedge_band, sub_range),
                    z_index: 2,
                    flags: RegionFlags::default(),
                });
                wedges.push(WedgeLayout {
                    range: sub_range,
                    title: sub.title.clone(),
                    lines: wrap_title(&sub.title, metrics.max_line_len),
                    font_size: font_size_for(sub.title.chars().count()),
                    color: sub.color,
                    destination: sub.destination.clone(),
                    rotation_deg: sub_range.midpoint() - 90.0,
                });
            }

            segments.push(SegmentLayout {
                range,
                title: segment.title.clone(),
                color: segment.color,
                destination: segment.destination.clone(),
                wedges,
            });
        }

        Self {
            frame,
            metrics,
            segments,
            hub_captions: wheel.hub_captions().to_vec(),
            regions,
        }
    }

    /// The wheel's coordinate frame.
    pub fn frame(&self) -> &WheelFrame {
        &self.frame
    }

    /// The metrics this layout was built with.
    pub fn metrics(&self) -> &WheelMetrics {
        &self.metrics
    }

    /// Segment layouts in placement order.
    pub fn segments(&self) -> &[SegmentLayout] {
        &self.segments
    }

    /// Caption lines for the hub disc.
    pub fn hub_captions(&self) -> &[String] {
        &self.hub_captions
    }

    /// All hit-testable regions.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up a wedge layout by node indices.
    pub fn wedge(&self, segment: usize, wedge: usize) -> Option<&WedgeLayout> {
        self.segments.get(segment)?.wedges.get(wedge)
    }

    /// Radius of segment label baselines: the segment band midline.
    pub fn segment_text_radius(&self) -> f64 {
        self.metrics.segment_band.midline()
    }

    /// Radius of wedge label anchors: the wedge band midline.
    pub fn wedge_text_radius(&self) -> f64 {
        self.metrics.wedge_band.midline()
    }

    /// The topmost region containing a world-space point.
    ///
    /// Regions are ranked by `z_index` (wedges over segments over the hub);
    /// equal-depth ties are stable and the last region wins. Hit testing
    /// always uses base radii — hover enlargement is visual emphasis only.
    pub fn hit_test_point(&self, pt: Point, filter: QueryFilter) -> Option<WheelNode> {
        let mut best: Option<(WheelNode, i32)> = None;
        for region in &self.regions {
            if filter.visible_only && !region.flags.contains(RegionFlags::VISIBLE) {
                continue;
            }
            if filter.pickable_only && !region.flags.contains(RegionFlags::PICKABLE) {
                continue;
            }
            if !region.sector.contains(&self.frame, pt) {
                continue;
            }
            match best {
                Some((_, z_best)) if region.z_index < z_best => {}
                _ => best = Some((region.node, region.z_index)),
            }
        }
        best.map(|(node, _)| node)
    }
}
