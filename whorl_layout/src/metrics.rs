// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed visual metrics of a wheel.

use kurbo::{Point, Vec2};
use whorl_geom::RadiusBand;

/// The fixed dimensions of a wheel, in the drawing's coordinate space.
///
/// Radii are constants per visual state: hovering a wedge scales that wedge's
/// own band by [`WheelMetrics::hover_scale`] and nothing else. The defaults
/// reproduce a 600×600 wheel centered at (300, 300).
#[derive(Clone, Debug, PartialEq)]
pub struct WheelMetrics {
    /// Center of the wheel.
    pub center: Point,
    /// Radial extent of the segment band (the inner ring with curved labels).
    pub segment_band: RadiusBand,
    /// Radial extent of the wedge band (the outer ring of sub-segments).
    pub wedge_band: RadiusBand,
    /// Factor applied to a wedge's band while it is hovered.
    pub hover_scale: f64,
    /// Maximum characters per wedge label line before wrapping.
    pub max_line_len: usize,
    /// Line height of wrapped wedge labels, as a multiple of the font size.
    pub line_height: f64,
    /// Font size of curved segment labels.
    pub segment_font_size: f64,
    /// Font size of hub caption lines.
    pub caption_font_size: f64,
    /// Vertical step between hub caption lines.
    pub caption_line_step: f64,
    /// Curve flattening tolerance for arc-to-Bézier conversion.
    pub tolerance: f64,
    /// Tooltip overlay dimensions.
    pub tooltip: TooltipMetrics,
}

impl Default for WheelMetrics {
    fn default() -> Self {
        Self {
            center: Point::new(300.0, 300.0),
            segment_band: RadiusBand::new(100.0, 145.0),
            wedge_band: RadiusBand::new(145.0, 290.0),
            hover_scale: 1.1,
            max_line_len: 18,
            line_height: 1.2,
            segment_font_size: 16.0,
            caption_font_size: 20.0,
            caption_line_step: 20.0,
            tolerance: 0.1,
            tooltip: TooltipMetrics::default(),
        }
    }
}

/// Dimensions of the floating tooltip shown over a hovered wedge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipMetrics {
    /// Offset from the pointer position, keeping the overlay clear of the cursor.
    pub offset: Vec2,
    /// Fixed overlay width.
    pub width: f64,
    /// Minimum overlay height; the box grows to fit its text.
    pub min_height: f64,
    /// Corner radius of the overlay box.
    pub corner_radius: f64,
    /// Font size of the tooltip text.
    pub font_size: f64,
}

impl Default for TooltipMetrics {
    fn default() -> Self {
        Self {
            offset: Vec2::new(10.0, 10.0),
            width: 130.0,
            min_height: 50.0,
            corner_radius: 5.0,
            font_size: 14.0,
        }
    }
}
