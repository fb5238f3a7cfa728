// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular spans, annulus bands, and sector containment.

use kurbo::Point;

use crate::WheelFrame;

/// A half-open angular span `[start, end)` in degrees, clockwise from up.
///
/// Sibling ranges produced by a layout accumulate around the circle with no
/// gaps and no overlaps, so the half-open convention makes every angle belong
/// to exactly one sibling.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngleRange {
    /// Start angle in degrees. Always `0 ≤ start < end` for well-formed ranges.
    pub start: f64,
    /// End angle in degrees.
    pub end: f64,
}

impl AngleRange {
    /// The full circle, `[0°, 360°)`.
    pub const FULL: Self = Self::new(0.0, 360.0);

    /// Create a range from `start` to `end` degrees.
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Width of the range in degrees.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Angle halfway between `start` and `end`.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Whether `angle_deg` (already normalized to `[0, 360)`) lies inside.
    pub fn contains(&self, angle_deg: f64) -> bool {
        angle_deg >= self.start && angle_deg < self.end
    }
}

/// The radial extent of an annulus: `inner < outer` for well-formed bands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadiusBand {
    /// Inner radius.
    pub inner: f64,
    /// Outer radius.
    pub outer: f64,
}

impl RadiusBand {
    /// Create a band between `inner` and `outer`.
    pub const fn new(inner: f64, outer: f64) -> Self {
        Self { inner, outer }
    }

    /// Scale both radii by `factor`, e.g. for hover emphasis.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.inner * factor, self.outer * factor)
    }

    /// The radius halfway through the band, where label baselines sit.
    pub fn midline(&self) -> f64 {
        0.5 * (self.inner + self.outer)
    }

    /// Whether `radius` lies inside the band (inclusive of both edges).
    pub fn contains(&self, radius: f64) -> bool {
        radius >= self.inner && radius <= self.outer
    }
}

/// An annulus sector: a [`RadiusBand`] crossed with an [`AngleRange`].
///
/// This is the wheel's hit-test primitive. Containment is answered in polar
/// space directly; there is no intermediate bounding-box step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sector {
    /// Radial extent.
    pub band: RadiusBand,
    /// Angular extent.
    pub range: AngleRange,
}

impl Sector {
    /// Create a sector from a band and a range.
    pub const fn new(band: RadiusBand, range: AngleRange) -> Self {
        Self { band, range }
    }

    /// Whether `pt` lies inside the sector, measured in `frame`.
    pub fn contains(&self, frame: &WheelFrame, pt: Point) -> bool {
        self.band.contains(frame.radius_to(pt)) && self.range.contains(frame.angle_to(pt))
    }
}
