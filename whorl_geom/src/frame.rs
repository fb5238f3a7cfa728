// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The wheel's coordinate frame and the polar↔Cartesian conversion.

use core::f64::consts::FRAC_PI_2;

use kurbo::{Point, Vec2};

/// The coordinate frame of a wheel: a fixed center in screen space.
///
/// All polar quantities in this workspace use one convention, owned by this
/// type: angles are measured in degrees, `0°` points straight up from the
/// center, and angles grow clockwise on screen (`90°` is right, `180°` is
/// down). Screen space is y-down, as in SVG.
///
/// Every conversion from `(radius, angle)` to a point goes through
/// [`WheelFrame::point_at`]; downstream path construction and hit testing
/// build on it rather than re-deriving the trigonometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelFrame {
    /// Center of the wheel in screen coordinates.
    pub center: Point,
}

impl WheelFrame {
    /// Create a frame centered at `center`.
    pub const fn new(center: Point) -> Self {
        Self { center }
    }

    /// Convert a polar coordinate to a screen point.
    ///
    /// `angle_deg` is clockwise from up. Non-finite inputs yield non-finite
    /// points rather than panicking.
    pub fn point_at(&self, radius: f64, angle_deg: f64) -> Point {
        // Rotate the reference direction from the x axis to screen-up; with
        // y-down screen coordinates the sweep direction comes out clockwise.
        self.center + radius * Vec2::from_angle(angle_deg.to_radians() - FRAC_PI_2)
    }

    /// Distance from the frame center to `pt`.
    pub fn radius_to(&self, pt: Point) -> f64 {
        (pt - self.center).hypot()
    }

    /// Angle of `pt` as seen from the center, in degrees normalized to
    /// `[0, 360)`, clockwise from up.
    pub fn angle_to(&self, pt: Point) -> f64 {
        let v = pt - self.center;
        // atan2(x, -y) measures clockwise from screen-up.
        normalize_degrees(Vec2::new(-v.y, v.x).atan2().to_degrees())
    }
}

/// Normalize an angle in degrees to `[0, 360)`.
///
/// Non-finite inputs are returned unchanged.
pub(crate) fn normalize_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return deg;
    }
    let mut a = deg % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    a
}
