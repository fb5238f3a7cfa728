// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arc path construction for annulus sectors and curved-text baselines.

use core::f64::consts::FRAC_PI_2;

use kurbo::{Arc, BezPath, Vec2};

use crate::{AngleRange, RadiusBand, WheelFrame};

/// Build a `kurbo::Arc` along `range` at `radius`, sweeping clockwise.
///
/// `sweep` is passed separately so callers can negate it for the return leg
/// of a closed boundary.
fn arc_between(frame: &WheelFrame, radius: f64, start_deg: f64, sweep_deg: f64) -> Arc {
    Arc::new(
        frame.center,
        Vec2::new(radius, radius),
        (start_deg - 90.0).to_radians(),
        sweep_deg.to_radians(),
        0.0,
    )
}

/// Clamp a span to one full turn so malformed ranges cannot produce a
/// self-overlapping boundary. NaN propagates.
fn clamp_sweep(span: f64) -> f64 {
    span.clamp(0.0, 360.0)
}

/// Closed boundary of an annulus sector, suitable for filled rendering.
///
/// The boundary has four parts: the outer arc from `range.start` to
/// `range.end`, a line inward, the inner arc back from `range.end` to
/// `range.start`, and the closing line outward. Arcs are flattened to cubic
/// Béziers within `tolerance`.
///
/// Spans of `0°` yield an empty-area (but well-formed) path; spans of `360°`
/// or more are clamped to a single full turn.
pub fn annulus_sector_path(
    frame: &WheelFrame,
    band: RadiusBand,
    range: AngleRange,
    tolerance: f64,
) -> BezPath {
    let sweep = clamp_sweep(range.span());
    let mut path = BezPath::new();
    path.move_to(frame.point_at(band.outer, range.start));
    arc_between(frame, band.outer, range.start, sweep)
        .to_cubic_beziers(tolerance, |p1, p2, p| path.curve_to(p1, p2, p));
    path.line_to(frame.point_at(band.inner, range.start + sweep));
    arc_between(frame, band.inner, range.start + sweep, -sweep)
        .to_cubic_beziers(tolerance, |p1, p2, p| path.curve_to(p1, p2, p));
    path.close_path();
    path
}

/// Open arc at `radius` along `range`, used as an invisible guide for
/// placing curved text. No inner boundary, no closing segment.
pub fn baseline_arc_path(
    frame: &WheelFrame,
    radius: f64,
    range: AngleRange,
    tolerance: f64,
) -> BezPath {
    let sweep = clamp_sweep(range.span());
    let mut path = BezPath::new();
    path.move_to(frame.point_at(radius, range.start));
    arc_between(frame, radius, range.start, sweep)
        .to_cubic_beziers(tolerance, |p1, p2, p| path.curve_to(p1, p2, p));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Point, Shape};

    const TOL: f64 = 0.1;

    fn frame() -> WheelFrame {
        WheelFrame::new(Point::new(300.0, 300.0))
    }

    #[test]
    fn sector_path_is_closed_and_bounded() {
        let path = annulus_sector_path(
            &frame(),
            RadiusBand::new(100.0, 145.0),
            AngleRange::new(0.0, 60.0),
            TOL,
        );
        assert!(
            matches!(path.elements().last(), Some(PathEl::ClosePath)),
            "boundary must close"
        );
        let bbox = path.bounding_box();
        // Everything stays within the outer radius around the center.
        assert!(bbox.x0 >= 300.0 - 145.0 - 1.0 && bbox.x1 <= 300.0 + 145.0 + 1.0);
        assert!(bbox.y0 >= 300.0 - 145.0 - 1.0 && bbox.y1 <= 300.0 + 145.0 + 1.0);
        // A 60° slice of the top-right has positive area.
        assert!(path.area().abs() > 0.0, "filled sector has area");
    }

    #[test]
    fn sector_path_starts_on_the_outer_arc() {
        let f = frame();
        let path = annulus_sector_path(
            &f,
            RadiusBand::new(145.0, 290.0),
            AngleRange::new(90.0, 150.0),
            TOL,
        );
        let Some(&PathEl::MoveTo(start)) = path.elements().first() else {
            panic!("path must begin with a move");
        };
        let expect = f.point_at(290.0, 90.0);
        assert!((start.x - expect.x).abs() < 1e-9 && (start.y - expect.y).abs() < 1e-9);
    }

    #[test]
    fn degenerate_spans_do_not_panic() {
        let f = frame();
        let band = RadiusBand::new(100.0, 145.0);
        let zero = annulus_sector_path(&f, band, AngleRange::new(30.0, 30.0), TOL);
        assert!(zero.area().abs() < 1e-6, "zero span has no area");

        let full = annulus_sector_path(&f, band, AngleRange::new(0.0, 360.0), TOL);
        assert!(full.area().abs() > 0.0);

        let over = annulus_sector_path(&f, band, AngleRange::new(0.0, 720.0), TOL);
        // Clamped to one turn, same magnitude as the full ring.
        assert!((over.area().abs() - full.area().abs()).abs() < 1.0);

        let nan = annulus_sector_path(&f, band, AngleRange::new(0.0, f64::NAN), TOL);
        assert!(!nan.elements().is_empty(), "NaN stays degenerate, no panic");
    }

    #[test]
    fn baseline_is_open() {
        let path = baseline_arc_path(&frame(), 122.5, AngleRange::new(0.0, 60.0), TOL);
        assert!(
            !path
                .elements()
                .iter()
                .any(|el| matches!(el, PathEl::ClosePath)),
            "text guides are open arcs"
        );
        assert!(
            path.elements().len() >= 2,
            "a move plus at least one curve segment"
        );
    }
}
