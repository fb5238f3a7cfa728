// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Geom: Kurbo-native polar geometry for radial wheels.
//!
//! Whorl Geom is the leaf building block of the Whorl workspace. It knows
//! nothing about datasets, labels, or pointer state; it only converts between
//! polar and Cartesian coordinates and builds the paths a radial wheel is
//! drawn from.
//!
//! - [`WheelFrame`] fixes the wheel center and is the single source of truth
//!   for the polar convention: angles are degrees, `0°` points up, and angles
//!   grow clockwise on screen.
//! - [`AngleRange`] and [`RadiusBand`] describe angular spans and annulus
//!   bands; [`Sector`] combines them and answers point containment queries
//!   (the polar analogue of an AABB point query).
//! - [`annulus_sector_path`] and [`baseline_arc_path`] emit `kurbo::BezPath`
//!   boundaries: a closed four-part annulus sector suitable for filling, and
//!   an open arc used as an invisible guide for curved text.
//!
//! All functions are pure and total. Non-finite inputs propagate as
//! degenerate (but non-panicking) geometry; callers are responsible for
//! supplying valid numeric angles.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use whorl_geom::{AngleRange, RadiusBand, Sector, WheelFrame};
//!
//! let frame = WheelFrame::new(Point::new(300.0, 300.0));
//!
//! // 0° points up; 90° points right.
//! let top = frame.point_at(100.0, 0.0);
//! assert!((top.x - 300.0).abs() < 1e-9 && (top.y - 200.0).abs() < 1e-9);
//!
//! // A quarter-turn annulus sector on the right side of the wheel.
//! let sector = Sector::new(RadiusBand::new(145.0, 290.0), AngleRange::new(45.0, 135.0));
//! assert!(sector.contains(&frame, Point::new(500.0, 300.0)));
//! assert!(!sector.contains(&frame, Point::new(300.0, 100.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arc;
mod frame;
mod sector;

pub use arc::{annulus_sector_path, baseline_arc_path};
pub use frame::WheelFrame;
pub use sector::{AngleRange, RadiusBand, Sector};
