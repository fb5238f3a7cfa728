// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whorl Responder: deterministic interaction for radial wheels.
//!
//! ## Overview
//!
//! This crate is the mutable half of a mounted wheel. `whorl_layout` computes
//! the immutable geometry; here a [`WheelController`] reacts to pointer and
//! click events, owning exactly one [`Hover`] value and at most one
//! [`Tooltip`] handle, and derives a paint-ordered [`Scene`] from them on
//! demand.
//!
//! ## State machine
//!
//! States are `Idle`, `Segment(i)`, and `Wedge(i, j)`; the initial state is
//! `Idle` and there is no terminal state. Transitions:
//!
//! - enter on a segment band → `Segment(i)`; its fill switches from neutral
//!   to the segment color.
//! - enter on a wedge → `Wedge(i, j)`; that wedge's radii scale by a fixed
//!   factor and a tooltip is acquired at the pointer position.
//! - leave → `Idle`; emphasis reverts and the tooltip is released.
//! - click → state unchanged; the tooltip is released and the clicked
//!   entity's destination goes to the [`Navigator`], exactly once.
//!
//! Transitions are reported as minimal [`HoverEvent`] sequences (leave
//! before enter); re-delivered enters are no-ops, so overlapping host
//! regions cannot duplicate tooltips.
//!
//! ## Derived rendering
//!
//! [`WheelController::scene`] is a pure function of the current state; it is
//! recomputed per pass and never mutated incrementally, so no stale visual
//! state can outlive a transition.
//!
//! ## Example
//!
//! ```rust
//! use peniko::color::palette::css;
//! use whorl_layout::{Segment, SubSegment, Wheel, WheelMetrics};
//! use whorl_responder::{Hover, Navigator, WheelController};
//!
//! struct PageRouter(Vec<String>);
//! impl Navigator for PageRouter {
//!     fn navigate(&mut self, destination: &str) {
//!         self.0.push(destination.to_string());
//!     }
//! }
//!
//! let wheel = Wheel::new(vec![Segment::new(
//!     "Library",
//!     css::STEEL_BLUE,
//!     "/library",
//!     vec![SubSegment::new("Journals", css::DARK_ORANGE, "/library/journals")],
//! )]);
//! let mut controller = WheelController::new(&wheel, WheelMetrics::default());
//!
//! // Hover the lone wedge: its band mid-line at any angle.
//! let pos = controller.layout().frame().point_at(217.5, 90.0);
//! let _ = controller.pointer_moved(pos);
//! assert_eq!(controller.hover(), Hover::Wedge { segment: 0, wedge: 0 });
//! assert_eq!(controller.tooltip().unwrap().title, "Journals");
//!
//! // Click it: one navigation, tooltip gone.
//! let mut router = PageRouter(Vec::new());
//! assert!(controller.clicked(pos, &mut router));
//! assert_eq!(router.0, vec!["/library/journals".to_string()]);
//! assert!(controller.tooltip().is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod hover;
mod scene;
mod types;

pub use controller::WheelController;
pub use hover::{Hover, HoverState};
pub use scene::{emphasis_sector, Scene, SceneNode};
pub use types::{HoverEvent, Navigator, Tooltip};
