// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer script: hover transitions, tooltip lifecycle, click dispatch.
//!
//! Drives a controller through a short pointer session and prints each
//! transition batch, asserting the state machine invariants as it goes.
//!
//! Run:
//! - `cargo run -p whorl_demos --example hover_wheel`

use peniko::color::palette::css;
use whorl_layout::{Segment, SubSegment, Wheel, WheelMetrics};
use whorl_responder::{Hover, Navigator, WheelController};

struct PageRouter(Vec<String>);

impl Navigator for PageRouter {
    fn navigate(&mut self, destination: &str) {
        println!("  navigate -> {destination}");
        self.0.push(destination.to_string());
    }
}

fn main() {
    let wheel = Wheel::new(vec![
        Segment::new(
            "Teaching",
            css::STEEL_BLUE,
            "/teaching",
            vec![
                SubSegment::new("Mentoring", css::CADET_BLUE, "/teaching/mentoring"),
                SubSegment::new("Assessment", css::DODGER_BLUE, "/teaching/assessment"),
            ],
        ),
        Segment::new(
            "Research",
            css::FIREBRICK,
            "/research",
            vec![SubSegment::new("Methods", css::INDIAN_RED, "/research/methods")],
        ),
    ]);
    let mut controller = WheelController::new(&wheel, WheelMetrics::default());
    let frame = *controller.layout().frame();

    // Into the first wedge.
    let in_wedge = frame.point_at(217.5, 30.0);
    println!("== move into wedge ==\n  {:?}", controller.pointer_moved(in_wedge));
    assert_eq!(controller.hover(), Hover::Wedge { segment: 0, wedge: 0 });
    let tooltip = controller.tooltip().expect("wedge hover owns a tooltip");
    println!("  tooltip: {:?} at {:?}", tooltip.title, tooltip.anchor);

    // Jittering inside the same wedge changes nothing.
    let batch = controller.pointer_moved(frame.point_at(230.0, 35.0));
    assert!(batch.is_empty(), "same wedge, no transitions");
    assert!(controller.tooltip().is_some());

    // Across to the sibling wedge: leave then enter, tooltip swapped.
    let in_sibling = frame.point_at(217.5, 150.0);
    println!("== move to sibling ==\n  {:?}", controller.pointer_moved(in_sibling));
    assert_eq!(controller.tooltip().map(|t| t.title.as_str()), Some("Assessment"));

    // Down into the segment band: emphasis only, no tooltip.
    let in_band = frame.point_at(122.5, 150.0);
    println!("== move to segment band ==\n  {:?}", controller.pointer_moved(in_band));
    assert_eq!(controller.hover(), Hover::Segment(0));
    assert!(controller.tooltip().is_none());

    // Click the band.
    let mut router = PageRouter(Vec::new());
    println!("== click ==");
    assert!(controller.clicked(in_band, &mut router));
    assert_eq!(router.0, vec!["/teaching".to_string()]);
    assert_eq!(controller.hover(), Hover::Segment(0), "click keeps hover");

    // And leave the wheel.
    println!("== leave ==\n  {:?}", controller.pointer_left());
    assert_eq!(controller.hover(), Hover::Idle);
    assert!(controller.tooltip().is_none());

    println!("ok");
}
