// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partitioning walkthrough: how a dataset becomes angular ranges.
//!
//! Builds a four-segment wheel, prints every computed span, and checks the
//! tiling invariants along the way.
//!
//! Run:
//! - `cargo run -p whorl_demos --example layout_wheel`

use peniko::color::palette::css;
use whorl_layout::{Segment, SubSegment, Wheel, WheelLayout, WheelMetrics};

fn sample_wheel() -> Wheel {
    Wheel::new(vec![
        Segment::new(
            "Teaching",
            css::STEEL_BLUE,
            "/teaching",
            vec![
                SubSegment::new("Mentoring", css::CADET_BLUE, "/teaching/mentoring"),
                SubSegment::new("Curriculum Design", css::LIGHT_SEA_GREEN, "/teaching/curriculum"),
                SubSegment::new("Assessment", css::DODGER_BLUE, "/teaching/assessment"),
            ],
        ),
        Segment::new(
            "Research",
            css::FIREBRICK,
            "/research",
            vec![
                SubSegment::new("Methods", css::INDIAN_RED, "/research/methods"),
                SubSegment::new("Publication Ethics", css::DARK_SALMON, "/research/ethics"),
            ],
        ),
        Segment::new(
            "Community",
            css::SEA_GREEN,
            "/community",
            vec![
                SubSegment::new("Outreach", css::MEDIUM_SEA_GREEN, "/community/outreach"),
                SubSegment::new("Partnerships", css::OLIVE_DRAB, "/community/partnerships"),
                SubSegment::new("Events", css::DARK_KHAKI, "/community/events"),
            ],
        ),
        Segment::new(
            "Administration",
            css::REBECCA_PURPLE,
            "/admin",
            vec![
                SubSegment::new("Policies", css::MEDIUM_PURPLE, "/admin/policies"),
                SubSegment::new("Budgeting", css::SLATE_BLUE, "/admin/budgeting"),
            ],
        ),
    ])
    .with_hub_captions(vec!["Faculty".to_string(), "Handbook".to_string()])
}

fn main() {
    let layout = WheelLayout::new(&sample_wheel(), WheelMetrics::default());

    println!("== Segments ==");
    let mut circle_total = 0.0;
    for segment in layout.segments() {
        println!(
            "  {:<16} {:>7.2}° .. {:>7.2}°",
            segment.title, segment.range.start, segment.range.end
        );
        let mut segment_total = 0.0;
        for wedge in &segment.wedges {
            println!(
                "    {:<24} {:>7.2}° .. {:>7.2}°  ({} chars, font {})",
                wedge.title,
                wedge.range.start,
                wedge.range.end,
                wedge.title.chars().count(),
                wedge.font_size,
            );
            segment_total += wedge.range.span();
        }
        assert!(
            (segment_total - segment.range.span()).abs() < 1e-9,
            "wedges tile their segment"
        );
        circle_total += segment.range.span();
    }
    assert!(
        (circle_total - 360.0).abs() < 1e-9,
        "segments tile the circle"
    );

    println!("== Regions ==");
    println!("  {} hit-testable regions", layout.regions().len());
    let expected = 1 + layout.segments().len()
        + layout
            .segments()
            .iter()
            .map(|s| s.wedges.len())
            .sum::<usize>();
    assert_eq!(layout.regions().len(), expected);

    println!("ok: {:.1}° accounted for", circle_total);
}
