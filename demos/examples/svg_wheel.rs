// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer-contract demo: dump a wheel scene as an SVG document.
//!
//! The scene nodes map one-to-one onto SVG elements — filled paths, text on
//! an invisible arc, rotated tspan stacks, and the tooltip overlay — which
//! is exactly the contract a real drawing surface consumes. A wedge is
//! hovered first so the enlarged sector and tooltip show up in the output.
//!
//! Run:
//! - `cargo run -p whorl_demos --example svg_wheel > wheel.svg`

use peniko::Color;
use peniko::color::palette::css;
use whorl_layout::{Segment, SubSegment, Wheel, WheelMetrics};
use whorl_responder::{Scene, SceneNode, WheelController};

fn main() {
    let wheel = Wheel::new(vec![
        Segment::new(
            "Teaching",
            css::STEEL_BLUE,
            "/teaching",
            vec![
                SubSegment::new("Mentoring", css::CADET_BLUE, "/teaching/mentoring"),
                SubSegment::new("Curriculum Design", css::LIGHT_SEA_GREEN, "/teaching/curriculum"),
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
                SubSegment::new("Events", css::DARK_KHAKI, "/community/events"),
            ],
        ),
    ])
    .with_hub_captions(vec!["Faculty".to_string(), "Handbook".to_string()]);

    let mut controller = WheelController::new(&wheel, WheelMetrics::default());

    // Hover one wedge so the output shows enlargement and the tooltip.
    let pos = controller.layout().frame().point_at(217.5, 30.0);
    let _ = controller.pointer_moved(pos);

    let svg = scene_to_svg(&controller.scene());
    assert!(svg.contains("textPath"), "curved segment labels present");
    assert!(svg.contains("Mentoring"), "wedge labels present");
    println!("{svg}");
}

fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    out.push_str(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="-70 10 740 620" width="740" height="620">"#,
    );
    out.push('\n');

    let mut baseline_id = 0_usize;
    for node in &scene.nodes {
        match node {
            SceneNode::Disc { center, radius, fill } => {
                out.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    center.x,
                    center.y,
                    radius,
                    hex(fill)
                ));
                out.push('\n');
            }
            SceneNode::Sector { path, fill } => {
                out.push_str(&format!(
                    r##"<path d="{}" fill="{}" stroke="#e3e3e3" stroke-width="1"/>"##,
                    path.to_svg(),
                    hex(fill)
                ));
                out.push('\n');
            }
            SceneNode::CurvedLabel { baseline, text, font_size, fill } => {
                baseline_id += 1;
                out.push_str(&format!(
                    r#"<path id="baseline-{baseline_id}" d="{}" fill="none"/>"#,
                    baseline.to_svg()
                ));
                out.push('\n');
                out.push_str(&format!(
                    r##"<text font-size="{font_size}" fill="{}"><textPath href="#baseline-{baseline_id}" startOffset="50%" text-anchor="middle">{}</textPath></text>"##,
                    hex(fill),
                    escape_xml(text)
                ));
                out.push('\n');
            }
            SceneNode::LabelBlock {
                anchor,
                rotation_deg,
                font_size,
                line_step,
                fill,
                lines,
            } => {
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" text-anchor="middle" dy=".3em" font-size="{font_size}" fill="{}""#,
                    anchor.x,
                    anchor.y,
                    hex(fill)
                ));
                if *rotation_deg != 0.0 {
                    out.push_str(&format!(
                        r#" transform="rotate({rotation_deg} {} {})""#,
                        anchor.x, anchor.y
                    ));
                }
                out.push('>');
                for (i, line) in lines.iter().enumerate() {
                    let dy = if i == 0 { 0.0 } else { *line_step };
                    out.push_str(&format!(
                        r#"<tspan x="{}" dy="{dy}">{}</tspan>"#,
                        anchor.x,
                        escape_xml(line)
                    ));
                }
                out.push_str("</text>\n");
            }
            SceneNode::TooltipBox {
                origin,
                width,
                min_height,
                corner_radius,
                fill,
                text,
                font_size,
                text_fill,
            } => {
                out.push_str(&format!(
                    r#"<rect x="{}" y="{}" width="{width}" height="{min_height}" rx="{corner_radius}" fill="{}"/>"#,
                    origin.x,
                    origin.y,
                    hex(fill)
                ));
                out.push('\n');
                out.push_str(&format!(
                    r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" font-size="{font_size}" fill="{}">{}</text>"#,
                    origin.x + width / 2.0,
                    origin.y + min_height / 2.0,
                    hex(text_fill),
                    escape_xml(text)
                ));
                out.push('\n');
            }
        }
    }

    out.push_str("</svg>\n");
    out
}

fn hex(color: &Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
