// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene derivation: the pure mapping from `(layout, hover, tooltip)` to a
//! paint-ordered list of draw nodes.
//!
//! Nothing here is cached or mutated incrementally. Every call rebuilds the
//! scene from the current state, so stale emphasis cannot survive a state
//! change — rendering is `render(dataset, hover) → visual tree` and nothing
//! else.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Point};
use peniko::Color;
use peniko::color::palette::css;
use whorl_geom::{annulus_sector_path, baseline_arc_path, Sector};

use crate::controller::WheelController;
use crate::hover::Hover;

/// One draw node of the wheel scene.
///
/// Paths are `kurbo::BezPath` in world space (renderers may call
/// [`BezPath::to_svg`]); text is unshaped, with font sizes in world units.
#[derive(Clone, Debug)]
pub enum SceneNode {
    /// A filled circle (the hub disc).
    Disc {
        /// Center of the disc.
        center: Point,
        /// Radius of the disc.
        radius: f64,
        /// Fill color.
        fill: Color,
    },
    /// A filled annulus-sector boundary.
    Sector {
        /// Closed boundary path.
        path: BezPath,
        /// Fill color.
        fill: Color,
    },
    /// Text following an invisible arc baseline, anchored at its middle.
    CurvedLabel {
        /// Open guide arc; not painted itself.
        baseline: BezPath,
        /// Label text.
        text: String,
        /// Font size in world units.
        font_size: f64,
        /// Text fill color.
        fill: Color,
    },
    /// One or more lines stacked around a shared anchor, rotated as a block.
    ///
    /// The first line is centered on the anchor; each following line is
    /// offset downward (in rotated space) by `line_step`.
    LabelBlock {
        /// Shared anchor point.
        anchor: Point,
        /// Rotation of the block around the anchor, in degrees.
        rotation_deg: f64,
        /// Font size in world units.
        font_size: f64,
        /// Vertical distance between consecutive lines, in world units.
        line_step: f64,
        /// Text fill color.
        fill: Color,
        /// The text lines, top to bottom.
        lines: Vec<String>,
    },
    /// The floating tooltip overlay. Always the last node when present.
    TooltipBox {
        /// Top-left corner: the hover anchor plus the configured offset.
        origin: Point,
        /// Fixed overlay width.
        width: f64,
        /// Minimum overlay height; grows to fit the text.
        min_height: f64,
        /// Corner radius of the box.
        corner_radius: f64,
        /// Background color, matching the hovered wedge.
        fill: Color,
        /// Overlay text.
        text: String,
        /// Font size in world units.
        font_size: f64,
        /// Text fill color.
        text_fill: Color,
    },
}

/// A paint-ordered scene: earlier nodes are drawn first.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Draw nodes in paint order.
    pub nodes: Vec<SceneNode>,
}

/// Fill of segment bands while not hovered, and of the hub disc.
const NEUTRAL_FILL: Color = css::WHITE;

impl WheelController {
    /// Derive the current scene.
    pub fn scene(&self) -> Scene {
        let layout = self.layout();
        let frame = layout.frame();
        let metrics = layout.metrics();
        let hover = self.hover();
        let mut nodes = Vec::new();

        // Hub disc and its caption lines.
        nodes.push(SceneNode::Disc {
            center: metrics.center,
            radius: metrics.segment_band.inner,
            fill: NEUTRAL_FILL,
        });
        if !layout.hub_captions().is_empty() {
            nodes.push(SceneNode::LabelBlock {
                anchor: metrics.center,
                rotation_deg: 0.0,
                font_size: metrics.caption_font_size,
                line_step: metrics.caption_line_step,
                fill: css::BLACK,
                lines: layout.hub_captions().to_vec(),
            });
        }

        for (i, segment) in layout.segments().iter().enumerate() {
            let emphasized = hover == Hover::Segment(i);
            nodes.push(SceneNode::Sector {
                path: annulus_sector_path(
                    frame,
                    metrics.segment_band,
                    segment.range,
                    metrics.tolerance,
                ),
                fill: if emphasized { segment.color } else { NEUTRAL_FILL },
            });
            nodes.push(SceneNode::CurvedLabel {
                baseline: baseline_arc_path(
                    frame,
                    layout.segment_text_radius(),
                    segment.range,
                    metrics.tolerance,
                ),
                text: segment.title.clone(),
                font_size: metrics.segment_font_size,
                fill: segment.color,
            });

            for (j, wedge) in segment.wedges.iter().enumerate() {
                nodes.push(SceneNode::Sector {
                    path: annulus_sector_path(
                        frame,
                        self.wedge_band(i, j),
                        wedge.range,
                        metrics.tolerance,
                    ),
                    fill: wedge.color,
                });
                if !wedge.lines.is_empty() {
                    // Label anchors stay on the base midline: hovering
                    // enlarges the sector, not its text.
                    nodes.push(SceneNode::LabelBlock {
                        anchor: frame
                            .point_at(layout.wedge_text_radius(), wedge.range.midpoint()),
                        rotation_deg: wedge.rotation_deg,
                        font_size: wedge.font_size,
                        line_step: metrics.line_height * wedge.font_size,
                        fill: NEUTRAL_FILL,
                        lines: wedge.lines.clone(),
                    });
                }
            }
        }

        if let Some(tooltip) = self.tooltip() {
            nodes.push(SceneNode::TooltipBox {
                origin: tooltip.anchor + metrics.tooltip.offset,
                width: metrics.tooltip.width,
                min_height: metrics.tooltip.min_height,
                corner_radius: metrics.tooltip.corner_radius,
                fill: tooltip.color,
                text: tooltip.title.clone(),
                font_size: metrics.tooltip.font_size,
                text_fill: NEUTRAL_FILL,
            });
        }

        Scene { nodes }
    }
}

/// The sector a scene consumer should hit-highlight for `node`, if any.
///
/// Convenience for renderers that outline the hovered region; equivalent to
/// reading the layout's metrics and the controller's wedge band.
pub fn emphasis_sector(controller: &WheelController) -> Option<Sector> {
    let metrics = controller.layout().metrics();
    match controller.hover() {
        Hover::Idle => None,
        Hover::Segment(i) => {
            let segment = controller.layout().segments().get(i)?;
            Some(Sector::new(metrics.segment_band, segment.range))
        }
        Hover::Wedge { segment, wedge } => {
            let layout = controller.layout().wedge(segment, wedge)?;
            Some(Sector::new(
                controller.wedge_band(segment, wedge),
                layout.range,
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Shape;
    use whorl_layout::{Segment, SubSegment, Wheel, WheelMetrics};

    fn controller() -> WheelController {
        let wheel = Wheel::new(vec![
            Segment::new(
                "Teaching",
                css::STEEL_BLUE,
                "/teaching",
                vec![
                    SubSegment::new("Mentoring", css::DARK_ORANGE, "/teaching/mentoring"),
                    SubSegment::new("Assessment", css::SEA_GREEN, "/teaching/assessment"),
                ],
            ),
            Segment::new(
                "Research",
                css::FIREBRICK,
                "/research",
                vec![SubSegment::new(
                    "Methods",
                    css::REBECCA_PURPLE,
                    "/research/methods",
                )],
            ),
        ])
        .with_hub_captions(vec!["Faculty".into(), "Handbook".into()]);
        WheelController::new(&wheel, WheelMetrics::default())
    }

    fn segment_fills(scene: &Scene) -> Vec<Color> {
        scene
            .nodes
            .iter()
            .filter_map(|n| match n {
                SceneNode::Sector { fill, .. } => Some(*fill),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn idle_scene_has_the_expected_inventory() {
        let c = controller();
        let scene = c.scene();
        // 1 disc + 1 caption block + 2×(sector+curved label) + 3×(sector+label block).
        assert_eq!(scene.nodes.len(), 1 + 1 + 4 + 6);
        assert!(matches!(scene.nodes[0], SceneNode::Disc { .. }));
        assert!(
            !scene
                .nodes
                .iter()
                .any(|n| matches!(n, SceneNode::TooltipBox { .. })),
            "no tooltip while idle"
        );
        // All segment bands are neutral while idle.
        let fills = segment_fills(&scene);
        assert_eq!(fills[0], NEUTRAL_FILL);
        assert_eq!(fills[2], NEUTRAL_FILL);
    }

    #[test]
    fn segment_hover_switches_the_fill() {
        let mut c = controller();
        let pos = c.layout().frame().point_at(122.5, 30.0);
        let _ = c.pointer_moved(pos);
        let fills = segment_fills(&c.scene());
        assert_eq!(fills[0], css::STEEL_BLUE, "hovered band takes its color");
        assert_eq!(fills[2], NEUTRAL_FILL, "the other band stays neutral");
    }

    #[test]
    fn wedge_hover_enlarges_only_that_wedge_and_adds_a_tooltip() {
        let mut c = controller();
        let idle_scene = c.scene();
        let pos = c.layout().frame().point_at(217.5, 30.0);
        let _ = c.pointer_moved(pos);
        let hover_scene = c.scene();

        let area_of = |scene: &Scene, index: usize| {
            let sectors: Vec<&BezPath> = scene
                .nodes
                .iter()
                .filter_map(|n| match n {
                    SceneNode::Sector { path, .. } => Some(path),
                    _ => None,
                })
                .collect();
            sectors[index].area().abs()
        };

        // Sector order: segment 0, wedge (0,0), wedge (0,1), segment 1, wedge (1,0).
        assert!(
            area_of(&hover_scene, 1) > area_of(&idle_scene, 1) * 1.15,
            "hovered wedge grows"
        );
        assert!(
            (area_of(&hover_scene, 2) - area_of(&idle_scene, 2)).abs() < 1e-6,
            "sibling wedge untouched"
        );

        let Some(SceneNode::TooltipBox { origin, fill, text, .. }) = hover_scene.nodes.last()
        else {
            panic!("tooltip must be the last node");
        };
        assert_eq!(*origin, pos + kurbo::Vec2::new(10.0, 10.0));
        assert_eq!(*fill, css::DARK_ORANGE);
        assert_eq!(text, "Mentoring");
    }

    #[test]
    fn wedge_labels_keep_their_anchor_while_hovered() {
        let mut c = controller();
        let anchor_of = |scene: &Scene| {
            scene
                .nodes
                .iter()
                .find_map(|n| match n {
                    SceneNode::LabelBlock {
                        anchor,
                        rotation_deg,
                        ..
                    } if *rotation_deg != 0.0 => Some(*anchor),
                    _ => None,
                })
                .unwrap()
        };
        let before = anchor_of(&c.scene());
        let _ = c.pointer_moved(c.layout().frame().point_at(217.5, 30.0));
        let after = anchor_of(&c.scene());
        assert_eq!(before, after, "text stays put; only the sector scales");
    }

    #[test]
    fn emphasis_sector_tracks_the_hover() {
        let mut c = controller();
        assert!(emphasis_sector(&c).is_none());
        let _ = c.pointer_moved(c.layout().frame().point_at(217.5, 30.0));
        let sector = emphasis_sector(&c).unwrap();
        let scaled = c.layout().metrics().wedge_band.scaled(1.1);
        assert_eq!(sector.band, scaled);
    }

    #[test]
    fn scene_is_a_pure_function_of_state() {
        let mut c = controller();
        let _ = c.pointer_moved(c.layout().frame().point_at(217.5, 30.0));
        let a = c.scene();
        let b = c.scene();
        assert_eq!(a.nodes.len(), b.nodes.len());
        let count = |scene: &Scene| {
            scene
                .nodes
                .iter()
                .filter(|n| matches!(n, SceneNode::TooltipBox { .. }))
                .count()
        };
        assert_eq!(count(&a), 1);
        assert_eq!(count(&b), 1, "re-deriving never duplicates overlays");
    }
}
