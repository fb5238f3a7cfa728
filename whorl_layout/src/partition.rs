// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular partitioning: equal segment division and label-proportional
//! sub-segment division.

use alloc::vec::Vec;

use whorl_geom::AngleRange;

use crate::data::Segment;

/// Divide the full circle into `count` equal ranges, in order from `0°`.
pub fn segment_ranges(count: usize) -> Vec<AngleRange> {
    if count == 0 {
        return Vec::new();
    }
    let span = 360.0 / count as f64;
    (0..count)
        .map(|i| AngleRange::new(i as f64 * span, (i + 1) as f64 * span))
        .collect()
}

/// Divide `range` among a segment's sub-segments, proportionally to their
/// title lengths in characters.
///
/// Longer labels get proportionally more arc, partially compensating for
/// text legibility. Start angles come from a running accumulation, so the
/// ranges tile `range` exactly up to floating-point error.
///
/// When every title is empty the proportional rule has no total to divide
/// by; the defined fallback is equal division among the sub-segments.
pub fn wedge_ranges(segment: &Segment, range: AngleRange) -> Vec<AngleRange> {
    let weights: Vec<f64> = segment
        .sub_segments
        .iter()
        .map(|sub| sub.title.chars().count() as f64)
        .collect();
    let total: f64 = weights.iter().sum();

    let mut start = range.start;
    let span = range.span();
    weights
        .iter()
        .map(|&w| {
            let share = if total > 0.0 {
                w / total
            } else {
                1.0 / weights.len() as f64
            };
            let end = start + share * span;
            let out = AngleRange::new(start, end);
            start = end;
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SubSegment;
    use peniko::color::palette::css;

    const EPS: f64 = 1e-9;

    fn segment_with_titles(titles: &[&str]) -> Segment {
        Segment::new(
            "segment",
            css::STEEL_BLUE,
            "/segment",
            titles
                .iter()
                .map(|t| SubSegment::new(*t, css::STEEL_BLUE, "/sub"))
                .collect(),
        )
    }

    #[test]
    fn segment_spans_sum_to_full_circle() {
        for count in 1..=12 {
            let ranges = segment_ranges(count);
            assert_eq!(ranges.len(), count);
            let sum: f64 = ranges.iter().map(AngleRange::span).sum();
            assert!((sum - 360.0).abs() < EPS, "sum for {count} segments");
            assert_eq!(ranges[0].start, 0.0);
            // Consecutive ranges tile without gaps.
            for pair in ranges.windows(2) {
                assert!((pair[0].end - pair[1].start).abs() < EPS);
            }
        }
    }

    #[test]
    fn no_segments_means_no_ranges() {
        assert!(segment_ranges(0).is_empty());
    }

    // Title lengths [3, 3, 4] in a 40° segment split as [12°, 12°, 16°] with
    // running starts [0°, 12°, 24°].
    #[test]
    fn wedge_spans_follow_title_length() {
        let segment = segment_with_titles(&["abc", "def", "ghij"]);
        let ranges = wedge_ranges(&segment, AngleRange::new(0.0, 40.0));
        let spans: Vec<f64> = ranges.iter().map(AngleRange::span).collect();
        for (got, want) in spans.iter().zip([12.0, 12.0, 16.0]) {
            assert!((got - want).abs() < EPS, "span {got} vs {want}");
        }
        for (range, want) in ranges.iter().zip([0.0, 12.0, 24.0]) {
            assert!((range.start - want).abs() < EPS, "start {} vs {want}", range.start);
        }
    }

    #[test]
    fn wedge_spans_sum_to_the_parent_span() {
        let segment = segment_with_titles(&["Planning", "Review", "Archive", "Q"]);
        let parent = AngleRange::new(72.0, 144.0);
        let ranges = wedge_ranges(&segment, parent);
        let sum: f64 = ranges.iter().map(AngleRange::span).sum();
        assert!((sum - parent.span()).abs() < EPS);
        assert!((ranges[0].start - parent.start).abs() < EPS);
        assert!((ranges.last().unwrap().end - parent.end).abs() < EPS);
    }

    #[test]
    fn all_empty_titles_fall_back_to_equal_division() {
        let segment = segment_with_titles(&["", "", "", ""]);
        let ranges = wedge_ranges(&segment, AngleRange::new(0.0, 90.0));
        for range in &ranges {
            assert!((range.span() - 22.5).abs() < EPS, "equal split, no NaN");
        }
    }

    #[test]
    fn lone_empty_title_gets_a_zero_width_wedge() {
        let segment = segment_with_titles(&["abcd", "", "abcd"]);
        let ranges = wedge_ranges(&segment, AngleRange::new(0.0, 40.0));
        assert!((ranges[1].span() - 0.0).abs() < EPS, "degenerate but defined");
        let sum: f64 = ranges.iter().map(AngleRange::span).sum();
        assert!((sum - 40.0).abs() < EPS);
    }

    #[test]
    fn no_sub_segments_means_no_ranges() {
        let segment = segment_with_titles(&[]);
        assert!(wedge_ranges(&segment, AngleRange::new(0.0, 60.0)).is_empty());
    }
}
