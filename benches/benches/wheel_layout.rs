// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use peniko::Color;
use whorl_layout::{QueryFilter, Segment, SubSegment, Wheel, WheelLayout, WheelMetrics};

const TITLES: &[&str] = &[
    "Mentoring",
    "Curriculum Design",
    "Assessment",
    "Peer Review",
    "Outreach",
    "Partnerships",
    "Publication Ethics",
    "Methods",
];

fn gen_wheel(segments: usize, wedges_per_segment: usize) -> Wheel {
    let mut out = Vec::with_capacity(segments);
    for i in 0..segments {
        let subs = (0..wedges_per_segment)
            .map(|j| {
                let title = TITLES[(i + j) % TITLES.len()];
                SubSegment::new(
                    title,
                    Color::from_rgb8(40 + (i * 17 % 180) as u8, 90, 120),
                    format!("/segment-{i}/wedge-{j}"),
                )
            })
            .collect();
        out.push(Segment::new(
            format!("Segment {i}"),
            Color::from_rgb8(30, 60 + (i * 23 % 150) as u8, 110),
            format!("/segment-{i}"),
            subs,
        ));
    }
    Wheel::new(out)
}

fn bench_layout_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_build");
    for (segments, wedges) in [(4, 3), (8, 5), (12, 8)] {
        let wheel = gen_wheel(segments, wedges);
        group.throughput(Throughput::Elements((segments * wedges) as u64));
        group.bench_function(format!("{segments}x{wedges}"), |b| {
            b.iter_batched(
                || wheel.clone(),
                |wheel| black_box(WheelLayout::new(&wheel, WheelMetrics::default())),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("hit_test_point");
    let filter = QueryFilter {
        visible_only: true,
        pickable_only: true,
    };
    for (segments, wedges) in [(4, 3), (12, 8)] {
        let layout = WheelLayout::new(&gen_wheel(segments, wedges), WheelMetrics::default());
        // A ring of probe points sweeping every band, hub and misses included.
        let probes: Vec<_> = (0..360)
            .map(|deg| {
                let radius = 40.0 + (deg % 4) as f64 * 90.0;
                layout.frame().point_at(radius, f64::from(deg))
            })
            .collect();
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("{segments}x{wedges}"), |b| {
            b.iter(|| {
                let mut hits = 0_usize;
                for &pt in &probes {
                    if layout.hit_test_point(black_box(pt), filter).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout_build, bench_hit_test);
criterion_main!(benches);
