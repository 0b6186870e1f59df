// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Affine, Point, Rect};
use understory_viewbox::{
    PanZoom, PanZoomConfig, PointerButton, PointerEvent, SurfaceSnapshot, TouchEvent, ViewBox,
    WheelEvent,
};

fn surface_for(vb: ViewBox) -> SurfaceSnapshot {
    let ctm = Affine::scale(800.0 / vb.width) * Affine::translate(-vb.origin().to_vec2());
    SurfaceSnapshot::detached()
        .with_content_bounds(Rect::new(0.0, 0.0, 1024.0, 768.0))
        .with_client_rect(Rect::new(0.0, 0.0, 800.0, 600.0))
        .with_screen_ctm(ctm)
}

fn mounted() -> PanZoom {
    let mut pz = PanZoom::new(PanZoomConfig::editor()).unwrap();
    let _ = pz.attach(&surface_for(pz.view_box()));
    pz
}

/// Pointer positions tracing a small circle, like a wobbly drag.
fn drag_path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(400.0 + 120.0 * t.cos(), 300.0 + 80.0 * t.sin())
        })
        .collect()
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_zoom/drag");

    for len in [64_usize, 512, 4_096] {
        let path = drag_path(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("pointer_move", len), &path, |b, path| {
            b.iter_batched(
                mounted,
                |mut pz| {
                    let _ = pz.pointer_down(&PointerEvent::new(
                        path[0],
                        PointerButton::Primary,
                        0.0,
                    ));
                    for (i, &p) in path.iter().enumerate() {
                        // Hosts re-measure once per frame; the CTM follows the view box.
                        let surface = surface_for(pz.view_box());
                        let event = PointerEvent::new(p, PointerButton::Primary, i as f64 * 16.0);
                        black_box(pz.pointer_move(&surface, &event));
                    }
                    let _ = pz.global_pointer_up();
                    black_box(pz.view_box_string());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_zoom/wheel");
    let cursor = Point::new(213.0, 411.0);

    group.bench_function("in_out_sweep", |b| {
        b.iter_batched(
            mounted,
            |mut pz| {
                // Scroll to the maximum and back, including ignored events past
                // each limit.
                for (i, delta) in [-1.0, 1.0].into_iter().enumerate() {
                    for step in 0..12 {
                        let surface = surface_for(pz.view_box());
                        let t = (i * 12 + step) as f64 * 16.0;
                        black_box(pz.wheel(&surface, &WheelEvent::new(cursor, delta, t)));
                    }
                }
                black_box(pz.zoom_level());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_zoom/pinch");
    let frames = 256_usize;
    group.throughput(Throughput::Elements(frames as u64));

    group.bench_function("spread_and_close", |b| {
        b.iter_batched(
            mounted,
            |mut pz| {
                let center = Point::new(400.0, 300.0);
                let _ = pz.touch_start(&TouchEvent::new(
                    &[center - (20.0, 0.0), center + (20.0, 0.0)],
                    0.0,
                ));
                for i in 0..frames {
                    let spread = 20.0 + 100.0 * (i as f64 * 0.05).sin().abs();
                    let touches = [center - (spread, 0.0), center + (spread, 0.0)];
                    let surface = surface_for(pz.view_box());
                    black_box(
                        pz.touch_move(&surface, &TouchEvent::new(&touches, i as f64 * 16.0)),
                    );
                }
                let _ = pz.touch_end(&TouchEvent::new(&[], frames as f64 * 16.0));
                black_box(pz.view_box());
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag, bench_wheel, bench_pinch);
criterion_main!(benches);
