use std::hint::black_box;
use std::sync::Arc;
use std::time::Instant;

use debugdraw_common::Color;
use debugdraw_input::NoInput;
use debugdraw_overlay::{DebugDraw, OverlayConfig};
use debugdraw_render::HeadlessHost;
use glam::Vec3;

fn make_overlay() -> (Arc<HeadlessHost>, DebugDraw<HeadlessHost>) {
    let host = Arc::new(HeadlessHost::new());
    let overlay = DebugDraw::new(Arc::clone(&host), OverlayConfig::default())
        .expect("headless host never refuses the cube template");
    (host, overlay)
}

fn bench_draw_lines(per_frame: usize, frames: usize) {
    let (host, overlay) = make_overlay();

    let start = Instant::now();
    for f in 0..frames {
        for i in 0..per_frame {
            let x = (f * per_frame + i) as f32;
            overlay
                .draw_line(black_box(Vec3::ZERO), Vec3::new(x, 1.0, 0.0), Color::RED, Some(4))
                .expect("draw");
        }
        host.advance_frame();
        black_box(overlay.process_frame(&NoInput));
    }
    let elapsed = start.elapsed();
    let per_frame_time = elapsed / frames as u32;
    println!(
        "  lines ({per_frame}/frame, {frames} frames): {per_frame_time:?}/frame, total {elapsed:?}, materials created {}",
        host.materials_created()
    );
}

fn bench_draw_boxes(per_frame: usize, frames: usize) {
    let (host, overlay) = make_overlay();

    let start = Instant::now();
    for f in 0..frames {
        for i in 0..per_frame {
            let center = Vec3::new(i as f32, f as f32, 0.0);
            overlay
                .draw_box_centered(black_box(center), Vec3::ONE, Color::GREEN, Some(2))
                .expect("draw");
        }
        host.advance_frame();
        black_box(overlay.process_frame(&NoInput));
    }
    let elapsed = start.elapsed();
    let per_frame_time = elapsed / frames as u32;
    println!(
        "  boxes ({per_frame}/frame, {frames} frames): {per_frame_time:?}/frame, total {elapsed:?}, instances created {}",
        host.instances_created()
    );
}

fn bench_text_and_metrics(keys: usize, frames: usize) {
    let (host, overlay) = make_overlay();
    let names: Vec<String> = (0..keys).map(|i| format!("key_{i}")).collect();

    let start = Instant::now();
    for f in 0..frames {
        for name in &names {
            overlay.set_text(name, f.to_string(), None);
            overlay.increment_metric(name, 1);
        }
        host.advance_frame();
        black_box(overlay.process_frame(&NoInput));
    }
    let elapsed = start.elapsed();
    let per_frame_time = elapsed / frames as u32;
    println!("  text+metrics ({keys} keys, {frames} frames): {per_frame_time:?}/frame, total {elapsed:?}");
}

fn main() {
    println!("=== Debug Draw Sweep Benchmarks ===\n");

    println!("Line draw + sweep (pooled materials):");
    bench_draw_lines(10, 1000);
    bench_draw_lines(100, 1000);
    bench_draw_lines(1000, 100);

    println!("\nBox draw + sweep (pooled instances, one trim per frame):");
    bench_draw_boxes(10, 1000);
    bench_draw_boxes(100, 1000);
    bench_draw_boxes(1000, 100);

    println!("\nText table and metric fold:");
    bench_text_and_metrics(10, 1000);
    bench_text_and_metrics(100, 1000);

    println!("\n=== Done ===");
}
