use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use debugdraw_common::{Color, Transform};
use debugdraw_input::{NoInput, ScriptedInput};
use debugdraw_overlay::{DebugDraw, OverlayConfig};
use debugdraw_render::{HeadlessHost, MonospaceCanvas};
use debugdraw_tools::{OverlayInspector, SweepProfiler};
use glam::{Quat, Vec3};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "debugdraw-cli", about = "Drive the debug draw overlay against a headless host")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run a scripted scene and print the overlay each frame
    Demo {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "12")]
        frames: u64,
        /// JSON overlay config
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the recorded scene after the last frame
        #[arg(long)]
        dump_scene: bool,
    },
    /// Draw a burst of short-lived boxes and trace the idle pool draining
    Burst {
        /// Number of boxes in the burst
        #[arg(short, long, default_value = "8")]
        boxes: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("debugdraw-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", debugdraw_common::crate_info());
            println!("kernel: {}", debugdraw_kernel::crate_info());
            println!("render: {}", debugdraw_render::crate_info());
            println!("input: {}", debugdraw_input::crate_info());
            println!("overlay: {}", debugdraw_overlay::crate_info());
            println!("tools: {}", debugdraw_tools::crate_info());
        }
        Commands::Demo {
            frames,
            config,
            dump_scene,
        } => {
            let config = match config {
                Some(path) => OverlayConfig::load(&path)?,
                None => OverlayConfig::default(),
            };
            run_demo(frames, config, dump_scene)?;
        }
        Commands::Burst { boxes } => run_burst(boxes)?,
    }

    Ok(())
}

fn run_demo(frames: u64, config: OverlayConfig, dump_scene: bool) -> anyhow::Result<()> {
    let toggle = config.toggle_action.clone();
    let host = Arc::new(HeadlessHost::new());
    let path = DebugDraw::<HeadlessHost>::PATH;
    let overlay = DebugDraw::mount(Arc::clone(&host), config, path)?;

    // hide on frame 6, show again on frame 9
    let mut input = ScriptedInput::new()
        .press_on(6, toggle.as_str())
        .press_on(9, toggle.as_str());
    let mut profiler = SweepProfiler::new(64);
    let mut canvas = MonospaceCanvas::new();

    println!("Debug draw demo: {frames} frames");
    for _ in 0..frames {
        let frame = overlay.current_frame();
        let t = frame as f32 * 0.25;

        overlay.draw_box(
            Transform {
                position: Vec3::new(t, 0.0, 0.0),
                rotation: Quat::from_rotation_y(t),
                scale: Vec3::ONE,
            },
            Color::GREEN,
            Some(3),
        )?;
        overlay.draw_box_centered(Vec3::ZERO, Vec3::splat(2.0), Color::YELLOW, Some(1))?;
        let heading = Vec3::new(t.cos(), 0.0, t.sin());
        overlay.draw_ray(Vec3::ZERO, heading, 4.0, Color::RED, Some(2))?;
        if frame % 4 == 0 {
            overlay.draw_ray_cast(Vec3::Y * 3.0, Vec3::new(t, 0.0, 1.0), Color::BLUE, Some(4))?;
        }
        overlay.set_text("frame", frame.to_string(), None);
        overlay.set_text("angle", format!("{t:.2}"), None);
        overlay.increment_metric("draw_calls", 4);
        overlay.increment_metric("ray_casts", i64::from(frame % 4 == 0));

        input.set_frame(host.advance_frame());
        let report = profiler.measure(|| overlay.process_frame(&input));
        tracing::debug!(%report);

        canvas.clear();
        overlay.draw_overlay(&mut canvas);
        println!("-- {}", OverlayInspector::summary(&*overlay));
        for line in canvas.lines() {
            println!("   {line}");
        }
    }

    println!(
        "Sweep timing: avg={:?} min={:?} max={:?} over {} frames",
        profiler.average(),
        profiler.min(),
        profiler.max(),
        profiler.count()
    );
    if dump_scene {
        print!("{}", host.describe());
    }
    Ok(())
}

fn run_burst(boxes: usize) -> anyhow::Result<()> {
    let host = Arc::new(HeadlessHost::new());
    let overlay = DebugDraw::new(Arc::clone(&host), OverlayConfig::default())?;

    println!("Burst: {boxes} boxes lingering one frame");
    for i in 0..boxes {
        let center = Vec3::new(i as f32 * 1.5, 0.0, 0.0);
        overlay.draw_box_centered(center, Vec3::ONE, Color::RED, Some(1))?;
    }
    println!(
        "frame={} live_boxes={} instances={}",
        overlay.current_frame(),
        overlay.live_boxes(),
        host.instance_count()
    );

    loop {
        host.advance_frame();
        let report = overlay.process_frame(&NoInput);
        println!(
            "frame={} evicted={} trimmed={} idle_boxes={} instances={}",
            report.frame,
            report.boxes_evicted,
            report.boxes_trimmed,
            overlay.idle_boxes(),
            host.instance_count()
        );
        if report.boxes_trimmed == 0 && overlay.live_boxes() == 0 {
            break;
        }
    }
    Ok(())
}
