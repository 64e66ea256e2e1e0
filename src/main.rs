//! Edge Detection Viewer CLI
//!
//! Demo binary: loads the synthetic sample frame, runs the edge
//! detector, and drives the statistics simulation, printing snapshots
//! as they arrive. Stands in for the rendering collaborator.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use edge_viewer::{
    export::{default_export_path, write_png},
    image::sample_frame,
    simulate::SimulationClock,
    viewer::ViewerState,
    FileConfig,
};
use tracing::{info, warn};

#[derive(Debug, Parser)]
#[command(name = "edge-viewer", version, about = "Before/after edge detection demo viewer")]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulation ticks to consume (overrides config).
    #[arg(long)]
    ticks: Option<u32>,

    /// Run until interrupted with Ctrl-C.
    #[arg(long)]
    continuous: bool,

    /// Export the side-by-side composite to this path when the run ends.
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    info!("Edge Detection Viewer v{}", edge_viewer::VERSION);

    let config = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let width = config.display.width;
    let height = config.display.height;
    let tick_budget = args.ticks.unwrap_or(config.run.tick_count);
    let continuous = args.continuous || config.run.continuous;

    // Build the displayed state from the synthetic sample frame.
    let mut state = ViewerState::new(width, height);
    if let Err(e) = state.load_frame(sample_frame(width, height)) {
        eprintln!("Failed to load sample frame: {}", e);
        std::process::exit(1);
    }

    let edge_pixels = state
        .processed()
        .pixels()
        .chunks_exact(4)
        .filter(|p| p[0] == 255)
        .count();
    info!(
        resolution = %state.stats().resolution,
        edge_pixels,
        "edge map computed"
    );

    // Ctrl-C ends a continuous run.
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        if let Err(e) = ctrlc::set_handler(move || {
            interrupted.store(true, Ordering::SeqCst);
        }) {
            warn!("Failed to install Ctrl-C handler: {}", e);
        }
    }

    let (mut clock, ticks) =
        SimulationClock::with_default_sampler(state.stats().resolution.clone());
    clock.start();

    let mut consumed = 0u32;
    loop {
        if interrupted.load(Ordering::SeqCst) {
            info!("Interrupted");
            break;
        }
        if !continuous && consumed >= tick_budget {
            break;
        }

        match ticks.recv_timeout(Duration::from_millis(250)) {
            Ok(stats) => {
                consumed += 1;
                info!(
                    "frame {:>4}  fps {:5.1}  processing {:4.1}ms",
                    stats.frame_count, stats.fps, stats.processing_time_ms
                );
                state.apply_stats(stats);
            }
            Err(_) => {
                // Timed out waiting; check flags and try again.
                continue;
            }
        }
    }

    clock.stop();
    info!(frames = state.stats().frame_count, "simulation finished");

    if args.export.is_some() || config.run.export {
        let path = args.export.unwrap_or_else(default_export_path);
        match write_png(&path, &state.composite()) {
            Ok(()) => println!("Exported composite to {}", path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    // Leave stats zeroed for whoever picks up the state next.
    state.reset_stats();
    info!("Done");
}
