use anyhow::Result;
use clap::Parser;
use emergence_lib::app::{App, LaunchOverrides, RunOptions, ShutdownManager};
use emergence_lib::model::data::BehaviorKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Stop after this many frames (runs until Ctrl+C when omitted)
    #[arg(short, long)]
    steps: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Behavior mode (emergent, neural, gravity, chaos)
    #[arg(short, long)]
    mode: Option<BehaviorKind>,

    /// Initial particle count
    #[arg(short, long)]
    particles: Option<usize>,

    /// Replay a recorded input trace
    #[arg(long)]
    replay: Option<PathBuf>,

    /// Record pointer input to logs/input_trace_<timestamp>.json
    #[arg(long)]
    record: bool,

    /// Write the final frame as JSON
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Pace frames at target_fps instead of running flat out
    #[arg(long)]
    realtime: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    emergence_lib::model::metrics::init_logging();

    let overrides = LaunchOverrides {
        seed: args.seed,
        mode: args.mode,
        particles: args.particles,
    };
    let mut app = App::new(&args.config, &overrides)?;
    app.recording = args.record;
    if let Some(path) = &args.replay {
        app.load_replay(path)?;
    }

    tracing::info!(
        seed = app.system.seed(),
        particles = app.system.len(),
        mode = %app.system.mode(),
        "Starting headless simulation"
    );

    let shutdown = ShutdownManager::new();
    shutdown.listen_for_ctrl_c();

    let options = RunOptions {
        max_steps: args.steps,
        realtime: args.realtime,
    };
    let res = app.run(&options, &shutdown).await;
    shutdown.cleanup(&mut app, args.snapshot.as_deref()).await?;

    if let Err(e) = res {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
    std::process::exit(shutdown.exit_code());
}
