//! Replay a recorded orientation log through a measurement session.
//!
//! # Usage
//!
//! ```bash
//! vriksha-replay --log samples.jsonl --mode tree-height --distance 25
//! vriksha-replay --config configs/vriksha.toml --log samples.jsonl --calibrate-at 40
//! ```
//!
//! Every `--every` samples the current readout is printed and its primary
//! value is added to the tree's history. The run ends with history
//! statistics and the final captured record as JSON.

use std::path::PathBuf;

use clap::Parser;

use vriksha::{
    read_sample_log, MeasurementAxis, MeasurementKind, MeasurementMode, MeasurementSession,
    Readout, SessionConfig, SeverityLevel, TreeMeasurements, TreeRef,
};

#[derive(Parser)]
#[command(name = "vriksha-replay")]
#[command(about = "Replay recorded orientation samples and print tree measurements")]
struct Args {
    /// JSON-lines sample log
    #[arg(short, long)]
    log: PathBuf,

    /// TOML session configuration (defaults to the clinometer preset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Measurement mode (overrides config)
    #[arg(short, long, value_enum)]
    mode: Option<MeasurementMode>,

    /// Primary axis (overrides config)
    #[arg(short, long, value_enum)]
    axis: Option<MeasurementAxis>,

    /// Horizontal distance to the tree in meters (clamped to 5-100)
    #[arg(short, long)]
    distance: Option<f64>,

    /// Capture the zero reference after this many samples
    #[arg(long)]
    calibrate_at: Option<usize>,

    /// Print a readout every N samples
    #[arg(long, default_value = "20")]
    every: usize,

    /// Tree name for the final record
    #[arg(long, default_value = "")]
    tree: String,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading config from {}", path.display());
            SessionConfig::load(path)?
        }
        None => SessionConfig::clinometer(),
    };
    if let Some(mode) = args.mode {
        config.measurement.mode = mode;
    }
    if let Some(axis) = args.axis {
        config.measurement.axis = axis;
    }
    config.validate()?;

    let mut session = MeasurementSession::new(&config)?;
    if let Some(distance) = args.distance {
        let applied = session.set_distance(distance)?;
        if applied != distance {
            log::warn!("Distance {} m clamped to {} m", distance, applied);
        }
    }

    let samples = read_sample_log(&args.log)?;
    if samples.is_empty() {
        return Err("sample log is empty".into());
    }

    log::info!(
        "Replaying {} samples: {} ({}), alpha {:.2} at {:.0} Hz",
        samples.len(),
        session.mode(),
        session.mode().axis_label(session.axis()),
        config.filter.alpha,
        config.sample_rate_hz()
    );

    let kind = match session.mode() {
        MeasurementMode::TreeHeight => MeasurementKind::Height,
        _ => MeasurementKind::Inclination,
    };
    let mut history = TreeMeasurements::new(TreeRef(1));
    let every = args.every.max(1);

    for (index, sample) in samples.iter().enumerate() {
        if args.calibrate_at == Some(index) {
            let offset = session.calibrate();
            println!(
                "[{:>6}] calibrated: pitch {:.2}°, roll {:.2}°",
                index, offset.pitch_deg, offset.roll_deg
            );
        }

        session.process_sample(sample);

        if (index + 1) % every == 0 {
            let readout = session.readout();
            println!("[{:>6}] {}", index + 1, readout);

            if let Some(value) = primary_value(&readout) {
                history.record(kind, value, "", sample.timestamp_us)?;
            }
        }
    }

    println!();
    println!("Samples processed: {}", session.samples_processed());
    if session.out_of_order_samples() > 0 {
        println!("Out-of-order samples: {}", session.out_of_order_samples());
    }

    match history.stats(kind) {
        Ok(stats) => {
            let fmt = |v: f64| kind.format_value(v);
            println!("History ({} readings):", stats.count);
            println!("  mean    {}", fmt(stats.mean));
            println!("  min/max {} / {}", fmt(stats.min), fmt(stats.max));
            println!("  range   {}", fmt(stats.range));
            println!("  std dev {}", fmt(stats.std_dev));
            if kind == MeasurementKind::Inclination {
                let rating = history.stability()?;
                println!("  stability {}", SeverityLevel::Stability(rating));
            }
        }
        Err(e) => println!("History: {}", e),
    }

    let timestamp_us = samples.last().map(|s| s.timestamp_us).unwrap_or(0);
    let record = session.capture(&args.tree, "", timestamp_us);
    println!();
    println!(
        "{}: {} [{}]",
        record.tree_name,
        record.formatted_primary(),
        record.status()
    );
    println!("{}", serde_json::to_string_pretty(&record)?);

    Ok(())
}

/// Value added to the history for one readout.
fn primary_value(readout: &Readout) -> Option<f64> {
    match *readout {
        Readout::TreeLean { primary_deg, .. } => Some(primary_deg),
        Readout::SlopeGrade { angle_deg, .. } => Some(angle_deg),
        Readout::TreeHeight { height_m, .. } => height_m,
    }
}
