use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use stream::generator::{build_stroke, StrokeConfig};
use stream::trace::{load_trace, save_trace, TraceFile};
use workflow::config::ReplayConfig;
use workflow::runner::Runner;

mod stream;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Offline driver for the stylus smoothing core")]
struct Args {
    /// Load a replay config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 1.0)]
    min_pressure: f32,
    #[arg(long, default_value_t = 8191.0)]
    max_pressure: f32,
    #[arg(long, default_value_t = 1.0)]
    min_weight: f32,
    #[arg(long, default_value_t = 0.5)]
    max_weight: f32,
    /// Keep smoothing active below the minimum pressure
    #[arg(long, default_value_t = false)]
    base_smoothing: bool,
    /// Invert the weight/pressure relationship
    #[arg(long, default_value_t = false)]
    reverse_smoothing: bool,
    /// Replay a recorded JSON trace instead of a synthetic stroke
    #[arg(long)]
    input: Option<PathBuf>,
    /// Write the smoothed trace to this JSON file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Sample count for the synthetic stroke
    #[arg(long, default_value_t = 512)]
    samples: usize,
    /// RNG seed for the synthetic stroke
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let replay_config = if let Some(path) = args.config {
        ReplayConfig::load(path)?
    } else {
        ReplayConfig::from_args(
            args.min_pressure,
            args.max_pressure,
            args.min_weight,
            args.max_weight,
            args.base_smoothing,
            args.reverse_smoothing,
        )
    };

    let reports = if let Some(path) = &args.input {
        load_trace(path)?
    } else {
        let stroke = StrokeConfig {
            samples: args.samples,
            seed: args.seed,
            ..Default::default()
        };
        build_stroke(&stroke)?
    };

    let runner = Runner::new(replay_config.clone());
    let result = runner.execute(&reports)?;

    println!(
        "Replay run -> reports {}, smoothed {}, passthrough {}, pressure RMS {:.1}, jitter {:.3} -> {:.3}",
        reports.len(),
        result.smoothed_count,
        result.passthrough_count,
        result.pressure_rms,
        result.raw_jitter,
        result.smoothed_jitter
    );

    if let Some(path) = args.output {
        let trace = TraceFile {
            config: replay_config.to_smoothing_config(),
            reports: result.reports,
        };
        save_trace(&path, &trace)
            .with_context(|| format!("writing smoothed trace {}", path.display()))?;
    }

    Ok(())
}
