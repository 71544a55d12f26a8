use anyhow::{bail, Result};
use clap::Parser;
use ndarray::Ix2;
use std::path::PathBuf;

use eegclean::config::DEFAULT_ACTIVE_STD_THRESHOLD;
use eegclean::{channel_label, io, sensor_activity, CleanConfig};

#[derive(Parser)]
#[command(name = "activity", about = "Per-sensor standard deviation and active sensors")]
struct Args {
    /// Recording (.npy or .npz) with time along rows and sensors along columns
    input: PathBuf,

    /// A sensor is active when its std exceeds this value
    #[arg(long, default_value_t = DEFAULT_ACTIVE_STD_THRESHOLD)]
    threshold: f64,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let y = io::load_samples(&args.input)?;
    let Ok(y) = y.into_dimensionality::<Ix2>() else {
        bail!("{}: expected a 2-D [time, sensor] array", args.input.display());
    };
    println!("Loaded {} samples × {} sensors", y.nrows(), y.ncols());

    let cfg = CleanConfig {
        active_std_threshold: args.threshold,
        ..CleanConfig::default()
    };
    let (stds, active) = sensor_activity(&y, &cfg);

    if args.json {
        let sensors: Vec<_> = stds
            .iter()
            .enumerate()
            .map(|(c, s)| serde_json::json!({ "sensor": channel_label(c), "std": s }))
            .collect();
        let active: Vec<String> = active.iter().map(|&c| channel_label(c)).collect();
        println!("{}", serde_json::to_string_pretty(&serde_json::json!({
            "threshold": cfg.active_std_threshold,
            "sensors": sensors,
            "active": active,
        }))?);
        return Ok(());
    }

    println!("Sensor activity (STD):");
    for (c, s) in stds.iter().enumerate() {
        println!("  {:>5}: {s:.3}", channel_label(c));
    }
    let names: Vec<String> = active.iter().map(|&c| channel_label(c)).collect();
    println!("Active sensors (> {}): [{}]", cfg.active_std_threshold, names.join(", "));

    Ok(())
}
