/// suppress: zero outliers in every `.npy`/`.npz` recording of a directory.
///
/// For each recording `<stem>` the output root receives:
///   filtered_<stem>/<stem>_iqr_zeroed.npy      IQR-suppressed copy
///   filtered_<stem>/<stem>_zscore_zeroed.npy   Z-score-suppressed copy
///
/// A file that fails to load or process is logged and skipped.
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use eegclean::batch::{process_recording, RecordingReport};
use eegclean::{channel_label, io, CleanConfig};

#[derive(Parser, Debug)]
#[command(name = "suppress", about = "Zero IQR / Z-score outliers in EEG recordings")]
struct Args {
    /// Directory containing .npy / .npz recordings
    input_dir: PathBuf,

    /// Output root (default: <input_dir>/filtered_output)
    #[arg(long)]
    output: Option<PathBuf>,

    /// IQR widening factor
    #[arg(long, default_value_t = eegclean::DEFAULT_IQR_MULTIPLIER)]
    iqr_multiplier: f64,

    /// Z-score cutoff in standard deviations
    #[arg(long, default_value_t = eegclean::DEFAULT_Z_THRESHOLD)]
    z_threshold: f64,

    /// Print the summary as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn print_report(r: &RecordingReport) {
    println!("\nFile: {}", r.file);
    println!("Total data points: {}", r.iqr.total_points);
    println!("{}", r.iqr);
    println!("{}", r.zscore);
    if let (Some(iqr), Some(z)) = (&r.iqr_zeroed_per_channel, &r.zscore_zeroed_per_channel) {
        for (c, (a, b)) in iqr.iter().zip(z).enumerate() {
            println!("  {:>5}: iqr={a:<8} zscore={b}", channel_label(c));
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let cfg = CleanConfig {
        iqr_multiplier: args.iqr_multiplier,
        z_threshold: args.z_threshold,
        ..CleanConfig::default()
    };
    cfg.validate()?;

    let output_root = args
        .output
        .clone()
        .unwrap_or_else(|| args.input_dir.join("filtered_output"));
    std::fs::create_dir_all(&output_root)
        .with_context(|| format!("creating {}", output_root.display()))?;

    let mut reports = Vec::new();
    for path in io::discover_recordings(&args.input_dir)? {
        info!("processing {}", path.display());
        match process_recording(&path, &output_root, &cfg) {
            Ok(r) => reports.push(r),
            Err(e) => error!("error processing {}: {e:#}", path.display()),
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        println!("Processing Summary:");
        reports.iter().for_each(print_report);
        println!("\nOutputs written to: {}", output_root.display());
    }
    Ok(())
}
