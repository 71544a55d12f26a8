/// compare: weighted element-wise difference between two saved arrays,
/// e.g. `<stem>_iqr_zeroed.npy` against `<stem>_zscore_zeroed.npy`.
///
/// Without `--truncate` the arrays (and weights) must have identical shapes;
/// with it they only need the same rank and are cut to the common extent.
use anyhow::Result;
use clap::Parser;
use log::info;
use std::path::PathBuf;

use eegclean::{compare, compare_truncated, io};

#[derive(Parser, Debug)]
#[command(name = "compare", about = "Weighted absolute difference of two .npy arrays")]
struct Args {
    /// First array
    first: PathBuf,

    /// Second array
    second: PathBuf,

    /// Optional weights array (defaults to ones)
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Cut both arrays to their common extent instead of requiring equal shapes
    #[arg(long)]
    truncate: bool,

    /// Write the weighted difference here (.npy)
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let a = io::load_samples(&args.first)?;
    let b = io::load_samples(&args.second)?;
    let w = args.weights.as_deref().map(io::load_samples).transpose()?;
    info!("shapes: {:?} vs {:?}", a.shape(), b.shape());

    let cmp = if args.truncate {
        compare_truncated(&a, &b, w.as_ref().map(|w| w.view()))?
    } else {
        compare(&a, &b, w.as_ref().map(|w| w.view()))?
    };

    println!("Compared shape:        {:?}", cmp.shape());
    match (cmp.max_weighted(), cmp.mean_weighted()) {
        (Some(max), Some(mean)) => {
            println!("Max weighted diff:     {max:.6}");
            println!("Mean weighted diff:    {mean:.6}");
        }
        _ => println!("Arrays are empty"),
    }

    if let Some(out) = &args.output {
        io::write_npy(out, &cmp.weighted_diff)?;
        println!("Written → {}", out.display());
    }
    Ok(())
}
