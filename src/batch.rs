//! Per-recording driver behind the `suppress` binary.
//!
//! For a recording `<stem>` the output root receives:
//!
//! ```text
//! filtered_<stem>/<stem>_iqr_zeroed.npy      IQR-suppressed copy
//! filtered_<stem>/<stem>_zscore_zeroed.npy   Z-score-suppressed copy
//! ```
//!
//! Nothing is created under the output root unless the recording loads and
//! both suppressors succeed.
use anyhow::{Context, Result};
use log::info;
use ndarray::{ArrayD, Axis, Ix2};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::CleanConfig;
use crate::io;
use crate::outlier::{suppress_both, IqrBounds, ZScoreStats};
use crate::summary::{zeroed_per_channel, Summary};

/// Outcome of cleaning one recording.
#[derive(Debug, Clone, Serialize)]
pub struct RecordingReport {
    pub file: String,
    pub shape: Vec<usize>,
    pub iqr: Summary,
    pub zscore: Summary,
    pub iqr_bounds: Option<IqrBounds>,
    pub zscore_stats: Option<ZScoreStats>,
    /// Per sensor, for 2-D `[T, C]` recordings only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iqr_zeroed_per_channel: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zscore_zeroed_per_channel: Option<Vec<usize>>,
}

/// Directory that receives the cleaned copies of `path`.
pub fn output_dir(path: &Path, output_root: &Path) -> PathBuf {
    output_root.join(format!("filtered_{}", io::file_stem(path)))
}

/// Load `path`, run both suppressors and write the two cleaned arrays.
pub fn process_recording(
    path: &Path,
    output_root: &Path,
    cfg: &CleanConfig,
) -> Result<RecordingReport> {
    let stem = io::file_stem(path);
    let y: ArrayD<f64> = io::load_samples(path)?;
    info!("{}: shape {:?}", path.display(), y.shape());

    let report = suppress_both(&y, cfg)?;

    let out_dir = output_dir(path, output_root);
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    io::write_npy(&out_dir.join(format!("{stem}_iqr_zeroed.npy")), &report.iqr)?;
    io::write_npy(&out_dir.join(format!("{stem}_zscore_zeroed.npy")), &report.zscore)?;

    let per_channel = |a: &ArrayD<f64>| {
        a.view()
            .into_dimensionality::<Ix2>()
            .ok()
            .map(|v| zeroed_per_channel(&v, Axis(1)))
    };

    Ok(RecordingReport {
        file: stem,
        shape: y.shape().to_vec(),
        iqr_zeroed_per_channel: per_channel(&report.iqr),
        zscore_zeroed_per_channel: per_channel(&report.zscore),
        iqr: report.iqr_summary,
        zscore: report.zscore_summary,
        iqr_bounds: report.iqr_bounds,
        zscore_stats: report.zscore_stats,
    })
}
