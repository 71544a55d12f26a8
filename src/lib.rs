//! # eegclean — outlier suppression for multichannel EEG recordings
//!
//! `eegclean` zeroes statistically anomalous samples in sensor arrays and
//! reports how many were removed. Two rules are provided, both computed over
//! every element of the array at once and applied element-wise without
//! changing its shape:
//!
//! ```text
//! y  [T, C]  (any shape, any Sample element type)
//!   │
//!   ├─ suppress_by_iqr()      keep Q1 − 1.5·IQR ≤ v ≤ Q3 + 1.5·IQR
//!   ├─ suppress_by_zscore()   keep |v − μ| / σ < 3   (σ = 0 → unchanged)
//!   └─ summarize()            { total_points, zeroed_points, method }
//! ```
//!
//! Around the core sit a few inspection helpers: per-sensor activity, the
//! electrode montage, weighted array comparison, and `.npy`/`.npz` I/O used
//! by the `suppress`, `activity` and `compare` binaries.
//!
//! ## Quick start
//!
//! ```
//! use eegclean::{suppress_both, CleanConfig};
//! use ndarray::Array2;
//!
//! // 1 000 samples × 16 sensors with one spike
//! let mut y = Array2::from_shape_fn((1000, 16), |(t, c)| ((t * 7 + c) % 13) as f64);
//! y[[500, 3]] = 10_000.0;
//!
//! let report = suppress_both(&y, &CleanConfig::default()).unwrap();
//! assert_eq!(report.iqr[[500, 3]], 0.0);
//! assert_eq!(report.zscore[[500, 3]], 0.0);
//! println!("{}", report.iqr_summary);
//! println!("{}", report.zscore_summary);
//! ```
//!
//! ## Individual steps
//!
//! ```
//! use eegclean::{suppress_by_iqr, summarize, Method};
//! use ndarray::arr1;
//!
//! let y = arr1(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
//! let cleaned = suppress_by_iqr(&y, 1.5).unwrap();
//! let s = summarize(&y, &cleaned, Method::Iqr).unwrap();
//! assert_eq!((s.total_points, s.zeroed_points), (6, 1));
//! ```
//!
//! Every array operation is a pure function of its borrowed input and may be
//! called from any number of threads.

pub mod activity;
pub mod batch;
pub mod compare;
pub mod config;
pub mod error;
pub mod io;
pub mod montage;
pub mod outlier;
pub mod stats;
pub mod summary;

// ── Crate-root re-exports ─────────────────────────────────────────────────

// config / errors
pub use config::CleanConfig;
pub use error::CleanError;

// outlier engine
pub use outlier::{
    suppress_both, suppress_by_iqr, suppress_by_zscore,
    iqr_bounds, zscore_stats,
    IqrBounds, ZScoreStats, SuppressionReport,
    DEFAULT_IQR_MULTIPLIER, DEFAULT_Z_THRESHOLD,
};
pub use stats::Sample;
pub use summary::{summarize, zeroed_per_channel, Method, Summary};

// inspection
pub use activity::{active_channels, channel_std, sensor_activity};
pub use compare::{compare, compare_truncated, Comparison};
pub use montage::{channel_label, electrode_index, electrode_name, ELECTRODES};

// io
pub use batch::{process_recording, RecordingReport};
pub use io::{discover_recordings, load_npy, load_npz_samples, load_samples, write_npy};
