//! Outlier suppression: replace statistically anomalous samples with zero.
//!
//! Both methods compute their statistics over **all** elements of the array,
//! ignoring its shape, then walk the same elements again and keep or zero each
//! one. The output always has the input's shape and element order.
//!
//! `suppress_by_iqr`    — keep `Q1 − m·IQR ≤ v ≤ Q3 + m·IQR`
//! `suppress_by_zscore` — keep `|v − μ| / σ < threshold`; `σ = 0` keeps all
use log::debug;
use ndarray::{Array, ArrayBase, Data, Dimension};
use serde::Serialize;

use crate::config::CleanConfig;
use crate::error::{ensure_positive, CleanError};
use crate::stats::{population_mean_std, quantile_linear, sorted_values, Sample};
use crate::summary::{summarize, Method, Summary};

/// Default IQR widening factor.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Default Z-score cutoff in standard deviations.
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Quartile statistics and the acceptance window derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IqrBounds {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    /// `q1 − multiplier · iqr`
    pub lower: f64,
    /// `q3 + multiplier · iqr`
    pub upper: f64,
}

impl IqrBounds {
    /// Inclusive on both ends. Always false when the bounds are NaN.
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.lower <= v && v <= self.upper
    }
}

/// Population mean and standard deviation (ddof = 0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScoreStats {
    pub mean: f64,
    pub std: f64,
}

impl ZScoreStats {
    /// `|v − mean| / std`
    #[inline]
    pub fn score(&self, v: f64) -> f64 {
        (v - self.mean).abs() / self.std
    }
}

/// Quartile bounds of `data` for the given `multiplier`.
///
/// Returns `Ok(None)` for an empty array. If any element is NaN every bound
/// is NaN, so nothing falls inside the window.
pub fn iqr_bounds<A, S, D>(
    data: &ArrayBase<S, D>,
    multiplier: f64,
) -> Result<Option<IqrBounds>, CleanError>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    ensure_positive("multiplier", multiplier)?;
    if data.is_empty() {
        return Ok(None);
    }

    let sorted = sorted_values(data);
    let (q1, q3) = if sorted.iter().any(|v| v.is_nan()) {
        (f64::NAN, f64::NAN)
    } else {
        (quantile_linear(&sorted, 0.25), quantile_linear(&sorted, 0.75))
    };
    let iqr = q3 - q1;

    Ok(Some(IqrBounds {
        q1,
        q3,
        iqr,
        lower: q1 - multiplier * iqr,
        upper: q3 + multiplier * iqr,
    }))
}

/// Mean and standard deviation of `data`, `None` when empty.
pub fn zscore_stats<A, S, D>(data: &ArrayBase<S, D>) -> Option<ZScoreStats>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    population_mean_std(data).map(|(mean, std)| ZScoreStats { mean, std })
}

/// Zero every element outside the interquartile acceptance window.
///
/// A constant array has `IQR = 0`, so the window collapses to the constant
/// itself and every element survives.
///
/// # Errors
///
/// [`CleanError::InvalidParameter`] if `multiplier <= 0`.
///
/// # Examples
///
/// ```
/// use eegclean::suppress_by_iqr;
/// use ndarray::arr1;
///
/// let y = arr1(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
/// let out = suppress_by_iqr(&y, 1.5).unwrap();
/// assert_eq!(out, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0, 0.0]));
/// ```
pub fn suppress_by_iqr<A, S, D>(
    data: &ArrayBase<S, D>,
    multiplier: f64,
) -> Result<Array<A, D>, CleanError>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    let bounds = iqr_bounds(data, multiplier)?;
    Ok(apply_iqr(data, bounds.as_ref()))
}

fn apply_iqr<A, S, D>(data: &ArrayBase<S, D>, bounds: Option<&IqrBounds>) -> Array<A, D>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    let Some(bounds) = bounds else {
        return data.to_owned();
    };
    debug!(
        "iqr: q1={:.6} q3={:.6} lower={:.6} upper={:.6}",
        bounds.q1, bounds.q3, bounds.lower, bounds.upper
    );
    data.mapv(|v| if bounds.contains(v.as_f64()) { v } else { A::zero() })
}

/// Zero every element whose absolute Z-score is `>= threshold`.
///
/// When the standard deviation is exactly zero the input is returned
/// unchanged. An element exactly `threshold` deviations away is zeroed.
///
/// # Errors
///
/// [`CleanError::InvalidParameter`] if `threshold <= 0`.
pub fn suppress_by_zscore<A, S, D>(
    data: &ArrayBase<S, D>,
    threshold: f64,
) -> Result<Array<A, D>, CleanError>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    ensure_positive("threshold", threshold)?;
    let stats = zscore_stats(data);
    Ok(apply_zscore(data, stats.as_ref(), threshold))
}

fn apply_zscore<A, S, D>(
    data: &ArrayBase<S, D>,
    stats: Option<&ZScoreStats>,
    threshold: f64,
) -> Array<A, D>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    let Some(stats) = stats else {
        return data.to_owned();
    };
    debug!("zscore: mean={:.6} std={:.6}", stats.mean, stats.std);

    if stats.std == 0.0 {
        return data.to_owned();
    }
    data.mapv(|v| if stats.score(v.as_f64()) < threshold { v } else { A::zero() })
}

/// Both suppressed copies of one recording, their summaries, and the
/// statistics each method thresholded against.
#[derive(Debug, Clone)]
pub struct SuppressionReport<A, D: Dimension> {
    pub iqr: Array<A, D>,
    pub zscore: Array<A, D>,
    pub iqr_summary: Summary,
    pub zscore_summary: Summary,
    /// `None` for an empty array.
    pub iqr_bounds: Option<IqrBounds>,
    /// `None` for an empty array.
    pub zscore_stats: Option<ZScoreStats>,
}

impl<A, D: Dimension> SuppressionReport<A, D> {
    /// Number of elements in the original array.
    pub fn total_points(&self) -> usize {
        self.iqr_summary.total_points
    }
}

/// Run both suppressors with the parameters from `cfg`.
///
/// # Errors
///
/// Propagates [`CleanError::InvalidParameter`] from either method.
pub fn suppress_both<A, S, D>(
    data: &ArrayBase<S, D>,
    cfg: &CleanConfig,
) -> Result<SuppressionReport<A, D>, CleanError>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    cfg.validate()?;

    let iqr_bounds = iqr_bounds(data, cfg.iqr_multiplier)?;
    let zscore_stats = zscore_stats(data);
    let iqr = apply_iqr(data, iqr_bounds.as_ref());
    let zscore = apply_zscore(data, zscore_stats.as_ref(), cfg.z_threshold);
    let iqr_summary = summarize(data, &iqr, Method::Iqr)?;
    let zscore_summary = summarize(data, &zscore, Method::ZScore)?;
    debug!(
        "suppressed {:?}: iqr zeroed {}, zscore zeroed {} of {}",
        data.shape(),
        iqr_summary.zeroed_points,
        zscore_summary.zeroed_points,
        iqr_summary.total_points,
    );

    Ok(SuppressionReport {
        iqr,
        zscore,
        iqr_summary,
        zscore_summary,
        iqr_bounds,
        zscore_stats,
    })
}
