//! Element-wise comparison of two arrays, e.g. an IQR-cleaned recording
//! against its Z-score-cleaned twin, or the same sensor across sessions.
//!
//! `compare`           — shapes must match exactly
//! `compare_truncated` — ranks must match; both are cut to the common extent
//!
//! Both produce `|a − b|` and `w · |a − b|`, with `w` defaulting to ones.
use ndarray::{Array, ArrayBase, ArrayView, Data, Dimension, Slice, Zip};
use num_traits::Float;

use crate::error::{ensure_same_shape, CleanError};

/// Inputs (after any truncation) and their differences.
#[derive(Debug, Clone)]
pub struct Comparison<A, D: Dimension> {
    pub left: Array<A, D>,
    pub right: Array<A, D>,
    pub weights: Array<A, D>,
    /// `|left − right|`
    pub abs_diff: Array<A, D>,
    /// `weights · abs_diff`
    pub weighted_diff: Array<A, D>,
}

impl<A: Float, D: Dimension> Comparison<A, D> {
    fn build(left: Array<A, D>, right: Array<A, D>, weights: Array<A, D>) -> Self {
        let abs_diff = Zip::from(&left).and(&right).map_collect(|&x, &y| (x - y).abs());
        let weighted_diff = Zip::from(&weights).and(&abs_diff).map_collect(|&w, &d| w * d);
        Self { left, right, weights, abs_diff, weighted_diff }
    }

    /// Shape of the compared arrays.
    pub fn shape(&self) -> &[usize] {
        self.abs_diff.shape()
    }

    /// Largest weighted difference, `None` when empty. NaNs are skipped.
    pub fn max_weighted(&self) -> Option<A> {
        self.weighted_diff
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| Some(acc.map_or(v, |m: A| m.max(v))))
    }

    /// Mean weighted difference, `None` when empty.
    pub fn mean_weighted(&self) -> Option<A> {
        if self.weighted_diff.is_empty() {
            return None;
        }
        let n: A = num_traits::cast(self.weighted_diff.len())?;
        let sum = self.weighted_diff.iter().fold(A::zero(), |acc, &v| acc + v);
        Some(sum / n)
    }
}

/// Compare two arrays of identical shape.
///
/// # Errors
///
/// [`CleanError::ShapeMismatch`] if `a`, `b` or `weights` disagree in shape.
pub fn compare<A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    weights: Option<ArrayView<'_, A, D>>,
) -> Result<Comparison<A, D>, CleanError>
where
    A: Float,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    ensure_same_shape(a.shape(), b.shape())?;
    let weights = match weights {
        Some(w) => {
            ensure_same_shape(w.shape(), a.shape())?;
            w.to_owned()
        }
        None => Array::ones(a.raw_dim()),
    };
    Ok(Comparison::build(a.to_owned(), b.to_owned(), weights))
}

/// Compare two arrays of the same rank after cutting both to the smallest
/// extent along every axis. Weights are cut the same way.
///
/// # Errors
///
/// * [`CleanError::RankMismatch`] if `a` and `b` (or the weights) differ in rank.
/// * [`CleanError::WeightsTooSmall`] if the weights are shorter than the
///   common extent along some axis.
pub fn compare_truncated<A, S1, S2, D>(
    a: &ArrayBase<S1, D>,
    b: &ArrayBase<S2, D>,
    weights: Option<ArrayView<'_, A, D>>,
) -> Result<Comparison<A, D>, CleanError>
where
    A: Float,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    if a.ndim() != b.ndim() {
        return Err(CleanError::RankMismatch { left: a.ndim(), right: b.ndim() });
    }
    let min: Vec<usize> = a.shape().iter().zip(b.shape()).map(|(&x, &y)| x.min(y)).collect();

    let weights_cut = match weights.as_ref() {
        Some(w) => {
            if w.ndim() != min.len() {
                return Err(CleanError::RankMismatch { left: w.ndim(), right: min.len() });
            }
            if let Some((axis, (&got, &needed))) =
                w.shape().iter().zip(&min).enumerate().find(|(_, (g, n))| g < n)
            {
                return Err(CleanError::WeightsTooSmall { axis, needed, got });
            }
            Some(truncate(w, &min))
        }
        None => None,
    };

    compare(&truncate(a, &min), &truncate(b, &min), weights_cut)
}

fn truncate<'a, A, S, D>(arr: &'a ArrayBase<S, D>, extent: &[usize]) -> ArrayView<'a, A, D>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    arr.slice_each_axis(|ax| Slice::from(0..extent[ax.axis.index()]))
}
