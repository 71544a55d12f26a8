//! Counts of what a suppression pass zeroed.
use std::fmt;

use ndarray::{ArrayBase, Axis, Data, Dimension, Ix2};
use serde::Serialize;

use crate::error::{ensure_same_shape, CleanError};
use crate::stats::Sample;

/// Which suppressor produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Iqr,
    ZScore,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Iqr => f.write_str("IQR"),
            Method::ZScore => f.write_str("Z-score"),
        }
    }
}

/// Totals for one suppression pass.
///
/// `zeroed_points` counts every zero in the result, including samples that
/// were already zero in the recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_points: usize,
    pub zeroed_points: usize,
    pub method: Method,
}

impl Summary {
    /// `zeroed_points / total_points`, or `0.0` for an empty array.
    pub fn zeroed_fraction(&self) -> f64 {
        if self.total_points == 0 {
            0.0
        } else {
            self.zeroed_points as f64 / self.total_points as f64
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} zeroed points: {} ({:.2}%)",
            self.method,
            self.zeroed_points,
            self.zeroed_fraction() * 100.0
        )
    }
}

/// Summarize a suppression result against the array it came from.
///
/// # Errors
///
/// [`CleanError::ShapeMismatch`] if the two arrays differ in shape.
pub fn summarize<A, S1, S2, D>(
    original: &ArrayBase<S1, D>,
    suppressed: &ArrayBase<S2, D>,
    method: Method,
) -> Result<Summary, CleanError>
where
    A: Sample,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
    D: Dimension,
{
    ensure_same_shape(original.shape(), suppressed.shape())?;
    Ok(Summary {
        total_points: original.len(),
        zeroed_points: suppressed.iter().filter(|v| v.is_zero()).count(),
        method,
    })
}

/// Zeros in each lane of a 2-D result, one entry per index of `channel_axis`.
///
/// With the usual `[T, C]` layout, `Axis(1)` gives one count per sensor.
pub fn zeroed_per_channel<A, S>(suppressed: &ArrayBase<S, Ix2>, channel_axis: Axis) -> Vec<usize>
where
    A: Sample,
    S: Data<Elem = A>,
{
    suppressed
        .axis_iter(channel_axis)
        .map(|lane| lane.iter().filter(|v| v.is_zero()).count())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn counts_pre_existing_zeros() {
        let original = arr1(&[0.0_f64, 1.0, 2.0, 50.0]);
        let suppressed = arr1(&[0.0_f64, 1.0, 2.0, 0.0]);
        let s = summarize(&original, &suppressed, Method::Iqr).unwrap();
        assert_eq!(s.total_points, 4);
        assert_eq!(s.zeroed_points, 2);
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let a = arr2(&[[1.0_f32, 2.0], [3.0, 4.0]]);
        let b = arr2(&[[1.0_f32, 2.0, 3.0, 4.0]]);
        assert_eq!(
            summarize(&a, &b, Method::ZScore),
            Err(CleanError::ShapeMismatch { left: vec![2, 2], right: vec![1, 4] })
        );
    }

    #[test]
    fn empty_summary_has_zero_fraction() {
        let a = ndarray::Array1::<f64>::zeros(0);
        let s = summarize(&a, &a, Method::Iqr).unwrap();
        assert_eq!((s.total_points, s.zeroed_points), (0, 0));
        assert_eq!(s.zeroed_fraction(), 0.0);
    }

    #[test]
    fn display_shows_percentage() {
        let s = Summary { total_points: 8, zeroed_points: 1, method: Method::ZScore };
        assert_eq!(s.to_string(), "Z-score zeroed points: 1 (12.50%)");
    }

    #[test]
    fn per_channel_counts_columns() {
        // [T=3, C=2]
        let y = arr2(&[[0.0_f64, 1.0], [0.0, 2.0], [5.0, 0.0]]);
        assert_eq!(zeroed_per_channel(&y, Axis(1)), vec![2, 1]);
        assert_eq!(zeroed_per_channel(&y, Axis(0)), vec![1, 1, 1]);
    }

    #[test]
    fn method_serializes_lowercase() {
        let s = Summary { total_points: 2, zeroed_points: 0, method: Method::ZScore };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"total_points":2,"zeroed_points":0,"method":"zscore"}"#);
    }
}
