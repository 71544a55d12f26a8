//! Error type for the array-level operations.
//!
//! File and CLI glue uses `anyhow`; everything that takes arrays and returns
//! arrays reports through [`CleanError`] so callers can match on the cause.

/// Failure of an outlier, summary or comparison operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CleanError {
    /// Two arrays that must be combined element-wise have different shapes.
    #[error("shape mismatch: {left:?} vs {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    /// Two arrays that must be truncated together differ in dimensionality.
    #[error("rank mismatch: {left}-D vs {right}-D")]
    RankMismatch { left: usize, right: usize },

    /// A weight array is shorter than the truncated data along `axis`.
    #[error("weights axis {axis} too small: needs at least {needed}, got {got}")]
    WeightsTooSmall { axis: usize, needed: usize, got: usize },

    /// A tuning parameter is not strictly positive.
    #[error("invalid parameter `{name}` = {value}: must be > 0")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Fail with [`CleanError::InvalidParameter`] unless `value > 0`.
///
/// NaN is rejected as well.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), CleanError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CleanError::InvalidParameter { name, value })
    }
}

/// Fail with [`CleanError::ShapeMismatch`] unless both shapes are identical.
pub(crate) fn ensure_same_shape(left: &[usize], right: &[usize]) -> Result<(), CleanError> {
    if left == right {
        Ok(())
    } else {
        Err(CleanError::ShapeMismatch {
            left: left.to_vec(),
            right: right.to_vec(),
        })
    }
}
