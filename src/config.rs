//! Cleaning configuration.
//!
//! [`CleanConfig`] holds every tunable threshold used by the suppressors and
//! the sensor-activity check. All fields have defaults matching the values
//! the recordings were originally screened with.
use crate::error::{ensure_positive, CleanError};
use crate::outlier::{DEFAULT_IQR_MULTIPLIER, DEFAULT_Z_THRESHOLD};

/// Default per-sensor standard deviation above which a sensor counts as active.
pub const DEFAULT_ACTIVE_STD_THRESHOLD: f64 = 1000.0;

/// Thresholds for outlier suppression and sensor activity.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use eegclean::CleanConfig;
///
/// let cfg = CleanConfig {
///     z_threshold: 2.5,   // tighter Z-score cut
///     ..CleanConfig::default()
/// };
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CleanConfig {
    /// Widening factor applied to the interquartile range.
    ///
    /// Samples outside `[Q1 − m·IQR, Q3 + m·IQR]` are zeroed.
    ///
    /// Default: `1.5`.
    pub iqr_multiplier: f64,

    /// Z-score cutoff in standard deviations.
    ///
    /// Samples with `|z| >= z_threshold` are zeroed.
    ///
    /// Default: `3.0`.
    pub z_threshold: f64,

    /// A sensor whose population std exceeds this value is reported active.
    ///
    /// In raw amplifier units; adjust to the recording.
    ///
    /// Default: `1000.0`.
    pub active_std_threshold: f64,
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self {
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            z_threshold: DEFAULT_Z_THRESHOLD,
            active_std_threshold: DEFAULT_ACTIVE_STD_THRESHOLD,
        }
    }
}

impl CleanConfig {
    /// Check that both suppression parameters are strictly positive.
    ///
    /// `active_std_threshold` is not checked; zero means "any variance".
    pub fn validate(&self) -> Result<(), CleanError> {
        ensure_positive("iqr_multiplier", self.iqr_multiplier)?;
        ensure_positive("z_threshold", self.z_threshold)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = CleanConfig::default();
        assert_eq!(cfg.iqr_multiplier, 1.5);
        assert_eq!(cfg.z_threshold, 3.0);
        assert_eq!(cfg.active_std_threshold, 1000.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_names_offending_field() {
        let cfg = CleanConfig { iqr_multiplier: 0.0, ..CleanConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(CleanError::InvalidParameter { name: "iqr_multiplier", value: 0.0 })
        );
    }
}
