//! Per-sensor activity: which channels actually carry signal.
//!
//! `channel_std`     — population std of every sensor over time
//! `active_channels` — sensors whose std is strictly above a threshold
//! `sensor_activity` — both, thresholded by [`CleanConfig::active_std_threshold`]
//!
//! Data layout is `[T, C]`: time along axis 0, sensors along axis 1.
use ndarray::{Array1, ArrayBase, Axis, Data, Ix2};

use crate::config::CleanConfig;
use crate::stats::Sample;

/// Population standard deviation (ddof = 0) of each column.
///
/// Columns of an array with no rows report `NaN`.
pub fn channel_std<A, S>(data: &ArrayBase<S, Ix2>) -> Array1<f64>
where
    A: Sample,
    S: Data<Elem = A>,
{
    data.mapv(|v| v.as_f64()).std_axis(Axis(0), 0.0)
}

/// Indices of the channels with `std > threshold`, ascending.
pub fn active_channels(stds: &Array1<f64>, threshold: f64) -> Vec<usize> {
    stds.iter()
        .enumerate()
        .filter(|&(_, &s)| s > threshold)
        .map(|(i, _)| i)
        .collect()
}

/// Per-sensor std and the sensors above `cfg.active_std_threshold`.
pub fn sensor_activity<A, S>(data: &ArrayBase<S, Ix2>, cfg: &CleanConfig) -> (Array1<f64>, Vec<usize>)
where
    A: Sample,
    S: Data<Elem = A>,
{
    let stds = channel_std(data);
    let active = active_channels(&stds, cfg.active_std_threshold);
    (stds, active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, Array2};

    #[test]
    fn flat_channel_has_zero_std() {
        // ch0 constant, ch1 alternates ±2000.
        let y = Array2::from_shape_fn((100, 2), |(t, c)| {
            if c == 0 { 7_i32 } else if t % 2 == 0 { 2000 } else { -2000 }
        });
        let stds = channel_std(&y);
        approx::assert_abs_diff_eq!(stds[0], 0.0, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(stds[1], 2000.0, epsilon = 1e-6);
        assert_eq!(active_channels(&stds, 1000.0), vec![1]);
    }

    #[test]
    fn threshold_is_strict() {
        let stds = arr1(&[1000.0, 1000.5, 999.0]);
        assert_eq!(active_channels(&stds, 1000.0), vec![1]);
    }

    #[test]
    fn sensor_activity_uses_config_threshold() {
        // Column c alternates ±(c · 500): std = c · 500.
        let y = Array2::from_shape_fn((64, 4), |(t, c)| {
            let a = c as f64 * 500.0;
            if t % 2 == 0 { a } else { -a }
        });

        let (stds, active) = sensor_activity(&y, &CleanConfig::default());
        approx::assert_abs_diff_eq!(stds[3], 1500.0, epsilon = 1e-9);
        assert_eq!(active, vec![3]);

        let cfg = CleanConfig { active_std_threshold: 400.0, ..CleanConfig::default() };
        assert_eq!(sensor_activity(&y, &cfg).1, vec![1, 2, 3]);
    }
}
