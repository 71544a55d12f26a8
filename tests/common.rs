/// Shared helpers: synthetic recordings with known artefacts.
use ndarray::Array2;

#[allow(unused)]
pub const N_SENSORS: usize = 16;

#[allow(unused)]
/// `[T, 16]` recording of bounded sinusoids (|v| ≤ 50) with no outliers.
pub fn clean_recording(n_t: usize) -> Array2<f64> {
    Array2::from_shape_fn((n_t, N_SENSORS), |(t, c)| {
        (t as f64 * 0.05 + c as f64 * 0.7).sin() * 50.0
    })
}

#[allow(unused)]
/// `clean_recording` with large spikes at the given `(t, c)` positions.
pub fn spiked_recording(n_t: usize, spikes: &[(usize, usize)]) -> Array2<f64> {
    let mut y = clean_recording(n_t);
    for (i, &(t, c)) in spikes.iter().enumerate() {
        y[[t, c]] = if i % 2 == 0 { 5_000.0 } else { -5_000.0 };
    }
    y
}

#[allow(unused)]
/// Number of exact zeros in an array.
pub fn count_zeros<'a>(it: impl IntoIterator<Item = &'a f64>) -> usize {
    it.into_iter().filter(|&&v| v == 0.0).count()
}
