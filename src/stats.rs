//! Global population statistics over arrays of any shape.
//!
//! `population_mean_std` — μ = mean(all elements),  σ = std (ddof=0)
//!
//! `quantile_linear` — linear interpolation between closest ranks,
//!   `pos = q · (n − 1)`, the conventional quartile definition.
//!
//! Accumulation is always in `f64`, whatever the element type.
use ndarray::{ArrayBase, Data, Dimension};
use num_traits::Zero;

/// Element types the suppression engine accepts.
///
/// Anything losslessly convertible to `f64` with a zero value: `f64`, `f32`,
/// and the integer widths up to 32 bits.
pub trait Sample: Copy + Zero + Into<f64> {
    #[inline]
    fn as_f64(self) -> f64 {
        self.into()
    }
}

impl<T: Copy + Zero + Into<f64>> Sample for T {}

/// Population mean and standard deviation of every element.
/// Returns `None` for an empty array.
pub fn population_mean_std<A, S, D>(data: &ArrayBase<S, D>) -> Option<(f64, f64)>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    if data.is_empty() {
        return None;
    }
    let n = data.len() as f64;
    let mean = data.iter().map(|&v| v.as_f64()).sum::<f64>() / n;
    let var = data
        .iter()
        .map(|&v| {
            let d = v.as_f64() - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    Some((mean, var.sqrt()))
}

/// Every element widened to `f64` and sorted ascending.
///
/// NaNs sort last; callers that care check for them first.
pub fn sorted_values<A, S, D>(data: &ArrayBase<S, D>) -> Vec<f64>
where
    A: Sample,
    S: Data<Elem = A>,
    D: Dimension,
{
    let mut v: Vec<f64> = data.iter().map(|&x| x.as_f64()).collect();
    v.sort_unstable_by(f64::total_cmp);
    v
}

/// `q`-quantile (`0 ≤ q ≤ 1`) of an ascending slice by linear interpolation.
///
/// Panics on an empty slice.
pub fn quantile_linear(sorted: &[f64], q: f64) -> f64 {
    let last = sorted.len() - 1;
    let pos = q.clamp(0.0, 1.0) * last as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(last);
    let t = pos - lo as f64;
    let (a, b) = (sorted[lo], sorted[hi]);
    // Lerp from the nearer end to keep rounding symmetric.
    if t < 0.5 {
        a + (b - a) * t
    } else {
        b - (b - a) * (1.0 - t)
    }
}
