use eegclean::{compare, compare_truncated, suppress_by_iqr, suppress_by_zscore, CleanError};
use ndarray::{arr1, Array2};

#[test]
fn iqr_vs_zscore_differ_only_where_one_zeroed() {
    let mut y = Array2::from_shape_fn((200, 4), |(t, c)| ((t + c) % 10) as f64);
    y[[50, 2]] = 1_000.0;
    let a = suppress_by_iqr(&y, 1.5).unwrap();
    let b = suppress_by_zscore(&y, 3.0).unwrap();
    let cmp = compare(&a, &b, None).unwrap();

    for ((idx, &d), (&x, &z)) in cmp.abs_diff.indexed_iter().zip(a.iter().zip(b.iter())) {
        if d != 0.0 {
            assert!(x == 0.0 || z == 0.0, "difference at {idx:?} without a zero");
        }
    }
}

#[test]
fn truncated_weights_are_cut() {
    let a = arr1(&[1.0_f64, 2.0, 3.0, 4.0]);
    let b = arr1(&[0.0_f64, 0.0]);
    let w = arr1(&[2.0_f64, 3.0, 100.0]);
    let cmp = compare_truncated(&a, &b, Some(w.view())).unwrap();
    assert_eq!(cmp.weights, arr1(&[2.0, 3.0]));
    assert_eq!(cmp.weighted_diff, arr1(&[2.0, 6.0]));
    assert_eq!(cmp.max_weighted(), Some(6.0));
    approx::assert_abs_diff_eq!(cmp.mean_weighted().unwrap(), 4.0, epsilon = 1e-12);
}

#[test]
fn strict_compare_rejects_different_lengths() {
    let a = arr1(&[1.0_f64, 2.0, 3.0]);
    let b = arr1(&[1.0_f64, 2.0]);
    assert_eq!(
        compare(&a, &b, None).unwrap_err(),
        CleanError::ShapeMismatch { left: vec![3], right: vec![2] }
    );
}
