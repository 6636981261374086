//! Quantile computation using the R-7 definition (linear interpolation).

/// Compute a quantile from data already sorted in ascending order.
///
/// With `h = (n - 1) * p`, returns the order statistic at `floor(h)`
/// interpolated towards the next one by the fractional part of `h`.
///
/// # Panics
///
/// Panics if `sorted` is empty or if `p` is outside [0, 1].
pub fn compute_quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    assert!(!sorted.is_empty(), "Cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "Quantile probability must be in [0, 1]"
    );

    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        sorted[n - 1]
    } else if h_frac == 0.0 {
        sorted[h_floor]
    } else {
        sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((compute_quantile_sorted(&data, 0.5) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_extremes() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(compute_quantile_sorted(&data, 0.0), 1.0);
        assert_eq!(compute_quantile_sorted(&data, 1.0), 5.0);
    }

    #[test]
    fn test_interpolation() {
        // h = 3 * 0.25 = 0.75 -> 10 + 0.75 * (20 - 10)
        let data = vec![10.0, 20.0, 30.0, 40.0];
        assert!((compute_quantile_sorted(&data, 0.25) - 17.5).abs() < 1e-12);
    }

    #[test]
    fn test_exact_order_statistics() {
        // 0.0, 0.5, ..., 50.0: every p = k / 100 lands exactly on index k
        let sorted: Vec<f64> = (0..101).map(|i| i as f64 * 0.5).collect();

        for k in [0usize, 10, 25, 50, 75, 90, 100] {
            let p = k as f64 / 100.0;
            let q = compute_quantile_sorted(&sorted, p);
            assert!((q - sorted[k]).abs() < 1e-9, "p={}", p);
        }
    }

    #[test]
    fn test_single_element() {
        assert_eq!(compute_quantile_sorted(&[7.0], 0.3), 7.0);
    }

    #[test]
    #[should_panic(expected = "Cannot compute quantile of empty slice")]
    fn test_empty_slice_panics() {
        compute_quantile_sorted(&[], 0.5);
    }
}
