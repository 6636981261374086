//! Integration tests for equal-width smoothing.

use tracestat::{smooth, Bins, Error, Signal, SmoothConfig};

fn sine(rows: usize, samples: usize) -> Signal {
    Signal::from_fn(rows, samples, |r, j| ((j as f64) * 0.01 + r as f64).sin())
}

#[test]
fn test_default_bins_on_long_trace() {
    let x = sine(2, 10_000);
    let out = SmoothConfig::default().apply(&x).unwrap();

    assert_eq!(out.t.len(), 500);
    assert_eq!(out.y.shape(), (2, 500));
    assert_eq!(out.t[0], 9);
    assert!(out.t.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_window_average() {
    let x = sine(1, 1_003);
    let n = 10;
    let window = 1_003 / n;
    let bins = Bins::linear(1_003, n).unwrap();
    let out = smooth(&x, n, false, false).unwrap();

    for (i, &start) in bins.starts().iter().enumerate() {
        let expected: f64 =
            (start..start + window).map(|j| x[(0, j)]).sum::<f64>() / window as f64;
        assert!((out.y[(0, i)] - expected).abs() < 1e-12);
    }
}

#[test]
fn test_flags_add_exact_endpoints() {
    let x = sine(3, 250);
    let out = smooth(&x, 7, true, true).unwrap();

    assert_eq!(out.t.len(), 9);
    assert_eq!(out.y.shape(), (3, 9));
    assert_eq!(out.t[0], 0);
    assert_eq!(out.t[8], 249);
    for r in 0..3 {
        assert_eq!(out.y[(r, 0)].to_bits(), x[(r, 0)].to_bits());
        assert_eq!(out.y[(r, 8)].to_bits(), x[(r, 249)].to_bits());
    }
}

#[test]
fn test_constant_signal_is_preserved() {
    let x = Signal::from_element(2, 97, 1.25);
    let out = smooth(&x, 13, false, false).unwrap();
    assert!(out.y.iter().all(|&v| (v - 1.25).abs() < 1e-12));
}

#[test]
fn test_invalid_arguments() {
    let x = sine(1, 20);
    assert!(matches!(
        smooth(&x, 0, false, false),
        Err(Error::InvalidArgument {
            parameter: "bins",
            ..
        })
    ));
    assert!(matches!(
        smooth(&x, 21, false, false),
        Err(Error::InvalidArgument {
            parameter: "bins",
            ..
        })
    ));
    assert!(matches!(
        smooth(&Signal::zeros(0, 20), 2, false, false),
        Err(Error::InvalidArgument { parameter: "x", .. })
    ));
}
