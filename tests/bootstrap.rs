//! Integration tests for bootstrap estimation.

use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use tracestat::{bootstrap, bootstrap_seeded, BootstrapConfig, BootstrapEstimate};

#[test]
fn test_output_length_and_range() {
    let a: Vec<f64> = (0..40).map(|i| ((i * 7) % 40) as f64).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(2024);

    let means = bootstrap(&a, &mut rng, 1000).unwrap();

    assert_eq!(means.len(), 1000);
    assert!(means.iter().all(|&m| (0.0..=39.0).contains(&m)));
}

#[test]
fn test_mean_of_means_tracks_sample_mean() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(17);
    let normal = Normal::new(10.0, 2.0).unwrap();
    let a: Vec<f64> = (0..500).map(|_| normal.sample(&mut rng)).collect();
    let sample_mean = a.iter().sum::<f64>() / a.len() as f64;

    let means = bootstrap(&a, &mut rng, 5_000).unwrap();
    let est = BootstrapEstimate::from_means(&means, 0.95).unwrap();

    // standard error of the mean is about 2 / sqrt(500) ~ 0.089
    assert!((est.mean - sample_mean).abs() < 0.02);
    assert!((est.std_error - 2.0 / 500f64.sqrt()).abs() < 0.02);
    assert!(est.contains(sample_mean));
    assert!(est.ci_high - est.ci_low < 0.5);
}

#[test]
fn test_rng_is_advanced_not_reseeded() {
    let a: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);

    let first = bootstrap(&a, &mut rng, 50).unwrap();
    let second = bootstrap(&a, &mut rng, 50).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_config_run_matches_seeded() {
    let a: Vec<f64> = (0..64).map(|i| (i as f64).sqrt()).collect();
    let means = bootstrap_seeded(&a, 300, 8).unwrap();
    let expected = BootstrapEstimate::from_means(&means, 0.9).unwrap();

    let est = BootstrapConfig::new()
        .resamples(300)
        .seed(8)
        .confidence(0.9)
        .run(&a)
        .unwrap();
    assert_eq!(est, expected);
}

#[test]
fn test_unseeded_run() {
    let a = [1.0, 2.0, 3.0];
    let est = BootstrapConfig::new().resamples(100).run(&a).unwrap();
    assert_eq!(est.resamples, 100);
    assert!((1.0..=3.0).contains(&est.mean));
}
