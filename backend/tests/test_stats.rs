//! Statistical smoke tests over both generators

use randlib_core::{create_prng_with, Algorithm, RandomError, StatsReport};

#[test]
fn test_generators_pass_basic_checks() {
    for algorithm in Algorithm::ALL {
        let mut rng = create_prng_with(algorithm, &[0x01, 0x02, 0x03, 0x04]);
        let report = StatsReport::collect(rng.as_mut(), 65_536).unwrap();
        assert!(
            report.passes_basic_checks(),
            "{} failed {:?}:\n{}",
            algorithm,
            report.failures(),
            report
        );
    }
}

#[test]
fn test_report_fields() {
    let mut rng = create_prng_with(Algorithm::PseudoDes, b"report");
    let report = StatsReport::collect(rng.as_mut(), 4096).unwrap();

    assert_eq!(report.generator, "PSEUDO_DES");
    assert_eq!(report.samples, 4096);
    assert!(report.min >= 0.0 && report.max < 1.0);
    assert!(report.min <= report.mean && report.mean <= report.max);
    assert!(report.chi_square_applicable());
}

#[test]
fn test_report_is_deterministic() {
    let mut a = create_prng_with(Algorithm::Xorshift64Star, b"same");
    let mut b = create_prng_with(Algorithm::Xorshift64Star, b"same");
    assert_eq!(
        StatsReport::collect(a.as_mut(), 1000).unwrap(),
        StatsReport::collect(b.as_mut(), 1000).unwrap()
    );
}

#[test]
fn test_single_sample_report() {
    let mut rng = create_prng_with(Algorithm::PseudoDes, &[]);
    let report = StatsReport::collect(rng.as_mut(), 1).unwrap();
    assert_eq!(report.min, report.max);
    assert_eq!(report.serial_correlation, 0.0);
}

#[test]
fn test_empty_sample_is_error() {
    let mut rng = create_prng_with(Algorithm::PseudoDes, &[]);
    assert_eq!(
        StatsReport::collect(rng.as_mut(), 0),
        Err(RandomError::EmptySample)
    );
}
