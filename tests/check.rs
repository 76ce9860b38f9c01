// Test intent: verifies norm reduction, tolerance predicates and region metadata.
use numkern::check::{check, l2_norm, Tolerance, Verdict};
use numkern::region::Region;
use numkern::{KernelError, Scenario};

#[test]
fn norm_of_pythagorean_triple() {
    assert_eq!(l2_norm(&[3.0f64, 4.0]), 5.0);
    assert_eq!(l2_norm::<f32>(&[]), 0.0);
}

#[test]
fn absolute_tolerance_classifies() {
    let tol = Tolerance::Absolute(5e-6);
    assert_eq!(check(10.000004, 10.0, tol), Ok(Verdict::Pass));
    assert_eq!(check(10.00001, 10.0, tol), Ok(Verdict::Fail));
    assert_eq!(check(9.99999, 10.0, tol), Ok(Verdict::Fail));
}

#[test]
fn relative_tolerance_scales_with_reference() {
    let tol = Tolerance::Relative(1e-3);
    assert_eq!(check(1000.5, 1000.0, tol), Ok(Verdict::Pass));
    assert_eq!(check(1001.5, 1000.0, tol), Ok(Verdict::Fail));
}

#[test]
fn invalid_tolerance_is_an_error() {
    assert_eq!(
        check(1.0, 1.0, Tolerance::Absolute(-1.0)),
        Err(KernelError::InvalidValue)
    );
    assert_eq!(
        check(1.0, 1.0, Tolerance::Relative(f64::INFINITY)),
        Err(KernelError::InvalidValue)
    );
}

#[test]
fn scenario_regions_declare_outputs() {
    let dft = Scenario::Dft.region();
    assert_eq!(dft, Region::new("dft", "norm", Tolerance::Absolute(5e-6)));
    assert_eq!(Scenario::Axpy.region().output, "y[0]");
    let series = Scenario::Series.region().to_string();
    assert!(series.starts_with("begin sum2pi_x\n"));
    assert!(series.contains("output sum 5e-7*reference"));
    assert!(series.ends_with("end sum2pi_x"));
}
