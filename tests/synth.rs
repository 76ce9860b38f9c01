// Test intent: verifies input synthesis determinism and waveform shape.
use numkern::synth::{sgn, square_wave};
use numkern::KernelError;

#[test]
fn synthesis_is_bit_for_bit_deterministic() {
    let a = square_wave::<f64>(5000).unwrap();
    let b = square_wave::<f64>(5000).unwrap();
    assert_eq!(a.re(), b.re());
    assert_eq!(a.im(), b.im());
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn samples_follow_closed_form() {
    let n = 4;
    let s = square_wave::<f64>(n).unwrap();
    for i in 0..n {
        let x = (2.0 * std::f64::consts::PI / n as f64) * i as f64;
        let re = sgn((x + 1.0).sin()) + x.cos();
        let im = sgn((x + 1.0).cos()) + x.sin();
        assert!((s.re()[i] - re).abs() < 1e-12, "re[{i}]");
        assert!((s.im()[i] - im).abs() < 1e-12, "im[{i}]");
    }
}

#[test]
fn sign_component_only_takes_three_values() {
    let n = 360;
    let s = square_wave::<f64>(n).unwrap();
    for i in 0..n {
        let x = (2.0 * std::f64::consts::PI / n as f64) * i as f64;
        let step = s.re()[i] - x.cos();
        assert!(
            [-1.0, 0.0, 1.0].iter().any(|v| (step - v).abs() < 1e-9),
            "unexpected sign component {step} at {i}"
        );
    }
}

#[test]
fn empty_signal_is_rejected() {
    assert_eq!(square_wave::<f32>(0).unwrap_err(), KernelError::EmptyInput);
}
