// Test intent: property checks for index arithmetic, coefficients and the seeded DFT.
use numkern::dft::{dft_vec, modular_index};
use numkern::twiddle::roots_of_unity;
use numkern::Signal;
use proptest::prelude::*;

proptest! {
    #[test]
    fn modular_index_in_range_and_symmetric(len in 1usize..10_000, a in 0usize..10_000, b in 0usize..10_000) {
        let (n, k) = (a % len, b % len);
        let p = modular_index(n, k, len);
        prop_assert!(p < len);
        prop_assert_eq!(p, modular_index(k, n, len));
        prop_assert_eq!(p, (n * k) % len);
    }

    #[test]
    fn coefficients_unit_magnitude(len in 1usize..512) {
        let table = roots_of_unity::<f64>(len).unwrap();
        for i in 0..len {
            let (re, im) = table.get(i);
            prop_assert!((re * re + im * im - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn bin_zero_is_seed_plus_total(values in prop::collection::vec((-8.0f64..8.0, -8.0f64..8.0), 1..48)) {
        let (re, im): (Vec<f64>, Vec<f64>) = values.into_iter().unzip();
        let n = re.len();
        let input = Signal::new(re.clone(), im.clone()).unwrap();
        let out = dft_vec(&input, &roots_of_unity(n).unwrap()).unwrap();
        // p = 0 for every n when k = 0, so W = (1, -0)
        let total_re: f64 = re.iter().sum();
        let total_im: f64 = im.iter().sum();
        prop_assert!((out.re()[0] - re[0] - total_re).abs() < 1e-9);
        prop_assert!((out.im()[0] - im[0] - total_im).abs() < 1e-9);
    }
}
