use fftserver::{Complex64, ComplexFft, RealFft, TransformError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_real(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-5.0..5.0)).collect()
}

#[test]
fn four_point_sequence_has_exact_half_spectrum() {
    let mut rfft = RealFft::<f64>::new();
    let c = rfft
        .fourier(&[1.0, 0.0, -1.0, 0.0])
        .expect("even length");
    assert_eq!(
        c,
        vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 0.0)
        ]
    );
    assert_eq!(rfft.order(), 2);
}

// The half-spectrum must agree with the lower half of the full complex DFT.
#[test]
fn agrees_with_complex_engine() {
    let mut rfft = RealFft::<f64>::new();
    let mut fft = ComplexFft::<f64>::new();
    for &len in &[6usize, 18, 50, 128, 202] {
        let v = random_real(len, len as u64);
        let half = rfft.fourier(&v).expect("even length");
        let full: Vec<Complex64> = v.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        let full = fft.fourier(&full);
        assert_eq!(half.len(), len / 2 + 1);
        for (k, h) in half.iter().enumerate() {
            assert!((h.re - full[k].re).abs() < 1e-9, "len={} k={}", len, k);
            assert!((h.im - full[k].im).abs() < 1e-9, "len={} k={}", len, k);
        }
    }
}

#[test]
fn end_bins_are_exactly_real() {
    let mut rfft = RealFft::<f32>::new();
    for len in (2..80).step_by(2) {
        let v: Vec<f32> = (0..len).map(|i| (i as f32 * 1.3).sin() * 4.0).collect();
        let c = rfft.fourier(&v).expect("even length");
        assert_eq!(c[0].im, 0.0);
        assert_eq!(c[len / 2].im, 0.0);
    }
}

#[test]
fn odd_input_is_an_error() {
    let mut rfft = RealFft::<f64>::new();
    let err = rfft.fourier(&[0.0; 9]).unwrap_err();
    assert_eq!(err, TransformError::OddLength(9));
    assert_eq!(err.to_string(), "real input length must be even, got 9");
    // A failed call leaves the engine usable.
    assert!(rfft.fourier(&[0.0; 8]).is_ok());
    assert_eq!(rfft.real_len(), 8);
}

#[test]
fn roundtrip_is_scaled_by_real_length() {
    let mut rfft = RealFft::<f64>::with_order(21);
    let v = random_real(42, 8);
    let c = rfft.fourier(&v).expect("even length");
    let back = rfft.ifourier(&c);
    for (b, x) in back.iter().zip(v.iter()) {
        assert!((b - 42.0 * x).abs() < 1e-9);
    }
}
