use fftserver::{RealFft, SineCosine, TransformError};

#[test]
fn cosine_is_real_part_of_mirrored_spectrum() {
    let v = [2.0, -1.0, 0.5, 3.0, 1.0];
    let mut sc = SineCosine::<f64>::new();
    let a = sc.cosine(&v);
    assert_eq!(sc.order(), 8);

    let mirrored = [2.0, -1.0, 0.5, 3.0, 1.0, 3.0, 0.5, -1.0];
    let mut rfft = RealFft::<f64>::new();
    let c = rfft.fourier(&mirrored).expect("even length");
    assert_eq!(a.len(), c.len());
    for (x, y) in a.iter().zip(c.iter()) {
        assert!((x - y.re).abs() < 1e-12);
        assert!(y.im.abs() < 1e-12);
    }
}

#[test]
fn sine_is_imaginary_part_of_antisymmetric_spectrum() {
    let v = [1.0, 4.0, -2.0];
    let mut sc = SineCosine::<f64>::new();
    let b = sc.sine(&v);
    assert_eq!(sc.order(), 8);

    let odd = [0.0, 1.0, 4.0, -2.0, 0.0, 2.0, -4.0, -1.0];
    let mut rfft = RealFft::<f64>::new();
    let c = rfft.fourier(&odd).expect("even length");
    assert_eq!(b.len(), 3);
    for (k, x) in b.iter().enumerate() {
        assert!((x - c[k + 1].im).abs() < 1e-12);
        assert!(c[k + 1].re.abs() < 1e-12);
    }
}

#[test]
fn icosine_equals_cosine_bit_for_bit() {
    let mut sc = SineCosine::<f64>::with_order(16).expect("even order");
    let v: Vec<f64> = (0..=8).map(|j| 1.0 / (1.0 + j as f64)).collect();
    let a = sc.cosine(&v);
    let inv = sc.icosine(&a);
    let fwd = sc.cosine(&a);
    assert_eq!(inv.len(), fwd.len());
    for (x, y) in inv.iter().zip(fwd.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
    for (x, o) in inv.iter().zip(v.iter()) {
        assert!((x / 16.0 - o).abs() < 1e-12);
    }
}

#[test]
fn isine_recovers_input_scaled() {
    let mut sc = SineCosine::<f32>::new();
    let v = [0.5f32, -1.5, 2.0, 0.25, 1.0];
    let b = sc.sine(&v);
    let back = sc.isine(&b);
    for (x, o) in back.iter().zip(v.iter()) {
        assert!((x / 12.0 - o).abs() < 1e-4);
    }
}

#[test]
fn odd_order_is_rejected_at_configuration() {
    let err = SineCosine::<f64>::with_order(9).err();
    assert_eq!(err, Some(TransformError::OddOrder(9)));
    let mut sc = SineCosine::<f64>::with_order(0).expect("zero is even");
    assert_eq!(sc.order(), 0);
    assert!(sc.set_order(3).is_err());
    assert!(sc.set_order(10).is_ok());
    assert_eq!(sc.real_engine().order(), 5);
}
