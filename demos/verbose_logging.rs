//! Runs every engine once with debug/trace logging enabled.
//!
//! `RUST_LOG=trace cargo run --example verbose_logging` also shows the
//! per-call trace lines.
use fftserver::{Complex64, ComplexFft, ComplexFft2d, Matrix, RealFft, SineCosine};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .parse_default_env()
        .init();

    let mut fft = ComplexFft::<f64>::new();
    let x: Vec<Complex64> = (0..12).map(|i| Complex64::new(i as f64, 0.0)).collect();
    let a = fft.fourier(&x);
    let _ = fft.ifourier(&a);
    // Different length: the engine reconfigures.
    let _ = fft.fourier(&[Complex64::new(1.0, 0.0); 7]);

    let mut fft2 = ComplexFft2d::<f64>::new();
    let m = Matrix::new(4, 6, Complex64::new(1.0, 0.0));
    let _ = fft2.fourier(&m);

    let mut rfft = RealFft::<f64>::new();
    match rfft.fourier(&[1.0, 0.0, -1.0, 0.0]) {
        Ok(c) => println!("half-spectrum: {:?}", c),
        Err(e) => eprintln!("real fft failed: {}", e),
    }
    if let Err(e) = rfft.fourier(&[1.0, 2.0, 3.0]) {
        eprintln!("expected failure: {}", e);
    }

    let mut sc = SineCosine::<f64>::new();
    let coeffs = sc.cosine(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    println!("cosine coefficients: {:?}", coeffs);
    println!("sine coefficients: {:?}", sc.sine(&[1.0, 2.0, 3.0]));
}
