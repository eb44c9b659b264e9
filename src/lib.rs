//! # fftserver - order-caching discrete Fourier transform engines
//!
//! A small family of transform "servers". Each engine caches the plan (radix
//! decomposition and roots of unity) for one transform length, reuses it for
//! every call of that length, and reconfigures itself when a call arrives
//! with a different length.
//!
//! - [`ComplexFft`]: 1-D mixed-radix complex FFT for any length, with a direct
//!   O(p²) fallback for prime factors.
//! - [`ComplexFft2d`]: separable 2-D transform owning a row engine and a
//!   column engine.
//! - [`RealFft`]: real input of length `2N` through a complex transform of
//!   length `N`, returning the half-spectrum `C(0..=N)`.
//! - [`SineCosine`]: discrete cosine and sine transforms on top of [`RealFft`].
//!
//! All transform pairs are un-normalized: the inverse of the forward transform
//! returns the input scaled by the transform length.
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`TransformError`]
//! - `parallel`: spread large 2-D transforms across Rayon workers
//!   (see [`config`])
//!
//! ## Example
//!
//! ```
//! use fftserver::{Complex64, ComplexFft, RealFft};
//!
//! let mut fft = ComplexFft::<f64>::new();
//! let spectrum = fft.fourier(&[Complex64::new(1.0, 0.0); 5]);
//! assert!((spectrum[0].re - 5.0).abs() < 1e-12);
//!
//! let mut rfft = RealFft::<f64>::new();
//! let half = rfft.fourier(&[1.0, 0.0, -1.0, 0.0]).unwrap();
//! assert_eq!(half[1].re, 2.0);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Floating-point trait and complex value type.
pub mod num;

/// Row-major matrix container for the 2-D engine.
pub mod matrix;

pub mod error;

/// Roots of unity shared by the transform recursion.
pub mod weights;

/// Mixed-radix 1-D complex FFT.
pub mod fft;

/// Separable 2-D complex FFT.
pub mod fft2d;

/// Real-input FFT producing the half-spectrum.
pub mod rfft;

/// Discrete sine and cosine transforms.
pub mod sincos;

/// Threshold configuration for the parallel 2-D path.
#[cfg(feature = "parallel")]
pub mod config;

pub use error::TransformError;
pub use fft::{factorize, fourier, ifourier, ComplexFft, Direction};
pub use fft2d::ComplexFft2d;
pub use matrix::Matrix;
pub use num::{Complex, Complex32, Complex64, Float};
pub use rfft::RealFft;
pub use sincos::SineCosine;
pub use weights::WeightTable;
