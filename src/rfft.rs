//! Real-input FFT built on a half-length complex transform.
//!
//! A real sequence `v` of length `2N` is packed into `N` complex samples
//! (`z[j] = v[2j] + i·v[2j+1]`), transformed by the owned [`ComplexFft`], and
//! unmixed into the half-spectrum `C(0..=N)` with one table of `N` roots of
//! order `2N`. `C(0)` and `C(N)` are assembled from real parts only, so their
//! imaginary parts are exactly zero.
//!
//! The pair is un-normalized: `ifourier(fourier(v)) == 2N·v`.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::TransformError;
use crate::fft::ComplexFft;
use crate::num::{Complex, Float};
use crate::weights::half_turn_roots;

/// Real samples per packed complex value.
pub const STRIDE: usize = 2;

#[derive(Clone, Debug)]
pub struct RealFft<T: Float> {
    /// Half the real length.
    order: usize,
    fft: ComplexFft<T>,
    /// `exp(-πi k / N)` for `k = 0..N`.
    twiddles: Vec<Complex<T>>,
    packed: Vec<Complex<T>>,
}

impl<T: Float> Default for RealFft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RealFft<T> {
    /// An unconfigured engine (order 0).
    pub fn new() -> Self {
        Self {
            order: 0,
            fft: ComplexFft::new(),
            twiddles: Vec::new(),
            packed: Vec::new(),
        }
    }

    /// Configured for real inputs of length `2 * n`.
    pub fn with_order(n: usize) -> Self {
        let mut rfft = Self::new();
        rfft.set_order(n);
        rfft
    }

    /// `N`, half the real input length.
    pub fn order(&self) -> usize {
        self.order
    }

    /// `2N`, the real input length.
    pub fn real_len(&self) -> usize {
        STRIDE * self.order
    }

    /// The owned half-length complex engine.
    pub fn complex_engine(&self) -> &ComplexFft<T> {
        &self.fft
    }

    /// Reconfigure for real inputs of length `2 * n`. A no-op when `n` is
    /// already the order.
    pub fn set_order(&mut self, n: usize) {
        if n == self.order && self.twiddles.len() == n && self.fft.order() == n {
            return;
        }
        debug!("real fft: order {} -> {} (real length {})", self.order, n, STRIDE * n);
        self.fft.set_order(n);
        self.twiddles = half_turn_roots(n);
        self.order = n;
    }

    /// Half-spectrum `C(0..=N)` of the real sequence `v` of length `2N`.
    ///
    /// Fails with [`TransformError::OddLength`] before touching the engine
    /// state when `v.len()` is odd.
    pub fn fourier(&mut self, v: &[T]) -> Result<Vec<Complex<T>>, TransformError> {
        if v.len() % STRIDE != 0 {
            return Err(TransformError::OddLength(v.len()));
        }
        Ok(self.half_spectrum(v))
    }

    /// Real sequence of length `2N` from the half-spectrum `c` of length
    /// `N + 1`, scaled by `2N`. The imaginary parts of `c[0]` and `c[N]` are
    /// ignored. Inputs shorter than two bins give an empty sequence.
    pub fn ifourier(&mut self, c: &[Complex<T>]) -> Vec<T> {
        if c.len() < 2 {
            return Vec::new();
        }
        let n = c.len() - 1;
        self.set_order(n);
        trace!("real fft: inverse length {}", STRIDE * n);

        let mut packed = core::mem::take(&mut self.packed);
        packed.clear();
        let (first, last) = (c[0].re, c[n].re);
        packed.push(Complex::new(first + last, first - last));
        for k in 1..n {
            let a = c[k];
            let b = c[n - k].conj();
            let sum = a + b;
            let diff = a - b;
            packed.push(sum + (self.twiddles[k].conj() * diff).mul_i());
        }
        self.fft.ifourier_in_place(&mut packed);

        let mut out = Vec::with_capacity(STRIDE * n);
        for z in &packed {
            out.push(z.re);
            out.push(z.im);
        }
        self.packed = packed;
        out
    }

    /// Forward transform of an even-length `v`.
    pub(crate) fn half_spectrum(&mut self, v: &[T]) -> Vec<Complex<T>> {
        debug_assert!(v.len() % STRIDE == 0);
        let n = v.len() / STRIDE;
        self.set_order(n);
        trace!("real fft: forward length {}", v.len());

        let mut out = Vec::with_capacity(n + 1);
        if n == 0 {
            out.push(Complex::zero());
            return out;
        }

        let mut packed = core::mem::take(&mut self.packed);
        packed.clear();
        packed.extend(v.chunks_exact(STRIDE).map(|p| Complex::new(p[0], p[1])));
        self.fft.fourier_in_place(&mut packed);

        let half = T::from_f64(0.5);
        let z0 = packed[0];
        out.push(Complex::from_re(z0.re + z0.im));
        for k in 1..n {
            let a = packed[k];
            let b = packed[n - k].conj();
            let sum = a + b;
            let diff = a - b;
            out.push((sum + (self.twiddles[k] * diff).mul_neg_i()) * half);
        }
        out.push(Complex::from_re(z0.re - z0.im));
        self.packed = packed;
        out
    }
}
