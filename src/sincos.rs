//! Discrete cosine and sine transforms of the first kind.
//!
//! [`SineCosine`] folds its input into a symmetric (cosine) or antisymmetric
//! (sine) real sequence of length `2N`, runs the owned [`RealFft`], and reads
//! back the real or imaginary half-spectrum:
//!
//! ```text
//! cosine: a(k) = v(0) + (-1)^k v(N) + 2 Σ_{j=1}^{N-1} v(j) cos(π j k / N),  k = 0..=N
//! sine:   b(k) = -2 Σ_{j=1}^{N-1} v(j) sin(π j k / N),                       k = 1..N
//! ```
//!
//! Both are their own inverse up to a factor `2N`, so [`SineCosine::icosine`]
//! and [`SineCosine::isine`] simply call the forward transform.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::error::TransformError;
use crate::num::Float;
use crate::rfft::RealFft;

#[derive(Clone, Debug)]
pub struct SineCosine<T: Float> {
    real: RealFft<T>,
    expanded: Vec<T>,
}

impl<T: Float> Default for SineCosine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> SineCosine<T> {
    /// An unconfigured engine (order 0).
    pub fn new() -> Self {
        Self {
            real: RealFft::new(),
            expanded: Vec::new(),
        }
    }

    /// Configured for the real order `order` (= 2N), which must be even.
    pub fn with_order(order: usize) -> Result<Self, TransformError> {
        let mut engine = Self::new();
        engine.set_order(order)?;
        Ok(engine)
    }

    /// The real order `2N`. Cosine inputs hold `N + 1` samples, sine inputs
    /// `N - 1`.
    pub fn order(&self) -> usize {
        self.real.real_len()
    }

    /// The owned real-input engine.
    pub fn real_engine(&self) -> &RealFft<T> {
        &self.real
    }

    /// Reconfigure for the real order `order`. Odd orders are rejected and
    /// leave the current configuration in place.
    pub fn set_order(&mut self, order: usize) -> Result<(), TransformError> {
        if order % 2 != 0 {
            return Err(TransformError::OddOrder(order));
        }
        self.configure(order);
        Ok(())
    }

    /// Cosine coefficients `a(0..=N)` of `v(0..=N)`.
    pub fn cosine(&mut self, v: &[T]) -> Vec<T> {
        if v.is_empty() {
            return Vec::new();
        }
        let n = v.len() - 1;
        self.configure(2 * n);
        trace!("sine/cosine: cosine of {} samples", v.len());

        let mut expanded = core::mem::take(&mut self.expanded);
        expanded.clear();
        expanded.extend_from_slice(&v[..n]);
        expanded.extend(v[1..].iter().rev().copied());
        let spectrum = self.real.half_spectrum(&expanded);
        self.expanded = expanded;
        spectrum.iter().map(|c| c.re).collect()
    }

    /// Sine coefficients `b(1..N)` of `v(1..N)`; `v(0)` and `v(N)` are zero
    /// and not passed.
    pub fn sine(&mut self, v: &[T]) -> Vec<T> {
        let n = v.len() + 1;
        self.configure(2 * n);
        trace!("sine/cosine: sine of {} samples", v.len());

        let mut expanded = core::mem::take(&mut self.expanded);
        expanded.clear();
        expanded.push(T::zero());
        expanded.extend_from_slice(v);
        expanded.push(T::zero());
        expanded.extend(v.iter().rev().map(|&x| -x));
        let spectrum = self.real.half_spectrum(&expanded);
        self.expanded = expanded;
        spectrum[1..n].iter().map(|c| c.im).collect()
    }

    /// Inverse cosine transform: the forward transform again, scaled by `2N`.
    pub fn icosine(&mut self, a: &[T]) -> Vec<T> {
        self.cosine(a)
    }

    /// Inverse sine transform: the forward transform again, scaled by `2N`.
    pub fn isine(&mut self, b: &[T]) -> Vec<T> {
        self.sine(b)
    }

    /// Adopt an order derived from an input length. Always even.
    fn configure(&mut self, order: usize) {
        if order != self.order() {
            debug!("sine/cosine: order {} -> {}", self.order(), order);
        }
        self.real.set_order(order / 2);
    }
}
