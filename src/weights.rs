//! Precomputed roots of unity ("weights" or twiddle factors).
//!
//! A [`WeightTable`] of order `n` stores `exp(-2πi k / n)` for `k = 0..n`.
//! Every sub-transform of length `m` dividing `n` reads its own roots out of
//! the same table with stride `n / m`, so a single table serves the whole
//! mixed-radix recursion. Inverse transforms use the conjugates.

use alloc::vec::Vec;

use crate::num::{Complex, Float};

/// Entries between exact `sin_cos` evaluations. The rotation recurrence in
/// between drifts by at most a few ulps over this many steps.
const ANCHOR_INTERVAL: usize = 8;

/// `exp(-2πi k / len)` for `k = 0..count`, `count <= len`.
///
/// The first half of the circle is generated with an anchored rotation
/// recurrence in `f64`; the second half mirrors it, so
/// `w[len - k] == conj(w[k])` holds exactly.
fn circle<T: Float>(len: usize, count: usize) -> Vec<Complex<T>> {
    debug_assert!(count <= len);
    let mut table: Vec<Complex<T>> = Vec::with_capacity(count);
    if count == 0 {
        return table;
    }
    let direct = core::cmp::min(count, len / 2 + 1);
    let len_f = len as f64;
    let step = -2.0 * core::f64::consts::PI / len_f;
    let (sin_step, cos_step) = libm::sincos(step);
    let mut w_re = 1.0f64;
    let mut w_im = 0.0f64;
    for k in 0..direct {
        if k % ANCHOR_INTERVAL == 0 {
            let (s, c) = libm::sincos(-2.0 * core::f64::consts::PI * (k as f64) / len_f);
            w_re = c;
            w_im = s;
        }
        table.push(Complex::new(T::from_f64(w_re), T::from_f64(w_im)));
        let tmp = w_re;
        w_re = w_re * cos_step - w_im * sin_step;
        w_im = w_im * cos_step + tmp * sin_step;
    }
    for k in direct..count {
        let mirrored = table[len - k].conj();
        table.push(mirrored);
    }
    table
}

/// The full circle of `n` roots, `exp(-2πi k / n)` for `k = 0..n`.
pub fn unit_roots<T: Float>(n: usize) -> Vec<Complex<T>> {
    circle(n, n)
}

/// The upper half circle, `exp(-πi k / n)` for `k = 0..n`.
///
/// These are the roots of order `2n` that a real-input transform of `2n`
/// samples needs to separate its even and odd halves.
pub fn half_turn_roots<T: Float>(n: usize) -> Vec<Complex<T>> {
    circle(2 * n, n)
}

/// Roots of unity for one transform order, owned by the engine that built it.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable<T: Float> {
    order: usize,
    roots: Vec<Complex<T>>,
}

impl<T: Float> Default for WeightTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Float> WeightTable<T> {
    /// The table of an unconfigured engine (order 0).
    pub fn empty() -> Self {
        Self {
            order: 0,
            roots: Vec::new(),
        }
    }

    pub fn compute(n: usize) -> Self {
        Self {
            order: n,
            roots: unit_roots(n),
        }
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn as_slice(&self) -> &[Complex<T>] {
        &self.roots
    }

    /// `exp(-2πi e / m)` for a sub-length `m` dividing the table order.
    #[inline(always)]
    pub fn root(&self, e: usize, m: usize) -> Complex<T> {
        debug_assert!(m != 0 && self.order % m == 0);
        self.roots[(e % m) * (self.order / m)]
    }
}
