//! Mixed-radix complex FFT engine.
//!
//! [`ComplexFft`] computes the un-normalized pair
//!
//! ```text
//! fourier:  A(n) = Σ_j x(j) · exp(-2πi·n·j/N)
//! ifourier: x(j) = Σ_n A(n) · exp(+2πi·n·j/N)
//! ```
//!
//! so `ifourier(fourier(x)) == N·x`. Any `N` is accepted: the length is split
//! into radices (see [`factorize`]), each level is solved recursively by
//! decimation in time, and partial results are combined with roots read from
//! the engine's [`WeightTable`]. A prime leaf falls back to direct O(p²)
//! summation.
//!
//! The engine caches the radix plan and the weight table for one order at a
//! time. A call with a different input length reconfigures it first.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::num::{Complex, Float};
use crate::weights::WeightTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `exp(-2πi·n·j/N)` kernel.
    Forward,
    /// `exp(+2πi·n·j/N)` kernel, no `1/N` scaling.
    Inverse,
}

/// Split `n` into the radices used by the recursion, outermost first.
///
/// Factors of 4 come first, then at most one 2, then 3 and 5, then odd trial
/// divisors. A leftover prime is kept as a single radix and transformed
/// directly. `0` and `1` have no factors.
pub fn factorize(mut n: usize) -> Vec<usize> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }
    while n % 4 == 0 {
        factors.push(4);
        n /= 4;
    }
    for &p in &[2, 3, 5] {
        while n % p == 0 {
            factors.push(p);
            n /= p;
        }
    }
    let mut f = 7;
    while f * f <= n {
        while n % f == 0 {
            factors.push(f);
            n /= f;
        }
        f += 2;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

#[inline(always)]
fn butterfly4<T: Float>(
    a: Complex<T>,
    b: Complex<T>,
    c: Complex<T>,
    d: Complex<T>,
    direction: Direction,
) -> (Complex<T>, Complex<T>, Complex<T>, Complex<T>) {
    let t0 = a + c;
    let t1 = a - c;
    let t2 = b + d;
    let t3 = match direction {
        Direction::Forward => (b - d).mul_neg_i(),
        Direction::Inverse => (b - d).mul_i(),
    };
    (t0 + t2, t1 + t3, t0 - t2, t1 - t3)
}

/// Borrowed view of a configured plan. Holds no scratch of its own, so one
/// kernel can be shared by several workers.
pub(crate) struct Kernel<'a, T: Float> {
    weights: &'a WeightTable<T>,
    factors: &'a [usize],
    direction: Direction,
}

impl<'a, T: Float> Kernel<'a, T> {
    /// `w_m^e` in the kernel's direction.
    #[inline(always)]
    fn root(&self, e: usize, m: usize) -> Complex<T> {
        let w = self.weights.root(e, m);
        match self.direction {
            Direction::Forward => w,
            Direction::Inverse => w.conj(),
        }
    }

    /// Transform `data` in place. Its length must equal the plan's order.
    pub(crate) fn process(
        &self,
        data: &mut [Complex<T>],
        scratch: &mut Vec<Complex<T>>,
        acc: &mut Vec<Complex<T>>,
    ) {
        debug_assert_eq!(data.len(), self.weights.order());
        if data.len() <= 1 {
            return;
        }
        scratch.clear();
        scratch.extend_from_slice(data);
        self.run(&scratch[..], 0, 1, data, 0, acc);
    }

    /// Transform the sequence `input[offset + stride * j]`, `j = 0..out.len()`,
    /// into `out`.
    fn run(
        &self,
        input: &[Complex<T>],
        offset: usize,
        stride: usize,
        out: &mut [Complex<T>],
        depth: usize,
        acc: &mut Vec<Complex<T>>,
    ) {
        let n = out.len();
        if n == 1 {
            out[0] = input[offset];
            return;
        }
        let p = self.factors[depth];
        if p == n && p != 2 && p != 4 {
            self.direct(input, offset, stride, out);
            return;
        }
        let m = n / p;
        for (r, sub) in out.chunks_exact_mut(m).enumerate() {
            self.run(input, offset + r * stride, stride * p, sub, depth + 1, acc);
        }
        match p {
            2 => self.combine2(out, m),
            4 => self.combine4(out, m),
            _ => self.combine(out, p, m, acc),
        }
    }

    /// O(n²) summation for a prime leaf.
    fn direct(&self, input: &[Complex<T>], offset: usize, stride: usize, out: &mut [Complex<T>]) {
        let n = out.len();
        for (q, o) in out.iter_mut().enumerate() {
            let mut sum = Complex::zero();
            let mut e = 0usize;
            for j in 0..n {
                sum += input[offset + stride * j] * self.root(e, n);
                e += q;
                if e >= n {
                    e -= n;
                }
            }
            *o = sum;
        }
    }

    fn combine2(&self, out: &mut [Complex<T>], m: usize) {
        let n = 2 * m;
        let (lo, hi) = out.split_at_mut(m);
        for (k, (a, b)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let t = *b * self.root(k, n);
            let u = *a;
            *a = u + t;
            *b = u - t;
        }
    }

    fn combine4(&self, out: &mut [Complex<T>], m: usize) {
        let n = 4 * m;
        for k in 0..m {
            let a = out[k];
            let b = out[m + k] * self.root(k, n);
            let c = out[2 * m + k] * self.root(2 * k, n);
            let d = out[3 * m + k] * self.root(3 * k, n);
            let (x0, x1, x2, x3) = butterfly4(a, b, c, d, self.direction);
            out[k] = x0;
            out[m + k] = x1;
            out[2 * m + k] = x2;
            out[3 * m + k] = x3;
        }
    }

    /// Radix-`p` combine for any `p`: twiddle each partial result, then take
    /// a length-`p` DFT across the partial results.
    fn combine(&self, out: &mut [Complex<T>], p: usize, m: usize, acc: &mut Vec<Complex<T>>) {
        let n = p * m;
        acc.clear();
        acc.resize(p, Complex::zero());
        for k in 0..m {
            for (r, t) in acc.iter_mut().enumerate() {
                *t = out[r * m + k] * self.root(r * k, n);
            }
            for q in 0..p {
                let mut sum = Complex::zero();
                for (r, &t) in acc.iter().enumerate() {
                    sum += t * self.root(r * q, p);
                }
                out[q * m + k] = sum;
            }
        }
    }
}

/// One-dimensional complex FFT engine with a cached per-order plan.
#[derive(Clone, Debug)]
pub struct ComplexFft<T: Float> {
    order: usize,
    factors: Vec<usize>,
    weights: WeightTable<T>,
    scratch: Vec<Complex<T>>,
    acc: Vec<Complex<T>>,
}

impl<T: Float> Default for ComplexFft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ComplexFft<T> {
    /// An unconfigured engine (order 0).
    pub fn new() -> Self {
        Self {
            order: 0,
            factors: Vec::new(),
            weights: WeightTable::empty(),
            scratch: Vec::new(),
            acc: Vec::new(),
        }
    }

    pub fn with_order(n: usize) -> Self {
        let mut fft = Self::new();
        fft.set_order(n);
        fft
    }

    pub fn order(&self) -> usize {
        self.order
    }

    /// Radices of the current plan, outermost first.
    pub fn factors(&self) -> &[usize] {
        &self.factors
    }

    pub fn weights(&self) -> &WeightTable<T> {
        &self.weights
    }

    /// Reconfigure for length `n`. A no-op when `n` is already the order.
    pub fn set_order(&mut self, n: usize) {
        if n == self.order && self.weights.order() == n {
            return;
        }
        let factors = factorize(n);
        debug!(
            "complex fft: order {} -> {} (radices {:?})",
            self.order, n, factors
        );
        self.weights = WeightTable::compute(n);
        self.factors = factors;
        self.order = n;
    }

    pub fn fourier(&mut self, x: &[Complex<T>]) -> Vec<Complex<T>> {
        let mut out = x.to_vec();
        self.transform(&mut out, Direction::Forward);
        out
    }

    pub fn ifourier(&mut self, a: &[Complex<T>]) -> Vec<Complex<T>> {
        let mut out = a.to_vec();
        self.transform(&mut out, Direction::Inverse);
        out
    }

    pub fn fourier_in_place(&mut self, data: &mut [Complex<T>]) {
        self.transform(data, Direction::Forward);
    }

    pub fn ifourier_in_place(&mut self, data: &mut [Complex<T>]) {
        self.transform(data, Direction::Inverse);
    }

    /// Forward-transform every row, reconfiguring whenever the length changes.
    pub fn fourier_batch(&mut self, rows: &mut [Vec<Complex<T>>]) {
        for row in rows.iter_mut() {
            self.transform(row, Direction::Forward);
        }
    }

    pub fn ifourier_batch(&mut self, rows: &mut [Vec<Complex<T>>]) {
        for row in rows.iter_mut() {
            self.transform(row, Direction::Inverse);
        }
    }

    /// Transform `data` in place, first adopting `data.len()` as the order.
    pub fn transform(&mut self, data: &mut [Complex<T>], direction: Direction) {
        self.set_order(data.len());
        trace!("complex fft: {:?} length {}", direction, data.len());
        let mut scratch = core::mem::take(&mut self.scratch);
        let mut acc = core::mem::take(&mut self.acc);
        self.kernel(direction).process(data, &mut scratch, &mut acc);
        self.scratch = scratch;
        self.acc = acc;
    }

    pub(crate) fn kernel(&self, direction: Direction) -> Kernel<'_, T> {
        Kernel {
            weights: &self.weights,
            factors: &self.factors,
            direction,
        }
    }
}

/// One-shot forward transform with a throwaway engine.
pub fn fourier<T: Float>(x: &[Complex<T>]) -> Vec<Complex<T>> {
    ComplexFft::new().fourier(x)
}

/// One-shot inverse transform with a throwaway engine.
pub fn ifourier<T: Float>(a: &[Complex<T>]) -> Vec<Complex<T>> {
    ComplexFft::new().ifourier(a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn naive(x: &[Complex64], sign: f64) -> Vec<Complex64> {
        let n = x.len();
        (0..n)
            .map(|k| {
                let mut sum = Complex64::zero();
                for (j, &v) in x.iter().enumerate() {
                    let angle = sign * 2.0 * core::f64::consts::PI * ((j * k) % n) as f64 / n as f64;
                    sum += v * Complex64::expi(angle);
                }
                sum
            })
            .collect()
    }

    fn random(n: usize, seed: u64) -> Vec<Complex64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
            .collect()
    }

    fn max_err(a: &[Complex64], b: &[Complex64]) -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x.re - y.re).abs().max((x.im - y.im).abs()))
            .fold(0.0, f64::max)
    }

    #[test]
    fn factorize_prefers_fours() {
        assert_eq!(factorize(0), Vec::<usize>::new());
        assert_eq!(factorize(1), Vec::<usize>::new());
        assert_eq!(factorize(2), vec![2]);
        assert_eq!(factorize(8), vec![4, 2]);
        assert_eq!(factorize(64), vec![4, 4, 4]);
        assert_eq!(factorize(360), vec![4, 2, 3, 3, 5]);
        assert_eq!(factorize(7 * 7 * 11), vec![7, 7, 11]);
        assert_eq!(factorize(101), vec![101]);
    }

    #[test]
    fn factors_multiply_back() {
        for n in 2..500usize {
            assert_eq!(factorize(n).iter().product::<usize>(), n);
        }
    }

    #[test]
    fn matches_naive_dft_for_every_small_length() {
        let mut fft = ComplexFft::<f64>::new();
        for n in 1..=64 {
            let x = random(n, n as u64);
            let got = fft.fourier(&x);
            let want = naive(&x, -1.0);
            assert!(max_err(&got, &want) < 1e-12, "n={}", n);
            let got = fft.ifourier(&x);
            let want = naive(&x, 1.0);
            assert!(max_err(&got, &want) < 1e-12, "inverse n={}", n);
        }
    }

    #[test]
    fn matches_naive_dft_for_composite_and_prime_lengths() {
        let mut fft = ComplexFft::<f64>::new();
        for &n in &[97usize, 121, 210, 360, 1000, 1024, 7 * 7 * 11] {
            let x = random(n, 7);
            let got = fft.fourier(&x);
            let want = naive(&x, -1.0);
            assert!(max_err(&got, &want) < 1e-9, "n={}", n);
        }
    }

    #[test]
    fn prime_length_constant_is_an_impulse() {
        let mut fft = ComplexFft::<f64>::new();
        let x = vec![Complex64::new(1.0, 0.0); 5];
        let a = fft.fourier(&x);
        assert_eq!(fft.factors(), &[5]);
        assert!((a[0].re - 5.0).abs() < 1e-12);
        assert!(a[0].im.abs() < 1e-12);
        for c in &a[1..] {
            assert!(c.re.abs() < 1e-12 && c.im.abs() < 1e-12);
        }
    }

    #[test]
    fn roundtrip_scales_by_length() {
        let mut fft = ComplexFft::<f64>::new();
        for &n in &[3usize, 16, 30, 49] {
            let x = random(n, 11);
            let a = fft.fourier(&x);
            let back = fft.ifourier(&a);
            let scaled: Vec<Complex64> = x.iter().map(|c| c.scale(n as f64)).collect();
            assert!(max_err(&back, &scaled) < 1e-10 * n as f64, "n={}", n);
        }
    }

    #[test]
    fn empty_and_single_inputs() {
        let mut fft = ComplexFft::<f32>::new();
        assert!(fft.fourier(&[]).is_empty());
        assert_eq!(fft.order(), 0);
        let one = [crate::num::Complex32::new(3.0, -4.0)];
        assert_eq!(fft.fourier(&one), one.to_vec());
        assert_eq!(fft.ifourier(&one), one.to_vec());
        assert_eq!(fft.order(), 1);
    }

    #[test]
    fn reconfigures_when_length_changes() {
        let mut fft = ComplexFft::<f64>::with_order(8);
        assert_eq!(fft.order(), 8);
        let _ = fft.fourier(&random(12, 1));
        assert_eq!(fft.order(), 12);
        assert_eq!(fft.weights().len(), 12);
        let _ = fft.fourier(&random(5, 2));
        assert_eq!(fft.order(), 5);
        assert_eq!(fft.weights().order(), 5);
    }

    #[test]
    fn set_order_is_idempotent() {
        let mut fft = ComplexFft::<f64>::new();
        fft.set_order(48);
        let ptr = fft.weights().as_slice().as_ptr();
        fft.set_order(48);
        assert_eq!(fft.weights().as_slice().as_ptr(), ptr);
        let x = random(48, 3);
        let a = fft.fourier(&x);
        let b = ComplexFft::with_order(48).fourier(&x);
        assert_eq!(a, b);
    }

    #[test]
    fn in_place_matches_allocating() {
        let mut fft = ComplexFft::<f64>::new();
        let x = random(60, 5);
        let mut data = x.clone();
        fft.fourier_in_place(&mut data);
        assert_eq!(data, fft.fourier(&x));
        let spectrum = data.clone();
        fft.ifourier_in_place(&mut data);
        assert_eq!(data, fft.ifourier(&spectrum));
    }

    #[test]
    fn batch_handles_mixed_lengths() {
        let mut fft = ComplexFft::<f64>::new();
        let mut rows = vec![random(4, 1), random(9, 2), random(4, 3)];
        let want: Vec<Vec<Complex64>> = rows.iter().map(|r| naive(r, -1.0)).collect();
        fft.fourier_batch(&mut rows);
        for (got, want) in rows.iter().zip(want.iter()) {
            assert!(max_err(got, want) < 1e-12);
        }
        fft.ifourier_batch(&mut rows);
        assert_eq!(fft.order(), 4);
    }

    #[test]
    fn one_shot_helpers() {
        let x = random(6, 9);
        assert!(max_err(&fourier(&x), &naive(&x, -1.0)) < 1e-12);
        assert!(max_err(&ifourier(&x), &naive(&x, 1.0)) < 1e-12);
    }
}
