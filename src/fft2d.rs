//! Separable two-dimensional FFT.
//!
//! [`ComplexFft2d`] owns two independent [`ComplexFft`] engines: one sized for
//! the row length (number of columns) and one sized for the column length
//! (number of rows). A transform runs every row through the first engine, then
//! every column of the result through the second. Like the 1-D pair the
//! inverse is un-normalized: `ifourier(fourier(X)) == rows·cols·X`.

use alloc::vec;

use log::trace;

use crate::fft::{ComplexFft, Direction};
use crate::matrix::Matrix;
use crate::num::{Complex, Float};

#[derive(Clone, Debug)]
pub struct ComplexFft2d<T: Float> {
    /// Transforms each row; order = number of columns.
    row_fft: ComplexFft<T>,
    /// Transforms each column; order = number of rows.
    column_fft: ComplexFft<T>,
}

impl<T: Float> Default for ComplexFft2d<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ComplexFft2d<T> {
    /// An unconfigured engine (0 x 0).
    pub fn new() -> Self {
        Self {
            row_fft: ComplexFft::new(),
            column_fft: ComplexFft::new(),
        }
    }

    pub fn with_shape(rows: usize, cols: usize) -> Self {
        Self {
            row_fft: ComplexFft::with_order(cols),
            column_fft: ComplexFft::with_order(rows),
        }
    }

    pub fn rows(&self) -> usize {
        self.column_fft.order()
    }

    pub fn cols(&self) -> usize {
        self.row_fft.order()
    }

    /// Reconfigure for `m` rows, i.e. columns of length `m`.
    pub fn set_rows(&mut self, m: usize) {
        self.column_fft.set_order(m);
    }

    /// Reconfigure for `n` columns, i.e. rows of length `n`.
    pub fn set_cols(&mut self, n: usize) {
        self.row_fft.set_order(n);
    }

    /// The engine applied along each row.
    pub fn row_engine(&self) -> &ComplexFft<T> {
        &self.row_fft
    }

    /// The engine applied along each column.
    pub fn column_engine(&self) -> &ComplexFft<T> {
        &self.column_fft
    }

    pub fn fourier(&mut self, x: &Matrix<Complex<T>>) -> Matrix<Complex<T>> {
        let mut out = x.clone();
        self.transform(&mut out, Direction::Forward);
        out
    }

    pub fn ifourier(&mut self, a: &Matrix<Complex<T>>) -> Matrix<Complex<T>> {
        let mut out = a.clone();
        self.transform(&mut out, Direction::Inverse);
        out
    }

    pub fn fourier_in_place(&mut self, data: &mut Matrix<Complex<T>>) {
        self.transform(data, Direction::Forward);
    }

    pub fn ifourier_in_place(&mut self, data: &mut Matrix<Complex<T>>) {
        self.transform(data, Direction::Inverse);
    }

    /// Transform `data` in place, first adopting its shape.
    pub fn transform(&mut self, data: &mut Matrix<Complex<T>>, direction: Direction) {
        let (rows, cols) = data.shape();
        self.set_rows(rows);
        self.set_cols(cols);
        trace!("2d fft: {:?} {}x{}", direction, rows, cols);
        if rows == 0 || cols == 0 {
            return;
        }
        #[cfg(feature = "parallel")]
        {
            if crate::config::should_parallelize_2d(rows * cols) {
                self.transform_parallel(data, direction);
                return;
            }
        }
        self.transform_serial(data, direction);
    }

    fn transform_serial(&mut self, data: &mut Matrix<Complex<T>>, direction: Direction) {
        let (rows, cols) = data.shape();
        for r in 0..rows {
            self.row_fft.transform(data.row_mut(r), direction);
        }
        let mut column = vec![Complex::zero(); rows];
        for c in 0..cols {
            data.col_into(c, &mut column);
            self.column_fft.transform(&mut column, direction);
            data.set_col(c, &column);
        }
    }

    /// Same passes as the serial path with rows (then transposed columns)
    /// handed out to rayon workers. Each worker keeps its own scratch; the
    /// weight tables are shared read-only.
    #[cfg(feature = "parallel")]
    fn transform_parallel(&self, data: &mut Matrix<Complex<T>>, direction: Direction) {
        use alloc::vec::Vec;
        use rayon::prelude::*;

        let (rows, cols) = data.shape();
        let kernel = self.row_fft.kernel(direction);
        data.as_mut_slice()
            .par_chunks_mut(cols)
            .for_each_init(
                || (Vec::<Complex<T>>::new(), Vec::<Complex<T>>::new()),
                |(scratch, acc), row| kernel.process(row, scratch, acc),
            );
        let mut transposed = data.transpose();
        let kernel = self.column_fft.kernel(direction);
        transposed
            .as_mut_slice()
            .par_chunks_mut(rows)
            .for_each_init(
                || (Vec::<Complex<T>>::new(), Vec::<Complex<T>>::new()),
                |(scratch, acc), column| kernel.process(column, scratch, acc),
            );
        *data = transposed.transpose();
    }
}
