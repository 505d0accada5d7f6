use ndarray::{Array2, ArrayView2};
use rand::Rng;
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use std::ops::Sub;

use crate::error::{LossError, Result};

/// Row-major dense matrix used for weights (D×C), features (N×D) and gradients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Uniform samples in `[-scale, scale)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, scale: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = (rng.gen::<f64>() * 2.0 - 1.0) * scale;
            }
        }

        res
    }

    /// Samples a single value from N(0, 1) using the Box-Muller transform.
    pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        // Draw two independent uniform samples in (0, 1] to avoid log(0).
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = 1.0 - rng.gen::<f64>();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Gaussian initialization: samples from N(0, 1) multiplied by `scale`.
    ///
    /// A linear softmax classifier is usually started from `randn(D, C, 1e-4)`
    /// so that every score is close to zero and the initial loss sits near
    /// `ln(C)`.
    pub fn randn<R: Rng + ?Sized>(rows: usize, cols: usize, scale: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = Matrix::sample_standard_normal(rng) * scale;
            }
        }
        res
    }

    /// Builds a matrix from row vectors. Every row must have the same length;
    /// an empty outer vector gives a 0×0 matrix.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = data.first().map_or(0, |row| row.len());
        if let Some((row, bad)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(LossError::RaggedRows { row, expected: cols, got: bad.len() });
        }
        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// `(rows, cols)`, in the same order as `ndarray::Array2::dim()`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Checks that `data` really holds `rows` rows of `cols` values each.
    ///
    /// The fields are public, so a matrix built as a struct literal or edited
    /// in place can disagree with its declared shape.
    pub fn check_consistent(&self) -> Result<()> {
        if self.data.len() != self.rows {
            return Err(LossError::ShapeMismatch {
                what: "matrix row count vs stored rows",
                expected: self.rows,
                got: self.data.len(),
            });
        }
        if let Some((row, bad)) = self.data.iter().enumerate().find(|(_, r)| r.len() != self.cols) {
            return Err(LossError::RaggedRows { row, expected: self.cols, got: bad.len() });
        }
        Ok(())
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i]
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i][j]
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect(),
        }
    }

    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    /// Σ w², the squared Frobenius norm.
    pub fn sum_of_squares(&self) -> f64 {
        self.data.iter().flatten().map(|x| x * x).sum()
    }

    /// Largest elementwise |a - b|. Shapes must match.
    pub fn max_abs_diff(&self, other: &Matrix) -> f64 {
        assert_eq!(self.shape(), other.shape());
        self.data.iter().flatten()
            .zip(other.data.iter().flatten())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// ‖a - b‖ / (‖a‖ + ‖b‖), zero when both matrices are zero.
    pub fn relative_error(&self, other: &Matrix) -> f64 {
        let diff = (self.clone() - other.clone()).sum_of_squares().sqrt();
        let denom = self.sum_of_squares().sqrt() + other.sum_of_squares().sqrt();
        if denom == 0.0 { 0.0 } else { diff / denom }
    }

    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.rows, self.cols), |(i, j)| self.data[i][j])
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Matrix { rows: 0, cols: 0, data: vec![] }
    }
}

impl From<ArrayView2<'_, f64>> for Matrix {
    fn from(a: ArrayView2<'_, f64>) -> Self {
        Matrix {
            rows: a.nrows(),
            cols: a.ncols(),
            data: a.outer_iter().map(|row| row.to_vec()).collect(),
        }
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(a: Array2<f64>) -> Self {
        Matrix::from(a.view())
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }

        let mut res = Matrix::zeros(self.rows, self.cols);

        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }

        res
    }
}
