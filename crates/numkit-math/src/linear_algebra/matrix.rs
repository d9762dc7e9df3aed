//! Dense row-major matrix with Gauss-Jordan inversion.

use std::fmt;
use std::ops::Index;

use nalgebra::DMatrix;

use crate::error::{MathError, MathResult};
use crate::sampling::MAX_SAMPLES;

/// A dense, row-major matrix of `f64`.
///
/// Public accessors use 0-based `(row, col)` indices. The elimination helpers
/// behind [`Matrix::inverse`] address rows and columns 1-based.
///
/// # Example
///
/// ```rust
/// use numkit_math::linear_algebra::Matrix;
///
/// let a = Matrix::from_row_slice(2, 2, &[4.0, 7.0, 2.0, 6.0]).unwrap();
/// let inv = a.inverse().unwrap();
/// let identity = a.multiply(&inv).unwrap();
///
/// assert!((identity[(0, 0)] - 1.0).abs() < 1e-12);
/// assert!(identity[(0, 1)].abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    elements: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the element count
    /// does not fit in memory.
    pub fn new(rows: usize, cols: usize) -> MathResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(MathError::invalid_input(format!(
                "matrix dimensions must be non-zero, got {rows}x{cols}"
            )));
        }
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= MAX_SAMPLES)
            .ok_or_else(|| {
                MathError::invalid_input(format!("matrix dimensions {rows}x{cols} are too large"))
            })?;
        Ok(Self {
            elements: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// Creates the `n x n` identity matrix.
    pub fn identity(n: usize) -> MathResult<Self> {
        let mut identity = Self::new(n, n)?;
        for i in 0..n {
            identity.elements[i * n + i] = 1.0;
        }
        Ok(identity)
    }

    /// Creates a matrix from row-major data.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[f64]) -> MathResult<Self> {
        let mut matrix = Self::new(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MathError::invalid_input(format!(
                "expected {} elements for a {rows}x{cols} matrix, got {}",
                rows * cols,
                data.len()
            )));
        }
        matrix.elements.copy_from_slice(data);
        Ok(matrix)
    }

    /// Creates an `n x 1` column vector.
    pub fn column_vector(values: &[f64]) -> MathResult<Self> {
        Self::from_row_slice(values.len(), 1, values)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the row-major element buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.elements
    }

    /// Returns the element at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.elements[row * self.cols + col])
        } else {
            None
        }
    }

    /// Returns true if the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    fn row_mut(&mut self, row: usize) -> MathResult<&mut [f64]> {
        if row >= self.rows {
            return Err(MathError::invalid_input(format!(
                "row {row} out of range for a matrix with {} rows",
                self.rows
            )));
        }
        let cols = self.cols;
        Ok(&mut self.elements[row * cols..(row + 1) * cols])
    }

    /// Broadcasts `value` across every column of `row`.
    pub fn set_row(&mut self, row: usize, value: f64) -> MathResult<()> {
        self.row_mut(row)?.fill(value);
        Ok(())
    }

    /// Copies the first `cols` entries of `values` into `row`.
    pub fn set_row_vector(&mut self, row: usize, values: &[f64]) -> MathResult<()> {
        let cols = self.cols;
        if values.len() < cols {
            return Err(MathError::insufficient_data(cols, values.len()));
        }
        self.row_mut(row)?.copy_from_slice(&values[..cols]);
        Ok(())
    }

    /// Writes `values[i].powf(power)` into `row`.
    pub fn set_row_vector_power(&mut self, row: usize, values: &[f64], power: f64) -> MathResult<()> {
        let cols = self.cols;
        if values.len() < cols {
            return Err(MathError::insufficient_data(cols, values.len()));
        }
        for (dst, &v) in self.row_mut(row)?.iter_mut().zip(values) {
            *dst = v.powf(power);
        }
        Ok(())
    }

    /// Returns the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut elements = vec![0.0; self.elements.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                elements[j * self.rows + i] = self.elements[i * self.cols + j];
            }
        }
        Self {
            elements,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Computes `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MathError::DimensionMismatch`] if `self.cols() != rhs.rows()`.
    pub fn multiply(&self, rhs: &Self) -> MathResult<Self> {
        if self.cols != rhs.rows {
            return Err(MathError::DimensionMismatch {
                rows1: self.rows,
                cols1: self.cols,
                rows2: rhs.rows,
                cols2: rhs.cols,
            });
        }
        let mut result = Self::new(self.rows, rhs.cols)?;
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.elements[i * self.cols + k] * rhs.elements[k * rhs.cols + j];
                }
                result.elements[i * rhs.cols + j] = sum;
            }
        }
        Ok(result)
    }

    /// Inverts the matrix by Gauss-Jordan elimination.
    ///
    /// The reduction runs on a working copy and an identity matrix in
    /// parallel. A zero pivot is repaired by accumulating the first row below
    /// it with a non-zero entry in the pivot column; rows are never swapped.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square, and
    /// [`MathError::SingularMatrix`] if a pivot cannot be normalized.
    pub fn inverse(&self) -> MathResult<Self> {
        if !self.is_square() {
            return Err(MathError::invalid_input(format!(
                "cannot invert a non-square {}x{} matrix",
                self.rows, self.cols
            )));
        }
        let n = self.rows;
        let mut work = self.clone();
        let mut inverse = Self::identity(n)?;

        for i in 1..=n {
            scale_row(&mut work, &mut inverse, i, i, 1.0)?;
            for j in i + 1..=n {
                reduce_row(&mut work, &mut inverse, j, i, i)?;
            }
        }
        for i in (1..=n).rev() {
            for j in (1..i).rev() {
                reduce_row(&mut work, &mut inverse, j, i, i)?;
            }
        }

        Ok(inverse)
    }
}

/// 1-based element offset.
fn offset(matrix: &Matrix, row: usize, col: usize) -> usize {
    (row - 1) * matrix.cols + col - 1
}

fn check_position(matrix: &Matrix, row: usize, col: usize) -> MathResult<()> {
    if row == 0 || row > matrix.rows || col == 0 || col > matrix.cols {
        return Err(MathError::invalid_input(format!(
            "position ({row}, {col}) outside a {}x{} matrix",
            matrix.rows, matrix.cols
        )));
    }
    Ok(())
}

/// `row_dst -= factor * row_src`, applied to both matrices.
fn subtract_row(matrix: &mut Matrix, secondary: &mut Matrix, row_dst: usize, row_src: usize, factor: f64) {
    let cols = matrix.cols;
    for m in [matrix, secondary] {
        for c in 0..cols {
            let src = m.elements[(row_src - 1) * cols + c];
            m.elements[(row_dst - 1) * cols + c] -= factor * src;
        }
    }
}

/// Normalizes the pivot at (`row`, `col`) to `scale_to`.
fn scale_row(
    matrix: &mut Matrix,
    secondary: &mut Matrix,
    row: usize,
    col: usize,
    scale_to: f64,
) -> MathResult<()> {
    check_position(matrix, row, col)?;

    let mut element = matrix.elements[offset(matrix, row, col)];
    if element == 0.0 {
        let donor = (row + 1..=matrix.rows)
            .find(|&r| matrix.elements[offset(matrix, r, col)] != 0.0);
        match donor {
            Some(r) => {
                subtract_row(matrix, secondary, row, r, -1.0);
                element = matrix.elements[offset(matrix, row, col)];
            }
            None => return Err(MathError::SingularMatrix { column: col }),
        }
        if element == 0.0 {
            return Err(MathError::SingularMatrix { column: col });
        }
    }

    let scale = scale_to / element;
    if !scale.is_finite() {
        return Err(MathError::SingularMatrix { column: col });
    }
    if scale != 1.0 {
        let cols = matrix.cols;
        for m in [matrix, secondary] {
            for v in &mut m.elements[(row - 1) * cols..row * cols] {
                *v *= scale;
            }
        }
    }
    Ok(())
}

/// Eliminates column `col` of `row_dst` using the normalized `row_src`.
fn reduce_row(
    matrix: &mut Matrix,
    secondary: &mut Matrix,
    row_dst: usize,
    row_src: usize,
    col: usize,
) -> MathResult<()> {
    check_position(matrix, row_dst, col)?;
    check_position(matrix, row_src, col)?;
    if row_dst == row_src {
        return Err(MathError::invalid_input("cannot reduce a row against itself"));
    }
    if matrix.elements[offset(matrix, row_src, col)] == 0.0 {
        return Err(MathError::SingularMatrix { column: col });
    }
    let factor = matrix.elements[offset(matrix, row_dst, col)];
    if factor != 0.0 {
        subtract_row(matrix, secondary, row_dst, row_src, factor);
    }
    Ok(())
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.elements[row * self.cols + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix: {} × {}", self.rows, self.cols)?;
        writeln!(f, "----BEGIN MATRIX----")?;
        for row in self.elements.chunks(self.cols) {
            write!(f, "[ ")?;
            for v in row {
                write!(f, "{v:.3} ")?;
            }
            writeln!(f, "]")?;
        }
        write!(f, "-----END MATRIX-----")
    }
}

impl From<&Matrix> for DMatrix<f64> {
    fn from(matrix: &Matrix) -> Self {
        DMatrix::from_row_slice(matrix.rows, matrix.cols, &matrix.elements)
    }
}

impl TryFrom<&DMatrix<f64>> for Matrix {
    type Error = MathError;

    fn try_from(matrix: &DMatrix<f64>) -> MathResult<Self> {
        let (rows, cols) = matrix.shape();
        let data: Vec<f64> = (0..rows)
            .flat_map(|i| (0..cols).map(move |j| matrix[(i, j)]))
            .collect();
        Self::from_row_slice(rows, cols, &data)
    }
}
