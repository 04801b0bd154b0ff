// src/numerics/types/matrix4.rs
// 4x4 single-precision matrix, row-major, with cofactor determinant and
// adjugate inverse.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{check_index, square_from_row_major, square_from_rows, Result};
use super::matrix3::Matrix3;
use super::tolerance::{self, Tolerance};
use super::traits::ApproxEq;
use super::vector::{Vector3, Vector4};

/// 4x4 matrix stored as rows.
///
/// Vectors are treated as columns, so `m * v` applies the transform to `v`
/// and `a * b` applies `b` first.
#[derive(Copy, Clone, Debug)]
pub struct Matrix4 {
    data: [[f32; 4]; 4],
}

/// `+1` for even `n`, `-1` for odd.
fn alternating_sign(n: usize) -> f32 {
    if n % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

impl Matrix4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 4 rows
    pub fn from_rows(r0: [f32; 4], r1: [f32; 4], r2: [f32; 4], r3: [f32; 4]) -> Self {
        Self { data: [r0, r1, r2, r3] }
    }

    /// Construct a new matrix from 4 columns
    pub fn from_columns(c0: [f32; 4], c1: [f32; 4], c2: [f32; 4], c3: [f32; 4]) -> Self {
        Self::from_rows(c0, c1, c2, c3).transpose()
    }

    /// Build a matrix from dynamically sized rows.
    ///
    /// Fails with `InvalidArgument` unless there are exactly 4 rows of 4 values.
    pub fn from_rows_slice<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        square_from_rows(rows).map(Self::new)
    }

    /// Build a matrix from 16 values in row-major order.
    pub fn from_row_major(values: &[f32]) -> Result<Self> {
        square_from_row_major(values).map(Self::new)
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [[0.0; 4]; 4] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { data }
    }

    /// Diagonal matrix with the given entries.
    pub fn from_diagonal(diagonal: [f32; 4]) -> Self {
        let mut data = [[0.0; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = diagonal[i];
        }
        Self { data }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row, col, 4)?;
        Ok(self.data[row][col])
    }

    /// Overwrite one entry; fails with `IndexOutOfBounds` outside `[0, 4)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        check_index(row, col, 4)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Result<[f32; 4]> {
        check_index(idx, 0, 4)?;
        Ok(self.data[idx])
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> Result<[f32; 4]> {
        check_index(0, idx, 4)?;
        Ok(self.data.map(|row| row[idx]))
    }

    pub fn to_array(&self) -> [[f32; 4]; 4] {
        self.data
    }

    pub fn transpose(&self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[j][i];
            }
        }
        Self { data: result }
    }

    /// The 3x3 matrix left after deleting `row` and `col`.
    ///
    /// Remaining entries keep their relative row and column order.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix3> {
        check_index(row, col, 4)?;
        Ok(self.submatrix_unchecked(row, col))
    }

    /// Determinant of `submatrix(row, col)`.
    pub fn minor(&self, row: usize, col: usize) -> Result<f32> {
        Ok(self.submatrix(row, col)?.determinant())
    }

    /// `(-1)^(row + col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row, col, 4)?;
        Ok(self.cofactor_unchecked(row, col))
    }

    /// Laplace expansion along the first row:
    /// `det = sum_j (-1)^j * a[0][j] * minor(0, j)`.
    pub fn determinant(&self) -> f32 {
        (0..4)
            .map(|j| alternating_sign(j) * self.data[0][j] * self.minor_unchecked(0, j))
            .sum()
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        trace!("building 4x4 adjugate");
        let mut result = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                result[j][i] = self.cofactor_unchecked(i, j);
            }
        }
        Self { data: result }
    }

    /// Inverse via `adj(A) / det(A)`.
    ///
    /// Fails with `SingularMatrix` when `|det| < EPSILON`; no pivoting is
    /// done, so results for badly conditioned matrices are only as good as
    /// plain cofactor arithmetic allows.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        tolerance::require_non_singular(det)?;
        trace!(determinant = det, "inverting 4x4 matrix");

        let mut result = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                // cofactor (i, j) lands at (j, i)
                result[j][i] = self.cofactor_unchecked(i, j) / det;
            }
        }
        Ok(Self { data: result })
    }

    /// Apply the matrix to a point (`w = 1`) and divide by the resulting `w`.
    ///
    /// Fails with `DivisionByZero` when the transformed `w` is within epsilon of 0.
    pub fn transform_point(&self, point: Vector3) -> Result<Vector3> {
        (*self * point.to_homogeneous_point()).to_cartesian()
    }

    /// Apply the matrix to a direction (`w = 0`); translation has no effect.
    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        (*self * direction.to_homogeneous_direction()).xyz()
    }

    /// Entries snapped to the epsilon grid; see `Vector3::grid_key`.
    pub fn grid_key(&self) -> [[i32; 4]; 4] {
        self.data.map(|row| row.map(tolerance::grid_cell))
    }

    fn submatrix_unchecked(&self, row: usize, col: usize) -> Matrix3 {
        let mut minor = [[0.0; 3]; 3];
        let kept_rows = (0..4).filter(|&i| i != row);
        for (mi, i) in kept_rows.enumerate() {
            let kept_cols = (0..4).filter(|&j| j != col);
            for (mj, j) in kept_cols.enumerate() {
                minor[mi][mj] = self.data[i][j];
            }
        }
        Matrix3::new(minor)
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> f32 {
        self.submatrix_unchecked(row, col).determinant()
    }

    fn cofactor_unchecked(&self, row: usize, col: usize) -> f32 {
        alternating_sign(row + col) * self.minor_unchecked(row, col)
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 4]; 4]> for Matrix4 {
    fn from(data: [[f32; 4]; 4]) -> Self {
        Self::new(data)
    }
}

impl ApproxEq for Matrix4 {
    fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.data.approx_eq_with(&other.data, tolerance)
    }
}

impl PartialEq for Matrix4 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix4:")?;
        for row in &self.data {
            writeln!(
                f,
                "[{:.3}, {:.3}, {:.3}, {:.3}]",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

impl Serialize for Matrix4 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix4 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[f32; 4]; 4]>::deserialize(deserializer)?;
        Ok(Matrix4 { data })
    }
}

impl Add for Matrix4 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix4 { data: result }
    }
}

impl Sub for Matrix4 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix4 { data: result }
    }
}

impl Neg for Matrix4 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f32> for Matrix4 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Matrix4 {
            data: self.data.map(|row| row.map(|value| value * scalar)),
        }
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Vector4 {
        let v = rhs.to_array();
        let [x, y, z, w] = self
            .data
            .map(|row| row.iter().zip(v.iter()).map(|(a, b)| a * b).sum::<f32>());
        Vector4 { x, y, z, w }
    }
}

impl Mul<Matrix4> for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut result = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[i][k] * rhs.data[k][j];
                }
                result[i][j] = sum;
            }
        }
        Matrix4 { data: result }
    }
}
