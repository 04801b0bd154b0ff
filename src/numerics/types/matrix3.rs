// src/numerics/types/matrix3.rs
// 3x3 single-precision matrix, row-major.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::error::{check_index, square_from_row_major, square_from_rows, Result};
use super::tolerance::{self, Tolerance};
use super::traits::ApproxEq;
use super::vector::Vector3;

/// 3x3 matrix stored as rows.
#[derive(Copy, Clone, Debug)]
pub struct Matrix3 {
    data: [[f32; 3]; 3],
}

impl Matrix3 {
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 3 rows
    pub fn from_rows(r0: [f32; 3], r1: [f32; 3], r2: [f32; 3]) -> Self {
        Self { data: [r0, r1, r2] }
    }

    /// Construct a new matrix from 3 columns
    pub fn from_columns(c0: [f32; 3], c1: [f32; 3], c2: [f32; 3]) -> Self {
        Self::from_rows(c0, c1, c2).transpose()
    }

    /// Build a matrix from dynamically sized rows.
    ///
    /// Fails with `InvalidArgument` unless there are exactly 3 rows of 3 values.
    pub fn from_rows_slice<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        square_from_rows(rows).map(Self::new)
    }

    /// Build a matrix from 9 values in row-major order.
    pub fn from_row_major(values: &[f32]) -> Result<Self> {
        square_from_row_major(values).map(Self::new)
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [[0.0; 3]; 3] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self::from_rows([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row, col, 3)?;
        Ok(self.data[row][col])
    }

    /// Overwrite one entry; fails with `IndexOutOfBounds` outside `[0, 3)`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        check_index(row, col, 3)?;
        self.data[row][col] = value;
        Ok(())
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> Result<[f32; 3]> {
        check_index(idx, 0, 3)?;
        Ok(self.data[idx])
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> Result<[f32; 3]> {
        check_index(0, idx, 3)?;
        Ok([self.data[0][idx], self.data[1][idx], self.data[2][idx]])
    }

    pub fn to_array(&self) -> [[f32; 3]; 3] {
        self.data
    }

    pub fn transpose(&self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[j][i];
            }
        }
        Self { data: result }
    }

    /// `a(ei - fh) - b(di - fg) + c(dh - eg)` for `[[a, b, c], [d, e, f], [g, h, i]]`.
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.data;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Determinant of the 2x2 submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row, col, 3)?;
        Ok(self.minor_determinant(row, col))
    }

    /// `(-1)^(row + col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f32> {
        check_index(row, col, 3)?;
        Ok(self.signed_minor(row, col))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        trace!("building 3x3 adjugate");
        let mut result = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                result[j][i] = self.signed_minor(i, j);
            }
        }
        Self { data: result }
    }

    /// Inverse via `adj(A) / det(A)`.
    ///
    /// Fails with `SingularMatrix` when `|det| < EPSILON`.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        tolerance::require_non_singular(det)?;
        trace!(determinant = det, "inverting 3x3 matrix");

        let mut result = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                // cofactor (i, j) lands at (j, i)
                result[j][i] = self.signed_minor(i, j) / det;
            }
        }
        Ok(Self { data: result })
    }

    /// Entries snapped to the epsilon grid; see `Vector3::grid_key`.
    pub fn grid_key(&self) -> [[i32; 3]; 3] {
        self.data.map(|row| row.map(tolerance::grid_cell))
    }

    fn minor_determinant(&self, row: usize, col: usize) -> f32 {
        // the two remaining indices, in order
        let remaining = |skip: usize| match skip {
            0 => (1, 2),
            1 => (0, 2),
            _ => (0, 1),
        };
        let (r0, r1) = remaining(row);
        let (c0, c1) = remaining(col);
        let m = &self.data;
        m[r0][c0] * m[r1][c1] - m[r0][c1] * m[r1][c0]
    }

    fn signed_minor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor_determinant(row, col)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[[f32; 3]; 3]> for Matrix3 {
    fn from(data: [[f32; 3]; 3]) -> Self {
        Self::new(data)
    }
}

impl ApproxEq for Matrix3 {
    fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.data.approx_eq_with(&other.data, tolerance)
    }
}

impl PartialEq for Matrix3 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix3:")?;
        for row in &self.data {
            writeln!(f, "[{:.3}, {:.3}, {:.3}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl Serialize for Matrix3 {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix3 {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let data = <[[f32; 3]; 3]>::deserialize(deserializer)?;
        Ok(Matrix3 { data })
    }
}

impl Add for Matrix3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix3 { data: result }
    }
}

impl Sub for Matrix3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix3 { data: result }
    }
}

impl Neg for Matrix3 {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<f32> for Matrix3 {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Matrix3 {
            data: self.data.map(|row| row.map(|value| value * scalar)),
        }
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, rhs: Vector3) -> Vector3 {
        let m = &self.data;
        Vector3 {
            x: m[0][0] * rhs.x + m[0][1] * rhs.y + m[0][2] * rhs.z,
            y: m[1][0] * rhs.x + m[1][1] * rhs.y + m[1][2] * rhs.z,
            z: m[2][0] * rhs.x + m[2][1] * rhs.y + m[2][2] * rhs.z,
        }
    }
}

impl Mul<Matrix3> for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut result = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][0] * rhs.data[0][j]
                    + self.data[i][1] * rhs.data[1][j]
                    + self.data[i][2] * rhs.data[2][j];
            }
        }
        Matrix3 { data: result }
    }
}
