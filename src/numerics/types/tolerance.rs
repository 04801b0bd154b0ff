// src/numerics/types/tolerance.rs
// Numeric tolerance policy shared by every vector and matrix type.

use super::error::{LinalgError, Result};

/// Magnitudes below this value are treated as zero.
pub const EPSILON: f32 = 1e-7;

/// Tolerance configuration for zero checks and approximate equality.
///
/// All types in this crate compare and validate through
/// `Tolerance::default()`, so equality, division, normalization and
/// inversion agree on what "zero" means. A custom tolerance is only used
/// when a caller asks for it explicitly, e.g. via `ApproxEq::approx_eq_with`.
///
/// NaN never passes a non-zero check: it is reported as zero, degenerate or
/// singular, depending on the check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f32,
}

impl Default for Tolerance {
    /// Creates the library-wide tolerance of `1e-7`.
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl Tolerance {
    /// Creates a tolerance with the given epsilon.
    ///
    /// Anything other than a finite positive value falls back to `EPSILON`.
    pub fn new(epsilon: f32) -> Self {
        if epsilon.is_finite() && epsilon > 0.0 {
            Self { epsilon }
        } else {
            Self::default()
        }
    }

    /// Threshold below which a magnitude counts as zero.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Same as `Tolerance::default()`.
    pub fn strict() -> Self {
        Self::default()
    }

    /// A looser tolerance (`1e-5`) for results of longer float pipelines,
    /// such as products of a matrix with its own inverse.
    pub fn relaxed() -> Self {
        Self { epsilon: 1e-5 }
    }

    pub fn is_non_zero(&self, value: f32) -> bool {
        value.abs() >= self.epsilon
    }

    /// Fails with `DivisionByZero` when `divisor` is within epsilon of zero.
    pub fn require_non_zero(&self, divisor: f32) -> Result<()> {
        if self.is_non_zero(divisor) {
            Ok(())
        } else {
            Err(LinalgError::DivisionByZero { divisor })
        }
    }

    /// Fails with `DegenerateVector` when `length` is below epsilon.
    pub fn require_non_zero_length(&self, length: f32) -> Result<()> {
        if length >= self.epsilon {
            Ok(())
        } else {
            Err(LinalgError::DegenerateVector { length })
        }
    }

    /// Fails with `SingularMatrix` when `|determinant|` is below epsilon.
    pub fn require_non_singular(&self, determinant: f32) -> Result<()> {
        if self.is_non_zero(determinant) {
            Ok(())
        } else {
            Err(LinalgError::SingularMatrix { determinant })
        }
    }

    pub fn approximately_equal(&self, a: f32, b: f32) -> bool {
        (a - b).abs() < self.epsilon
    }

    /// Maps `value` onto an integer grid with cell size epsilon.
    ///
    /// Values are clamped so the scaled result fits an `i32`; with the
    /// default epsilon every value beyond roughly +/-214.7 lands in the
    /// outermost cell. Two values closer than epsilon usually share a cell,
    /// but values straddling a cell boundary do not.
    pub fn grid_cell(&self, value: f32) -> i32 {
        let scale = 1.0 / self.epsilon;
        let limit = i32::MAX as f32 / scale;
        let clamped = value.clamp(-limit, limit);
        // round half up, then saturate into i32
        (clamped * scale + 0.5).floor() as i32
    }
}

/// `true` iff `|value| >= EPSILON`.
pub fn is_non_zero(value: f32) -> bool {
    Tolerance::default().is_non_zero(value)
}

pub fn require_non_zero(divisor: f32) -> Result<()> {
    Tolerance::default().require_non_zero(divisor)
}

pub fn require_non_zero_length(length: f32) -> Result<()> {
    Tolerance::default().require_non_zero_length(length)
}

pub fn require_non_singular(determinant: f32) -> Result<()> {
    Tolerance::default().require_non_singular(determinant)
}

/// `true` iff `|a - b| < EPSILON`.
pub fn approximately_equal(a: f32, b: f32) -> bool {
    Tolerance::default().approximately_equal(a, b)
}

pub(crate) fn grid_cell(value: f32) -> i32 {
    Tolerance::default().grid_cell(value)
}
