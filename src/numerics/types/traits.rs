// src/numerics/types/traits.rs
// Tolerance-aware comparison shared by vectors and matrices.

use super::tolerance::Tolerance;

/// Componentwise approximate equality.
///
/// Implementors compare every component with
/// `Tolerance::approximately_equal`; the `PartialEq` impls of the crate's
/// types forward to `approx_eq`.
pub trait ApproxEq {
    fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool;

    fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::default())
    }
}

impl ApproxEq for f32 {
    fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        tolerance.approximately_equal(*self, *other)
    }
}

impl<const N: usize> ApproxEq for [f32; N] {
    fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| tolerance.approximately_equal(*a, *b))
    }
}

impl<const N: usize> ApproxEq for [[f32; N]; N] {
    fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| a.approx_eq_with(b, tolerance))
    }
}
