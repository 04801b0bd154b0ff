// src/numerics/types/vector.rs
// Vector2, Vector3 and Vector4 in single precision.
// The arity-independent surface is generated by `impl_vector!`.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};

use super::error::Result;
use super::tolerance::{self, Tolerance};
use super::traits::ApproxEq;

/// 2D vector.
#[derive(Copy, Clone, Debug)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

/// 3D vector, also used for points (see `Point3`).
#[derive(Copy, Clone, Debug)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 4D vector, usually a 3D point or direction in homogeneous coordinates.
#[derive(Copy, Clone, Debug)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

// Expands a field name to `f32`; used to spell out tuple types per arity.
macro_rules! f32_for {
    ($_field:ident) => {
        f32
    };
}

macro_rules! impl_vector {
    ($name:ident, $n:literal, { $($field:ident),+ }) => {
        impl $name {
            pub fn new($($field: f32),+) -> Self {
                Self { $($field),+ }
            }

            /// Vector of all zeros
            pub fn zero() -> Self {
                Self { $($field: 0.0),+ }
            }

            pub fn to_array(&self) -> [f32; $n] {
                [$(self.$field),+]
            }

            /// Return the squared length (avoids sqrt)
            pub fn length_squared(&self) -> f32 {
                0.0 $(+ self.$field * self.$field)+
            }

            /// Euclidean length.
            pub fn length(&self) -> f32 {
                self.length_squared().sqrt()
            }

            pub fn dot(&self, other: &Self) -> f32 {
                0.0 $(+ self.$field * other.$field)+
            }

            /// Divide every component by `scalar`.
            ///
            /// Fails with `DivisionByZero` when `|scalar| < EPSILON`.
            pub fn divide(&self, scalar: f32) -> Result<Self> {
                tolerance::require_non_zero(scalar)?;
                Ok(Self { $($field: self.$field / scalar),+ })
            }

            /// Unit-length vector with the same direction.
            ///
            /// Fails with `DegenerateVector` when the length is below `EPSILON`.
            pub fn normalize(&self) -> Result<Self> {
                let length = self.length();
                tolerance::require_non_zero_length(length)?;
                Ok(Self { $($field: self.$field / length),+ })
            }

            /// Components snapped to the epsilon grid.
            ///
            /// Vectors that compare equal almost always share a key, so the
            /// key can stand in for the vector in hash maps. Equal vectors on
            /// opposite sides of a grid boundary get different keys, which is
            /// why the vector types do not implement `Hash` themselves.
            pub fn grid_key(&self) -> [i32; $n] {
                [$(tolerance::grid_cell(self.$field)),+]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl ApproxEq for $name {
            fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
                true $(&& tolerance.approximately_equal(self.$field, other.$field))+
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.approx_eq(other)
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, other: Self) -> Self {
                Self { $($field: self.$field + other.$field),+ }
            }
        }

        impl Sub for $name {
            type Output = Self;

            fn sub(self, other: Self) -> Self {
                Self { $($field: self.$field - other.$field),+ }
            }
        }

        impl Mul<f32> for $name {
            type Output = Self;

            fn mul(self, scalar: f32) -> Self {
                Self { $($field: self.$field * scalar),+ }
            }
        }

        impl Mul<$name> for f32 {
            type Output = $name;

            fn mul(self, vector: $name) -> $name {
                vector * self
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($field: -self.$field),+ }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let parts = [$(format!("{:.3}", self.$field)),+];
                write!(f, "{}({})", stringify!($name), parts.join(", "))
            }
        }

        // Serialized as a plain tuple
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                ($(self.$field),+).serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let ($($field),+) = <($(f32_for!($field)),+)>::deserialize(deserializer)?;
                Ok(Self { $($field),+ })
            }
        }

        // Conversions between vectors, tuples and arrays

        impl From<($(f32_for!($field)),+)> for $name {
            fn from(tuple: ($(f32_for!($field)),+)) -> Self {
                let ($($field),+) = tuple;
                Self { $($field),+ }
            }
        }

        impl From<$name> for ($(f32_for!($field)),+) {
            fn from(v: $name) -> Self {
                ($(v.$field),+)
            }
        }

        impl From<[f32; $n]> for $name {
            fn from(array: [f32; $n]) -> Self {
                let [$($field),+] = array;
                Self { $($field),+ }
            }
        }

        impl From<&[f32; $n]> for $name {
            fn from(array: &[f32; $n]) -> Self {
                Self::from(*array)
            }
        }

        impl From<$name> for [f32; $n] {
            fn from(v: $name) -> Self {
                v.to_array()
            }
        }
    };
}

impl_vector!(Vector2, 2, { x, y });
impl_vector!(Vector3, 3, { x, y, z });
impl_vector!(Vector4, 4, { x, y, z, w });

impl Vector3 {
    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vector4 {
    /// Extend a 3D vector with an explicit homogeneous coordinate.
    pub fn from_vector3(v: Vector3, w: f32) -> Self {
        Self { x: v.x, y: v.y, z: v.z, w }
    }

    /// Drop the `w` component.
    pub fn xyz(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Perspective divide: `(x/w, y/w, z/w)`.
    ///
    /// Fails with `DivisionByZero` for directions (`w` within epsilon of 0).
    pub fn to_cartesian(&self) -> Result<Vector3> {
        self.xyz().divide(self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::error::LinalgError;

    #[test]
    fn test_vector_add_sub() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert_eq!(sum, Vector3::new(5.0, 7.0, 9.0));

        let diff = sum - a;
        assert_eq!(diff, b);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn test_scalar_multiply_and_negate() {
        let v = Vector2::new(1.5, -2.0);
        assert_eq!(v * 2.0, Vector2::new(3.0, -4.0));
        assert_eq!(2.0 * v, Vector2::new(3.0, -4.0));
        assert_eq!(-v, Vector2::new(-1.5, 2.0));
    }

    #[test]
    fn test_divide() {
        let v = Vector4::new(2.0, 4.0, 6.0, 8.0);
        assert_eq!(v.divide(2.0).unwrap(), Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(
            v.divide(0.0),
            Err(LinalgError::DivisionByZero { divisor: 0.0 })
        );
        assert!(v.divide(1e-9).is_err());
    }

    #[test]
    fn test_length() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.length_squared(), 25.0);
        assert_eq!(v.length(), 5.0);

        let a = Vector3::new(1.0, 2.0, 3.0);
        assert!((a.length() - 14.0_f32.sqrt()).abs() < 1e-6);

        assert_eq!(Vector4::new(1.0, 1.0, 1.0, 1.0).length(), 2.0);
    }

    #[test]
    fn test_normalize() {
        let n = Vector2::new(3.0, 4.0).normalize().unwrap();
        assert_eq!(n, Vector2::new(0.6, 0.8));

        let n = Vector3::new(0.0, 0.0, 5.0).normalize().unwrap();
        assert_eq!(n, Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(n.length(), 1.0);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        assert!(matches!(
            Vector3::zero().normalize(),
            Err(LinalgError::DegenerateVector { .. })
        ));
        assert!(matches!(
            Vector4::new(1e-9, 0.0, 0.0, 0.0).normalize(),
            Err(LinalgError::DegenerateVector { .. })
        ));
    }

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(&b), 12.0);
        assert_eq!(Vector2::new(1.0, 0.0).dot(&Vector2::new(0.0, 1.0)), 0.0);
    }

    #[test]
    fn test_cross() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));

        let a = Vector3::new(2.0, -1.0, 3.0);
        let b = Vector3::new(0.5, 4.0, -2.0);
        assert_eq!(a.cross(&b), -(b.cross(&a)));
        assert_eq!(a.cross(&b).dot(&a), 0.0);
        assert_eq!(a.cross(&b).dot(&b), 0.0);
    }

    #[test]
    fn test_homogeneous() {
        let p = Vector4::from_vector3(Vector3::new(1.0, 2.0, 3.0), 1.0);
        assert_eq!(p, Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(p.xyz(), Vector3::new(1.0, 2.0, 3.0));

        let scaled = Vector4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(scaled.to_cartesian().unwrap(), Vector3::new(1.0, 2.0, 3.0));
        assert!(Vector4::new(1.0, 0.0, 0.0, 0.0).to_cartesian().is_err());
    }

    #[test]
    fn test_approximate_equality() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.00000001));
        assert_ne!(a, Vector3::new(1.0, 2.0, 3.001));
        assert!(a.approx_eq_with(&Vector3::new(1.0, 2.0, 3.001), Tolerance::new(0.01)));
    }

    #[test]
    fn test_grid_key() {
        let a = Vector2::new(0.25, -0.5);
        let b = Vector2::new(0.25, -0.5);
        assert_eq!(a.grid_key(), b.grid_key());
        assert_ne!(a.grid_key(), Vector2::new(0.25, 0.5).grid_key());
        assert_eq!(Vector3::zero().grid_key(), [0, 0, 0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector2::new(3.0, 4.0).to_string(), "Vector2(3.000, 4.000)");
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).to_string(),
            "Vector3(1.000, 2.000, 3.000)"
        );
        assert_eq!(
            Vector4::new(0.5, -1.0, 0.0, 1.25).to_string(),
            "Vector4(0.500, -1.000, 0.000, 1.250)"
        );
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let v: Vector3 = (1.0f32, 2.0f32, 3.0f32).into();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let back: (f32, f32, f32) = v.into();
        assert_eq!(back, (1.0, 2.0, 3.0));

        let arr = [1.0f32, 2.0, 3.0, 4.0];
        let v4 = Vector4::from(&arr);
        let back: [f32; 4] = v4.into();
        assert_eq!(back, arr);
        assert_eq!(Vector2::from([7.0, 8.0]).to_array(), [7.0, 8.0]);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector4::default(), Vector4::zero());
        assert_eq!(Vector2::default().length(), 0.0);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let v = Vector3::new(1.0, -2.5, 3.25);

        let encoded = bincode::serde::encode_to_vec(v, config).expect("serialize failed");
        assert!(!encoded.is_empty());

        let (decoded, _): (Vector3, usize) =
            bincode::serde::decode_from_slice(&encoded, config).expect("deserialize failed");
        assert_eq!(v.to_array(), decoded.to_array());
    }
}
