//! Fixed-size linear algebra for coordinate transforms.
//!
//! `Vector2`/`Vector3`/`Vector4` and `Matrix3`/`Matrix4` are single-precision
//! `Copy` value types; every operation returns a new value. Equality is
//! approximate, using the shared `Tolerance` (epsilon `1e-7`), and the same
//! tolerance decides when a divisor, a vector length or a determinant counts
//! as zero.
//!
//! ```
//! use fulgor_linalg::{Matrix4, Vector4};
//!
//! let m = Matrix4::from_diagonal([2.0, 1.0, 1.0, 1.0]);
//! assert_eq!(m.determinant(), 2.0);
//! assert_eq!(m * m.inverse().unwrap(), Matrix4::identity());
//! assert_eq!(m * Vector4::new(1.0, 2.0, 3.0, 4.0), Vector4::new(2.0, 2.0, 3.0, 4.0));
//! ```

pub mod numerics;
pub mod prelude;

pub use numerics::{
    ApproxEq, LinalgError, Matrix3, Matrix4, Point3, Result, Tolerance, Vector2, Vector3,
    Vector4, EPSILON,
};
