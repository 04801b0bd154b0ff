//! Prelude for fulgor_linalg
//!
//! Re-exports the value types, the error type and the comparison trait.

pub use crate::numerics::types::error::{LinalgError, Result};
pub use crate::numerics::types::matrix3::Matrix3;
pub use crate::numerics::types::matrix4::Matrix4;
pub use crate::numerics::types::point::Point3;
pub use crate::numerics::types::tolerance::{Tolerance, EPSILON};
pub use crate::numerics::types::traits::ApproxEq;
pub use crate::numerics::types::vector::{Vector2, Vector3, Vector4};
