// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod error;
    pub mod tolerance;
    pub mod traits;
    pub mod vector;
    pub mod point;
    pub mod matrix3;
    pub mod matrix4;
}

pub use types::error::{LinalgError, Result};
pub use types::matrix3::Matrix3;
pub use types::matrix4::Matrix4;
pub use types::point::Point3;
pub use types::tolerance::{Tolerance, EPSILON};
pub use types::traits::ApproxEq;
pub use types::vector::{Vector2, Vector3, Vector4};
