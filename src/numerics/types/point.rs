// src/numerics/types/point.rs
// Point3 is an alias for Vector3, plus homogeneous-coordinate helpers.

use super::vector::{Vector3, Vector4};

/// Point3 is an alias to Vector3 to represent points in space.
pub type Point3 = Vector3;

impl Vector3 {
    /// Lift a point into homogeneous coordinates (`w = 1`), so translations apply.
    pub fn to_homogeneous_point(&self) -> Vector4 {
        Vector4::from_vector3(*self, 1.0)
    }

    /// Lift a direction into homogeneous coordinates (`w = 0`), so translations do not apply.
    pub fn to_homogeneous_direction(&self) -> Vector4 {
        Vector4::from_vector3(*self, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_alias_behaviour() {
        let p: Point3 = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.x, 1.0_f32);
    }

    #[test]
    fn test_homogeneous_lift() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p.to_homogeneous_point(), Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(p.to_homogeneous_direction(), Vector4::new(1.0, 2.0, 3.0, 0.0));
        assert_eq!(p.to_homogeneous_point().to_cartesian().unwrap(), p);
    }
}
