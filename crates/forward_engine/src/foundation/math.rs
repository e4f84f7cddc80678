//! Math utilities and types
//!
//! Provides fundamental math types for 3D rendering, plus the conversions
//! that hand matrix data to the GPU layer in the exact layout it expects.

pub use nalgebra::{Matrix4, Quaternion, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Convert a matrix to the column-major `[[f32; 4]; 4]` layout expected by
/// the GPU layer
///
/// Column `c` of the matrix becomes `out[c]`. Transform uploads go through
/// this single conversion so the numeric contract lives in one place.
pub fn mat4_to_cols(m: &Mat4) -> [[f32; 4]; 4] {
    let mut cols = [[0.0f32; 4]; 4];
    for (c, col) in cols.iter_mut().enumerate() {
        for (r, cell) in col.iter_mut().enumerate() {
            *cell = m[(r, c)];
        }
    }
    cols
}

/// Transform representing position, rotation, and scale
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Rotation quaternion
    pub rotation: Quat,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            rotation: Quat::identity(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a new identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a transform with position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position)
            * self.rotation.to_homogeneous()
            * Mat4::new_nonuniform_scaling(&self.scale)
    }

    /// Apply this transform to a point
    pub fn transform_point(&self, point: Point3) -> Point3 {
        self.to_matrix().transform_point(&point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_to_matrix_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        let m = t.to_matrix();

        let p = m.transform_point(&Point3::origin());
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.z, 3.0);
    }

    #[test]
    fn test_mat4_to_cols_layout() {
        // Translation lives in column 3 of a column-major matrix
        let m = Mat4::new_translation(&Vec3::new(5.0, 6.0, 7.0));
        let cols = mat4_to_cols(&m);

        assert_eq!(cols[3], [5.0, 6.0, 7.0, 1.0]);
        assert_eq!(cols[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(cols[1], [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(cols[2], [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_mat4_to_cols_identity() {
        let cols = mat4_to_cols(&Mat4::identity());
        for (c, col) in cols.iter().enumerate() {
            for (r, cell) in col.iter().enumerate() {
                assert_eq!(*cell, f32::from(u8::from(r == c)));
            }
        }
    }
}
