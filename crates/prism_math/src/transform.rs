//! Affine transforms for placing canonical shapes in world space.
//!
//! A `Transform` bundles a forward 4x4 matrix with its precomputed inverse
//! and the 3x3 inverse-transpose used for normals. Factories build the
//! inverse analytically rather than inverting numerically, so round-trips
//! stay tight.
//!
//! Note: glam::Mat4 already provides transform_point3() and transform_vector3()

use glam::{Mat3, Mat4, Vec3};

/// A 4x4 affine transform with precomputed inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Forward matrix (object space to world space)
    fwd: Mat4,
    /// Inverse matrix (world space to object space)
    inv: Mat4,
    /// 3x3 inverse-transpose for normal mapping
    inv_t: Mat3,
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        fwd: Mat4::IDENTITY,
        inv: Mat4::IDENTITY,
        inv_t: Mat3::IDENTITY,
    };

    /// Build from a forward matrix and its known analytic inverse.
    ///
    /// The inverse-transpose is always rederived from the inverse here;
    /// composing two inverse-transposes directly is unsound under
    /// non-uniform scale.
    fn from_fwd_inv(fwd: Mat4, inv: Mat4) -> Self {
        Self {
            fwd,
            inv,
            inv_t: Mat3::from_mat4(inv).transpose(),
        }
    }

    /// Translation by (x, y, z).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        let v = Vec3::new(x, y, z);
        Self::from_fwd_inv(Mat4::from_translation(v), Mat4::from_translation(-v))
    }

    /// Non-uniform scale. Factors must be non-zero; a zero factor makes
    /// the transform singular and is invalid input.
    pub fn scaling(sx: f32, sy: f32, sz: f32) -> Self {
        debug_assert!(
            sx != 0.0 && sy != 0.0 && sz != 0.0,
            "scale factors must be non-zero"
        );
        Self::from_fwd_inv(
            Mat4::from_scale(Vec3::new(sx, sy, sz)),
            Mat4::from_scale(Vec3::new(1.0 / sx, 1.0 / sy, 1.0 / sz)),
        )
    }

    /// Rotation about the Y axis.
    pub fn rotation_y(radians: f32) -> Self {
        Self::from_fwd_inv(
            Mat4::from_rotation_y(radians),
            Mat4::from_rotation_y(-radians),
        )
    }

    /// Compose: the transform that applies `self` first, then `second`.
    ///
    /// Forward matrices multiply as `second * first`; the inverses multiply
    /// in the opposite order.
    pub fn then(&self, second: &Transform) -> Self {
        Self::from_fwd_inv(second.fwd * self.fwd, self.inv * second.inv)
    }

    /// Transform a point (homogeneous w=1).
    #[inline]
    pub fn point(&self, p: Vec3) -> Vec3 {
        self.fwd.transform_point3(p)
    }

    /// Transform a vector (homogeneous w=0, no translation).
    #[inline]
    pub fn vector(&self, v: Vec3) -> Vec3 {
        self.fwd.transform_vector3(v)
    }

    /// Inverse-transform a point into object space.
    #[inline]
    pub fn inv_point(&self, p: Vec3) -> Vec3 {
        self.inv.transform_point3(p)
    }

    /// Inverse-transform a vector into object space.
    #[inline]
    pub fn inv_vector(&self, v: Vec3) -> Vec3 {
        self.inv.transform_vector3(v)
    }

    /// Map an object-space normal to world space and re-normalize.
    ///
    /// Uses the inverse-transpose; the forward matrix does not preserve
    /// normal direction under non-uniform scale.
    pub fn normal(&self, n: Vec3) -> Vec3 {
        (self.inv_t * n).normalize()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
