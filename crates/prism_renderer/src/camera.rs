//! Pinhole camera with a derived orthonormal-ish basis.

use prism_math::Vec3;

/// Field-of-view scale applied to the right and up basis vectors.
pub const DEFAULT_FOV_SCALE: f32 = 1.5;

/// Camera for generating rays into the scene.
///
/// The basis is derived from `position` and a look-at target; `right` and
/// `up` carry the field-of-view scale, so they are not unit length.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Camera {
    /// Create a camera at `position` looking at `look_at`, with the
    /// default field of view.
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        Self::with_fov_scale(position, look_at, DEFAULT_FOV_SCALE)
    }

    /// Create a camera with an explicit field-of-view scale.
    pub fn with_fov_scale(position: Vec3, look_at: Vec3, fov_scale: f32) -> Self {
        let forward = (look_at - position).normalize();
        let down = Vec3::new(0.0, -1.0, 0.0);
        let right = fov_scale * forward.cross(down).normalize();
        let up = fov_scale * forward.cross(right).normalize();

        Self {
            position,
            forward,
            right,
            up,
        }
    }
}
