//! Color type and named constants.

use prism_math::Vec3;

/// Color type alias (unclamped linear RGB).
///
/// Channels are not clamped by the engine; additive light contributions can
/// exceed 1.0 and the pixel sink clamps on conversion.
pub type Color = Vec3;

pub const WHITE: Color = Vec3::ONE;
pub const GREY: Color = Vec3::new(0.5, 0.5, 0.5);
pub const BLACK: Color = Vec3::ZERO;

/// Color returned for rays that hit nothing.
pub const BACKGROUND: Color = BLACK;
