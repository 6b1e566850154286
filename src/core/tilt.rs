// Pseudo-3D card tilt derived from the pointer's offset to the card center.
use crate::constants::*;
use glam::Vec2;

/// Card bounding box in client coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer offset from the card center, `[-1, 1]` per axis.
/// Degenerate rects report the center.
pub fn normalized_offset(client: Vec2, rect: &CardRect) -> Vec2 {
    let half = Vec2::new(rect.width, rect.height) * 0.5;
    if half.x <= 0.0 || half.y <= 0.0 {
        return Vec2::ZERO;
    }
    let local = client - Vec2::new(rect.left, rect.top);
    ((local - half) / half).clamp(Vec2::splat(-1.0), Vec2::ONE)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub shadow_offset: Vec2,
    pub shadow_blur: f32,
    pub shadow_opacity: f32,
    /// Inner content shift; depth is always `TILT_INNER_DEPTH_PX`.
    pub inner_shift: Vec2,
}

impl TiltTransform {
    pub fn from_offset(n: Vec2) -> Self {
        Self {
            rotate_x: -n.y * TILT_MAX_DEG,
            rotate_y: n.x * TILT_MAX_DEG,
            scale: TILT_HOVER_SCALE,
            shadow_offset: Vec2::new(-n.x, n.y) * TILT_SHADOW_OFFSET_PX,
            shadow_blur: TILT_SHADOW_BLUR_PX,
            shadow_opacity: TILT_SHADOW_OPACITY,
            inner_shift: n * TILT_INNER_SHIFT_PX,
        }
    }

    /// Flat card with the resting shadow.
    pub const fn rest() -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
            shadow_offset: Vec2::new(0.0, TILT_REST_SHADOW_Y_PX),
            shadow_blur: TILT_REST_SHADOW_BLUR_PX,
            shadow_opacity: TILT_REST_SHADOW_OPACITY,
            inner_shift: Vec2::ZERO,
        }
    }

    pub fn card_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale({})",
            TILT_PERSPECTIVE_PX, self.rotate_x, self.rotate_y, self.scale
        )
    }

    pub fn box_shadow(&self) -> String {
        format!(
            "{}px {}px {}px rgba(0, 0, 0, {})",
            self.shadow_offset.x, self.shadow_offset.y, self.shadow_blur, self.shadow_opacity
        )
    }

    pub fn inner_transform(&self) -> String {
        format!(
            "translateZ({}px) translateX({}px) translateY({}px)",
            TILT_INNER_DEPTH_PX, self.inner_shift.x, self.inner_shift.y
        )
    }
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self::rest()
    }
}

/// Transform for a pointer at `client` over a card occupying `rect`.
#[inline]
pub fn tilt_for_pointer(client: Vec2, rect: &CardRect) -> TiltTransform {
    TiltTransform::from_offset(normalized_offset(client, rect))
}
