// Hero background motion: pointer parallax plus autonomous Lissajous drift.
//
// Everything here is a pure function of `(pointer, t, shape row)`; the frame
// loop only owns the start instant and the last pointer position.
use crate::constants::{
    Oscillator, ShapeParams, EXTRA_OPACITY_FALLOFF_PX, EXTRA_OPACITY_MAX, EXTRA_OPACITY_MIN,
    HERO_SPEED_MULTIPLIER,
};
use glam::Vec2;

/// Pointer position normalized to `[-1, 1]` on both axes, center is zero.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
}

impl PointerState {
    /// Normalize client coordinates against the viewport size.
    /// A zero-sized viewport reports the center.
    pub fn from_client(client: Vec2, viewport: Vec2) -> Self {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return Self::default();
        }
        Self {
            pos: client / viewport * 2.0 - Vec2::ONE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeTransform {
    pub translate: Vec2,
    pub scale: f32,
    /// Only extra shapes drive opacity.
    pub opacity: Option<f32>,
}

impl ShapeTransform {
    #[inline]
    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

impl Oscillator {
    #[inline]
    pub fn sin_at(&self, t: f32) -> f32 {
        (t * self.freq + self.phase).sin() * self.amp
    }

    #[inline]
    pub fn cos_at(&self, t: f32) -> f32 {
        (t * self.freq + self.phase).cos() * self.amp
    }
}

impl ShapeParams {
    /// Autonomous offset at scaled time `t`.
    #[inline]
    pub fn drift(&self, t: f32) -> Vec2 {
        Vec2::new(self.x.sin_at(t), self.y.cos_at(t))
    }

    #[inline]
    pub fn offset(&self, pointer: PointerState, t: f32) -> Vec2 {
        pointer.pos * self.parallax + self.drift(t)
    }
}

/// Elapsed seconds since the animator started, in animation time.
#[inline]
pub fn scaled_time(elapsed_secs: f32) -> f32 {
    elapsed_secs * HERO_SPEED_MULTIPLIER
}

#[inline]
pub fn primary_transform(shape: &ShapeParams, pointer: PointerState, t: f32) -> ShapeTransform {
    ShapeTransform {
        translate: shape.offset(pointer, t),
        scale: shape.scale,
        opacity: None,
    }
}

pub fn extra_transform(shape: &ShapeParams, pointer: PointerState, t: f32) -> ShapeTransform {
    let translate = shape.offset(pointer, t);
    ShapeTransform {
        translate,
        scale: shape.scale,
        opacity: Some(extra_opacity(translate.length())),
    }
}

/// Opacity for an extra shape displaced `distance` px from its rest position.
#[inline]
pub fn extra_opacity(distance: f32) -> f32 {
    let o = EXTRA_OPACITY_MAX - distance / EXTRA_OPACITY_FALLOFF_PX;
    // NaN distances fall back to the floor rather than propagating
    if o.is_nan() {
        return EXTRA_OPACITY_MIN;
    }
    o.clamp(EXTRA_OPACITY_MIN, EXTRA_OPACITY_MAX)
}
