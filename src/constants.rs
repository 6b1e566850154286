/// Hero, tilt and scroll tuning constants.
///
/// Per-shape motion lives in data tables so the frame loop is a single
/// formula applied to every row.
// Scales elapsed time only; amplitudes are unaffected, so faster also means
// the same distance covered more often.
pub const HERO_SPEED_MULTIPLIER: f32 = 2.0;

/// One axis of autonomous drift: `trig(t * freq + phase) * amp`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub freq: f32,
    pub phase: f32,
    pub amp: f32,
}

/// Drift on both axes plus how strongly the shape follows the pointer.
/// The x axis uses `sin`, the y axis `cos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParams {
    pub x: Oscillator,
    pub y: Oscillator,
    pub parallax: f32,
    pub scale: f32,
}

const fn osc(freq: f32, phase: f32, amp: f32) -> Oscillator {
    Oscillator { freq, phase, amp }
}

// Primary shapes s1..s3, nearest first (largest parallax multiplier).
pub const PRIMARY_SHAPES: [ShapeParams; 3] = [
    ShapeParams {
        x: osc(1.1, 0.0, 28.0),
        y: osc(1.3, 0.0, 22.0),
        parallax: 40.0,
        scale: 1.06,
    },
    ShapeParams {
        x: osc(1.5, 1.2, 34.0),
        y: osc(1.1, 0.5, 28.0),
        parallax: 26.0,
        scale: 1.03,
    },
    ShapeParams {
        x: osc(0.9, 2.4, 42.0),
        y: osc(1.0, 1.1, 34.0),
        parallax: 16.0,
        scale: 1.02,
    },
];

// Extra shapes s4..s9. Row i: x = (0.8 + 0.12i, i, amp_i),
// y = (1.0 + 0.1i, 0.7i, 0.9 * amp_i), scale = 1 + 0.02 * (6 - i).
pub const EXTRA_SHAPES: [ShapeParams; 6] = [
    ShapeParams {
        x: osc(0.8, 0.0, 18.0),
        y: osc(1.0, 0.0, 16.2),
        parallax: 22.0,
        scale: 1.12,
    },
    ShapeParams {
        x: osc(0.92, 1.0, 14.0),
        y: osc(1.1, 0.7, 12.6),
        parallax: 18.0,
        scale: 1.10,
    },
    ShapeParams {
        x: osc(1.04, 2.0, 12.0),
        y: osc(1.2, 1.4, 10.8),
        parallax: 14.0,
        scale: 1.08,
    },
    ShapeParams {
        x: osc(1.16, 3.0, 20.0),
        y: osc(1.3, 2.1, 18.0),
        parallax: 20.0,
        scale: 1.06,
    },
    ShapeParams {
        x: osc(1.28, 4.0, 15.0),
        y: osc(1.4, 2.8, 13.5),
        parallax: 16.0,
        scale: 1.04,
    },
    ShapeParams {
        x: osc(1.4, 5.0, 10.0),
        y: osc(1.5, 3.5, 9.0),
        parallax: 12.0,
        scale: 1.02,
    },
];

// Extra-shape opacity: 0.5 at the rest position, fading with radial offset.
pub const EXTRA_OPACITY_MIN: f32 = 0.12;
pub const EXTRA_OPACITY_MAX: f32 = 0.5;
pub const EXTRA_OPACITY_FALLOFF_PX: f32 = 600.0;

// Tilt cards
pub const TILT_MAX_DEG: f32 = 10.0;
pub const TILT_HOVER_SCALE: f32 = 1.02;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const TILT_SHADOW_OFFSET_PX: f32 = 15.0;
pub const TILT_SHADOW_BLUR_PX: f32 = 20.0;
pub const TILT_SHADOW_OPACITY: f32 = 0.2;
pub const TILT_INNER_SHIFT_PX: f32 = 5.0;
pub const TILT_INNER_DEPTH_PX: f32 = 20.0;
// Resting shadow: 0 4px 8px rgba(0,0,0,0.1)
pub const TILT_REST_SHADOW_Y_PX: f32 = 4.0;
pub const TILT_REST_SHADOW_BLUR_PX: f32 = 8.0;
pub const TILT_REST_SHADOW_OPACITY: f32 = 0.1;

// Scrolling
pub const SMOOTH_SCROLL_MS: f64 = 800.0;
pub const HEADER_SHADOW_AFTER_PX: f64 = 10.0;
pub const NAV_LOOKAHEAD_PX: f64 = 200.0;
pub const SCROLL_TOP_AFTER_PX: f64 = 300.0;
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;
pub const REVEAL_STAGGER_MS: i32 = 100;

// Hero palette refresh (time-of-day buckets drift while the page stays open)
pub const PALETTE_REFRESH_MS: i32 = 5 * 60 * 1000;

// Contact form
pub const MESSAGE_DISMISS_MS: i32 = 5000;
pub const EMAIL_PUBLIC_KEY: &str = "5dYuxXD5cPDBn8OFl";
pub const EMAIL_SERVICE_ID: &str = "service_8zldrlr";
pub const EMAIL_TEMPLATE_ID: &str = "template_a26dh6i";
pub const EMAIL_SUCCESS_STATUS: u16 = 200;
