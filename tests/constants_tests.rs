// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_timing_is_fixed() {
    assert_eq!(HERO_SPEED_MULTIPLIER, 2.0);
    assert_eq!(PALETTE_REFRESH_MS, 300_000);
    assert_eq!(MESSAGE_DISMISS_MS, 5000);
}

#[test]
fn primary_parallax_decreases_with_depth() {
    let m: Vec<f32> = PRIMARY_SHAPES.iter().map(|s| s.parallax).collect();
    assert_eq!(m, vec![40.0, 26.0, 16.0]);
    let scales: Vec<f32> = PRIMARY_SHAPES.iter().map(|s| s.scale).collect();
    assert_eq!(scales, vec![1.06, 1.03, 1.02]);
}

#[test]
fn all_oscillators_are_positive() {
    for s in PRIMARY_SHAPES.iter().chain(EXTRA_SHAPES.iter()) {
        assert!(s.x.freq > 0.0 && s.y.freq > 0.0);
        assert!(s.x.amp > 0.0 && s.y.amp > 0.0);
        assert!(s.parallax > 0.0);
        assert!(s.scale >= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn opacity_band_and_tilt_limits_are_sane() {
    assert!(EXTRA_OPACITY_MIN < EXTRA_OPACITY_MAX);
    assert!(EXTRA_OPACITY_MAX <= 1.0);
    assert!(EXTRA_OPACITY_FALLOFF_PX > 0.0);

    assert_eq!(TILT_MAX_DEG, 10.0);
    assert!(TILT_HOVER_SCALE > 1.0);
    assert!(TILT_SHADOW_OPACITY > TILT_REST_SHADOW_OPACITY);
    assert!(TILT_INNER_DEPTH_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_thresholds_are_ordered() {
    assert!(HEADER_SHADOW_AFTER_PX < SCROLL_TOP_AFTER_PX);
    assert!(REVEAL_VIEWPORT_FRACTION > 0.0 && REVEAL_VIEWPORT_FRACTION < 1.0);
    assert!(SMOOTH_SCROLL_MS > 0.0);
}
