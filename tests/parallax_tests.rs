// Host-side tests for the hero parallax math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod parallax {
    include!("../src/core/parallax.rs");
}

use constants::*;
use glam::Vec2;
use parallax::*;

fn at(x: f32, y: f32) -> PointerState {
    PointerState {
        pos: Vec2::new(x, y),
    }
}

#[test]
fn pointer_normalizes_against_viewport() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(
        PointerState::from_client(Vec2::new(400.0, 300.0), vp),
        at(0.0, 0.0)
    );
    assert_eq!(
        PointerState::from_client(Vec2::new(0.0, 0.0), vp),
        at(-1.0, -1.0)
    );
    assert_eq!(
        PointerState::from_client(Vec2::new(800.0, 600.0), vp),
        at(1.0, 1.0)
    );
    let quarter = PointerState::from_client(Vec2::new(200.0, 450.0), vp);
    assert!(quarter.pos.abs_diff_eq(Vec2::new(-0.5, 0.5), 1e-6));
}

#[test]
fn pointer_with_empty_viewport_is_centered() {
    let p = PointerState::from_client(Vec2::new(120.0, 40.0), Vec2::ZERO);
    assert_eq!(p, PointerState::default());
}

#[test]
fn speed_multiplier_scales_time_only() {
    assert_eq!(scaled_time(0.0), 0.0);
    assert!((scaled_time(1.5) - 3.0).abs() < 1e-6);

    // drift never exceeds the table amplitude, however far time has run
    let shape = &PRIMARY_SHAPES[0];
    for i in 0..50 {
        let t = scaled_time(i as f32 * 0.37);
        let tr = primary_transform(shape, at(0.0, 0.0), t);
        assert!(tr.translate.x.abs() <= shape.x.amp + 1e-4);
        assert!(tr.translate.y.abs() <= shape.y.amp + 1e-4);
    }
}

#[test]
fn primary_transform_is_deterministic() {
    let p = at(0.3, -0.7);
    for shape in PRIMARY_SHAPES.iter() {
        for t in [0.0, 0.25, 1.0, 17.5, 1234.0] {
            assert_eq!(
                primary_transform(shape, p, t),
                primary_transform(shape, p, t)
            );
        }
    }
}

#[test]
fn centered_pointer_at_start_is_pure_drift() {
    let tr = primary_transform(&PRIMARY_SHAPES[0], at(0.0, 0.0), 0.0);
    // sin(0) * 28, cos(0) * 22
    assert_eq!(tr.translate, Vec2::new(0.0, 22.0));
    assert_eq!(tr.scale, 1.06);
    assert_eq!(tr.opacity, None);

    for shape in PRIMARY_SHAPES.iter() {
        let tr = primary_transform(shape, at(0.0, 0.0), 0.0);
        assert_eq!(tr.translate, shape.drift(0.0));
    }
}

#[test]
fn parallax_weakens_with_depth() {
    let t = 2.0;
    let shifts: Vec<f32> = PRIMARY_SHAPES
        .iter()
        .map(|s| {
            let moved = primary_transform(s, at(1.0, 0.0), t).translate;
            let rest = primary_transform(s, at(0.0, 0.0), t).translate;
            moved.x - rest.x
        })
        .collect();
    assert!((shifts[0] - 40.0).abs() < 1e-4);
    assert!((shifts[1] - 26.0).abs() < 1e-4);
    assert!((shifts[2] - 16.0).abs() < 1e-4);
}

#[test]
fn primary_drift_matches_lissajous_terms() {
    let t: f32 = 1.7;
    let s2 = &PRIMARY_SHAPES[1];
    let expected = Vec2::new((t * 1.5 + 1.2).sin() * 34.0, (t * 1.1 + 0.5).cos() * 28.0);
    assert!(s2.drift(t).abs_diff_eq(expected, 1e-4));

    let s3 = &PRIMARY_SHAPES[2];
    let p = at(-0.5, 0.25);
    let expected = Vec2::new(
        -0.5 * 16.0 + (t * 0.9 + 2.4).sin() * 42.0,
        0.25 * 16.0 + (t * 1.0 + 1.1).cos() * 34.0,
    );
    assert!(primary_transform(s3, p, t)
        .translate
        .abs_diff_eq(expected, 1e-4));
}

#[test]
fn css_transform_uses_translate3d_and_scale() {
    let tr = primary_transform(&PRIMARY_SHAPES[0], at(0.0, 0.0), 0.0);
    assert_eq!(tr.css_transform(), "translate3d(0px, 22px, 0) scale(1.06)");
}

#[test]
fn extra_opacity_is_clamped() {
    assert_eq!(extra_opacity(0.0), 0.5);
    assert_eq!(extra_opacity(1.0e9), 0.12);
    assert_eq!(extra_opacity(f32::INFINITY), 0.12);
    assert_eq!(extra_opacity(f32::NAN), 0.12);
    assert!((extra_opacity(60.0) - 0.4).abs() < 1e-6);
    // 0.5 - 228/600 = 0.12 exactly at the floor
    assert!((extra_opacity(228.0) - 0.12).abs() < 1e-6);
}

#[test]
fn extra_transforms_stay_in_opacity_band() {
    for shape in EXTRA_SHAPES.iter() {
        for i in 0..40 {
            let t = i as f32 * 0.9;
            for p in [at(-1.0, -1.0), at(0.0, 0.0), at(1.0, 0.5), at(0.2, 1.0)] {
                let tr = extra_transform(shape, p, t);
                let o = tr.opacity.expect("extras carry opacity");
                assert!((EXTRA_OPACITY_MIN..=EXTRA_OPACITY_MAX).contains(&o));
                assert!((o - extra_opacity(tr.translate.length())).abs() < 1e-6);
            }
        }
    }
}

#[test]
fn extra_table_follows_index_pattern() {
    let amps = [18.0, 14.0, 12.0, 20.0, 15.0, 10.0];
    let mults = [22.0, 18.0, 14.0, 20.0, 16.0, 12.0];
    for (i, s) in EXTRA_SHAPES.iter().enumerate() {
        let fi = i as f32;
        assert!((s.x.freq - (0.8 + 0.12 * fi)).abs() < 1e-5, "x freq row {i}");
        assert!((s.x.phase - fi).abs() < 1e-6);
        assert!((s.x.amp - amps[i]).abs() < 1e-6);
        assert!((s.y.freq - (1.0 + 0.1 * fi)).abs() < 1e-5, "y freq row {i}");
        assert!((s.y.phase - 0.7 * fi).abs() < 1e-5);
        assert!((s.y.amp - amps[i] * 0.9).abs() < 1e-4);
        assert_eq!(s.parallax, mults[i]);
        assert!((s.scale - (1.0 + 0.02 * (6.0 - fi))).abs() < 1e-6);
    }
}

#[test]
fn extra_scale_shrinks_with_index() {
    for pair in EXTRA_SHAPES.windows(2) {
        assert!(pair[0].scale > pair[1].scale);
    }
    assert!(EXTRA_SHAPES[5].scale > 1.0);
}
