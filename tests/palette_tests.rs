// Host-side tests for hero palette selection.

#![allow(dead_code)]
mod palette {
    include!("../src/core/palette.rs");
}

use palette::*;

#[test]
fn hours_fall_into_four_buckets() {
    for h in 0..6 {
        assert_eq!(DayPeriod::from_hour(h), DayPeriod::Night, "hour {h}");
    }
    for h in 6..12 {
        assert_eq!(DayPeriod::from_hour(h), DayPeriod::Morning, "hour {h}");
    }
    for h in 12..17 {
        assert_eq!(DayPeriod::from_hour(h), DayPeriod::Afternoon, "hour {h}");
    }
    for h in 17..20 {
        assert_eq!(DayPeriod::from_hour(h), DayPeriod::Evening, "hour {h}");
    }
    for h in 20..24 {
        assert_eq!(DayPeriod::from_hour(h), DayPeriod::Night, "hour {h}");
    }
    assert_eq!(DayPeriod::from_hour(99), DayPeriod::Night);
}

#[test]
fn dark_theme_overrides_the_clock() {
    for h in 0..24 {
        assert_eq!(palette_for(Some("dark"), h), &DARK);
    }
}

#[test]
fn other_themes_follow_the_clock() {
    assert_eq!(palette_for(None, 8), &MORNING);
    assert_eq!(palette_for(Some("light"), 13), &AFTERNOON);
    assert_eq!(palette_for(Some(""), 18), &EVENING);
    assert_eq!(palette_for(None, 2), &NIGHT);
}

#[test]
fn properties_cover_every_custom_property() {
    let props = MORNING.properties();
    let names: Vec<&str> = props.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, PALETTE_PROPERTIES.to_vec());
    assert_eq!(props[0], ("--hero-shape-1", "rgba(255,200,120,0.95)"));
    assert_eq!(props[4], ("--hero-gradient-b", "rgba(255,210,140,0.06)"));

    for palette in [&MORNING, &AFTERNOON, &EVENING, &NIGHT, &DARK] {
        for (name, value) in palette.properties() {
            assert!(name.starts_with("--hero-"));
            assert!(value.starts_with("rgba(") && value.ends_with(')'));
        }
    }
}

#[test]
fn palettes_are_distinct() {
    let all = [&MORNING, &AFTERNOON, &EVENING, &NIGHT, &DARK];
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
