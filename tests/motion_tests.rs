// Host-side tests for the reduced-motion gate and one-shot opt-in.

#![allow(dead_code)]
mod motion {
    include!("../src/core/motion.rs");
}

use motion::*;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn start_decision_respects_preference_and_override() {
    assert_eq!(motion_start(false, false), MotionStart::Immediate);
    assert_eq!(motion_start(false, true), MotionStart::Immediate);
    assert_eq!(motion_start(true, true), MotionStart::Immediate);
    assert_eq!(motion_start(true, false), MotionStart::AwaitOptIn);
}

#[test]
fn only_exact_true_opts_in() {
    assert!(is_opt_in(Some("true")));
    assert!(!is_opt_in(Some("TRUE")));
    assert!(!is_opt_in(Some("1")));
    assert!(!is_opt_in(Some("")));
    assert!(!is_opt_in(Some("false")));
    assert!(!is_opt_in(None));
}

#[test]
fn reduced_motion_without_opt_in_never_starts() {
    let starts = Rc::new(Cell::new(0));
    let s = starts.clone();
    let mut gate = OneShot::new(move || s.set(s.get() + 1));

    assert_eq!(motion_start(true, is_opt_in(None)), MotionStart::AwaitOptIn);
    for attr in [None, Some("false"), Some("yes"), None] {
        assert!(!gate.observe(is_opt_in(attr)));
    }
    assert_eq!(starts.get(), 0);
}

#[test]
fn opt_in_after_load_starts_exactly_once() {
    let starts = Rc::new(Cell::new(0));
    let s = starts.clone();
    let mut gate = OneShot::new(move || s.set(s.get() + 1));

    // stands in for the attribute observer: disposed after the first trigger
    let mut watching = true;
    let mut deliveries = 0;
    for attr in [
        Some("false"),
        Some("true"),
        Some("false"),
        Some("true"),
        Some("true"),
    ] {
        if !watching {
            continue;
        }
        deliveries += 1;
        if gate.observe(is_opt_in(attr)) {
            watching = false;
        }
    }
    assert_eq!(starts.get(), 1);
    assert_eq!(deliveries, 2);
    assert!(!watching);
}

#[test]
fn spent_gate_ignores_further_signals() {
    let starts = Rc::new(Cell::new(0));
    let s = starts.clone();
    let mut gate = OneShot::new(move || s.set(s.get() + 1));
    assert!(gate.observe(true));
    assert!(!gate.observe(true));
    assert!(!gate.observe(false));
    assert!(!gate.observe(true));
    assert_eq!(starts.get(), 1);
}
