use crate::core::motion::{is_opt_in, motion_start, MotionStart, OneShot};
use crate::dom;
use crate::events::pointer::{self, ViewportPointer};
use crate::frame::{self, HeroFrame};
use instant::Instant;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const PRIMARY_SELECTORS: [&str; 3] = [
    ".hero-bg .bg-shape.s1",
    ".hero-bg .bg-shape.s2",
    ".hero-bg .bg-shape.s3",
];

const EXTRA_SELECTORS: [&str; 6] = [
    ".hero-bg .bg-shape.s4",
    ".hero-bg .bg-shape.s5",
    ".hero-bg .bg-shape.s6",
    ".hero-bg .bg-shape.s7",
    ".hero-bg .bg-shape.s8",
    ".hero-bg .bg-shape.s9",
];

const FORCE_MOTION_ATTR: &str = "data-force-motion";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Start the hero animator now, or arm a one-shot opt-in watch when the
/// user prefers reduced motion.
pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let root = dom::root_element(document)?;
    let prefers_reduced = dom::media_matches(window, REDUCED_MOTION_QUERY);
    let forced =
        is_opt_in(root.get_attribute(FORCE_MOTION_ATTR).as_deref()) || global_force_flag(window);
    log::info!(
        "[hero] prefers-reduced-motion={} forced={}",
        prefers_reduced,
        forced
    );

    match motion_start(prefers_reduced, forced) {
        MotionStart::Immediate => {
            start_animator(window, document);
            Ok(())
        }
        MotionStart::AwaitOptIn => {
            log::info!(
                "[hero] reduced motion preferred; paused until <html {}=\"true\">",
                FORCE_MOTION_ATTR
            );
            watch_opt_in(window, document, &root)
        }
    }
}

// `window.HERO_ANIM_FORCE = true` set by a page script before load
fn global_force_flag(window: &web::Window) -> bool {
    js_sys::Reflect::get(window, &"HERO_ANIM_FORCE".into())
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

fn watch_opt_in(
    window: &web::Window,
    document: &web::Document,
    root: &web::Element,
) -> anyhow::Result<()> {
    let subscription: Rc<RefCell<Option<dom::Subscription>>> = Rc::new(RefCell::new(None));

    let (w, d) = (window.clone(), document.clone());
    let mut gate = OneShot::new(move || start_animator(&w, &d));

    let sub = subscription.clone();
    let root_cb = root.clone();
    let handle = dom::observe_attribute(root, FORCE_MOTION_ATTR, move || {
        let opted = is_opt_in(root_cb.get_attribute(FORCE_MOTION_ATTR).as_deref());
        if gate.observe(opted) {
            log::info!("[hero] {} set; animator started", FORCE_MOTION_ATTR);
            // dropping the handle disconnects the observer
            sub.borrow_mut().take();
        }
    })?;
    *subscription.borrow_mut() = Some(handle);
    Ok(())
}

fn start_animator(window: &web::Window, document: &web::Document) {
    let found: Vec<web::HtmlElement> = PRIMARY_SELECTORS
        .iter()
        .filter_map(|sel| dom::query(document, sel))
        .collect();
    let Ok(primaries) = <[web::HtmlElement; 3]>::try_from(found) else {
        log::warn!("[hero] missing primary shape elements; animator not started");
        return;
    };
    let extras: SmallVec<[web::HtmlElement; 6]> = EXTRA_SELECTORS
        .iter()
        .filter_map(|sel| dom::query(document, sel))
        .collect();

    let pointer_state = Rc::new(RefCell::new(ViewportPointer::default()));
    pointer::wire_viewport_pointer(window, pointer_state.clone());

    log::info!("[hero] animator running with {} extra shapes", extras.len());
    frame::start_loop(Rc::new(HeroFrame {
        primaries,
        extras,
        pointer: pointer_state,
        started: Instant::now(),
    }));
}
