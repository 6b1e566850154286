use crate::constants::{EXTRA_SHAPES, PRIMARY_SHAPES};
use crate::core::parallax::{extra_transform, primary_transform, scaled_time};
use crate::dom;
use crate::events::pointer::ViewportPointer;
use instant::Instant;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct HeroFrame {
    pub primaries: [web::HtmlElement; 3],
    /// Optional shapes present in the document, in order.
    pub extras: SmallVec<[web::HtmlElement; 6]>,
    pub pointer: Rc<RefCell<ViewportPointer>>,
    pub started: Instant,
}

impl HeroFrame {
    pub fn frame(&self) -> anyhow::Result<()> {
        let t = scaled_time(self.started.elapsed().as_secs_f32());
        let pointer = self.pointer.borrow().pointer;

        for (el, shape) in self.primaries.iter().zip(PRIMARY_SHAPES.iter()) {
            let tr = primary_transform(shape, pointer, t);
            dom::set_style(el, "transform", &tr.css_transform())?;
        }

        for (el, shape) in self.extras.iter().zip(EXTRA_SHAPES.iter()) {
            let tr = extra_transform(shape, pointer, t);
            dom::set_style(el, "transform", &tr.css_transform())?;
            if let Some(o) = tr.opacity {
                dom::set_style(el, "opacity", &o.to_string())?;
            }
        }
        Ok(())
    }
}

/// Drive `ctx` from `requestAnimationFrame` for the lifetime of the page.
/// A failing frame is logged and the next one is still scheduled.
pub fn start_loop(ctx: Rc<HeroFrame>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Err(e) = ctx.frame() {
            log::error!("[hero] frame error: {:?}", e);
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[hero] requestAnimationFrame failed: {:?}", e);
        }
    }
}
