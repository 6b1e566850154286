use crate::core::parallax::PointerState;
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last known pointer position over the page and the viewport it was
/// normalized against. Owned by one animator instance.
#[derive(Debug, Default, Clone, Copy)]
pub struct ViewportPointer {
    pub pointer: PointerState,
    pub viewport: Vec2,
}

impl ViewportPointer {
    #[inline]
    pub fn track(&mut self, client_x: i32, client_y: i32) {
        self.pointer =
            PointerState::from_client(Vec2::new(client_x as f32, client_y as f32), self.viewport);
    }
}

/// Feed `state` from mouse, touch and pointer movement on the window, and
/// keep its viewport size current on resize.
pub fn wire_viewport_pointer(window: &web::Window, state: Rc<RefCell<ViewportPointer>>) {
    state.borrow_mut().viewport = dom::viewport_size(window);

    let s = state.clone();
    let w = window.clone();
    dom::add_listener(window, "resize", move |_ev: web::Event| {
        s.borrow_mut().viewport = dom::viewport_size(&w);
    });

    // pointermove covers pen input and acts as a fallback where mousemove is
    // synthesized late
    for event in ["mousemove", "pointermove"] {
        let s = state.clone();
        dom::add_passive_listener(window, event, move |ev: web::MouseEvent| {
            s.borrow_mut().track(ev.client_x(), ev.client_y());
        });
    }

    let s = state;
    dom::add_passive_listener(window, "touchmove", move |ev: web::Event| {
        let Some(touch) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
        else {
            return;
        };
        s.borrow_mut().track(touch.client_x(), touch.client_y());
    });
}
