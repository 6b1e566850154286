use crate::dom;
use web_sys as web;

/// Call `handler` with the page's vertical scroll offset on every scroll
/// event, and once immediately so initial state matches a reloaded,
/// already-scrolled page.
pub fn on_scroll(window: &web::Window, mut handler: impl FnMut(f64) + 'static) {
    handler(dom::scroll_y(window));
    let w = window.clone();
    dom::add_passive_listener(window, "scroll", move |_ev: web::Event| {
        handler(dom::scroll_y(&w));
    });
}
