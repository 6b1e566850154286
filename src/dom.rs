use anyhow::anyhow;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

pub fn root_element(document: &web::Document) -> anyhow::Result<web::Element> {
    document
        .document_element()
        .ok_or_else(|| anyhow!("no document element"))
}

/// First element matching `selector` as an `HtmlElement`. Invalid selectors
/// count as no match.
pub fn query(parent: &impl AsRef<web::Node>, selector: &str) -> Option<web::HtmlElement> {
    let node: &web::Node = parent.as_ref();
    let found = if let Some(doc) = node.dyn_ref::<web::Document>() {
        doc.query_selector(selector)
    } else if let Some(el) = node.dyn_ref::<web::Element>() {
        el.query_selector(selector)
    } else {
        return None;
    };
    found
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) -> anyhow::Result<()> {
    el.style().set_property(property, value).map_err(js_err)
}

#[inline]
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f64 {
    window.page_y_offset().unwrap_or(0.0)
}

/// Whether a media query currently matches; unsupported queries do not.
pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn add_listener<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Like [`add_listener`] but marked passive, for high-rate move events.
pub fn add_passive_listener<E>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn set_timeout(ms: i32, f: impl FnOnce() + 'static) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let cb = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms)
        .map_err(js_err)
}

pub fn set_interval(ms: i32, f: impl FnMut() + 'static) -> anyhow::Result<i32> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(id)
}

/// Live attribute watch on one element. Dropping it disconnects the observer.
pub struct Subscription {
    observer: web::MutationObserver,
}

impl Subscription {
    /// Keep watching for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Call `handler` whenever `attribute` changes on `target`.
pub fn observe_attribute(
    target: &web::Element,
    attribute: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<Subscription> {
    let callback = Closure::wrap(Box::new(move |_records: js_sys::Array| handler())
        as Box<dyn FnMut(js_sys::Array)>);
    let observer =
        web::MutationObserver::new(callback.as_ref().unchecked_ref()).map_err(js_err)?;
    // The observer is disconnected through `Subscription`; the callback itself
    // stays allocated so a disconnect from inside it is safe.
    callback.forget();

    let init = web::MutationObserverInit::new();
    init.set_attributes(true);
    let filter = js_sys::Array::of1(&JsValue::from_str(attribute));
    init.set_attribute_filter(&filter);
    observer
        .observe_with_options(target, &init)
        .map_err(js_err)?;
    Ok(Subscription { observer })
}

/// Run `f` once the DOM is parsed.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    _ = document.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}
