use crate::core::scroll::{should_reveal, stagger_delay_ms};
use crate::dom;
use crate::events::scroll::on_scroll;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FADE_TRANSITION: &str = "opacity 0.6s ease-out, transform 0.6s ease-out";

/// Elements that fade up from `translateY(30px)` when scrolled into view.
struct FadeGroup {
    items: Vec<(web::HtmlElement, bool)>,
    staggered: bool,
}

impl FadeGroup {
    fn new(elements: Vec<web::HtmlElement>, staggered: bool) -> Self {
        for el in &elements {
            _ = dom::set_style(el, "opacity", "0");
            _ = dom::set_style(el, "transform", "translateY(30px)");
            _ = dom::set_style(el, "transition", FADE_TRANSITION);
        }
        Self {
            items: elements.into_iter().map(|el| (el, false)).collect(),
            staggered,
        }
    }

    fn check(&mut self, viewport_height: f64) {
        for (i, (el, revealed)) in self.items.iter_mut().enumerate() {
            if *revealed || !should_reveal(el.get_bounding_client_rect().top(), viewport_height) {
                continue;
            }
            *revealed = true;
            if self.staggered {
                let el = el.clone();
                if let Err(e) = dom::set_timeout(stagger_delay_ms(i), move || show(&el)) {
                    log::error!("[reveal] stagger timer failed: {:?}", e);
                }
            } else {
                show(el);
            }
        }
    }
}

fn show(el: &web::HtmlElement) {
    _ = dom::set_style(el, "opacity", "1");
    _ = dom::set_style(el, "transform", "translateY(0)");
}

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    wire_timeline(window, document);
    wire_fades(window, document);
    wire_loaded_class(window, document);
    wire_lazy_images(window, document)
}

fn wire_timeline(window: &web::Window, document: &web::Document) {
    let items = dom::query_all(document, ".timeline-item");
    if items.is_empty() {
        return;
    }
    let w = window.clone();
    on_scroll(window, move |_y| {
        let vh = viewport_height(&w);
        for item in &items {
            if should_reveal(item.get_bounding_client_rect().top(), vh) {
                _ = item.class_list().add_1("visible");
            }
        }
    });
}

fn wire_fades(window: &web::Window, document: &web::Document) {
    let contact: Vec<web::HtmlElement> = [".contact-form", ".contact-info"]
        .iter()
        .filter_map(|sel| dom::query(document, sel))
        .collect();
    let mut groups = [
        FadeGroup::new(dom::query_all(document, ".skill-card"), false),
        FadeGroup::new(dom::query_all(document, ".education-card"), true),
        FadeGroup::new(contact, false),
    ];
    let w = window.clone();
    on_scroll(window, move |_y| {
        let vh = viewport_height(&w);
        for group in groups.iter_mut() {
            group.check(vh);
        }
    });
}

fn viewport_height(window: &web::Window) -> f64 {
    dom::viewport_size(window).y as f64
}

/// Swap `data-src` into `src` as images approach the viewport.
fn wire_lazy_images(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let images = dom::query_all(document, "img[data-src]");
    if images.is_empty() {
        return Ok(());
    }
    if !js_sys::Reflect::has(window, &"IntersectionObserver".into()).unwrap_or(false) {
        log::info!("[reveal] IntersectionObserver unsupported; images load eagerly");
        return Ok(());
    }

    let callback = Closure::wrap(Box::new(on_intersect)
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let observer = web::IntersectionObserver::new(callback.as_ref().unchecked_ref())
        .map_err(dom::js_err)?;
    callback.forget();

    for img in &images {
        observer.observe(img);
    }
    log::info!("[reveal] lazy-loading {} images", images.len());
    Ok(())
}

fn on_intersect(entries: js_sys::Array, observer: web::IntersectionObserver) {
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
            continue;
        };
        if !entry.is_intersecting() {
            continue;
        }
        let target = entry.target();
        if let Some(img) = target.dyn_ref::<web::HtmlImageElement>() {
            if let Some(src) = img.get_attribute("data-src") {
                img.set_src(&src);
                _ = img.remove_attribute("data-src");
                _ = img.class_list().add_1("fade-in");
            }
        }
        observer.unobserve(&target);
    }
}

fn wire_loaded_class(window: &web::Window, document: &web::Document) {
    let d = document.clone();
    let mark = move || {
        if let Some(body) = d.body() {
            _ = body.class_list().add_1("loaded");
        }
    };
    if document.ready_state() == "complete" {
        mark();
        return;
    }
    let cb = Closure::once_into_js(mark);
    _ = window.add_event_listener_with_callback("load", cb.unchecked_ref());
}
