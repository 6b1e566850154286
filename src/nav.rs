use crate::core::scroll::{
    is_section_anchor, scroll_top_visible, section_is_active, HeaderMode, HeaderScroll,
    SmoothScroll,
};
use crate::dom;
use crate::events::scroll::on_scroll;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Mobile menu button, the menu it opens and the page body it locks.
#[derive(Clone)]
struct MobileMenu {
    toggle: web::HtmlElement,
    menu: web::HtmlElement,
    body: web::HtmlElement,
}

impl MobileMenu {
    fn find(document: &web::Document) -> Option<Self> {
        Some(Self {
            toggle: dom::query(document, ".menu-toggle")?,
            menu: dom::query(document, ".nav-menu")?,
            body: document.body()?,
        })
    }

    fn is_open(&self) -> bool {
        self.menu.class_list().contains("active")
    }

    fn toggle(&self) {
        _ = self.toggle.class_list().toggle("active");
        _ = self.menu.class_list().toggle("active");
        _ = self.body.class_list().toggle("no-scroll");

        let expanded = self.toggle.get_attribute("aria-expanded").as_deref() == Some("true");
        _ = self
            .toggle
            .set_attribute("aria-expanded", if expanded { "false" } else { "true" });

        if let Some(icon) = dom::query(&self.toggle, ".fa-bars, .fa-times") {
            let cl = icon.class_list();
            _ = cl.toggle("fa-bars");
            _ = cl.toggle("fa-times");
        }
    }

    fn close(&self) {
        if !self.is_open() {
            return;
        }
        _ = self.toggle.class_list().remove_1("active");
        _ = self.menu.class_list().remove_1("active");
        _ = self.body.class_list().remove_1("no-scroll");
    }
}

pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let menu = MobileMenu::find(document);
    if menu.is_none() {
        log::info!("[nav] no mobile menu on this page");
    }
    wire_menu(document, menu.clone());
    wire_anchor_scrolling(window, document, menu);
    wire_header(window, document);
    wire_active_link(window, document);
    wire_scroll_top(window, document);
    Ok(())
}

fn wire_menu(document: &web::Document, menu: Option<MobileMenu>) {
    let Some(menu) = menu else {
        return;
    };
    let m = menu.clone();
    dom::add_listener(&menu.toggle, "click", move |_ev: web::MouseEvent| m.toggle());

    for link in dom::query_all(document, ".nav-link") {
        let m = menu.clone();
        dom::add_listener(&link, "click", move |_ev: web::MouseEvent| m.close());
    }
}

fn wire_anchor_scrolling(window: &web::Window, document: &web::Document, menu: Option<MobileMenu>) {
    for anchor in dom::query_all(document, "a[href^=\"#\"]") {
        let (w, d, m, a) = (window.clone(), document.clone(), menu.clone(), anchor.clone());
        dom::add_listener(&anchor, "click", move |ev: web::MouseEvent| {
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            if !is_section_anchor(&href) {
                return;
            }
            ev.prevent_default();
            let Some(target) = dom::query(&d, &href) else {
                return;
            };
            if let Some(m) = &m {
                m.close();
            }
            let header_height = dom::query(&d, ".header")
                .map(|h| h.offset_height() as f64)
                .unwrap_or(0.0);
            let start = dom::scroll_y(&w);
            let element_top = target.get_bounding_client_rect().top() + start;
            animate_scroll(&w, SmoothScroll::to_element(start, element_top, header_height), href);
        });
    }
}

/// Step `scroll` on animation frames; the closure is released once the final
/// position is written and the URL fragment updated.
fn animate_scroll(window: &web::Window, scroll: SmoothScroll, fragment: String) {
    let step: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let step_clone = step.clone();
    let w = window.clone();
    let mut started_at: Option<f64> = None;
    *step.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let t0 = *started_at.get_or_insert(now);
        let (y, done) = scroll.position_at(now - t0);
        w.scroll_to_with_x_and_y(0.0, y);
        if !done {
            if let Some(cb) = step_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
            return;
        }
        if let Ok(history) = w.history() {
            _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&fragment));
        }
        step_clone.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>));
    if let Some(cb) = step.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

fn wire_header(window: &web::Window, document: &web::Document) {
    let Some(header) = dom::query(document, ".header") else {
        log::warn!("[nav] missing .header");
        return;
    };
    let mut state = HeaderScroll::default();
    on_scroll(window, move |y| {
        state.update(y);
        let cl = header.class_list();
        for mode in [HeaderMode::ScrollingDown, HeaderMode::ScrollingUp] {
            if let Some(class) = mode.class() {
                _ = if state.mode == mode {
                    cl.add_1(class)
                } else {
                    cl.remove_1(class)
                };
            }
        }
        _ = if state.shadow {
            cl.add_1("shadow")
        } else {
            cl.remove_1("shadow")
        };
    });
}

fn wire_active_link(window: &web::Window, document: &web::Document) {
    // (section, its nav link)
    let pairs: Vec<(web::HtmlElement, web::HtmlElement)> = dom::query_all(document, "section")
        .into_iter()
        .filter_map(|section| {
            let id = section.id();
            if id.is_empty() {
                return None;
            }
            let link = dom::query(document, &format!(".nav-link[href*=\"{id}\"]"))?;
            Some((section, link))
        })
        .collect();
    if pairs.is_empty() {
        return;
    }
    on_scroll(window, move |y| {
        for (section, link) in &pairs {
            let active = section_is_active(
                y,
                section.offset_top() as f64,
                section.offset_height() as f64,
            );
            _ = if active {
                link.class_list().add_1("active")
            } else {
                link.class_list().remove_1("active")
            };
        }
    });
}

fn wire_scroll_top(window: &web::Window, document: &web::Document) {
    let Some(button) = document
        .get_element_by_id("scrollTop")
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    let b = button.clone();
    on_scroll(window, move |y| {
        _ = if scroll_top_visible(y) {
            b.class_list().add_1("active")
        } else {
            b.class_list().remove_1("active")
        };
    });

    let w = window.clone();
    dom::add_listener(&button, "click", move |ev: web::MouseEvent| {
        ev.prevent_default();
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    });
}
