use crate::core::tilt::{tilt_for_pointer, CardRect, TiltTransform};
use crate::dom;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

const CARD_SELECTOR: &str = ".skill-card, .education-card, .project-card, .timeline-content";
const INNER_CLASS: &str = "tilt-inner";

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all(document, CARD_SELECTOR);
    for card in &cards {
        _ = card.class_list().add_1("tilt-effect");
        let inner = ensure_inner(document, card)?;
        wire_card(card, inner);
    }
    log::info!("[tilt] {} cards", cards.len());
    Ok(())
}

/// Wrap the card's children in a `.tilt-inner` container unless one exists.
/// Children are moved, not re-parsed, so their listeners survive.
fn ensure_inner(
    document: &web::Document,
    card: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    if let Some(inner) = dom::query(card, &format!(".{INNER_CLASS}")) {
        return Ok(inner);
    }
    let inner: web::HtmlElement = document
        .create_element("div")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("div is not an HTML element"))?;
    inner.set_class_name(INNER_CLASS);
    while let Some(child) = card.first_child() {
        inner.append_child(&child).map_err(dom::js_err)?;
    }
    card.append_child(&inner).map_err(dom::js_err)?;
    Ok(inner)
}

fn wire_card(card: &web::HtmlElement, inner: web::HtmlElement) {
    let c = card.clone();
    let i = inner.clone();
    dom::add_listener(card, "mousemove", move |ev: web::MouseEvent| {
        let r = c.get_bounding_client_rect();
        let rect = CardRect {
            left: r.left() as f32,
            top: r.top() as f32,
            width: r.width() as f32,
            height: r.height() as f32,
        };
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        apply_or_log(&c, &i, &tilt_for_pointer(client, &rect));
    });

    let c = card.clone();
    dom::add_listener(card, "mouseleave", move |_ev: web::MouseEvent| {
        apply_or_log(&c, &inner, &TiltTransform::rest());
    });
}

fn apply_or_log(card: &web::HtmlElement, inner: &web::HtmlElement, tilt: &TiltTransform) {
    if let Err(e) = apply(card, inner, tilt) {
        log::error!("[tilt] style update failed: {:?}", e);
    }
}

fn apply(
    card: &web::HtmlElement,
    inner: &web::HtmlElement,
    tilt: &TiltTransform,
) -> anyhow::Result<()> {
    dom::set_style(card, "transform", &tilt.card_transform())?;
    dom::set_style(card, "box-shadow", &tilt.box_shadow())?;
    dom::set_style(inner, "transform", &tilt.inner_transform())
}
