use crate::constants::PALETTE_REFRESH_MS;
use crate::core::palette::{is_dark_theme, palette_for};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

const THEME_ATTR: &str = "data-theme";

/// Theme toggle button. The initial theme follows `prefers-color-scheme`.
pub fn init(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let toggle = document
        .get_element_by_id("themeToggle")
        .ok_or_else(|| anyhow!("missing #themeToggle"))?;
    let icon = toggle.query_selector("i").map_err(dom::js_err)?;
    let root = dom::root_element(document)?;

    if dom::media_matches(window, "(prefers-color-scheme: dark)") {
        set_dark(&root, icon.as_ref(), true);
    }

    dom::add_listener(&toggle, "click", move |_ev: web::MouseEvent| {
        let dark = is_dark_theme(root.get_attribute(THEME_ATTR).as_deref());
        set_dark(&root, icon.as_ref(), !dark);
    });
    Ok(())
}

fn set_dark(root: &web::Element, icon: Option<&web::Element>, dark: bool) {
    if dark {
        _ = root.set_attribute(THEME_ATTR, "dark");
    } else {
        _ = root.remove_attribute(THEME_ATTR);
    }
    if let Some(icon) = icon {
        let (from, to) = if dark {
            ("fa-moon", "fa-sun")
        } else {
            ("fa-sun", "fa-moon")
        };
        let cl = icon.class_list();
        _ = cl.remove_1(from);
        _ = cl.add_1(to);
    }
    log::info!("[theme] {}", if dark { "dark" } else { "light" });
}

/// Write the hero palette custom properties for the current theme and hour.
pub fn apply_palette(document: &web::Document) -> anyhow::Result<()> {
    let root: web::HtmlElement = dom::root_element(document)?
        .dyn_into()
        .map_err(|_| anyhow!("document element is not an HTML element"))?;
    let theme = root.get_attribute(THEME_ATTR);
    let hour = js_sys::Date::new_0().get_hours();
    let palette = palette_for(theme.as_deref(), hour);
    let style = root.style();
    for (name, value) in palette.properties() {
        style.set_property(name, value).map_err(dom::js_err)?;
    }
    Ok(())
}

/// Apply the hero palette now, then again every few minutes and whenever
/// `data-theme` changes.
pub fn start_palette(document: &web::Document) -> anyhow::Result<()> {
    apply_palette(document)?;

    let d = document.clone();
    dom::set_interval(PALETTE_REFRESH_MS, move || {
        if let Err(e) = apply_palette(&d) {
            log::error!("[theme] palette refresh failed: {:?}", e);
        }
    })?;

    let d = document.clone();
    dom::observe_attribute(&dom::root_element(document)?, THEME_ATTR, move || {
        if let Err(e) = apply_palette(&d) {
            log::error!("[theme] palette update failed: {:?}", e);
        }
    })?
    .forget();
    Ok(())
}
