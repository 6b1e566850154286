#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod contact;
mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod nav;
mod overlay;
mod reveal;
mod theme;
mod tilt;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;

    // The palette only touches <html>, so it does not wait for the body.
    run("palette", theme::start_palette(&document));

    let d = document.clone();
    dom::on_ready(&document, move || {
        run("theme", theme::init(&window, &d));
        run("hero", hero::init(&window, &d));
        run("nav", nav::init(&window, &d));
        run("reveal", reveal::init(&window, &d));
        run("tilt", tilt::init(&d));
        run("contact", contact::init(&d));
    });
    Ok(())
}

// Components are independent: one failing to initialize leaves the rest up.
fn run(component: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{}] init error: {:?}", component, e);
    }
}
