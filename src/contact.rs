use crate::constants::{EMAIL_PUBLIC_KEY, EMAIL_SERVICE_ID, EMAIL_TEMPLATE_ID, MESSAGE_DISMISS_MS};
use crate::core::contact::{status_outcome, Banner, ContactForm, SendError};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const FORM_ID: &str = "contact-form";
const SUCCESS_ID: &str = "success-message";
const ERROR_ID: &str = "error-message";
const SENDING_LABEL: &str = "<i class=\"fas fa-spinner fa-spin\"></i> Sending...";

// EmailJS browser SDK, loaded by the page as a global `emailjs`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = init)]
    fn emailjs_init(options: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = sendForm)]
    fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &web::HtmlFormElement,
    ) -> Result<js_sys::Promise, JsValue>;
}

pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let Some(form) = document
        .get_element_by_id(FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        log::info!("[contact] no #{} on this page", FORM_ID);
        return Ok(());
    };

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"publicKey".into(), &EMAIL_PUBLIC_KEY.into())
        .map_err(dom::js_err)?;
    if let Err(e) = emailjs_init(&options) {
        // submissions will report the service as unavailable
        log::warn!("[contact] email service not loaded: {:?}", e);
    }

    let state = Rc::new(RefCell::new(ContactForm::new()));
    let (f, d) = (form.clone(), document.clone());
    dom::add_listener(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        spawn_local(submit(f.clone(), d.clone(), state.clone()));
    });
    Ok(())
}

async fn submit(
    form: web::HtmlFormElement,
    document: web::Document,
    state: Rc<RefCell<ContactForm>>,
) {
    if !state.borrow_mut().begin_submit() {
        return;
    }

    let button = dom::query(&form, "button[type=\"submit\"]");
    let original_label = button.as_ref().map(|b| b.inner_html());
    if let Some(b) = &button {
        b.set_inner_html(SENDING_LABEL);
        _ = b.set_attribute("disabled", "");
    }

    let result = send(&form).await;
    if let Err(e) = &result {
        log::error!("[contact] failed to send message: {}", e);
    } else {
        log::info!("[contact] message sent");
    }

    let finished = state.borrow_mut().finish(result);
    if finished.clear_form {
        form.reset();
    }
    render_banner(&document, state.borrow().banner());

    let (d, s) = (document.clone(), state.clone());
    if let Err(e) = dom::set_timeout(MESSAGE_DISMISS_MS, move || {
        if s.borrow_mut().dismiss(finished.dismiss_token) {
            render_banner(&d, s.borrow().banner());
        }
    }) {
        log::error!("[contact] dismiss timer failed: {:?}", e);
    }

    if let (Some(b), Some(label)) = (&button, original_label) {
        b.set_inner_html(&label);
        if state.borrow().submit_enabled() {
            _ = b.remove_attribute("disabled");
        }
    }
}

async fn send(form: &web::HtmlFormElement) -> Result<(), SendError> {
    if !form.check_validity() {
        return Err(SendError::Invalid);
    }
    let promise = emailjs_send_form(EMAIL_SERVICE_ID, EMAIL_TEMPLATE_ID, form)
        .map_err(|_| SendError::Unavailable)?;
    match JsFuture::from(promise).await {
        Ok(response) => status_outcome(response_status(&response)),
        Err(err) => Err(SendError::Rejected(rejection_message(&err))),
    }
}

// Resolved value is `{ status, text }`; anything else is treated as a failure.
fn response_status(response: &JsValue) -> u16 {
    js_sys::Reflect::get(response, &"status".into())
        .ok()
        .and_then(|v| v.as_f64())
        .map(|s| s as u16)
        .unwrap_or(0)
}

fn rejection_message(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    ["text", "message"]
        .iter()
        .find_map(|key| {
            js_sys::Reflect::get(err, &(*key).into())
                .ok()
                .and_then(|v| v.as_string())
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_default()
}

fn render_banner(document: &web::Document, banner: &Banner) {
    match banner {
        Banner::Hidden => {
            overlay::hide(document, SUCCESS_ID);
            overlay::hide(document, ERROR_ID);
        }
        Banner::Success => {
            overlay::show(document, SUCCESS_ID);
            overlay::hide(document, ERROR_ID);
        }
        Banner::Error(message) => {
            overlay::set_text(document, ERROR_ID, message);
            overlay::show(document, ERROR_ID);
            overlay::hide(document, SUCCESS_ID);
        }
    }
}
