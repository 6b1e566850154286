// Host-side tests for the contact form submission state.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}

use contact::*;

#[test]
fn success_clears_form_and_shows_success() {
    let mut form = ContactForm::new();
    assert!(form.begin_submit());
    assert!(!form.submit_enabled());

    let done = form.finish(status_outcome(200));
    assert!(done.clear_form);
    assert_eq!(form.banner(), &Banner::Success);
    assert!(form.submit_enabled());

    assert!(form.dismiss(done.dismiss_token));
    assert_eq!(form.banner(), &Banner::Hidden);
}

#[test]
fn second_submit_is_refused_while_sending() {
    let mut form = ContactForm::new();
    assert!(form.begin_submit());
    assert!(!form.begin_submit());
    form.finish(Ok(()));
    assert!(form.begin_submit());
}

#[test]
fn non_success_status_shows_error_then_hides() {
    let mut form = ContactForm::new();
    form.begin_submit();
    let done = form.finish(status_outcome(500));
    assert!(!done.clear_form);
    assert!(form.submit_enabled());
    match form.banner() {
        Banner::Error(msg) => {
            assert!(!msg.is_empty());
            assert!(msg.contains("500"));
        }
        other => panic!("expected error banner, got {other:?}"),
    }

    assert!(form.dismiss(done.dismiss_token));
    assert_eq!(form.banner(), &Banner::Hidden);
    assert!(!form.dismiss(done.dismiss_token));
}

#[test]
fn stale_dismiss_keeps_newer_banner() {
    let mut form = ContactForm::new();
    form.begin_submit();
    let first = form.finish(Err(SendError::Unavailable));
    form.begin_submit();
    let second = form.finish(Ok(()));

    assert!(!form.dismiss(first.dismiss_token));
    assert_eq!(form.banner(), &Banner::Success);
    assert!(form.dismiss(second.dismiss_token));
}

#[test]
fn blank_rejection_falls_back_to_generic_message() {
    assert_eq!(
        SendError::Rejected(String::new()).user_message(),
        GENERIC_SEND_ERROR
    );
    assert_eq!(
        SendError::Rejected("   ".into()).user_message(),
        GENERIC_SEND_ERROR
    );
    assert_eq!(
        SendError::Rejected("quota exceeded".into()).user_message(),
        "quota exceeded"
    );
    assert!(!SendError::Invalid.user_message().is_empty());
}

#[test]
fn only_200_counts_as_delivered() {
    assert_eq!(status_outcome(200), Ok(()));
    assert_eq!(status_outcome(201), Err(SendError::Status(201)));
    assert_eq!(status_outcome(0), Err(SendError::Status(0)));
}
