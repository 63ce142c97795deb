use crate::constants::{
    CONTAINER_SELECTOR, CONTENT_LOADED_CLASS, HIDDEN_CLASS, SPINNER_HIDE_DELAY_MS,
    SPINNER_SELECTOR,
};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = dom::query(document, CONTAINER_SELECTOR) {
        _ = el.class_list().remove_1(CONTENT_LOADED_CLASS);
    }
    if let Some(el) = dom::query(document, SPINNER_SELECTOR) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = dom::query(document, CONTAINER_SELECTOR) {
        _ = el.class_list().add_1(CONTENT_LOADED_CLASS);
    }
    if let Some(el) = dom::query(document, SPINNER_SELECTOR) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}

/// Hide after a short delay so freshly inserted content has rendered.
pub fn hide_soon(document: &web::Document) {
    let document = document.clone();
    dom::set_timeout(SPINNER_HIDE_DELAY_MS, move || hide(&document));
}
