use crate::constants::{DARK_SCHEME_QUERY, FAVICON_SELECTOR};
use crate::dom;
use site_core::markup::favicon_href;
use wasm_bindgen::JsCast;
use web_sys as web;

fn dark_scheme() -> Option<web::MediaQueryList> {
    web::window()?.match_media(DARK_SCHEME_QUERY).ok().flatten()
}

pub fn apply(document: &web::Document) {
    let prefers_dark = dark_scheme().map(|q| q.matches()).unwrap_or(false);

    if let Some(existing) = dom::query(document, FAVICON_SELECTOR) {
        existing.remove();
    }
    let Some(head) = document.head() else {
        return;
    };
    let link = match document
        .create_element("link")
        .map(|el| el.dyn_into::<web::HtmlLinkElement>())
    {
        Ok(Ok(link)) => link,
        _ => {
            log::warn!("[favicon] could not create <link>");
            return;
        }
    };
    link.set_rel("icon");
    link.set_href(favicon_href(prefers_dark));
    _ = head.append_child(&link);
}

/// Apply now and again whenever the color scheme flips.
pub fn wire(document: &web::Document) {
    apply(document);
    if let Some(query) = dark_scheme() {
        let document = document.clone();
        dom::add_listener(&query, "change", move || {
            log::debug!("[favicon] color scheme changed");
            apply(&document);
        });
    }
}
