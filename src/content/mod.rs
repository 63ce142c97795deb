use crate::constants::{
    ARTICLE_HEADER_SELECTOR, LIST_ITEM_CLASS, POSTS_LIST_SELECTOR, TOOLS_LIST_SELECTOR,
    TOP_BAR_ELEMENT,
};
use crate::dom;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod article;
mod blog;
mod fetch;
mod nav;
mod tools;

pub(crate) use fetch::{fetch_text, js_err};

/// Start every loader whose hook element is on this page. Each runs on its own
/// and only logs on failure.
pub fn load_all(document: &web::Document) {
    if let Some(el) = dom::query(document, TOP_BAR_ELEMENT) {
        spawn_local(async move {
            if let Err(e) = nav::load_top_bar(el).await {
                log::error!("[nav] {:#}", e);
            }
        });
    }
    if let Some(el) = dom::query(document, POSTS_LIST_SELECTOR) {
        spawn_local(async move {
            if let Err(e) = blog::populate_posts_list(el).await {
                log::error!("[content] blog posts: {:#}", e);
            }
        });
    }
    if let Some(el) = dom::query(document, TOOLS_LIST_SELECTOR) {
        spawn_local(async move {
            if let Err(e) = tools::populate_tools_list(el).await {
                log::error!("[content] tools: {:#}", e);
            }
        });
    }
    if let Some(el) = dom::query(document, ARTICLE_HEADER_SELECTOR) {
        let document = document.clone();
        spawn_local(async move {
            article::populate_article(document, el).await;
        });
    }
}

/// Replace the container's children with one `li` per rendered item.
pub(crate) fn fill_list(
    container: &web::Element,
    items: impl Iterator<Item = String>,
) -> anyhow::Result<usize> {
    let document = container
        .owner_document()
        .ok_or_else(|| anyhow::anyhow!("list container is detached"))?;
    container.set_inner_html("");
    let mut count = 0;
    for html in items {
        let li = document.create_element("li").map_err(js_err)?;
        li.set_class_name(LIST_ITEM_CLASS);
        li.set_inner_html(&html);
        container.append_child(&li).map_err(js_err)?;
        count += 1;
    }
    Ok(count)
}

