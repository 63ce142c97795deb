use super::{fetch_text, js_err};
use crate::constants::{
    article_markdown_path, ARTICLE_BODY_SELECTOR, ARTICLE_SUMMARY_SELECTOR, AUTHOR_BIO_SELECTOR,
    BLOG_INDEX_PATH,
};
use crate::dom;
use crate::spinner;
use site_core::content::{article_id, Author, BlogIndex, Post};
use site_core::markup;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Fill the article page. The spinner is hidden however this ends.
pub async fn populate_article(document: web::Document, header: web::Element) {
    spinner::show(&document);
    if let Err(e) = load_article(&document, &header).await {
        log::error!("[content] article: {:#}", e);
    }
    spinner::hide_soon(&document);
}

async fn load_article(document: &web::Document, header: &web::Element) -> anyhow::Result<()> {
    let location = document.location().ok_or_else(|| anyhow::anyhow!("no location"))?;
    let search = location.search().unwrap_or_default();
    let pathname = location.pathname().unwrap_or_default();
    let query_id = web::UrlSearchParams::new_with_str(&search)
        .map_err(js_err)?
        .get("id");
    let id = article_id(query_id.as_deref(), &pathname)?;

    let text = fetch_text(BLOG_INDEX_PATH).await?;
    let index = BlogIndex::from_json(&text)?;
    let post = index.find_post(&id)?;
    let author = index.author_of(post);

    update_header(document, header, post, author);
    if let Some(author) = author {
        populate_author_bio(document, author);
    }
    load_body(document, post).await
}

fn update_header(
    document: &web::Document,
    header: &web::Element,
    post: &Post,
    author: Option<&Author>,
) {
    dom::set_text(header, ".breadcrumb span", &post.title);
    if let Some(el) = dom::query_in(header, ".article-title") {
        el.set_text_content(Some(&post.title));
        document.set_title(&post.document_title());
    }

    if let Some(author) = author {
        if let Some(avatar) = dom::query_in(header, ".author-avatar") {
            _ = avatar.set_attribute("src", &format!("./{}", author.avatar));
            _ = avatar.set_attribute("alt", &author.name);
        }
        dom::set_text(header, ".author-name", &author.name);
    }

    dom::set_text(header, ".post-date", &post.byline());

    if let (Some(container), Some(img)) = (
        dom::query_in(header, ".article-image"),
        dom::query_in(header, ".article-image img")
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok()),
    ) {
        wire_hero_image(&container, &img);
        img.set_src(&format!("./{}", post.image));
        img.set_alt(&format!("{} hero image", post.title));
    }

    if let Some(tags) = dom::query_in(header, ".article-tags") {
        tags.set_inner_html(&markup::tags_markup(&post.tags));
    }

    if let Some(summary) = dom::query(document, ".article-summary p") {
        summary.set_text_content(Some(&post.summary));
    }
}

fn wire_hero_image(container: &web::Element, img: &web::HtmlImageElement) {
    let (c, i) = (container.clone(), img.clone());
    let on_load = Closure::wrap(Box::new(move || {
        _ = i.class_list().add_1("loaded");
        _ = c.class_list().add_1("loaded");
    }) as Box<dyn FnMut()>);
    img.set_onload(Some(on_load.as_ref().unchecked_ref()));
    on_load.forget();

    let c = container.clone();
    let on_error = Closure::wrap(Box::new(move || {
        if let Some(el) = c.dyn_ref::<web::HtmlElement>() {
            _ = el.style().set_property("display", "none");
        }
    }) as Box<dyn FnMut()>);
    img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();
}

fn populate_author_bio(document: &web::Document, author: &Author) {
    let Some(bio) = dom::query(document, AUTHOR_BIO_SELECTOR) else {
        return;
    };
    if let Some(avatar) = dom::query_in(&bio, ".bio-avatar") {
        _ = avatar.set_attribute("src", &format!("./{}", author.avatar));
        _ = avatar.set_attribute("alt", &author.name);
    }
    dom::set_text(&bio, ".bio-content h3", &format!("About {}", author.name));
    dom::set_text(&bio, ".bio-content p", &author.bio);

    let Some(links_el) = dom::query_in(&bio, ".bio-links") else {
        return;
    };
    if author.links.is_none() {
        return;
    }
    links_el.set_inner_html("");
    for link in author.social_links() {
        let Ok(a) = document.create_element("a") else {
            continue;
        };
        _ = a.set_attribute("href", &link.href);
        a.set_text_content(Some(link.label));
        if link.new_tab {
            _ = a.set_attribute("target", "_blank");
        }
        _ = links_el.append_child(&a);
    }
}

async fn load_body(document: &web::Document, post: &Post) -> anyhow::Result<()> {
    let body = dom::query(document, ARTICLE_BODY_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("page has no {}", ARTICLE_BODY_SELECTOR))?;

    let source = match fetch_text(&article_markdown_path(&post.id)).await {
        Ok(s) => s,
        Err(e) => {
            _ = body.insert_adjacent_html("beforeend", markup::CONTENT_UNAVAILABLE);
            return Err(e.context("loading article content"));
        }
    };

    let html = render_markdown(&source);
    let inserted = match dom::query_in(&body, ARTICLE_SUMMARY_SELECTOR) {
        Some(summary) => summary.insert_adjacent_html("afterend", &html),
        None => body.insert_adjacent_html("beforeend", &html),
    };
    inserted.map_err(js_err)?;

    add_image_captions(document, &body)?;
    highlight_code();
    render_math(&body);
    log::info!("[content] rendered article {}", post.id);
    Ok(())
}

/// Look up `object.member` on the global scope when the page loaded that script.
fn global_function(object: Option<&str>, member: &str) -> Option<(JsValue, js_sys::Function)> {
    let global: JsValue = js_sys::global().into();
    let this = match object {
        Some(name) => js_sys::Reflect::get(&global, &JsValue::from_str(name)).ok()?,
        None => global,
    };
    if this.is_undefined() || this.is_null() {
        return None;
    }
    let f = js_sys::Reflect::get(&this, &JsValue::from_str(member))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()?;
    Some((this, f))
}

fn render_markdown(source: &str) -> String {
    if let Some((marked, parse)) = global_function(Some("marked"), "parse") {
        match parse.call1(&marked, &JsValue::from_str(source)) {
            Ok(v) => {
                if let Some(html) = v.as_string() {
                    return html;
                }
            }
            Err(e) => log::warn!("[content] marked.parse failed: {:?}", e),
        }
    } else {
        log::warn!("[content] no Markdown renderer on page; showing source");
    }
    markup::preformatted(source)
}

fn highlight_code() {
    if let Some((hljs, highlight_all)) = global_function(Some("hljs"), "highlightAll") {
        if let Err(e) = highlight_all.call0(&hljs) {
            log::warn!("[content] hljs.highlightAll failed: {:?}", e);
        }
    }
}

fn render_math(body: &web::Element) {
    let Some((global, render)) = global_function(None, "renderMathInElement") else {
        return;
    };
    let options = serde_json::json!({
        "delimiters": [
            { "left": "$$", "right": "$$", "display": true },
            { "left": "$", "right": "$", "display": false },
            { "left": "\\[", "right": "\\]", "display": true },
            { "left": "\\(", "right": "\\)", "display": false },
        ],
        "throwOnError": false,
    });
    let options = match js_sys::JSON::parse(&options.to_string()) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[content] math options: {:?}", e);
            return;
        }
    };
    if let Err(e) = render.call2(&global, body, &options) {
        log::warn!("[content] renderMathInElement failed: {:?}", e);
    }
}

/// Wrap every titled image in a `figure` with the title as its caption.
fn add_image_captions(document: &web::Document, body: &web::Element) -> anyhow::Result<()> {
    let images = body.query_selector_all("img").map_err(js_err)?;
    for i in 0..images.length() {
        let Some(img) = images.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(title) = img.get_attribute("title").filter(|t| !t.is_empty()) else {
            continue;
        };
        let Some(parent) = img.parent_node() else {
            continue;
        };
        let figure = document.create_element("figure").map_err(js_err)?;
        figure.set_class_name("image-figure");
        parent.insert_before(&figure, Some(&*img)).map_err(js_err)?;
        figure.append_child(&img).map_err(js_err)?;

        let caption = document.create_element("figcaption").map_err(js_err)?;
        caption.set_class_name("image-caption");
        caption.set_text_content(Some(&title));
        figure.append_child(&caption).map_err(js_err)?;

        _ = img.class_list().add_1("article-content-image");
        _ = img.remove_attribute("title");
    }
    Ok(())
}
