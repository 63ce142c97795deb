//! HTML fragments for the listing pages.

use crate::content::{Post, Tool};
use std::fmt::Write;

pub const FAVICON_LIGHT: &str = "./assets/lm.png";
pub const FAVICON_DARK: &str = "./assets/lm-magenta.png";

#[inline]
pub fn favicon_href(prefers_dark: bool) -> &'static str {
    if prefers_dark {
        FAVICON_DARK
    } else {
        FAVICON_LIGHT
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn article_href(post_id: &str) -> String {
    format!("article_template.html?id={}", escape_html(post_id))
}

fn list_item(image: &str, title: &str, date: &str, href: &str, summary: &str) -> String {
    let mut html = String::new();
    _ = write!(
        html,
        "<div class=\"thumbnail vc-flexbox\"><img src=\"{img}\" alt=\"{title} thumbnail\"></div>\
         <div class=\"post-info pad-left\">\
         <p class=\"post-date\">{date}</p>\
         <a class=\"post-link\" href=\"{href}\">{title}</a>\
         <p class=\"summary\">{summary}</p>\
         </div>",
        img = escape_html(image),
        title = escape_html(title),
        date = escape_html(date),
        href = href,
        summary = escape_html(summary),
    );
    html
}

/// Inner HTML of one `li.hc-flexbox` in the article list.
pub fn post_list_item(post: &Post) -> String {
    list_item(
        &post.image,
        &post.title,
        &post.date,
        &article_href(&post.id),
        &post.summary,
    )
}

/// Inner HTML of one `li.hc-flexbox` in the tools list.
pub fn tool_list_item(tool: &Tool) -> String {
    list_item(
        &tool.image,
        &tool.title,
        &tool.date,
        &escape_html(&tool.link),
        &tool.summary,
    )
}

/// Tags as `span.tag` elements separated by `span.tag-separator` commas.
pub fn tags_markup(tags: &[String]) -> String {
    let mut html = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            html.push_str("<span class=\"tag-separator\">, </span>");
        }
        _ = write!(html, "<span class=\"tag\">{}</span>", escape_html(tag));
    }
    html
}

/// Stand-in for rendered Markdown when no renderer is loaded on the page.
pub fn preformatted(text: &str) -> String {
    format!("<pre class=\"article-raw\">{}</pre>", escape_html(text))
}

pub const CONTENT_UNAVAILABLE: &str = "<p>Sorry, article content could not be loaded.</p>";
