use super::{fetch_text, fill_list};
use crate::constants::BLOG_INDEX_PATH;
use site_core::content::BlogIndex;
use site_core::markup;
use web_sys as web;

pub async fn populate_posts_list(container: web::Element) -> anyhow::Result<()> {
    let text = fetch_text(BLOG_INDEX_PATH).await?;
    let index = BlogIndex::from_json(&text)?;
    let n = fill_list(&container, index.published().map(markup::post_list_item))?;
    log::info!("[content] listed {} posts", n);
    Ok(())
}
