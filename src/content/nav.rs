use super::fetch_text;
use crate::constants::TOP_BAR_PATH;
use web_sys as web;

pub async fn load_top_bar(element: web::Element) -> anyhow::Result<()> {
    let html = fetch_text(TOP_BAR_PATH).await?;
    element.set_inner_html(&html);
    log::info!("[nav] top bar loaded");
    Ok(())
}
