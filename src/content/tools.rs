use super::{fetch_text, fill_list};
use crate::constants::TOOLS_INDEX_PATH;
use site_core::content::ToolIndex;
use site_core::markup;
use web_sys as web;

pub async fn populate_tools_list(container: web::Element) -> anyhow::Result<()> {
    let text = fetch_text(TOOLS_INDEX_PATH).await?;
    let index = ToolIndex::from_json(&text)?;
    let n = fill_list(&container, index.published().map(markup::tool_list_item))?;
    log::info!("[content] listed {} tools", n);
    Ok(())
}
