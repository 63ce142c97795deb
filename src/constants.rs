/// DOM hooks and content locations the front-end relies on.
///
/// The backdrop and every loader look elements up through these, so a page
/// only needs to provide the matching markup to opt in.
// Backdrop
pub const CANVAS_SELECTOR: &str = "canvas";
pub const TOP_BAR_SELECTOR: &str = ".top-bar";
pub const HEADER_SELECTOR: &str = "#about h1";
// The header is counted twice: once for itself and once for its margin block
pub const HEADER_RESERVE_FACTOR: f64 = 2.0;
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// Listings
pub const POSTS_LIST_SELECTOR: &str = "#articles #posts";
pub const TOOLS_LIST_SELECTOR: &str = "#tools #tools-list";
pub const LIST_ITEM_CLASS: &str = "hc-flexbox";

// Article page
pub const ARTICLE_HEADER_SELECTOR: &str = ".article-header";
pub const ARTICLE_BODY_SELECTOR: &str = ".article-content";
pub const ARTICLE_SUMMARY_SELECTOR: &str = ".article-summary";
pub const AUTHOR_BIO_SELECTOR: &str = ".author-bio";
pub const CONTAINER_SELECTOR: &str = ".container";
pub const SPINNER_SELECTOR: &str = ".css-spinner";
pub const CONTENT_LOADED_CLASS: &str = "content-loaded";
pub const HIDDEN_CLASS: &str = "hidden";
pub const SPINNER_HIDE_DELAY_MS: i32 = 200;

// Top bar
pub const TOP_BAR_ELEMENT: &str = "top-bar";

// Favicon
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";
pub const FAVICON_SELECTOR: &str = "link[rel=\"icon\"]";

// Fetched documents
pub const BLOG_INDEX_PATH: &str = "./data/blog-posts.json";
pub const TOOLS_INDEX_PATH: &str = "./data/tools.json";
pub const TOP_BAR_PATH: &str = "topbar.html";

#[inline]
pub fn article_markdown_path(post_id: &str) -> String {
    format!("./content/{}.md", post_id)
}
