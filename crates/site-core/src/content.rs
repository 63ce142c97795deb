//! Data model for the JSON documents behind the blog and tool listings.

use crate::error::ContentError;
use fnv::FnvHashMap;
use serde::Deserialize;

pub const SITE_NAME: &str = "liezlmaree";
pub const ARTICLE_TEMPLATE_PAGE: &str = "article_template";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthorLinks {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub links: Option<AuthorLinks>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: String,
    pub new_tab: bool,
}

impl Author {
    /// Profile links in display order: email, LinkedIn, GitHub, website.
    pub fn social_links(&self) -> Vec<SocialLink> {
        let Some(links) = &self.links else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(4);
        if let Some(email) = links.email.as_deref().filter(|s| !s.is_empty()) {
            out.push(SocialLink {
                label: "Email",
                href: format!("mailto:{}", email),
                new_tab: false,
            });
        }
        let external = [
            ("LinkedIn", &links.linkedin),
            ("GitHub", &links.github),
            ("Website", &links.website),
        ];
        for (label, href) in external {
            if let Some(href) = href.as_deref().filter(|s| !s.is_empty()) {
                out.push(SocialLink {
                    label,
                    href: href.to_string(),
                    new_tab: true,
                });
            }
        }
        out
    }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub read_time: String,
}

impl Post {
    pub fn byline(&self) -> String {
        format!("{} \u{2022} {}", self.date, self.read_time)
    }

    pub fn document_title(&self) -> String {
        format!("{} - {}", self.title, SITE_NAME)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlogIndex {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub authors: FnvHashMap<String, Author>,
}

impl BlogIndex {
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn published(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|p| p.published)
    }

    pub fn find_post(&self, id: &str) -> Result<&Post, ContentError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ContentError::PostNotFound(id.to_string()))
    }

    pub fn author_of(&self, post: &Post) -> Option<&Author> {
        post.author_id.as_deref().and_then(|id| self.authors.get(id))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Tool {
    pub title: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub published: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ToolIndex {
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl ToolIndex {
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn published(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter().filter(|t| t.published)
    }
}

/// Resolve the article id: the `id` query parameter (already decoded by the
/// host's URL parser) wins, otherwise the page name in `location.pathname`.
pub fn article_id(query_id: Option<&str>, pathname: &str) -> Result<String, ContentError> {
    if let Some(id) = query_id.filter(|id| !id.is_empty()) {
        return Ok(id.to_string());
    }

    let page = pathname
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");
    let page = page.strip_suffix(".html").unwrap_or(page);
    if page.is_empty() || page == ARTICLE_TEMPLATE_PAGE || page == "index" {
        return Err(ContentError::MissingArticleId);
    }
    Ok(page.to_string())
}
