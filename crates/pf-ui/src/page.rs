//! The feed page: already-rendered posts inside one document.

use askama::Template;
use pf_core::{AppError, Result};

#[derive(Template)]
#[template(path = "page.html")]
pub struct FeedPage<'a> {
    pub title: &'a str,
    /// Post markup from `PostView::render_html`, inserted unescaped
    pub posts: &'a [String],
}

pub fn render_page(title: &str, posts: &[String]) -> Result<String> {
    FeedPage { title, posts }
        .render()
        .map_err(|e| AppError::Render(e.to_string()))
}
