//! Blog route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::db::BlogRepository;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;

/// Blog post display data; the body is markdown rendered to HTML.
#[derive(Debug, Clone)]
pub struct BlogPostView {
    pub title: String,
    pub html: String,
    pub published_at: String,
}

/// Blog page template.
#[derive(Template, WebTemplate)]
#[template(path = "blog/index.html")]
pub struct BlogTemplate {
    pub posts: Vec<BlogPostView>,
}

/// Display published blog posts, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<BlogTemplate> {
    let posts = BlogRepository::new(state.pool()).list().await?;

    Ok(BlogTemplate {
        posts: posts
            .iter()
            .map(|post| BlogPostView {
                title: post.title.clone(),
                html: comrak::markdown_to_html(&post.body, &comrak::Options::default()),
                published_at: filters::date(post.published_at),
            })
            .collect(),
    })
}
