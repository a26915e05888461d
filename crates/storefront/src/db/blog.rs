//! Blog post repository.

use sqlx::PgPool;

use super::RepositoryError;
use crate::models::content::BlogPost;

/// Repository for blog posts.
pub struct BlogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> BlogRepository<'a> {
    /// Create a new blog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All published posts, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<BlogPost>, RepositoryError> {
        let posts = sqlx::query_as::<_, BlogPost>(
            "SELECT id, title, slug, body, published_at FROM store.blog_posts \
             WHERE published_at <= now() \
             ORDER BY published_at DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(posts)
    }
}
