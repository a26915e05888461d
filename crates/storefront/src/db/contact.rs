//! Contact message repository.

use sqlx::PgPool;

use super::RepositoryError;

/// Repository for contact form messages.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Log a contact form submission.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO store.contact_messages (name, email, message) VALUES ($1, $2, $3)",
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .execute(self.pool)
        .await?;

        Ok(())
    }
}
