//! User administration repository.
//!
//! Privileged operations over arbitrary user accounts: list, edit,
//! delete, and force-change passwords.

use sqlx::PgPool;

use taffreen_core::{Email, UserId};

use super::{RepositoryError, conflict_on_unique};
use crate::models::UserAccount;

const USER_COLUMNS: &str =
    "id, email, name, is_staff, is_superuser, session_epoch, created_at, updated_at";

/// Repository for privileged user operations.
pub struct UserAdminRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserAdminRepository<'a> {
    /// Create a new user administration repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All user accounts, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<UserAccount>, RepositoryError> {
        let users = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM store.users ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Get a single account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: UserId) -> Result<Option<UserAccount>, RepositoryError> {
        let user = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM store.users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get an account and its password hash by email, for dashboard login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(UserAccount, String)>, RepositoryError> {
        let user = sqlx::query_as::<_, UserAccount>(&format!(
            "SELECT {USER_COLUMNS} FROM store.users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        let Some(user) = user else {
            return Ok(None);
        };

        let hash: Option<String> = sqlx::query_scalar(
            "SELECT password_hash FROM store.user_passwords WHERE user_id = $1",
        )
        .bind(user.id)
        .fetch_optional(self.pool)
        .await?;

        Ok(hash.map(|h| (user, h)))
    }

    /// Update an account's email, name, and role flags.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account does not exist.
    /// Returns `RepositoryError::Conflict` if the email is taken.
    pub async fn update(
        &self,
        id: UserId,
        email: &Email,
        name: &str,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE store.users \
             SET email = $2, name = $3, is_staff = $4, is_superuser = $5, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(email)
        .bind(name)
        .bind(is_staff)
        .bind(is_superuser)
        .execute(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "email already exists"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete an account (cascades to its cart, orders, and wishlist).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account does not exist.
    pub async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM store.users WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Force-change an account's password.
    ///
    /// Writes the new hash and bumps the account's `session_epoch` in one
    /// transaction. The epoch bump is what invalidates the target's
    /// existing sessions on their next request; no other user's sessions
    /// are touched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the account does not exist.
    pub async fn set_password(
        &self,
        id: UserId,
        password_hash: &str,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE store.users SET session_epoch = session_epoch + 1, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        sqlx::query(
            "INSERT INTO store.user_passwords (user_id, password_hash) VALUES ($1, $2) \
             ON CONFLICT (user_id) \
             DO UPDATE SET password_hash = EXCLUDED.password_hash, updated_at = now()",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }
}
