//! Address repository.

use sqlx::PgPool;

use taffreen_core::{AddressId, UserId};

use super::RepositoryError;
use crate::models::address::Address;

const ADDRESS_COLUMNS: &str = "id, user_id, locality, city, state, created_at";

/// Repository for user addresses.
pub struct AddressRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AddressRepository<'a> {
    /// Create a new address repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All addresses belonging to a user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Address>, RepositoryError> {
        let addresses = sqlx::query_as::<_, Address>(&format!(
            "SELECT {ADDRESS_COLUMNS} FROM store.addresses WHERE user_id = $1 ORDER BY id"
        ))
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(addresses)
    }

    /// Create a new address for a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn create(
        &self,
        user_id: UserId,
        locality: &str,
        city: &str,
        state: &str,
    ) -> Result<Address, RepositoryError> {
        let address = sqlx::query_as::<_, Address>(&format!(
            "INSERT INTO store.addresses (user_id, locality, city, state) \
             VALUES ($1, $2, $3, $4) RETURNING {ADDRESS_COLUMNS}"
        ))
        .bind(user_id)
        .bind(locality)
        .bind(city)
        .bind(state)
        .fetch_one(self.pool)
        .await?;

        Ok(address)
    }

    /// Delete an address, scoped to its owner.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the address does not exist
    /// or belongs to another user.
    pub async fn delete(
        &self,
        address_id: AddressId,
        user_id: UserId,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM store.addresses WHERE id = $1 AND user_id = $2")
            .bind(address_id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
