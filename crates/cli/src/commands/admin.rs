//! Staff account creation command.

use taffreen_storefront::services::auth::hash_password;

use super::{CommandError, connect};

/// Create a staff account (optionally a superuser).
///
/// # Errors
///
/// Returns `CommandError` if validation fails, the email is taken, or the
/// database is unreachable.
pub async fn create_staff(
    email: &str,
    name: &str,
    password: &str,
    superuser: bool,
) -> Result<(), CommandError> {
    let email = taffreen_core::Email::parse(email)
        .map_err(|e| CommandError::Invalid(format!("invalid email: {e}")))?;

    if password.len() < 8 {
        return Err(CommandError::Invalid(
            "password must be at least 8 characters".to_owned(),
        ));
    }

    let password_hash = hash_password(password)
        .map_err(|e| CommandError::Invalid(format!("failed to hash password: {e}")))?;

    let pool = connect().await?;
    let mut tx = pool.begin().await?;

    let user_id: i32 = sqlx::query_scalar(
        "INSERT INTO store.users (email, name, is_staff, is_superuser) \
         VALUES ($1, $2, TRUE, $3) RETURNING id",
    )
    .bind(email.as_str())
    .bind(name)
    .bind(superuser)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO store.user_passwords (user_id, password_hash) VALUES ($1, $2)")
        .bind(user_id)
        .bind(&password_hash)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(user_id, superuser, "Staff account created");
    Ok(())
}
