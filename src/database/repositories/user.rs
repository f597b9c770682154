//! User repository implementation

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sqlx::PgPool;
use crate::models::user::{User, NewUser};
use crate::utils::errors::{is_unique_violation, HostelError};

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user, storing only an argon2 hash of the password
    pub async fn create(&self, request: NewUser) -> Result<User, HostelError> {
        let password_hash = hash_password(&request.password)?;

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, phone, location, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, phone, location
            "#
        )
        .bind(request.name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.location)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                HostelError::Conflict("Email is already registered".to_string())
            } else {
                HostelError::Database(err)
            }
        })?;

        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, HostelError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, phone, location FROM users WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Check a plain-text password against the stored hash
    pub async fn verify_password(&self, email: &str, password: &str) -> Result<bool, HostelError> {
        let stored: Option<(String,)> = sqlx::query_as("SELECT password_hash FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        match stored {
            Some((hash,)) => verify_password(password, &hash),
            None => Ok(false),
        }
    }
}

/// Hash a password into an argon2id PHC string
pub fn hash_password(password: &str) -> Result<String, HostelError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| HostelError::PasswordHash(e.to_string()))
}

/// Verify a password against a PHC string produced by [`hash_password`]
pub fn verify_password(password: &str, hash: &str) -> Result<bool, HostelError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| HostelError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
