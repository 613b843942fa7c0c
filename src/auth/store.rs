//! Credential lookup behind a trait so the login flow can be exercised
//! against an in-memory store in tests.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::users::repo::{self, User};

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Look up an account by its login username.
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;

    /// Persist a new account. The password must already be hashed.
    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        fullname: &str,
        role: &str,
    ) -> anyhow::Result<User>;
}

pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(repo::find_by_username(&self.pool, username).await?)
    }

    async fn create(
        &self,
        username: &str,
        password_hash: &str,
        fullname: &str,
        role: &str,
    ) -> anyhow::Result<User> {
        Ok(repo::create(&self.pool, username, password_hash, fullname, role).await?)
    }
}
