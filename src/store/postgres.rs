//! sqlx/Postgres implementation of the user store.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{NewUser, User};
use crate::store::{StoreError, UserStore};

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError(err.into())
    }
}

/// User store backed by the Postgres `users` table.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, name, bio FROM users ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, name, bio FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, fields: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, bio) VALUES ($1, $2, $3) RETURNING id, name, bio",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(&fields.name)
        .bind(&fields.bio)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update(&self, id: &str, fields: NewUser) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, bio = $3, updated_at = now() \
             WHERE id = $1 RETURNING id, name, bio",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.bio)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn remove(&self, id: &str) -> Result<Option<User>, StoreError> {
        let user =
            sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING id, name, bio")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }
}
