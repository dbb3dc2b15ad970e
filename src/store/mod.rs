//! The data-access capability behind the user endpoints.
//!
//! Handlers see only [`UserStore`]; which backend answers is decided once
//! at startup.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewUser, User};

/// Failure reported by a store backend.
///
/// Absence of a record is not an error; the finders and mutators report
/// it as `None`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct StoreError(#[from] pub anyhow::Error);

/// Persistence capability for user records.
///
/// Every operation is one awaited call; implementations must not require
/// callers to hold any lock across it. An id that does not match any
/// stored record is `Ok(None)`, never an error.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// All stored users, in a stable order.
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// The user with the given id, if one exists.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError>;

    /// Persists a new user and returns it with its generated id.
    async fn create(&self, fields: NewUser) -> Result<User, StoreError>;

    /// Replaces `name` and `bio` of the user with the given id. Returns
    /// the updated record, or `None` when no record matches.
    async fn update(&self, id: &str, fields: NewUser) -> Result<Option<User>, StoreError>;

    /// Deletes the user with the given id. Returns the removed record,
    /// or `None` when no record matches.
    async fn remove(&self, id: &str) -> Result<Option<User>, StoreError>;
}
