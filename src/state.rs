//! Application state shared across handlers.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::store::UserStore;

/// Handle to the active store implementation. Handlers extract this, so
/// tests can swap in doubles without touching the routing.
pub type SharedStore = Arc<dyn UserStore>;

/// Which persistence backend the process was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub backend: StoreBackend,
}

impl AppState {
    pub fn new(store: SharedStore, backend: StoreBackend) -> Self {
        Self { store, backend }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
