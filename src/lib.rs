//! User API library.
//!
//! A minimal REST service exposing CRUD over a user resource. The
//! endpoint logic in [`handlers::users`] talks to persistence only
//! through the [`store::UserStore`] capability; everything else is the
//! HTTP shell around it.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
