//! API handlers for the user service.

pub mod health;
pub mod users;
