//! Middleware for the user API.

mod logging;

pub use logging::request_logging;
