//! Route error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Route already registered: {0}")]
    DuplicateRoute(String),

    #[error("Route not found: {0}")]
    UnknownRoute(String),

    #[error("Route id cannot be empty")]
    EmptyId,
}
