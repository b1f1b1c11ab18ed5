//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Route error: {0}")]
    Route(#[from] sextant_routes::RouteError),

    #[error("Navigation error: {0}")]
    Navigation(#[from] sextant_nav::NavigationError),

    #[error("Router already initialized")]
    AlreadyInitialized,
}
