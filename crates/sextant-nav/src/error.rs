//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    /// The fragment named no known route and no usable default exists.
    /// The view and fragment are left exactly as they were, so the
    /// fragment may keep naming a route that was never rendered.
    #[error("No route resolved for: {0}")]
    ResolutionFailed(String),

    /// A navigation was requested while one was already in flight
    #[error("Navigation already in progress")]
    ReentrantNavigation,

    #[error("Route error: {0}")]
    Route(#[from] sextant_routes::RouteError),
}
