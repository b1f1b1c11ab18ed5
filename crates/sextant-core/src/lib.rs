//! SEXTANT Core
//!
//! Central coordination layer for the SEXTANT navigation core. The
//! router context owns all state; the render surface is a passive
//! collaborator driven through a narrow capability interface.

mod config;
mod error;
mod router;

pub use config::RouterConfig;
pub use error::CoreError;
pub use router::Router;

// Re-export core components
pub use sextant_nav::{resolve, ExitStack, NavPhase, NavigationController, NavigationError, Resolution};
pub use sextant_render::{
    ElementHandle, HeadlessSurface, Location, MemoryLocation, RenderSurface,
};
pub use sextant_routes::{RenderHook, Route, RouteError, RoutePatch, RouteRegistry};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
