//! SEXTANT Route Management
//!
//! Routes are the named views of a single-page application. Each route
//! pairs a unique id with an optional render hook and an opaque
//! presentation payload the core never interprets.

mod error;
mod registry;
mod route;

pub use error::RouteError;
pub use registry::RouteRegistry;
pub use route::{RenderHook, Route, RoutePatch};

pub type Result<T> = std::result::Result<T, RouteError>;
