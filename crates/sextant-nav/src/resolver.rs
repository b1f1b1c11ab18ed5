//! Route resolution policy
//!
//! Exact-id lookup with a single static default as fallback:
//! 1. Requested id registered → that route
//! 2. Default id registered → the default route
//! 3. Neither → none
//!
//! No partial matching, no case normalization. The requested id always
//! outranks the default.

use sextant_routes::{Route, RouteRegistry};

/// A resolved route, flagged when it came from the default fallback
#[derive(Debug, Clone)]
pub struct Resolution {
    pub route: Route,
    pub fallback: bool,
}

pub fn resolve(
    requested: &str,
    registry: &RouteRegistry,
    default_id: Option<&str>,
) -> Option<Resolution> {
    if let Some(route) = registry.get(requested) {
        return Some(Resolution {
            route,
            fallback: false,
        });
    }

    let default_id = default_id?;
    registry.get(default_id).map(|route| Resolution {
        route,
        fallback: true,
    })
}
