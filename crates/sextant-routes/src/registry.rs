//! Route registry
//!
//! Owns the id-to-route mapping. Ids are unique; an id is added at most
//! once without an explicit update, and an update never introduces a new
//! id.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::RouteError;
use crate::route::{Route, RoutePatch};
use crate::Result;

pub struct RouteRegistry {
    routes: Arc<RwLock<HashMap<String, Route>>>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self {
            routes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a new route.
    ///
    /// Fails without mutating if the id is already present.
    pub fn add(&self, route: Route) -> Result<()> {
        if route.id.trim().is_empty() {
            return Err(RouteError::EmptyId);
        }

        let mut routes = self.routes.write();
        if routes.contains_key(&route.id) {
            return Err(RouteError::DuplicateRoute(route.id));
        }

        let id = route.id.clone();
        routes.insert(id.clone(), route);
        tracing::info!(route_id = %id, "Registered route");

        Ok(())
    }

    /// Merge a partial update into an existing route.
    ///
    /// Fails if the id is absent; fields absent from the patch keep their
    /// stored values. Returns the updated route.
    pub fn update(&self, patch: RoutePatch) -> Result<Route> {
        let mut routes = self.routes.write();
        let route = routes
            .get_mut(&patch.id)
            .ok_or_else(|| RouteError::UnknownRoute(patch.id.clone()))?;

        route.apply(patch);
        tracing::debug!(route_id = %route.id, "Updated route");

        Ok(route.clone())
    }

    /// Look up a route by id. Pure lookup, no failure mode.
    pub fn get(&self, id: &str) -> Option<Route> {
        self.routes.read().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.routes.read().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.routes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.read().is_empty()
    }

    /// Ids of all registered routes, for embedders building menus
    pub fn route_ids(&self) -> Vec<String> {
        self.routes.read().keys().cloned().collect()
    }
}

impl Default for RouteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RouteRegistry {
    fn clone(&self) -> Self {
        Self {
            routes: Arc::clone(&self.routes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add_and_get() {
        let registry = RouteRegistry::new();

        registry
            .add(Route::new("home").unwrap().with_payload(json!("Home")))
            .unwrap();

        let route = registry.get("home").unwrap();
        assert_eq!(route.id, "home");
        assert_eq!(route.payload, json!("Home"));
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_add_leaves_stored_route_intact() {
        let registry = RouteRegistry::new();

        registry
            .add(Route::new("home").unwrap().with_payload(json!("first")))
            .unwrap();

        let result = registry.add(Route::new("home").unwrap().with_payload(json!("second")));
        assert!(matches!(result, Err(RouteError::DuplicateRoute(_))));

        // First registration wins
        assert_eq!(registry.get("home").unwrap().payload, json!("first"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_update_unknown_route() {
        let registry = RouteRegistry::new();
        let result = registry.update(RoutePatch::new("ghost"));
        assert!(matches!(result, Err(RouteError::UnknownRoute(_))));
    }

    #[test]
    fn test_update_merges_present_fields() {
        let registry = RouteRegistry::new();

        registry
            .add(Route::new("docs").unwrap().with_payload(json!("Docs")))
            .unwrap();

        let updated = registry
            .update(RoutePatch::new("docs").with_render_hook(|| {}))
            .unwrap();

        assert!(updated.has_render_hook());
        assert_eq!(updated.payload, json!("Docs"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let registry = RouteRegistry::new();

        let mut route = Route::new("home").unwrap();
        route.id = String::new();

        assert!(matches!(registry.add(route), Err(RouteError::EmptyId)));
        assert!(registry.is_empty());
    }
}
