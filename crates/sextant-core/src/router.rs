//! Router context
//!
//! The single explicit context object holding the registry, config, and
//! exit stack. All operations are methods on this context; there is no
//! ambient module state.

use parking_lot::RwLock;
use std::sync::Arc;

use sextant_nav::{ExitStack, NavigationController, NavigationError};
use sextant_render::{ElementHandle, Location, RenderSurface};
use sextant_routes::{Route, RoutePatch, RouteRegistry};

use crate::config::RouterConfig;
use crate::error::CoreError;
use crate::Result;

pub struct Router {
    /// Configuration, fixed at construction
    config: RouterConfig,
    /// Route registry
    registry: RouteRegistry,
    /// Exit callbacks of the currently active route
    exit: ExitStack,
    /// Navigation sequencing
    controller: NavigationController,
    /// Rendering collaborator
    surface: Arc<dyn RenderSurface>,
    /// Location fragment boundary
    location: Arc<dyn Location>,
    /// Set by `init`, checked against double initialization
    initialized: Arc<RwLock<bool>>,
}

impl Router {
    pub fn new(
        config: RouterConfig,
        surface: Arc<dyn RenderSurface>,
        location: Arc<dyn Location>,
    ) -> Self {
        let registry = RouteRegistry::new();
        let exit = ExitStack::new();

        let controller = NavigationController::new(
            registry.clone(),
            exit.clone(),
            Arc::clone(&surface),
            Arc::clone(&location),
            config.active_class_name.clone(),
            config.default_route_id.clone(),
        );

        Self {
            config,
            registry,
            exit,
            controller,
            surface,
            location,
            initialized: Arc::new(RwLock::new(false)),
        }
    }

    /// Scaffold the containers, install the fragment subscription, and
    /// run the initial navigation.
    ///
    /// An empty registry is not fatal: the initial navigation simply
    /// resolves nothing and the router keeps accepting routes and
    /// navigation attempts.
    pub fn init(&self) -> Result<()> {
        {
            let mut initialized = self.initialized.write();
            if *initialized {
                return Err(CoreError::AlreadyInitialized);
            }
            *initialized = true;
        }

        // Scaffold the link and page containers under their mount points
        let links = self
            .surface
            .create_container(&self.config.link_container_tag, &[]);
        self.surface.append_child(
            &ElementHandle::from_id(&self.config.nav_container_id),
            &links,
        );

        let pages = self
            .surface
            .create_container(&self.config.page_container_tag, &[]);
        self.surface.append_child(
            &ElementHandle::from_id(&self.config.main_container_id),
            &pages,
        );
        self.surface
            .set_inner_content(&pages, &self.config.loading_placeholder_html);

        // Single persistent fragment subscription. The in-flight
        // navigation's own fragment sync arrives here as a reentrant
        // call and is dropped.
        let router = self.clone();
        self.location.on_change(Box::new(move || {
            match router.navigate() {
                Ok(()) => {}
                Err(CoreError::Navigation(NavigationError::ResolutionFailed(requested))) => {
                    tracing::debug!(requested = %requested, "Fragment names no route; view unchanged");
                }
                Err(CoreError::Navigation(NavigationError::ReentrantNavigation)) => {
                    tracing::debug!("Fragment changed mid-navigation; ignoring");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Fragment-change navigation failed");
                }
            }
        }));

        // Initial navigation: an empty fragment resolves to the default
        // route when one is registered
        match self.navigate() {
            Ok(()) => {}
            Err(CoreError::Navigation(NavigationError::ResolutionFailed(requested))) => {
                tracing::debug!(requested = %requested, "No route resolved at init");
            }
            Err(e) => return Err(e),
        }

        tracing::info!(
            route_count = self.registry.len(),
            "Router initialized"
        );

        Ok(())
    }

    /// Register a new route.
    ///
    /// If the fragment already names this id (a previously unresolvable
    /// navigation), the view is refreshed immediately.
    pub fn add_route(&self, route: Route) -> Result<()> {
        let id = route.id.clone();
        self.registry.add(route)?;
        self.renavigate_if_active(&id)
    }

    /// Merge a partial update into an existing route.
    ///
    /// A mutation targeting the currently active route re-navigates so
    /// the view reflects the change.
    pub fn update_route(&self, patch: RoutePatch) -> Result<Route> {
        let route = self.registry.update(patch)?;
        self.renavigate_if_active(&route.id)?;
        Ok(route)
    }

    /// Register an exit callback for the currently active route.
    ///
    /// Intended to be called from render hooks holding a cloned router.
    pub fn on_exit(&self, f: impl Fn() + Send + Sync + 'static) {
        self.exit.push(f);
    }

    /// Explicit re-navigation request
    pub fn navigate(&self) -> Result<()> {
        Ok(self.controller.navigate()?)
    }

    pub fn get_route(&self, id: &str) -> Option<Route> {
        self.registry.get(id)
    }

    /// Ids of all registered routes, for embedders building menus
    pub fn route_ids(&self) -> Vec<String> {
        self.registry.route_ids()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Re-run navigation when a registry mutation targets the route the
    /// fragment currently names. "Currently active" is strictly whatever
    /// the fragment says; no separate field tracks it.
    fn renavigate_if_active(&self, id: &str) -> Result<()> {
        if !*self.initialized.read() {
            return Ok(());
        }

        if self.location.fragment().trim_start_matches('#') != id {
            return Ok(());
        }

        match self.navigate() {
            Ok(()) => Ok(()),
            Err(CoreError::Navigation(NavigationError::ReentrantNavigation)) => {
                // Mutation from inside a render hook; the in-flight
                // navigation finishes with the pre-mutation route clone
                tracing::debug!(route_id = %id, "Active route mutated mid-navigation");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

impl Clone for Router {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            registry: self.registry.clone(),
            exit: self.exit.clone(),
            controller: self.controller.clone(),
            surface: Arc::clone(&self.surface),
            location: Arc::clone(&self.location),
            initialized: Arc::clone(&self.initialized),
        }
    }
}
