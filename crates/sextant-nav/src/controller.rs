//! Navigation controller
//!
//! Runs the navigation sequence:
//!
//! ```text
//! Idle
//!   ↓ fragment change / explicit request
//! Resolving
//!   ↓ route found (else abort to Idle)
//! Deactivating
//!   ↓ active markers cleared
//! Draining
//!   ↓ exit stack empty
//! Activating
//!   ↓ menu link marked
//! Rendering
//!   ↓ hook invoked, fragment synced
//! Idle
//! ```

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use sextant_render::{Location, RenderSurface};
use sextant_routes::RouteRegistry;

use crate::error::NavigationError;
use crate::exit_stack::ExitStack;
use crate::resolver::resolve;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPhase {
    /// No navigation in flight
    Idle,
    /// Reading the fragment and consulting the registry
    Resolving,
    /// Clearing active markers from every element bearing one
    Deactivating,
    /// Running the outgoing route's exit callbacks
    Draining,
    /// Marking the incoming route's menu link
    Activating,
    /// Invoking the render hook and syncing the fragment
    Rendering,
}

impl NavPhase {
    /// Check if transition to another phase is valid
    pub fn can_transition_to(&self, target: NavPhase) -> bool {
        match (self, target) {
            (NavPhase::Idle, NavPhase::Resolving) => true,
            // Resolution failure aborts straight back to Idle
            (NavPhase::Resolving, NavPhase::Idle) => true,
            (NavPhase::Resolving, NavPhase::Deactivating) => true,
            (NavPhase::Deactivating, NavPhase::Draining) => true,
            (NavPhase::Draining, NavPhase::Activating) => true,
            (NavPhase::Activating, NavPhase::Rendering) => true,
            (NavPhase::Rendering, NavPhase::Idle) => true,
            // Everything else would skip a step
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NavPhase::Idle => "idle",
            NavPhase::Resolving => "resolving",
            NavPhase::Deactivating => "deactivating",
            NavPhase::Draining => "draining",
            NavPhase::Activating => "activating",
            NavPhase::Rendering => "rendering",
        }
    }
}

impl std::fmt::Display for NavPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advance the phase, asserting the transition is legal
fn step(from: NavPhase, to: NavPhase) -> NavPhase {
    debug_assert!(
        from.can_transition_to(to),
        "illegal navigation phase transition: {} -> {}",
        from,
        to
    );
    tracing::trace!(from = %from, to = %to, "Navigation phase transition");
    to
}

/// Orchestrates the transition between the outgoing and incoming views.
///
/// Reacts to fragment-change signals and explicit requests; consults the
/// registry through the resolver, drains the exit stack, signals
/// activation through the render surface, invokes the render hook, and
/// writes the canonical id back to the fragment.
pub struct NavigationController {
    registry: RouteRegistry,
    exit: ExitStack,
    surface: Arc<dyn RenderSurface>,
    location: Arc<dyn Location>,
    active_class: String,
    default_route_id: Option<String>,
    /// Held for the duration of a navigation; a second entry is rejected
    in_flight: Arc<Mutex<()>>,
}

impl NavigationController {
    pub fn new(
        registry: RouteRegistry,
        exit: ExitStack,
        surface: Arc<dyn RenderSurface>,
        location: Arc<dyn Location>,
        active_class: String,
        default_route_id: Option<String>,
    ) -> Self {
        Self {
            registry,
            exit,
            surface,
            location,
            active_class,
            default_route_id,
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    /// Run one navigation, synchronously and to completion.
    ///
    /// On `ResolutionFailed` nothing observable changes: the view, the
    /// fragment, and the exit stack are left exactly as they were.
    pub fn navigate(&self) -> Result<()> {
        let _in_flight = self
            .in_flight
            .try_lock()
            .ok_or(NavigationError::ReentrantNavigation)?;

        let mut phase = step(NavPhase::Idle, NavPhase::Resolving);

        let requested = self
            .location
            .fragment()
            .trim_start_matches('#')
            .to_string();

        let resolution = match resolve(&requested, &self.registry, self.default_route_id.as_deref())
        {
            Some(resolution) => resolution,
            None => {
                tracing::debug!(requested = %requested, "No route resolved; navigation aborted");
                step(phase, NavPhase::Idle);
                return Err(NavigationError::ResolutionFailed(requested));
            }
        };
        let route = resolution.route;

        if resolution.fallback {
            tracing::debug!(
                requested = %requested,
                route_id = %route.id,
                "Falling back to default route"
            );
        }

        phase = step(phase, NavPhase::Deactivating);
        // Global reset, not scoped to the outgoing route
        self.surface.remove_active_class_from_all(&self.active_class);

        phase = step(phase, NavPhase::Draining);
        let drained = self.exit.drain_all();

        phase = step(phase, NavPhase::Activating);
        if let Some(link) = self.surface.find_menu_link(&route.id) {
            self.surface.add_active_class(&link);
        }

        phase = step(phase, NavPhase::Rendering);
        if let Some(hook) = route.on_render.clone() {
            // No lock is held here; the hook may call back into the
            // registry or push exit callbacks
            hook();
        }

        // Sync the canonical id back to the fragment; a no-op when it
        // already matches, a rewrite after a fallback
        if self.location.fragment().trim_start_matches('#') != route.id {
            self.location.set_fragment(&route.id);
        }

        step(phase, NavPhase::Idle);

        tracing::info!(
            route_id = %route.id,
            fallback = resolution.fallback,
            drained_exit_fns = drained,
            "Navigation complete"
        );

        Ok(())
    }

    pub fn exit_stack(&self) -> &ExitStack {
        &self.exit
    }
}

impl Clone for NavigationController {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            exit: self.exit.clone(),
            surface: Arc::clone(&self.surface),
            location: Arc::clone(&self.location),
            active_class: self.active_class.clone(),
            default_route_id: self.default_route_id.clone(),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sextant_render::{HeadlessSurface, MemoryLocation};
    use sextant_routes::Route;

    fn controller(
        default_route_id: Option<&str>,
    ) -> (
        NavigationController,
        RouteRegistry,
        ExitStack,
        HeadlessSurface,
        MemoryLocation,
    ) {
        let registry = RouteRegistry::new();
        let exit = ExitStack::new();
        let surface = HeadlessSurface::new();
        let location = MemoryLocation::new();

        let controller = NavigationController::new(
            registry.clone(),
            exit.clone(),
            Arc::new(surface.clone()),
            Arc::new(location.clone()),
            "active".to_string(),
            default_route_id.map(|id| id.to_string()),
        );

        (controller, registry, exit, surface, location)
    }

    #[test]
    fn test_valid_phase_transitions() {
        assert!(NavPhase::Idle.can_transition_to(NavPhase::Resolving));
        assert!(NavPhase::Resolving.can_transition_to(NavPhase::Deactivating));
        assert!(NavPhase::Resolving.can_transition_to(NavPhase::Idle));
        assert!(NavPhase::Deactivating.can_transition_to(NavPhase::Draining));
        assert!(NavPhase::Draining.can_transition_to(NavPhase::Activating));
        assert!(NavPhase::Activating.can_transition_to(NavPhase::Rendering));
        assert!(NavPhase::Rendering.can_transition_to(NavPhase::Idle));
    }

    #[test]
    fn test_invalid_phase_transitions() {
        // Can't skip the drain
        assert!(!NavPhase::Deactivating.can_transition_to(NavPhase::Activating));
        // Can't render without activating
        assert!(!NavPhase::Draining.can_transition_to(NavPhase::Rendering));
        // Can't abort once past resolution
        assert!(!NavPhase::Deactivating.can_transition_to(NavPhase::Idle));
        // Can't start anywhere but Resolving
        assert!(!NavPhase::Idle.can_transition_to(NavPhase::Rendering));
    }

    #[test]
    fn test_exit_fns_drain_before_next_render() {
        let (controller, registry, exit, _surface, location) = controller(None);
        let log = Arc::new(Mutex::new(Vec::new()));

        {
            let log = Arc::clone(&log);
            let exit = exit.clone();
            registry
                .add(Route::new("a").unwrap().with_render_hook(move || {
                    log.lock().push("render-a");
                    for name in ["exit-a-1", "exit-a-2"] {
                        let log = Arc::clone(&log);
                        exit.push(move || log.lock().push(name));
                    }
                }))
                .unwrap();
        }
        {
            let log = Arc::clone(&log);
            registry
                .add(
                    Route::new("b")
                        .unwrap()
                        .with_render_hook(move || log.lock().push("render-b")),
                )
                .unwrap();
        }

        location.set_fragment("a");
        controller.navigate().unwrap();
        location.set_fragment("b");
        controller.navigate().unwrap();

        // A's exit callbacks run exactly once, in reverse-push order,
        // strictly before B renders
        assert_eq!(
            *log.lock(),
            vec!["render-a", "exit-a-2", "exit-a-1", "render-b"]
        );
        assert!(exit.is_empty());
    }

    #[test]
    fn test_active_marker_moves_between_links() {
        let (controller, registry, _exit, surface, location) = controller(None);

        registry.add(Route::new("a").unwrap()).unwrap();
        registry.add(Route::new("b").unwrap()).unwrap();
        let link_a = surface.insert_menu_link("a");
        let link_b = surface.insert_menu_link("b");

        location.set_fragment("a");
        controller.navigate().unwrap();
        assert_eq!(surface.classes_of(&link_a), vec!["active"]);

        location.set_fragment("b");
        controller.navigate().unwrap();
        assert!(surface.classes_of(&link_a).is_empty());
        assert_eq!(surface.classes_of(&link_b), vec!["active"]);
    }

    #[test]
    fn test_missing_menu_link_is_not_an_error() {
        let (controller, registry, _exit, _surface, location) = controller(None);

        registry.add(Route::new("a").unwrap()).unwrap();
        location.set_fragment("a");

        controller.navigate().unwrap();
    }

    #[test]
    fn test_resolution_failure_changes_nothing() {
        let (controller, _registry, exit, surface, location) = controller(None);

        let link = surface.insert_menu_link("old");
        surface.add_active_class(&link);
        exit.push(|| {});
        location.set_fragment("ghost");

        let result = controller.navigate();

        assert!(matches!(
            result,
            Err(NavigationError::ResolutionFailed(ref id)) if id == "ghost"
        ));
        // View, fragment, and exit stack all frozen
        assert_eq!(surface.classes_of(&link), vec!["active"]);
        assert_eq!(location.fragment(), "ghost");
        assert_eq!(exit.len(), 1);
    }

    #[test]
    fn test_fallback_rewrites_fragment() {
        let (controller, registry, _exit, _surface, location) = controller(Some("a"));
        let renders = Arc::new(Mutex::new(0));

        {
            let renders = Arc::clone(&renders);
            registry
                .add(
                    Route::new("a")
                        .unwrap()
                        .with_render_hook(move || *renders.lock() += 1),
                )
                .unwrap();
        }

        location.set_fragment("ghost");
        controller.navigate().unwrap();

        assert_eq!(location.fragment(), "a");
        assert_eq!(*renders.lock(), 1);
    }

    #[test]
    fn test_leading_marker_stripped() {
        let (controller, registry, _exit, _surface, location) = controller(None);

        registry.add(Route::new("a").unwrap()).unwrap();
        location.set_fragment("#a");

        controller.navigate().unwrap();
    }

    #[test]
    fn test_reentrant_navigation_rejected() {
        let (controller, registry, _exit, _surface, location) = controller(None);
        let inner_result = Arc::new(Mutex::new(None));

        {
            let controller = controller.clone();
            let inner_result = Arc::clone(&inner_result);
            registry
                .add(Route::new("a").unwrap().with_render_hook(move || {
                    *inner_result.lock() = Some(controller.navigate());
                }))
                .unwrap();
        }

        location.set_fragment("a");
        controller.navigate().unwrap();

        assert!(matches!(
            *inner_result.lock(),
            Some(Err(NavigationError::ReentrantNavigation))
        ));
    }
}
