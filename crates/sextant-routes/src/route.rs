//! Route data structure
//!
//! A route is a named view:
//! - `id` keys the route and is what the location fragment names
//! - `on_render` runs once per activation
//! - `payload` is opaque presentation data handed to the embedder verbatim

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RouteError;
use crate::Result;

/// Hook invoked when the route becomes active.
///
/// Hooks capture whatever context they need (typically a cloned router
/// handle for registering exit callbacks); the call itself takes nothing.
pub type RenderHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier, named by the location fragment
    pub id: String,
    /// Invoked exactly once each time the route becomes active
    #[serde(skip)]
    pub on_render: Option<RenderHook>,
    /// Opaque presentation payload (link content, page content, style
    /// hints); never interpreted by the core
    pub payload: Value,
    /// When the route was registered
    pub registered_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Route {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RouteError::EmptyId);
        }

        let now = Utc::now();

        Ok(Self {
            id,
            on_render: None,
            payload: Value::Null,
            registered_at: now,
            updated_at: now,
        })
    }

    /// Attach a presentation payload
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = payload;
        self
    }

    /// Attach a render hook
    pub fn with_render_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_render = Some(Arc::new(hook));
        self
    }

    /// Replace the presentation payload
    pub fn set_payload(&mut self, payload: Value) {
        self.payload = payload;
        self.updated_at = Utc::now();
    }

    /// Replace the render hook
    pub fn set_render_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.on_render = Some(Arc::new(hook));
        self.updated_at = Utc::now();
    }

    /// Merge a partial update into this route.
    ///
    /// Fields absent from the patch retain their prior values; a present
    /// `on_render` fully replaces the prior hook.
    pub fn apply(&mut self, patch: RoutePatch) {
        if let Some(hook) = patch.on_render {
            self.on_render = Some(hook);
        }
        if let Some(payload) = patch.payload {
            self.payload = payload;
        }
        self.updated_at = Utc::now();
    }

    /// Whether the route renders anything when activated
    pub fn has_render_hook(&self) -> bool {
        self.on_render.is_some()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("id", &self.id)
            .field("on_render", &self.on_render.is_some())
            .field("payload", &self.payload)
            .field("registered_at", &self.registered_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Partial route update. Only `id` is required; present fields replace
/// the stored values, absent fields leave them untouched.
#[derive(Clone, Default)]
pub struct RoutePatch {
    pub id: String,
    pub on_render: Option<RenderHook>,
    pub payload: Option<Value>,
}

impl RoutePatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            on_render: None,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_render_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_render = Some(Arc::new(hook));
        self
    }
}

impl fmt::Debug for RoutePatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoutePatch")
            .field("id", &self.id)
            .field("on_render", &self.on_render.is_some())
            .field("payload", &self.payload)
            .finish()
    }
}
