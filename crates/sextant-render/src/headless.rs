//! Headless render surface
//!
//! A complete in-memory implementation of `RenderSurface`. Tests build
//! one the way a browser embedder would hand the core a real DOM; it also
//! serves embedders that render somewhere other than a document.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::surface::{ElementHandle, RenderSurface};

#[derive(Debug, Clone, Default)]
struct Element {
    tag: String,
    class_names: Vec<String>,
    content: String,
    children: Vec<ElementHandle>,
    /// Set on menu-link elements so `find_menu_link` can resolve them
    route_id: Option<String>,
}

pub struct HeadlessSurface {
    elements: Arc<RwLock<HashMap<String, Element>>>,
    /// Class applied by `add_active_class`; removal names its class
    /// explicitly, addition does not
    active_class: String,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::with_active_class("active")
    }

    pub fn with_active_class(class_name: impl Into<String>) -> Self {
        Self {
            elements: Arc::new(RwLock::new(HashMap::new())),
            active_class: class_name.into(),
        }
    }

    /// Register a menu-link element for a route id.
    ///
    /// Embedders create links however they like; the surface only needs
    /// to be able to find them again by route id.
    pub fn insert_menu_link(&self, route_id: &str) -> ElementHandle {
        let handle = ElementHandle::from_id(Uuid::new_v4().to_string());

        self.elements.write().insert(
            handle.as_str().to_string(),
            Element {
                tag: "a".to_string(),
                route_id: Some(route_id.to_string()),
                ..Element::default()
            },
        );

        handle
    }

    // === Introspection for tests and embedders ===

    pub fn classes_of(&self, handle: &ElementHandle) -> Vec<String> {
        self.elements
            .read()
            .get(handle.as_str())
            .map(|el| el.class_names.clone())
            .unwrap_or_default()
    }

    pub fn content_of(&self, handle: &ElementHandle) -> Option<String> {
        self.elements
            .read()
            .get(handle.as_str())
            .map(|el| el.content.clone())
    }

    pub fn children_of(&self, handle: &ElementHandle) -> Vec<ElementHandle> {
        self.elements
            .read()
            .get(handle.as_str())
            .map(|el| el.children.clone())
            .unwrap_or_default()
    }

    /// Handles of every element currently bearing a class
    pub fn with_class(&self, class_name: &str) -> Vec<ElementHandle> {
        self.elements
            .read()
            .iter()
            .filter(|(_, el)| el.class_names.iter().any(|c| c == class_name))
            .map(|(id, _)| ElementHandle::from_id(id.clone()))
            .collect()
    }
}

impl RenderSurface for HeadlessSurface {
    fn create_container(&self, tag: &str, class_names: &[&str]) -> ElementHandle {
        let handle = ElementHandle::from_id(Uuid::new_v4().to_string());

        self.elements.write().insert(
            handle.as_str().to_string(),
            Element {
                tag: tag.to_string(),
                class_names: class_names.iter().map(|c| c.to_string()).collect(),
                ..Element::default()
            },
        );

        handle
    }

    fn append_child(&self, parent: &ElementHandle, child: &ElementHandle) {
        // Mount points addressed by document id materialize on first use
        self.elements
            .write()
            .entry(parent.as_str().to_string())
            .or_default()
            .children
            .push(child.clone());
    }

    fn find_menu_link(&self, route_id: &str) -> Option<ElementHandle> {
        self.elements
            .read()
            .iter()
            .find(|(_, el)| el.route_id.as_deref() == Some(route_id))
            .map(|(id, _)| ElementHandle::from_id(id.clone()))
    }

    fn find_page_element(&self, id: &str) -> Option<ElementHandle> {
        if self.elements.read().contains_key(id) {
            Some(ElementHandle::from_id(id))
        } else {
            None
        }
    }

    fn set_inner_content(&self, handle: &ElementHandle, html: &str) {
        if let Some(el) = self.elements.write().get_mut(handle.as_str()) {
            el.content = html.to_string();
        }
    }

    fn add_active_class(&self, handle: &ElementHandle) {
        if let Some(el) = self.elements.write().get_mut(handle.as_str()) {
            if !el.class_names.iter().any(|c| c == &self.active_class) {
                el.class_names.push(self.active_class.clone());
            }
        }
    }

    fn remove_active_class_from_all(&self, class_name: &str) {
        for el in self.elements.write().values_mut() {
            el.class_names.retain(|c| c != class_name);
        }
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HeadlessSurface {
    fn clone(&self) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            active_class: self.active_class.clone(),
        }
    }
}
