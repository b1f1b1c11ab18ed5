//! Rendering capability contract
//!
//! The core calls these primitives and nothing else; how elements are
//! actually created and styled belongs to the embedder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a rendered element.
///
/// Surfaces hand these out from `create_container` and the finders;
/// `from_id` addresses pre-existing mount points by their document id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn from_id(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The narrow rendering/DOM interface the navigation core drives.
///
/// All calls are synchronous and infallible; the absence of an element
/// is expressed through the `Option` finders, never as an error.
pub trait RenderSurface: Send + Sync {
    /// Create a detached container element
    fn create_container(&self, tag: &str, class_names: &[&str]) -> ElementHandle;

    /// Append a child under a parent (handle or pre-existing mount id)
    fn append_child(&self, parent: &ElementHandle, child: &ElementHandle);

    /// Menu-link element for a route id, if one exists
    fn find_menu_link(&self, route_id: &str) -> Option<ElementHandle>;

    /// Page element by document id, if one exists
    fn find_page_element(&self, id: &str) -> Option<ElementHandle>;

    /// Replace an element's inner markup
    fn set_inner_content(&self, handle: &ElementHandle, html: &str);

    /// Mark an element active
    fn add_active_class(&self, handle: &ElementHandle);

    /// Remove the active marker from every element bearing it
    fn remove_active_class_from_all(&self, class_name: &str);
}
