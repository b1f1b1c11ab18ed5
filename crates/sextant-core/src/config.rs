//! Router configuration
//!
//! Set once at construction, read thereafter. The core replaces its
//! defaults wholesale; it never merges partial configs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Class marking the active menu link
    pub active_class_name: String,
    /// Route to fall back to when the fragment names no known route
    pub default_route_id: Option<String>,
    /// Tag of the container created for menu links
    pub link_container_tag: String,
    /// Tag of the container created for page content
    pub page_container_tag: String,
    /// Markup shown in the page container before the first render
    pub loading_placeholder_html: String,
    /// Document id of the mount point for the link container
    pub nav_container_id: String,
    /// Document id of the mount point for the page container
    pub main_container_id: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            active_class_name: "active".to_string(),
            default_route_id: Some("home".to_string()),
            link_container_tag: "ul".to_string(),
            page_container_tag: "div".to_string(),
            loading_placeholder_html: "<p>Loading...</p>".to_string(),
            nav_container_id: "nav".to_string(),
            main_container_id: "main".to_string(),
        }
    }
}
