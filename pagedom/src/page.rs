use std::collections::HashMap;

use crate::element::{find_element, find_element_mut, Element};

/// Where the page currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub hash: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            hash: None,
        }
    }
}

impl Location {
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            hash: None,
        }
    }
}

/// Recorded vertical geometry of an element, as measured by the host.
///
/// The tree itself carries no layout; hosts record the offsets behaviors
/// need (anchor targets, the header) the same way a layout pass would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    /// Document-absolute top offset, in pixels.
    pub top: u32,
    /// Rendered height, in pixels.
    pub height: u32,
}

/// A loaded document: the element tree plus the browsing context around it.
///
/// The root element doubles as the body for page-wide classes.
#[derive(Debug)]
pub struct Page {
    pub root: Element,
    pub location: Location,
    pub viewport_width: u32,
    pub scroll_y: u32,
    metrics: HashMap<String, Metrics>,
}

impl Page {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            location: Location::default(),
            viewport_width: 1280,
            scroll_y: 0,
            metrics: HashMap::new(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// Record an element's measured geometry.
    pub fn set_metrics(&mut self, id: impl Into<String>, metrics: Metrics) {
        self.metrics.insert(id.into(), metrics);
    }

    pub fn metrics_of(&self, id: &str) -> Option<Metrics> {
        self.metrics.get(id).copied()
    }
}
