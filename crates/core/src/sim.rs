//! An in-memory page for driving the engine without a browser.
//!
//! Element rectangles are stored in document coordinates; the host reports
//! them shifted by the current scroll offset, the way a browser reports
//! bounding boxes relative to the viewport.

use scrollyt_protocol::Rect;
use serde::{Deserialize, Serialize};

use crate::host::Host;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimElement {
    pub id: String,
    #[serde(default)]
    pub classes: Vec<String>,
    /// Document-space box.
    pub rect: Rect,
    #[serde(skip)]
    transform: Option<String>,
}

impl SimElement {
    pub fn transform(&self) -> Option<&str> {
        self.transform.as_deref()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPage {
    viewport_height: f64,
    #[serde(default)]
    scroll_offset: f64,
    #[serde(default)]
    elements: Vec<SimElement>,
}

impl SimulatedPage {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            scroll_offset: 0.0,
            elements: Vec::new(),
        }
    }

    /// Add an element and return its handle.
    pub fn add_element(&mut self, id: &str, classes: &[&str], rect: Rect) -> usize {
        self.elements.push(SimElement {
            id: id.to_string(),
            classes: classes.iter().map(ToString::to_string).collect(),
            rect,
            transform: None,
        });
        self.elements.len() - 1
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    /// Move an element within the document.
    pub fn set_rect(&mut self, id: &str, rect: Rect) {
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == id) {
            element.rect = rect;
        }
    }

    pub fn elements(&self) -> &[SimElement] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&SimElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn transform(&self, id: &str) -> Option<&str> {
        self.element(id).and_then(SimElement::transform)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_class(class))
    }
}

impl Host for SimulatedPage {
    type Element = usize;

    fn lookup_by_id(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    fn lookup_by_class(&self, class: &str) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_class(class))
            .map(|(i, _)| i)
            .collect()
    }

    fn bounding_box(&self, element: &usize) -> Rect {
        self.elements
            .get(*element)
            .map(|e| e.rect.shifted_up(self.scroll_offset))
            .unwrap_or_default()
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    fn set_transform(&mut self, element: &usize, transform: &str) {
        if let Some(e) = self.elements.get_mut(*element) {
            e.transform = Some(transform.to_string());
        }
    }

    fn add_class(&mut self, element: &usize, class: &str) {
        if let Some(e) = self.elements.get_mut(*element)
            && !e.has_class(class)
        {
            e.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: &usize, class: &str) {
        if let Some(e) = self.elements.get_mut(*element) {
            e.classes.retain(|c| c != class);
        }
    }
}
