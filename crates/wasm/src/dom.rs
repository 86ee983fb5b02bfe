use log::warn;
use scrollyt_core::Host;
use scrollyt_protocol::Rect;
use wasm_bindgen::{JsCast, JsError};
use web_sys::{Document, HtmlElement, Window};

/// [`Host`] backed by the live document.
#[derive(Debug, Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new() -> Result<Self, JsError> {
        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsError::new("no document"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for DomHost {
    type Element = HtmlElement;

    fn lookup_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn lookup_by_class(&self, class: &str) -> Vec<HtmlElement> {
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .filter_map(|element| element.dyn_into().ok())
            .collect()
    }

    fn bounding_box(&self, element: &HtmlElement) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn viewport_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn set_transform(&mut self, element: &HtmlElement, transform: &str) {
        if let Err(e) = element.style().set_property("transform", transform) {
            warn!("failed to set transform `{transform}`: {e:?}");
        }
    }

    fn add_class(&mut self, element: &HtmlElement, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            warn!("failed to add class `{class}`: {e:?}");
        }
    }

    fn remove_class(&mut self, element: &HtmlElement, class: &str) {
        if let Err(e) = element.class_list().remove_1(class) {
            warn!("failed to remove class `{class}`: {e:?}");
        }
    }
}
