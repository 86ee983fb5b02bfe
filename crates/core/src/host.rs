use scrollyt_protocol::Rect;

/// The page an engine runs against: element lookup, geometry, viewport and
/// the style/class sinks. Implemented over the DOM in the wasm bridge and in
/// memory by [`crate::sim::SimulatedPage`].
pub trait Host {
    /// Handle to one element. Cheap to clone.
    type Element: Clone;

    fn lookup_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Every element currently carrying `class`, in document order.
    fn lookup_by_class(&self, class: &str) -> Vec<Self::Element>;

    /// Viewport-relative bounding box.
    fn bounding_box(&self, element: &Self::Element) -> Rect;

    fn viewport_height(&self) -> f64;

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    fn set_transform(&mut self, element: &Self::Element, transform: &str);

    fn add_class(&mut self, element: &Self::Element, class: &str);

    fn remove_class(&mut self, element: &Self::Element, class: &str);
}
