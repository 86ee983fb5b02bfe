use serde::{Deserialize, Serialize};

/// An axis-aligned box. Element geometry reported by a host is
/// viewport-relative: `y` shrinks as the page scrolls down.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// The same box moved up by `dy` (e.g. document space to viewport space).
    pub fn shifted_up(self, dy: f64) -> Self {
        Self {
            y: self.y - dy,
            ..self
        }
    }
}
