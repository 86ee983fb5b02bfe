/// Viewport scroll state shared by every binding of one coordinator.
///
/// Only [`crate::coordinator::ScrollCoordinator::on_scroll`] writes it;
/// handlers receive it by shared reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    offset: f64,
    viewport_height: f64,
    view_bottom: f64,
}

impl ScrollState {
    /// State before any scroll notification: offset zero. The viewport
    /// height is fixed for the state's lifetime.
    pub fn new(viewport_height: f64) -> Self {
        Self {
            offset: 0.0,
            viewport_height,
            view_bottom: viewport_height,
        }
    }

    pub fn update(&mut self, offset: f64) {
        self.offset = offset;
        self.view_bottom = offset + self.viewport_height;
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Document coordinate of the bottom edge of the viewport.
    pub fn view_bottom(&self) -> f64 {
        self.view_bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_bottom_follows_offset() {
        let mut state = ScrollState::new(800.0);
        assert_eq!(state.view_bottom(), 800.0);
        state.update(250.0);
        assert_eq!(state.offset(), 250.0);
        assert_eq!(state.view_bottom(), 1050.0);
        assert_eq!(state.viewport_height(), 800.0);
    }
}
