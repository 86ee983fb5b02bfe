use log::{debug, trace, warn};
use scrollyt_protocol::{AxisMap, BindingConfig};

use crate::anim::AnimationValue;
use crate::error::{Result, ValidationError};
use crate::host::Host;
use crate::point::PointDescriptor;
use crate::state::ScrollState;
use crate::window::{Phase, ScrollWindow};

/// Token identifying one registered binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u32);

impl BindingId {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

/// Viewport line a class toggle threshold is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TogglePosition {
    Top,
    Middle,
    Bottom,
}

impl TogglePosition {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "top" => Some(TogglePosition::Top),
            "middle" => Some(TogglePosition::Middle),
            "bottom" => Some(TogglePosition::Bottom),
            _ => None,
        }
    }

    fn threshold(self, y: f64, viewport_height: f64) -> f64 {
        match self {
            TogglePosition::Bottom => y,
            TogglePosition::Middle => y + viewport_height / 2.0,
            TogglePosition::Top => y + viewport_height,
        }
    }
}

struct ToggleTarget<E> {
    element: E,
    threshold: f64,
}

enum Binding<E> {
    ClassToggle {
        targets: Vec<ToggleTarget<E>>,
        class: String,
    },
    Transform {
        animation: AnimationValue<E>,
        trigger: E,
        window: ScrollWindow,
    },
}

impl<E: Clone> Binding<E> {
    fn on_scroll<H>(&self, host: &mut H, state: &ScrollState)
    where
        H: Host<Element = E>,
    {
        match self {
            Binding::ClassToggle { targets, class } => {
                for target in targets {
                    if state.view_bottom() >= target.threshold {
                        host.add_class(&target.element, class);
                    } else {
                        host.remove_class(&target.element, class);
                    }
                }
            }
            Binding::Transform {
                animation,
                trigger,
                window,
            } => {
                let position = host.bounding_box(trigger).y;
                match window.classify(position) {
                    Phase::Active(percent) => animation.apply_at_ratio(host, percent),
                    Phase::Before => animation.apply_start(host),
                    Phase::After => animation.apply_stop(host),
                }
            }
        }
    }
}

/// Owns the page host, the shared scroll state and every binding, and
/// drives the bindings on each scroll notification.
pub struct ScrollCoordinator<H: Host> {
    host: H,
    state: ScrollState,
    bindings: Vec<(BindingId, Binding<H::Element>)>,
    next_id: u32,
}

impl<H: Host> ScrollCoordinator<H> {
    /// The viewport height is sampled here once and never re-read.
    pub fn new(host: H) -> Self {
        let state = ScrollState::new(host.viewport_height());
        Self {
            host,
            state,
            bindings: Vec::new(),
            next_id: 0,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Handle one scroll notification: read the offset, then run every
    /// binding in registration order.
    pub fn on_scroll(&mut self) {
        self.state.update(self.host.scroll_offset());
        trace!(
            "scroll offset {} (view bottom {})",
            self.state.offset(),
            self.state.view_bottom()
        );
        for (_, binding) in &self.bindings {
            binding.on_scroll(&mut self.host, &self.state);
        }
    }

    /// Scroll-axis coordinate of `descriptor` for `element`'s current box.
    pub fn resolve_break_point(&self, element: &H::Element, descriptor: &str) -> Result<f64> {
        let point = PointDescriptor::parse(descriptor)?;
        let rect = self.host.bounding_box(element);
        Ok(point.resolve(rect.h, self.state.viewport_height()))
    }

    /// Add `toggle_class` to every element carrying `class` once the bottom
    /// of the viewport reaches the element's threshold, and remove it again
    /// above it. Thresholds are fixed now, from the elements' current boxes.
    pub fn bind_class_toggle(
        &mut self,
        class: &str,
        position: &str,
        offset: f64,
        toggle_class: &str,
    ) -> Result<BindingId> {
        let elements = self.host.lookup_by_class(class);
        if elements.is_empty() {
            return Err(ValidationError::ElementNotFound(class.to_string()));
        }
        let anchor = TogglePosition::parse(position);
        if anchor.is_none() {
            warn!("unknown toggle position `{position}` for `.{class}`, using 0 as threshold");
        }

        let viewport_height = self.state.viewport_height();
        let targets = elements
            .into_iter()
            .map(|element| {
                let y = self.host.bounding_box(&element).y;
                let base = anchor.map_or(0.0, |a| a.threshold(y, viewport_height));
                ToggleTarget {
                    element,
                    threshold: base - offset,
                }
            })
            .collect::<Vec<_>>();

        debug!(
            "class toggle `{toggle_class}` on {} `.{class}` element(s)",
            targets.len()
        );
        Ok(self.register(Binding::ClassToggle {
            targets,
            class: toggle_class.to_string(),
        }))
    }

    /// Animate `animation_id` between `start` and `stop` while the trigger
    /// element travels from `start_point` to `stop_point`.
    #[allow(clippy::too_many_arguments)]
    pub fn bind_two_point_transform(
        &mut self,
        animation_id: &str,
        kind: &str,
        start: Option<&AxisMap>,
        stop: Option<&AxisMap>,
        trigger_id: &str,
        start_point: &str,
        stop_point: &str,
    ) -> Result<BindingId> {
        let animation = AnimationValue::new(&self.host, animation_id, kind, start, stop)?;
        let trigger = self
            .host
            .lookup_by_id(trigger_id)
            .ok_or_else(|| ValidationError::ElementNotFound(trigger_id.to_string()))?;

        let window = ScrollWindow::new(
            self.resolve_break_point(&trigger, start_point)?,
            self.resolve_break_point(&trigger, stop_point)?,
        );
        if window.is_degenerate() {
            warn!("`#{animation_id}`: break points coincide at {}", window.start());
        }

        debug!(
            "{} on `#{animation_id}` triggered by `#{trigger_id}` from {} to {}",
            animation.kind(),
            window.start(),
            window.stop()
        );
        Ok(self.register(Binding::Transform {
            animation,
            trigger,
            window,
        }))
    }

    /// Register a binding described by a config value.
    pub fn bind(&mut self, config: &BindingConfig) -> Result<BindingId> {
        match config {
            BindingConfig::ClassToggle {
                class,
                position,
                offset,
                toggle_class,
            } => self.bind_class_toggle(class, position, *offset, toggle_class),
            BindingConfig::TwoPoint {
                animation,
                kind,
                start,
                stop,
                trigger,
                start_point,
                stop_point,
            } => {
                let start = start.as_ref().map(|s| s.to_axis_map());
                let stop = stop.as_ref().map(|s| s.to_axis_map());
                self.bind_two_point_transform(
                    animation,
                    kind,
                    start.as_ref(),
                    stop.as_ref(),
                    trigger,
                    start_point,
                    stop_point,
                )
            }
        }
    }

    /// Remove a binding. Returns `false` if it was not registered.
    pub fn unbind(&mut self, id: BindingId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|(bound, _)| *bound != id);
        let removed = self.bindings.len() != before;
        if removed {
            debug!("unbound binding {}", id.get());
        }
        removed
    }

    /// Break points of a transform binding.
    pub fn window(&self, id: BindingId) -> Option<ScrollWindow> {
        self.bindings.iter().find_map(|(bound, binding)| match binding {
            Binding::Transform { window, .. } if *bound == id => Some(*window),
            _ => None,
        })
    }

    /// Phase a transform binding is in for the current geometry.
    pub fn phase(&self, id: BindingId) -> Option<Phase> {
        self.bindings.iter().find_map(|(bound, binding)| match binding {
            Binding::Transform {
                trigger, window, ..
            } if *bound == id => Some(window.classify(self.host.bounding_box(trigger).y)),
            _ => None,
        })
    }

    fn register(&mut self, binding: Binding<H::Element>) -> BindingId {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push((id, binding));
        id
    }
}
