mod dom;
mod logger;

use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use scrollyt_core::{AnimationValue, BindingId, Host, ScrollCoordinator};
use scrollyt_protocol::config::DEFAULT_TOGGLE_CLASS;
use scrollyt_protocol::{AxisMap, AxisSpec, BindingConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub use dom::DomHost;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);
}

/// Set console log verbosity: `off`, `error`, `warn`, `info`, `debug`, `trace`.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) -> Result<(), JsError> {
    let level = logger::parse_level(level)
        .ok_or_else(|| JsError::new(&format!("unknown log level: {level}")))?;
    logger::init(level);
    Ok(())
}

fn js_error(e: JsValue) -> JsError {
    JsError::new(&format!("{e:?}"))
}

/// Endpoints passed from JS: a list string, an `{x, y, z}` object, or
/// `undefined`/`null` for a missing value.
fn axis_map(value: &JsValue) -> Result<Option<AxisMap>, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let spec: AxisSpec = serde_wasm_bindgen::from_value(value.clone())
        .map_err(|e| JsError::new(&e.to_string()))?;
    Ok(Some(spec.to_axis_map()))
}

/// Scroll-driven animations for one document.
///
/// Listens to the document's `scroll` event for as long as it lives; call
/// `free()` from JS to detach the listener and drop every binding.
#[wasm_bindgen]
pub struct Scrollyt {
    coordinator: Rc<RefCell<ScrollCoordinator<DomHost>>>,
    listener: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl Scrollyt {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Scrollyt, JsError> {
        let host = DomHost::new()?;
        let document = host.document().clone();
        let coordinator = Rc::new(RefCell::new(ScrollCoordinator::new(host)));

        let handle = Rc::clone(&coordinator);
        let listener = Closure::<dyn FnMut()>::new(move || {
            if let Ok(mut coordinator) = handle.try_borrow_mut() {
                coordinator.on_scroll();
            }
        });
        document
            .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            .map_err(js_error)?;

        Ok(Scrollyt {
            coordinator,
            listener,
        })
    }

    /// Toggle `animation` (default `on`) on every element with class `class`
    /// as the viewport passes it. Returns the binding id.
    #[wasm_bindgen(js_name = scrollAnimate)]
    pub fn scroll_animate(
        &self,
        class: &str,
        position: &str,
        offset: Option<f64>,
        animation: Option<String>,
    ) -> Result<u32, JsError> {
        let toggle = animation.as_deref().unwrap_or(DEFAULT_TOGGLE_CLASS);
        let id = self.coordinator.borrow_mut().bind_class_toggle(
            class,
            position,
            offset.unwrap_or_default(),
            toggle,
        )?;
        Ok(id.get())
    }

    /// Interpolate a transform on `#animation` while `#trigger` scrolls from
    /// `start_point` to `stop_point`. Returns the binding id.
    #[wasm_bindgen(js_name = twoPointsTransform)]
    #[allow(clippy::too_many_arguments)]
    pub fn two_points_transform(
        &self,
        animation: &str,
        kind: &str,
        start: &JsValue,
        stop: &JsValue,
        trigger: &str,
        start_point: &str,
        stop_point: &str,
    ) -> Result<u32, JsError> {
        let start = axis_map(start)?;
        let stop = axis_map(stop)?;
        let id = self.coordinator.borrow_mut().bind_two_point_transform(
            animation,
            kind,
            start.as_ref(),
            stop.as_ref(),
            trigger,
            start_point,
            stop_point,
        )?;
        Ok(id.get())
    }

    /// Register a binding from its JSON config.
    pub fn bind(&self, config: &str) -> Result<u32, JsError> {
        let config: BindingConfig =
            serde_json::from_str(config).map_err(|e| JsError::new(&e.to_string()))?;
        let id = self.coordinator.borrow_mut().bind(&config)?;
        Ok(id.get())
    }

    pub fn unbind(&self, id: u32) -> bool {
        self.coordinator
            .borrow_mut()
            .unbind(BindingId::from_raw(id))
    }

    /// Break point of `#element` for a descriptor such as `top-bottom-20`.
    #[wasm_bindgen(js_name = resolveBreakPoint)]
    pub fn resolve_break_point(&self, element: &str, descriptor: &str) -> Result<f64, JsError> {
        let coordinator = self.coordinator.borrow();
        let element = coordinator
            .host()
            .lookup_by_id(element)
            .ok_or_else(|| JsError::new(&format!("no element found for `{element}`")))?;
        Ok(coordinator.resolve_break_point(&element, descriptor)?)
    }

    /// Run every binding against the current scroll position without
    /// waiting for a scroll event, e.g. right after page load.
    pub fn refresh(&self) {
        self.coordinator.borrow_mut().on_scroll();
    }
}

impl Drop for Scrollyt {
    fn drop(&mut self) {
        let coordinator = self.coordinator.borrow();
        let removed = coordinator.host().document().remove_event_listener_with_callback(
            "scroll",
            self.listener.as_ref().unchecked_ref(),
        );
        if let Err(e) = removed {
            log::warn!("failed to detach scroll listener: {e:?}");
        }
    }
}

/// A standalone animated element, driven manually from JS.
#[wasm_bindgen]
pub struct ScrollAnimation {
    host: DomHost,
    value: AnimationValue<HtmlElement>,
}

#[wasm_bindgen]
impl ScrollAnimation {
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: &str,
        kind: &str,
        start: &JsValue,
        stop: &JsValue,
    ) -> Result<ScrollAnimation, JsError> {
        let host = DomHost::new()?;
        let start = axis_map(start)?;
        let stop = axis_map(stop)?;
        let value = AnimationValue::new(&host, element, kind, start.as_ref(), stop.as_ref())?;
        Ok(ScrollAnimation { host, value })
    }

    #[wasm_bindgen(js_name = applyAtRatio)]
    pub fn apply_at_ratio(&mut self, scroll_percent: i32) {
        self.value
            .apply_at_ratio(&mut self.host, i64::from(scroll_percent));
    }

    #[wasm_bindgen(js_name = applyStart)]
    pub fn apply_start(&mut self) {
        self.value.apply_start(&mut self.host);
    }

    #[wasm_bindgen(js_name = applyStop)]
    pub fn apply_stop(&mut self) {
        self.value.apply_stop(&mut self.host);
    }

    #[wasm_bindgen(js_name = transformAtRatio)]
    pub fn transform_at_ratio(&self, scroll_percent: i32) -> String {
        self.value.transform_at_ratio(i64::from(scroll_percent))
    }
}
