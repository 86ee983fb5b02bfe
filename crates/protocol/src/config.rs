use serde::{Deserialize, Serialize};

use crate::axis::AxisMap;

/// Class added by a class toggle when none is configured.
pub const DEFAULT_TOGGLE_CLASS: &str = "on";

/// Animation endpoints in either accepted input form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisSpec {
    /// Comma-separated list, e.g. `"0, 50px, 0"`.
    List(String),
    /// Named axes, e.g. `{"x": 0, "y": "50px", "z": 0}`.
    Map(AxisMap),
}

impl AxisSpec {
    pub fn to_axis_map(&self) -> AxisMap {
        match self {
            AxisSpec::List(list) => AxisMap::from_list(list),
            AxisSpec::Map(map) => map.clone(),
        }
    }
}

impl From<AxisMap> for AxisSpec {
    fn from(map: AxisMap) -> Self {
        AxisSpec::Map(map)
    }
}

/// Declarative description of one scroll binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BindingConfig {
    /// Toggle a class on every element carrying `class` once the bottom of
    /// the viewport passes the element's threshold.
    ClassToggle {
        class: String,
        /// `top`, `middle` or `bottom`.
        position: String,
        /// Pixels subtracted from the threshold.
        #[serde(default)]
        offset: f64,
        #[serde(default = "default_toggle_class")]
        toggle_class: String,
    },
    /// Interpolate a transform on `animation` while `trigger` travels
    /// between two break points.
    TwoPoint {
        animation: String,
        kind: String,
        start: Option<AxisSpec>,
        stop: Option<AxisSpec>,
        trigger: String,
        start_point: String,
        stop_point: String,
    },
}

fn default_toggle_class() -> String {
    DEFAULT_TOGGLE_CLASS.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::{Axis, AxisInput};

    #[test]
    fn class_toggle_defaults() {
        let json = r#"{"type": "class_toggle", "class": "fade", "position": "middle"}"#;
        let config: BindingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config,
            BindingConfig::ClassToggle {
                class: "fade".to_string(),
                position: "middle".to_string(),
                offset: 0.0,
                toggle_class: "on".to_string(),
            }
        );
    }

    #[test]
    fn two_point_accepts_both_axis_forms() {
        let json = r#"{
            "type": "two_point",
            "animation": "banner",
            "kind": "translate3d",
            "start": "0, 0, 0",
            "stop": {"x": "100px", "y": 0, "z": 0},
            "trigger": "hero",
            "start_point": "top-bottom",
            "stop_point": "top-top"
        }"#;
        let config: BindingConfig = serde_json::from_str(json).unwrap();
        let BindingConfig::TwoPoint { start, stop, .. } = config else {
            panic!("expected a two point binding");
        };
        let start = start.unwrap().to_axis_map();
        let stop = stop.unwrap().to_axis_map();
        assert_eq!(start.len(), 3);
        assert_eq!(stop.get(Axis::X), Some(&AxisInput::from("100px")));
        assert_eq!(stop.get(Axis::Y), Some(&AxisInput::Number(0.0)));
    }

    #[test]
    fn two_point_missing_stop_is_none() {
        let json = r#"{
            "type": "two_point",
            "animation": "banner",
            "kind": "translate3d",
            "start": "0,0,0",
            "trigger": "hero",
            "start_point": "top-bottom",
            "stop_point": "top-top"
        }"#;
        let config: BindingConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(config, BindingConfig::TwoPoint { stop: None, .. }));
    }
}
