use anyhow::{Context, Result, bail};
use log::debug;
use scrollyt_core::{BindingId, Phase, ScrollCoordinator, SimulatedPage};
use scrollyt_protocol::BindingConfig;
use serde::Deserialize;

/// Upper bound on the number of frames one replay captures.
const MAX_FRAMES: f64 = 100_000.0;

/// Scroll offsets visited during a replay, `from..=to` by `step`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Sweep {
    pub from: f64,
    pub to: f64,
    pub step: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 2000.0,
            step: 100.0,
        }
    }
}

impl Sweep {
    fn offsets(self) -> Result<Vec<f64>> {
        if self.step <= 0.0 || !self.step.is_finite() {
            bail!("sweep step must be a positive number, got {}", self.step);
        }
        let steps = ((self.to - self.from) / self.step).floor();
        if !steps.is_finite() || steps >= MAX_FRAMES {
            bail!(
                "sweep {}..={} by {} exceeds {MAX_FRAMES} frames",
                self.from,
                self.to,
                self.step
            );
        }
        let count = steps.max(-1.0) as i64 + 1;
        Ok((0..count).map(|i| self.from + i as f64 * self.step).collect())
    }
}

/// A page plus the bindings to replay on it.
#[derive(Debug, Clone, Deserialize)]
pub struct Scene {
    #[serde(flatten)]
    pub page: SimulatedPage,
    #[serde(default)]
    pub sweep: Sweep,
    pub bindings: Vec<BindingConfig>,
}

/// Element state after one scroll notification.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementState {
    pub id: String,
    pub transform: Option<String>,
    pub classes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub offset: f64,
    pub view_bottom: f64,
    pub phases: Vec<(BindingId, Phase)>,
    pub elements: Vec<ElementState>,
}

impl Scene {
    /// Bind everything, then scroll through the sweep and capture a frame
    /// after each notification.
    pub fn play(self) -> Result<Vec<Frame>> {
        let offsets = self.sweep.offsets()?;
        let mut coordinator = ScrollCoordinator::new(self.page);

        let mut ids = Vec::with_capacity(self.bindings.len());
        for (index, config) in self.bindings.iter().enumerate() {
            let id = coordinator
                .bind(config)
                .with_context(|| format!("binding #{index}"))?;
            ids.push(id);
        }
        debug!("replaying {} binding(s) over {} offsets", ids.len(), offsets.len());

        let frames = offsets
            .into_iter()
            .map(|offset| {
                coordinator.host_mut().scroll_to(offset);
                coordinator.on_scroll();
                capture(&coordinator, &ids)
            })
            .collect();
        Ok(frames)
    }
}

fn capture(coordinator: &ScrollCoordinator<SimulatedPage>, ids: &[BindingId]) -> Frame {
    let phases = ids
        .iter()
        .filter_map(|id| coordinator.phase(*id).map(|phase| (*id, phase)))
        .collect();
    let elements = coordinator
        .host()
        .elements()
        .iter()
        .map(|e| ElementState {
            id: e.id.clone(),
            transform: e.transform().map(ToString::to_string),
            classes: e.classes.clone(),
        })
        .collect();
    Frame {
        offset: coordinator.state().offset(),
        view_bottom: coordinator.state().view_bottom(),
        phases,
        elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "viewport_height": 1000,
        "elements": [
            {"id": "banner", "rect": {"x": 0, "y": 0, "w": 800, "h": 100}},
            {"id": "section", "rect": {"x": 0, "y": 800, "w": 800, "h": 600}},
            {"id": "card", "classes": ["reveal"], "rect": {"x": 0, "y": 1300, "w": 800, "h": 100}}
        ],
        "sweep": {"from": 0, "to": 800, "step": 200},
        "bindings": [
            {"type": "two_point", "animation": "banner", "kind": "translate3d",
             "start": "0,0px,0", "stop": "0,100px,0", "trigger": "section",
             "start_point": "top-middle", "stop_point": "top-top"},
            {"type": "class_toggle", "class": "reveal", "position": "bottom"}
        ]
    }"#;

    #[test]
    fn replays_every_offset() {
        let scene: Scene = serde_json::from_str(SCENE).unwrap();
        let frames = scene.play().unwrap();
        let offsets: Vec<f64> = frames.iter().map(|f| f.offset).collect();
        assert_eq!(offsets, vec![0.0, 200.0, 400.0, 600.0, 800.0]);

        let banner = |frame: &Frame| frame.elements[0].transform.clone().unwrap();
        assert_eq!(banner(&frames[0]), "translate3d(0,0px,0)");
        assert_eq!(banner(&frames[2]), "translate3d(0,20px,0)");
        assert_eq!(banner(&frames[4]), "translate3d(0,100px,0)");

        assert!(!frames[1].elements[2].classes.contains(&"on".to_string()));
        assert!(frames[2].elements[2].classes.contains(&"on".to_string()));
    }

    #[test]
    fn bad_binding_is_reported_with_its_index() {
        let json = SCENE.replace("\"translate3d\"", "\"rotate3d\"");
        let scene: Scene = serde_json::from_str(&json).unwrap();
        let err = scene.play().unwrap_err();
        assert_eq!(err.to_string(), "binding #0");
    }

    #[test]
    fn sweep_offsets() {
        let sweep = Sweep {
            from: 100.0,
            to: 350.0,
            step: 100.0,
        };
        assert_eq!(sweep.offsets().unwrap(), vec![100.0, 200.0, 300.0]);
        let empty = Sweep {
            from: 10.0,
            to: 0.0,
            step: 5.0,
        };
        assert!(empty.offsets().unwrap().is_empty());
        let bad = Sweep { step: 0.0, ..sweep };
        assert!(bad.offsets().is_err());
        let huge = Sweep {
            from: 0.0,
            to: 1e18,
            step: 1.0,
        };
        let err = huge.offsets().unwrap_err();
        assert!(err.to_string().contains("frames"));
        let unbounded = Sweep {
            to: f64::INFINITY,
            ..huge
        };
        assert!(unbounded.offsets().is_err());
    }
}
