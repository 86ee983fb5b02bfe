use scrollyt_protocol::{AnimationKind, Axis, AxisInput, AxisMap, Unit, format_number};

use crate::error::{Result, ValidationError};
use crate::host::Host;
use crate::units::{check_units, clear_units};

/// Start/stop state of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTrack {
    pub axis: Axis,
    pub unit: Unit,
    /// Magnitude with the unit stripped; `None` for a null endpoint.
    pub start: Option<i64>,
    pub stop: Option<i64>,
    /// Change per scroll percent: `(stop - start) / 100`.
    pub delta: f64,
    start_literal: String,
    stop_literal: String,
}

impl AxisTrack {
    fn new(axis: Axis, start: &AxisInput, stop: &AxisInput) -> Result<Self> {
        let unit = check_units(axis, start, stop)?;
        let start_magnitude = clear_units(axis, start, unit)?;
        let stop_magnitude = clear_units(axis, stop, unit)?;
        // Magnitudes may span the whole i64 range; subtract as floats.
        let delta =
            (stop_magnitude.unwrap_or(0) as f64 - start_magnitude.unwrap_or(0) as f64) / 100.0;
        Ok(Self {
            axis,
            unit,
            start: start_magnitude,
            stop: stop_magnitude,
            delta,
            start_literal: literal(start),
            stop_literal: literal(stop),
        })
    }

    /// Interpolated value with its unit, e.g. `"25px"`.
    pub fn value_at(&self, scroll_percent: i64) -> String {
        let magnitude = scroll_percent as f64 * self.delta;
        format!("{}{}", format_number(magnitude), self.unit.suffix())
    }
}

/// Endpoint text used verbatim in boundary transforms. A null endpoint
/// renders as `0`, not as the `null` token, so the transform stays valid CSS.
fn literal(value: &AxisInput) -> String {
    match value {
        AxisInput::Null => "0".to_string(),
        other => other.to_string(),
    }
}

/// Validated start/stop values for one to three axes.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSpec {
    tracks: Vec<AxisTrack>,
}

impl AnimationSpec {
    pub fn new(start: Option<&AxisMap>, stop: Option<&AxisMap>) -> Result<Self> {
        let (Some(start), Some(stop)) = (start, stop) else {
            return Err(ValidationError::MissingValue);
        };
        if start.len() != stop.len() || !(1..=3).contains(&start.len()) {
            return Err(ValidationError::ArityMismatch {
                start: start.len(),
                stop: stop.len(),
            });
        }

        let tracks = start
            .iter()
            .zip(stop.iter())
            .map(|((axis, s), (_, e))| AxisTrack::new(axis, s, e))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { tracks })
    }

    pub fn tracks(&self) -> &[AxisTrack] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn track(&self, axis: Axis) -> Option<&AxisTrack> {
        self.tracks.iter().find(|t| t.axis == axis)
    }

    pub fn start_args(&self) -> Vec<&str> {
        self.tracks.iter().map(|t| t.start_literal.as_str()).collect()
    }

    pub fn stop_args(&self) -> Vec<&str> {
        self.tracks.iter().map(|t| t.stop_literal.as_str()).collect()
    }

    pub fn args_at_ratio(&self, scroll_percent: i64) -> Vec<String> {
        self.tracks
            .iter()
            .map(|t| t.value_at(scroll_percent))
            .collect()
    }
}

/// An element whose transform is driven between two validated states.
#[derive(Debug, Clone)]
pub struct AnimationValue<E> {
    element: E,
    kind: AnimationKind,
    spec: AnimationSpec,
    start_transform: String,
    stop_transform: String,
}

impl<E: Clone> AnimationValue<E> {
    /// Look up `element_id` on `host` and validate the animation.
    pub fn new<H>(
        host: &H,
        element_id: &str,
        kind: &str,
        start: Option<&AxisMap>,
        stop: Option<&AxisMap>,
    ) -> Result<Self>
    where
        H: Host<Element = E>,
    {
        let element = host
            .lookup_by_id(element_id)
            .ok_or_else(|| ValidationError::ElementNotFound(element_id.to_string()))?;
        let spec = AnimationSpec::new(start, stop)?;
        let kind = AnimationKind::from_css_name(kind)
            .ok_or_else(|| ValidationError::UnsupportedKind(kind.to_string()))?;
        Self::from_parts(element, kind, spec)
    }

    /// Pair an already resolved element and spec with a kind.
    pub fn from_parts(element: E, kind: AnimationKind, spec: AnimationSpec) -> Result<Self> {
        if spec.len() != kind.required_axes() {
            return Err(ValidationError::KindArity {
                kind,
                required: kind.required_axes(),
                found: spec.len(),
            });
        }
        let start_transform = kind.render(spec.start_args());
        let stop_transform = kind.render(spec.stop_args());
        Ok(Self {
            element,
            kind,
            spec,
            start_transform,
            stop_transform,
        })
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    pub fn spec(&self) -> &AnimationSpec {
        &self.spec
    }

    pub fn start_transform(&self) -> &str {
        &self.start_transform
    }

    pub fn stop_transform(&self) -> &str {
        &self.stop_transform
    }

    /// Transform for `scroll_percent`. Not clamped: values outside 0..=100
    /// extrapolate past the endpoints.
    pub fn transform_at_ratio(&self, scroll_percent: i64) -> String {
        self.kind.render(self.spec.args_at_ratio(scroll_percent))
    }

    pub fn apply_at_ratio<H>(&self, host: &mut H, scroll_percent: i64)
    where
        H: Host<Element = E>,
    {
        let transform = self.transform_at_ratio(scroll_percent);
        host.set_transform(&self.element, &transform);
    }

    pub fn apply_start<H>(&self, host: &mut H)
    where
        H: Host<Element = E>,
    {
        host.set_transform(&self.element, &self.start_transform);
    }

    pub fn apply_stop<H>(&self, host: &mut H)
    where
        H: Host<Element = E>,
    {
        host.set_transform(&self.element, &self.stop_transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimulatedPage;
    use scrollyt_protocol::Rect;

    fn map(list: &str) -> AxisMap {
        AxisMap::from_list(list)
    }

    fn page() -> SimulatedPage {
        let mut page = SimulatedPage::new(800.0);
        page.add_element("box", &[], Rect::new(0.0, 1200.0, 100.0, 100.0));
        page
    }

    #[test]
    fn specs_of_one_to_three_axes() {
        for (start, stop) in [("10px", "20px"), ("0,5em", "3em,0"), ("0,0,0", "1%,2%,3%")] {
            let spec = AnimationSpec::new(Some(&map(start)), Some(&map(stop))).unwrap();
            assert_eq!(spec.len(), start.split(',').count());
            assert_eq!(spec.start_args().join(","), start);
            assert_eq!(spec.stop_args().join(","), stop);
        }
    }

    #[test]
    fn spec_rejects_missing_and_arity() {
        let one = map("1px");
        let two = map("1px,2px");
        let four = map("1px,2px,3px,4px");
        assert_eq!(AnimationSpec::new(None, Some(&one)), Err(ValidationError::MissingValue));
        assert_eq!(AnimationSpec::new(Some(&one), None), Err(ValidationError::MissingValue));
        assert_eq!(
            AnimationSpec::new(Some(&one), Some(&two)),
            Err(ValidationError::ArityMismatch { start: 1, stop: 2 })
        );
        assert_eq!(
            AnimationSpec::new(Some(&four), Some(&four)),
            Err(ValidationError::ArityMismatch { start: 4, stop: 4 })
        );
        let empty = AxisMap::default();
        assert!(AnimationSpec::new(Some(&empty), Some(&empty)).is_err());
    }

    #[test]
    fn per_axis_delta() {
        let spec = AnimationSpec::new(Some(&map("0,100px,-50%")), Some(&map("50em,0,50%")))
            .unwrap();
        let deltas: Vec<f64> = spec.tracks().iter().map(|t| t.delta).collect();
        assert_eq!(deltas, vec![0.5, -1.0, 1.0]);
        let z = spec.track(Axis::Z).unwrap();
        assert_eq!(z.unit, Unit::Percent);
        assert_eq!((z.start, z.stop), (Some(-50), Some(50)));
    }

    #[test]
    fn null_axis_is_static() {
        let start: AxisMap = [AxisInput::from("0"), AxisInput::Null, AxisInput::from("0")]
            .into_iter()
            .collect();
        let stop: AxisMap = [AxisInput::from("10px"), AxisInput::Null, AxisInput::from("0")]
            .into_iter()
            .collect();
        let spec = AnimationSpec::new(Some(&start), Some(&stop)).unwrap();
        let y = spec.track(Axis::Y).unwrap();
        assert_eq!((y.start, y.delta, y.unit), (None, 0.0, Unit::None));
        assert_eq!(spec.args_at_ratio(50), vec!["5px", "0", "0"]);
    }

    #[test]
    fn extreme_magnitudes_do_not_overflow() {
        let start = map("-9223372036854775807px");
        let stop = map("9223372036854775807px");
        let spec = AnimationSpec::new(Some(&start), Some(&stop)).unwrap();
        let x = spec.track(Axis::X).unwrap();
        assert_eq!(x.delta, i64::MAX as f64 * 2.0 / 100.0);
        assert!(spec.args_at_ratio(100)[0].ends_with("px"));

        let reversed = AnimationSpec::new(Some(&stop), Some(&start)).unwrap();
        assert_eq!(reversed.tracks()[0].delta, -x.delta);
    }

    #[test]
    fn null_endpoints_render_as_zero_at_the_boundaries() {
        let page = page();
        let start: AxisMap = [AxisInput::from("0"), AxisInput::Null, AxisInput::from("0")]
            .into_iter()
            .collect();
        let stop: AxisMap = [AxisInput::from("8px"), AxisInput::Null, AxisInput::from("0")]
            .into_iter()
            .collect();
        let anim = AnimationValue::new(&page, "box", "translate3d", Some(&start), Some(&stop))
            .unwrap();
        assert_eq!(anim.start_transform(), "translate3d(0,0,0)");
        assert_eq!(anim.stop_transform(), "translate3d(8px,0,0)");
    }

    #[test]
    fn boundary_transforms_are_literal() {
        let page = page();
        let start = map("0, 0, 0");
        let stop = map("12.5px, -3em, 0");
        let anim = AnimationValue::new(&page, "box", "translate3d", Some(&start), Some(&stop))
            .unwrap();
        assert_eq!(anim.start_transform(), "translate3d(0,0,0)");
        assert_eq!(anim.stop_transform(), "translate3d(12.5px,-3em,0)");
    }

    #[test]
    fn ratio_transform_interpolates_without_clamping() {
        let page = page();
        let anim = AnimationValue::new(
            &page,
            "box",
            "translate3d",
            Some(&map("0,0,0")),
            Some(&map("100px,50%,0")),
        )
        .unwrap();
        assert_eq!(anim.transform_at_ratio(0), "translate3d(0px,0%,0)");
        assert_eq!(anim.transform_at_ratio(50), "translate3d(50px,25%,0)");
        assert_eq!(anim.transform_at_ratio(150), "translate3d(150px,75%,0)");
        assert_eq!(anim.transform_at_ratio(-10), "translate3d(-10px,-5%,0)");
    }

    #[test]
    fn apply_writes_through_host() {
        let mut page = page();
        let anim = AnimationValue::new(
            &page,
            "box",
            "translate3d",
            Some(&map("0,0,0")),
            Some(&map("0,200px,0")),
        )
        .unwrap();
        anim.apply_stop(&mut page);
        assert_eq!(page.transform("box"), Some("translate3d(0,200px,0)"));
        anim.apply_stop(&mut page);
        assert_eq!(page.transform("box"), Some("translate3d(0,200px,0)"));
        anim.apply_at_ratio(&mut page, 25);
        assert_eq!(page.transform("box"), Some("translate3d(0,50px,0)"));
        anim.apply_start(&mut page);
        anim.apply_start(&mut page);
        assert_eq!(page.transform("box"), Some("translate3d(0,0,0)"));
    }

    #[test]
    fn construction_errors_in_order() {
        let page = page();
        let three = map("0,0,0");
        let two = map("0,0");
        let result = AnimationValue::new(&page, "nope", "translate3d", None, None);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::ElementNotFound("nope".to_string())
        );
        let result = AnimationValue::new(&page, "box", "rotate3d", Some(&three), Some(&three));
        assert_eq!(
            result.unwrap_err(),
            ValidationError::UnsupportedKind("rotate3d".to_string())
        );
        let result = AnimationValue::new(&page, "box", "translate3d", Some(&two), Some(&two));
        assert_eq!(
            result.unwrap_err(),
            ValidationError::KindArity {
                kind: AnimationKind::Translate3d,
                required: 3,
                found: 2,
            }
        );
        let result = AnimationValue::new(
            &page,
            "box",
            "translate3d",
            Some(&map("10px,0,0")),
            Some(&map("10em,0,0")),
        );
        assert!(matches!(
            result.unwrap_err(),
            ValidationError::UnitMismatch { axis: Axis::X, .. }
        ));
    }
}
