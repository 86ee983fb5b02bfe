use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// One spatial dimension of a transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Axes in the order they appear in a transform's argument list.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Length unit shared by both endpoints of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    None,
    Px,
    Em,
    Percent,
}

impl Unit {
    /// Units tried during unit detection, in order. The last match wins.
    pub const CANDIDATES: [Unit; 4] = [Unit::Px, Unit::Em, Unit::Percent, Unit::None];

    /// Substring looked for in an endpoint's text during unit detection.
    ///
    /// `None` only matches the literal `null` token, so bare non-zero
    /// numbers never resolve to a unitless axis.
    pub fn token(self) -> &'static str {
        match self {
            Unit::None => "null",
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Percent => "%",
        }
    }

    /// Text appended to an interpolated magnitude.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            other => other.token(),
        }
    }
}

/// A raw animation endpoint exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisInput {
    Null,
    Number(f64),
    Text(String),
}

impl AxisInput {
    /// `0` or `"0"`. Zero endpoints are compatible with any unit.
    pub fn is_zero(&self) -> bool {
        match self {
            AxisInput::Number(n) => *n == 0.0,
            AxisInput::Text(s) => s == "0",
            AxisInput::Null => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AxisInput::Null)
    }
}

impl fmt::Display for AxisInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisInput::Null => f.write_str("null"),
            AxisInput::Number(n) => f.write_str(&format_number(*n)),
            AxisInput::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AxisInput {
    fn from(value: &str) -> Self {
        AxisInput::Text(value.to_string())
    }
}

impl From<String> for AxisInput {
    fn from(value: String) -> Self {
        AxisInput::Text(value)
    }
}

impl From<f64> for AxisInput {
    fn from(value: f64) -> Self {
        AxisInput::Number(value)
    }
}

impl From<i32> for AxisInput {
    fn from(value: i32) -> Self {
        AxisInput::Number(f64::from(value))
    }
}

impl<T: Into<AxisInput>> From<Option<T>> for AxisInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(AxisInput::Null, Into::into)
    }
}

/// Ordered endpoints for one to three axes (`x`, then `y`, then `z`).
///
/// The length is not validated here; the engine reports a bad axis count
/// as a validation error alongside its other checks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "NamedAxes", into = "NamedAxes")]
pub struct AxisMap {
    values: Vec<AxisInput>,
}

impl AxisMap {
    pub fn new(values: Vec<AxisInput>) -> Self {
        Self { values }
    }

    /// Parse the list form, e.g. `"10px, 0, 5em"`. Spaces are dropped and
    /// every comma-separated item becomes one text endpoint.
    pub fn from_list(list: &str) -> Self {
        let compact = list.replace(' ', "");
        compact.split(',').map(AxisInput::from).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, axis: Axis) -> Option<&AxisInput> {
        let index = Axis::ALL.iter().position(|a| *a == axis)?;
        self.values.get(index)
    }

    /// Endpoints paired with their axis name. Entries past `z` are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &AxisInput)> {
        Axis::ALL.into_iter().zip(self.values.iter())
    }
}

impl<T: Into<AxisInput>> FromIterator<T> for AxisMap {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl FromStr for AxisMap {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_list(s))
    }
}

/// Serialized shape of an [`AxisMap`]: `{ "x": .., "y": .., "z": .. }`.
#[derive(Clone, Serialize, Deserialize)]
struct NamedAxes {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    x: Option<AxisInput>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    y: Option<AxisInput>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    z: Option<AxisInput>,
}

/// Distinguishes an explicit `null` (kept as [`AxisInput::Null`]) from an
/// absent key (left as `None` by `#[serde(default)]`).
fn present<'de, D>(deserializer: D) -> Result<Option<AxisInput>, D::Error>
where
    D: Deserializer<'de>,
{
    AxisInput::deserialize(deserializer).map(Some)
}

impl TryFrom<NamedAxes> for AxisMap {
    type Error = String;

    fn try_from(named: NamedAxes) -> Result<Self, Self::Error> {
        let mut values = Vec::with_capacity(3);
        let mut gap: Option<Axis> = None;
        for (axis, slot) in Axis::ALL.into_iter().zip([named.x, named.y, named.z]) {
            match (slot, gap) {
                (Some(value), None) => values.push(value),
                (Some(_), Some(missing)) => {
                    return Err(format!("axis {axis} is set but axis {missing} is not"));
                }
                (None, _) => gap = gap.or(Some(axis)),
            }
        }
        Ok(Self { values })
    }
}

impl From<AxisMap> for NamedAxes {
    fn from(map: AxisMap) -> Self {
        let mut values = map.values.into_iter();
        Self {
            x: values.next(),
            y: values.next(),
            z: values.next(),
        }
    }
}

/// Render a number the way a browser prints it in a style string:
/// no trailing `.0`, no negative zero.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        n.to_string()
    }
}
