pub mod axis;
pub mod config;
pub mod kind;
pub mod types;

pub use axis::{Axis, AxisInput, AxisMap, Unit, format_number};
pub use config::{AxisSpec, BindingConfig};
pub use kind::AnimationKind;
pub use types::Rect;
