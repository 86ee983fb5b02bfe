use scrollyt_protocol::{AnimationKind, Axis};
use thiserror::Error;

/// Reasons a binding is rejected. All of them surface when the binding is
/// created; a binding that was accepted never fails afterwards.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("no element found for `{0}`")]
    ElementNotFound(String),
    #[error("animation start or stop value is not defined")]
    MissingValue,
    #[error("start has {start} axes and stop has {stop}; expected the same count, between 1 and 3")]
    ArityMismatch { start: usize, stop: usize },
    #[error("axis {axis}: units differ between start ({start}) and stop ({stop})")]
    UnitMismatch {
        axis: Axis,
        start: String,
        stop: String,
    },
    #[error("unsupported animation kind `{0}`")]
    UnsupportedKind(String),
    #[error("{kind} needs {required} axes, got {found}")]
    KindArity {
        kind: AnimationKind,
        required: usize,
        found: usize,
    },
    #[error("axis {axis}: `{value}` has no numeric magnitude")]
    InvalidMagnitude { axis: Axis, value: String },
    #[error("invalid point descriptor `{0}`")]
    InvalidPoint(String),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
