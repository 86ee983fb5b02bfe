//! Scroll-linked transform engine.
//!
//! An [`AnimationValue`] validates a start/stop pair and renders transforms
//! for any scroll percent. A [`ScrollCoordinator`] turns trigger element
//! geometry into break points and, on every scroll notification, picks the
//! phase of each binding and writes the matching transform through its
//! [`Host`].

pub mod anim;
pub mod coordinator;
pub mod error;
pub mod host;
pub mod point;
pub mod sim;
pub mod state;
pub mod units;
pub mod window;

pub use anim::{AnimationSpec, AnimationValue, AxisTrack};
pub use coordinator::{BindingId, ScrollCoordinator, TogglePosition};
pub use error::{Result, ValidationError};
pub use host::Host;
pub use point::PointDescriptor;
pub use sim::SimulatedPage;
pub use state::ScrollState;
pub use window::{Phase, ScrollWindow};
