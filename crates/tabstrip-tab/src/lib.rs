//! Tabstrip Tab Unit
//!
//! One unit per rendered tab, real or virtual. A unit decides whether a
//! gesture activates its tab, raises a group intent, or closes it. All durable
//! state lives in the [`TabGroup`] the unit was built with.

mod activation;
mod closable;
mod close;
mod dispatch;
mod event;
mod kind;
mod unit;
mod view;

pub use activation::{
    Activation, IgnoreReason, PendingTransition, ScheduledActivation, TransitionOutcome,
};
pub use closable::resolve_closable;
pub use close::CloseOutcome;
pub use dispatch::Gesture;
pub use event::{Pointer, PointerEvent};
pub use kind::TabKind;
pub use unit::TabUnit;
pub use view::{TabIcon, TabLabel, TabRole, TabView};

pub use tabstrip_group::{TabGroup, TabId, TabType, TriggerMode};
