//! Tabstrip Group Context
//!
//! Shared state for one tab strip instance: the active tab, the transition
//! counter that orders activation attempts, the optional transition guard and
//! the group-level intents (add, overflow, close) raised by tab units.

mod config;
mod error;
mod event;
mod group;
mod guard;
mod id;

pub use config::{GroupConfig, TabType, TriggerMode};
pub use error::{GroupError, GuardError};
pub use event::{GroupEvent, GroupEvents};
pub use group::{TabGroup, Transitions};
pub use guard::{GuardFuture, TransitionGuard};
pub use id::TabId;

pub type Result<T> = std::result::Result<T, GroupError>;
