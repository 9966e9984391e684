//! Tabstrip Core
//!
//! Coordination layer for a tab strip: owns the ordered tab list, builds the
//! units the renderer binds events to, and applies the add/overflow/close
//! policy when units raise intents.

mod config;
mod error;
mod strip;

pub use config::StripConfig;
pub use error::CoreError;
pub use strip::{ClosedTab, TabEntry, TabStrip};

// Re-export the unit and group layers
pub use tabstrip_group::{
    GroupConfig, GroupError, GroupEvent, GroupEvents, GuardError, GuardFuture, TabGroup, TabId,
    TabType, TransitionGuard, TriggerMode,
};
pub use tabstrip_tab::{
    resolve_closable, Activation, CloseOutcome, Gesture, IgnoreReason, PendingTransition, Pointer,
    PointerEvent, ScheduledActivation, TabIcon, TabKind, TabLabel, TabRole, TabUnit, TabView,
    TransitionOutcome,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
