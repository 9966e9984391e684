//! Gesture dispatch
//!
//! Content tabs go through the activation race guard, and a guarded attempt is
//! spawned on the tokio runtime so it commits without the caller's help. Add
//! and overflow controls short-circuit to their group intent and never touch
//! the active tab or the transition counter.

use crate::activation::ScheduledActivation;
use crate::event::PointerEvent;
use crate::kind::TabKind;
use crate::unit::TabUnit;

#[derive(Debug)]
#[must_use = "a gesture reports what the unit did with the event"]
pub enum Gesture {
    /// The unit is disabled
    Ignored,
    AddRequested,
    OverflowRequested,
    Activation(ScheduledActivation),
}

impl TabUnit {
    /// Handle an activating gesture on this unit.
    ///
    /// # Panics
    ///
    /// Panics outside a tokio runtime when a content tab is activated while
    /// a transition guard is configured.
    pub fn dispatch_gesture(&self) -> Gesture {
        if self.disabled {
            return Gesture::Ignored;
        }

        match &self.kind {
            TabKind::AddControl => {
                self.group.request_add();
                Gesture::AddRequested
            }
            TabKind::OverflowControl => {
                self.group.request_show_overflow();
                Gesture::OverflowRequested
            }
            TabKind::Content(_) => Gesture::Activation(self.attempt_activate().schedule()),
        }
    }

    /// Entry point for pointer events on the tab body.
    ///
    /// Only the event matching the group's trigger mode dispatches, and an
    /// event whose propagation was stopped (e.g. by the close button) never does.
    #[must_use = "a gesture reports what the unit did with the event"]
    pub fn on_pointer(&self, event: &PointerEvent) -> Option<Gesture> {
        if event.is_propagation_stopped() {
            return None;
        }

        if !event.pointer().activates_in(self.group.trigger()) {
            return None;
        }

        Some(self.dispatch_gesture())
    }
}
