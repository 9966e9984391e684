//! Close requests

use crate::event::PointerEvent;
use crate::kind::TabKind;
use crate::unit::TabUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Requested,
    Ignored,
}

impl TabUnit {
    /// Handle a click on this unit's close affordance.
    ///
    /// The event never propagates to the tab body, so a close click cannot
    /// also activate the tab. Whether closing moves activation elsewhere is up
    /// to the owner of the group.
    pub fn attempt_close(&self, event: &mut PointerEvent) -> CloseOutcome {
        event.stop_propagation();

        if self.disabled {
            return CloseOutcome::Ignored;
        }

        match &self.kind {
            TabKind::Content(id) => {
                self.group.request_close(id.clone());
                CloseOutcome::Requested
            }
            TabKind::AddControl | TabKind::OverflowControl => CloseOutcome::Ignored,
        }
    }
}
