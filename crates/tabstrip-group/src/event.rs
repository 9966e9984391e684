//! Group intents and notifications
//!
//! Units raise intents without waiting for the owner to act on them.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::id::TabId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupEvent {
    /// The active tab changed
    Activated {
        id: TabId,
        previous: Option<TabId>,
    },
    /// No tab is active any more
    Cleared { previous: TabId },
    /// The add control was used
    AddRequested,
    /// The overflow control was used
    OverflowRequested,
    /// A close affordance was used on a tab
    CloseRequested(TabId),
}

/// Receiving side of a group's event stream, held by the tab list owner.
///
/// Every commit queues an [`GroupEvent::Activated`] notice on an unbounded
/// channel, so a holder has to drain it regularly (see [`GroupEvents::drain`]).
/// Dropping the receiver turns every later send into a no-op.
pub struct GroupEvents {
    rx: UnboundedReceiver<GroupEvent>,
}

impl GroupEvents {
    pub(crate) fn channel() -> (UnboundedSender<GroupEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }

    /// Wait for the next event. Returns `None` once every group handle is gone.
    pub async fn recv(&mut self) -> Option<GroupEvent> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<GroupEvent> {
        self.rx.try_recv().ok()
    }

    /// Take every event queued so far
    pub fn drain(&mut self) -> Vec<GroupEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}
