//! Tab Group
//!
//! Owns the only mutable state shared by the units of one strip: the active
//! tab and the transition counter. Units read it and request changes through
//! [`TabGroup::with_transitions`]; the owner of the tab list drives it through
//! [`TabGroup::select`] and consumes the intents units raise.

use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::{GroupConfig, TabType, TriggerMode};
use crate::event::{GroupEvent, GroupEvents};
use crate::guard::TransitionGuard;
use crate::id::TabId;

struct GroupState {
    active: Option<TabId>,
    /// Bumped once per activation attempt; the newest ticket wins
    counter: u64,
    trigger: TriggerMode,
    tab_type: TabType,
    closable: bool,
    tab_style: Option<String>,
    guard: Option<Arc<dyn TransitionGuard>>,
}

/// Exclusive view of the activation state for the duration of one
/// [`TabGroup::with_transitions`] call.
pub struct Transitions<'a> {
    state: &'a mut GroupState,
    events: Vec<GroupEvent>,
}

impl Transitions<'_> {
    pub fn active(&self) -> Option<&TabId> {
        self.state.active.as_ref()
    }

    pub fn counter(&self) -> u64 {
        self.state.counter
    }

    /// Increment the counter and return the new value as this attempt's ticket
    pub fn advance(&mut self) -> u64 {
        self.state.counter += 1;
        self.state.counter
    }

    pub fn guard(&self) -> Option<Arc<dyn TransitionGuard>> {
        self.state.guard.clone()
    }

    /// Replace the active tab
    pub fn commit(&mut self, id: TabId) {
        if self.state.active.as_ref() == Some(&id) {
            return;
        }

        let previous = self.state.active.replace(id.clone());
        tracing::debug!(tab_id = %id, previous = ?previous, "Committed tab activation");
        self.events.push(GroupEvent::Activated { id, previous });
    }
}

pub struct TabGroup {
    state: Arc<RwLock<GroupState>>,
    events: UnboundedSender<GroupEvent>,
}

impl TabGroup {
    /// Create a group and the receiver for its events.
    ///
    /// The channel is unbounded: whoever holds the [`GroupEvents`] must keep
    /// draining it, or drop it to stop events from being queued at all.
    pub fn new(config: GroupConfig) -> (Self, GroupEvents) {
        let (events, receiver) = GroupEvents::channel();

        let group = Self {
            state: Arc::new(RwLock::new(GroupState {
                active: config.value,
                counter: 0,
                trigger: config.trigger,
                tab_type: config.tab_type,
                closable: config.closable,
                tab_style: config.tab_style,
                guard: None,
            })),
            events,
        };

        (group, receiver)
    }

    /// Run `f` with exclusive access to the active tab and counter.
    ///
    /// Activations committed inside `f` are announced after the lock is released.
    pub fn with_transitions<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Transitions<'_>) -> T,
    {
        let (result, events) = {
            let mut state = self.state.write();
            let mut transitions = Transitions {
                state: &mut *state,
                events: Vec::new(),
            };
            let result = f(&mut transitions);
            (result, transitions.events)
        };

        for event in events {
            self.emit(event);
        }

        result
    }

    /// Get the active tab
    pub fn active(&self) -> Option<TabId> {
        self.state.read().active.clone()
    }

    pub fn is_active(&self, id: &TabId) -> bool {
        self.state.read().active.as_ref() == Some(id)
    }

    pub fn transition_counter(&self) -> u64 {
        self.state.read().counter
    }

    /// Commit `id` as the active tab without touching the counter
    pub fn activate(&self, id: TabId) {
        self.with_transitions(|tx| tx.commit(id));
    }

    /// Make `id` active on behalf of the owner.
    ///
    /// Advances the counter first, so any guarded attempt still waiting on
    /// its guard can no longer commit. The guard is not consulted.
    pub fn select(&self, id: TabId) {
        self.with_transitions(|tx| {
            tx.advance();
            tx.commit(id);
        });
    }

    /// Clear the active tab and discard pending attempts.
    ///
    /// Announced as [`GroupEvent::Cleared`] when a tab was active.
    pub fn clear(&self) {
        self.with_transitions(|tx| {
            tx.advance();
            if let Some(previous) = tx.state.active.take() {
                tracing::debug!(previous = %previous, "Cleared active tab");
                tx.events.push(GroupEvent::Cleared { previous });
            }
        });
    }

    /// Make every pending guarded attempt stale
    pub fn invalidate_pending(&self) {
        self.with_transitions(|tx| {
            tx.advance();
        });
    }

    pub fn request_add(&self) {
        self.emit(GroupEvent::AddRequested);
    }

    pub fn request_show_overflow(&self) {
        self.emit(GroupEvent::OverflowRequested);
    }

    pub fn request_close(&self, id: TabId) {
        self.emit(GroupEvent::CloseRequested(id));
    }

    pub fn guard(&self) -> Option<Arc<dyn TransitionGuard>> {
        self.state.read().guard.clone()
    }

    pub fn set_guard(&self, guard: impl TransitionGuard + 'static) {
        self.state.write().guard = Some(Arc::new(guard));
    }

    pub fn clear_guard(&self) {
        self.state.write().guard = None;
    }

    pub fn trigger(&self) -> TriggerMode {
        self.state.read().trigger
    }

    pub fn set_trigger(&self, trigger: TriggerMode) {
        self.state.write().trigger = trigger;
    }

    pub fn tab_type(&self) -> TabType {
        self.state.read().tab_type
    }

    pub fn set_tab_type(&self, tab_type: TabType) {
        self.state.write().tab_type = tab_type;
    }

    pub fn closable_default(&self) -> bool {
        self.state.read().closable
    }

    pub fn set_closable_default(&self, closable: bool) {
        self.state.write().closable = closable;
    }

    pub fn tab_style(&self) -> Option<String> {
        self.state.read().tab_style.clone()
    }

    pub fn set_tab_style(&self, style: Option<String>) {
        self.state.write().tab_style = style;
    }

    fn emit(&self, event: GroupEvent) {
        // Intents are fire-and-forget; nobody listening is not an error
        let _ = self.events.send(event);
    }
}

impl Clone for TabGroup {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            events: self.events.clone(),
        }
    }
}
