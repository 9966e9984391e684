//! Pointer events delivered by the renderer

use tabstrip_group::TriggerMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Click,
    /// Pointer moved onto the tab
    Enter,
}

impl Pointer {
    /// Whether this pointer event activates tabs under `trigger`
    pub fn activates_in(self, trigger: TriggerMode) -> bool {
        matches!(
            (self, trigger),
            (Pointer::Click, TriggerMode::Click) | (Pointer::Enter, TriggerMode::Hover)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerEvent {
    pointer: Pointer,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(pointer: Pointer) -> Self {
        Self {
            pointer,
            propagation_stopped: false,
        }
    }

    pub fn click() -> Self {
        Self::new(Pointer::Click)
    }

    pub fn enter() -> Self {
        Self::new(Pointer::Enter)
    }

    pub fn pointer(&self) -> Pointer {
        self.pointer
    }

    /// Keep this event from reaching enclosing handlers
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
