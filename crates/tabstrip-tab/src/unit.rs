//! Tab unit

use tabstrip_group::{TabGroup, TabId};

use crate::closable::resolve_closable;
use crate::kind::TabKind;

/// One interactive element of the strip.
///
/// Units are cheap to build and hold no state of their own beyond their
/// props; the owner recreates them whenever its tab list changes.
#[derive(Clone)]
pub struct TabUnit {
    pub(crate) group: TabGroup,
    pub(crate) kind: TabKind,
    pub(crate) disabled: bool,
    /// Per-unit override of the group's closable default
    pub(crate) closable: Option<bool>,
    pub(crate) label: Option<String>,
    pub(crate) left_padded: bool,
}

impl TabUnit {
    fn with_kind(group: TabGroup, kind: TabKind) -> Self {
        Self {
            group,
            kind,
            disabled: false,
            closable: None,
            label: None,
            left_padded: false,
        }
    }

    pub fn content(group: TabGroup, id: impl Into<TabId>) -> Self {
        Self::with_kind(group, TabKind::Content(id.into()))
    }

    pub fn add_control(group: TabGroup) -> Self {
        Self::with_kind(group, TabKind::AddControl)
    }

    pub fn overflow_control(group: TabGroup) -> Self {
        Self::with_kind(group, TabKind::OverflowControl)
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_closable(mut self, closable: Option<bool>) -> Self {
        self.closable = closable;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_left_padding(mut self, padded: bool) -> Self {
        self.left_padded = padded;
        self
    }

    pub fn kind(&self) -> &TabKind {
        &self.kind
    }

    pub fn identity(&self) -> Option<&TabId> {
        self.kind.identity()
    }

    pub fn group(&self) -> &TabGroup {
        &self.group
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_closable(&mut self, closable: Option<bool>) {
        self.closable = closable;
    }

    /// Resolved against the group default as it is right now
    pub fn closable(&self) -> bool {
        resolve_closable(&self.kind, self.closable, self.group.closable_default())
    }

    /// Whether this unit's tab is the group's active tab.
    /// Always false for virtual tabs.
    pub fn is_active(&self) -> bool {
        match &self.kind {
            TabKind::Content(id) => self.group.is_active(id),
            TabKind::AddControl | TabKind::OverflowControl => false,
        }
    }
}

impl std::fmt::Debug for TabUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TabUnit")
            .field("kind", &self.kind)
            .field("disabled", &self.disabled)
            .field("closable", &self.closable)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
