//! Tab kinds

use tabstrip_group::TabId;

/// What a unit stands for. Only content tabs carry an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabKind {
    /// A tab bound to real content
    Content(TabId),
    /// The "add tab" button
    AddControl,
    /// The "more tabs" button shown while tabs overflow
    OverflowControl,
}

impl TabKind {
    pub fn identity(&self) -> Option<&TabId> {
        match self {
            TabKind::Content(id) => Some(id),
            TabKind::AddControl | TabKind::OverflowControl => None,
        }
    }

    pub fn is_virtual(&self) -> bool {
        !matches!(self, TabKind::Content(_))
    }
}
