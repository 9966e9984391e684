//! Close affordance resolution

use crate::kind::TabKind;

/// Whether a unit shows a usable close affordance.
///
/// Virtual tabs are never closable. Content tabs use their own override when
/// they have one and the group default otherwise.
pub fn resolve_closable(kind: &TabKind, closable_override: Option<bool>, group_default: bool) -> bool {
    match kind {
        TabKind::AddControl | TabKind::OverflowControl => false,
        TabKind::Content(_) => closable_override.unwrap_or(group_default),
    }
}
