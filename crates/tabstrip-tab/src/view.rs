//! Presentation flags handed to the renderer
//!
//! Everything here is recomputed from the unit and the group on each call.

use serde::Serialize;
use tabstrip_group::TabId;

use crate::kind::TabKind;
use crate::unit::TabUnit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabRole {
    /// A content tab
    Item,
    /// An add or overflow control
    Operation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabIcon {
    Add,
    More,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TabLabel {
    Text(String),
    Icon(TabIcon),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabView {
    pub id: Option<TabId>,
    pub role: TabRole,
    pub label: TabLabel,
    pub is_active: bool,
    pub disabled: bool,
    pub closable: bool,
    /// Closable and the strip is a card strip
    pub show_close_button: bool,
    pub left_padded: bool,
    /// Group tab style, content tabs only
    pub style: Option<String>,
}

impl TabUnit {
    pub fn view(&self) -> TabView {
        let closable = self.closable();

        let (role, label, style) = match &self.kind {
            TabKind::Content(id) => (
                TabRole::Item,
                TabLabel::Text(self.label.clone().unwrap_or_else(|| id.to_string())),
                self.group.tab_style(),
            ),
            TabKind::AddControl => (TabRole::Operation, TabLabel::Icon(TabIcon::Add), None),
            TabKind::OverflowControl => (TabRole::Operation, TabLabel::Icon(TabIcon::More), None),
        };

        TabView {
            id: self.identity().cloned(),
            role,
            label,
            is_active: self.is_active(),
            disabled: self.disabled,
            closable,
            show_close_button: closable && self.group.tab_type().shows_close_button(),
            left_padded: self.left_padded && role == TabRole::Item,
            style,
        }
    }
}
