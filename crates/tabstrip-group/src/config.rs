//! Group configuration
//!
//! ```text
//! trigger   click | hover         which pointer event activates a tab
//! type      line | bar | segment | card
//! closable  group default, units may override
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GroupError;
use crate::id::TabId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerMode {
    /// Activate on an explicit click
    #[default]
    Click,
    /// Activate when the pointer enters the tab
    Hover,
}

impl TriggerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerMode::Click => "click",
            TriggerMode::Hover => "hover",
        }
    }
}

impl std::fmt::Display for TriggerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TriggerMode {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "click" => Ok(TriggerMode::Click),
            "hover" => Ok(TriggerMode::Hover),
            _ => Err(GroupError::UnknownTrigger(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabType {
    Line,
    #[default]
    Bar,
    Segment,
    /// Card tabs are the only style that renders a close button
    Card,
}

impl TabType {
    pub fn shows_close_button(&self) -> bool {
        matches!(self, TabType::Card)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TabType::Line => "line",
            TabType::Bar => "bar",
            TabType::Segment => "segment",
            TabType::Card => "card",
        }
    }
}

impl std::fmt::Display for TabType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TabType {
    type Err = GroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(TabType::Line),
            "bar" => Ok(TabType::Bar),
            "segment" => Ok(TabType::Segment),
            "card" => Ok(TabType::Card),
            _ => Err(GroupError::UnknownTabType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupConfig {
    /// Pointer event that activates a tab
    pub trigger: TriggerMode,
    /// Visual type of the strip
    #[serde(rename = "type")]
    pub tab_type: TabType,
    /// Whether content tabs are closable unless they say otherwise
    pub closable: bool,
    /// Style inherited by content tabs only
    pub tab_style: Option<String>,
    /// Initially active tab
    pub value: Option<TabId>,
}
