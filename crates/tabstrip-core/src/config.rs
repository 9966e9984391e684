//! Strip configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use tabstrip_group::{GroupConfig, TabType, TriggerMode};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Values shared with every unit of the strip
    #[serde(flatten)]
    pub group: GroupConfig,
    /// Render an add control after the content tabs
    pub addable: bool,
    /// Select tabs created through the add control
    pub activate_on_add: bool,
    /// Label for tabs created through the add control
    pub new_tab_label: String,
    /// How many closed tabs can be reopened
    pub max_closed_tabs: usize,
}

impl StripConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Apply `TABSTRIP_TRIGGER` and `TABSTRIP_TYPE` from the environment
    pub fn apply_env(&mut self) -> Result<()> {
        let trigger = std::env::var("TABSTRIP_TRIGGER").ok();
        let tab_type = std::env::var("TABSTRIP_TYPE").ok();
        self.apply_overrides(trigger.as_deref(), tab_type.as_deref())
    }

    pub fn apply_overrides(&mut self, trigger: Option<&str>, tab_type: Option<&str>) -> Result<()> {
        if let Some(trigger) = trigger {
            self.group.trigger = trigger.parse::<TriggerMode>()?;
        }
        if let Some(tab_type) = tab_type {
            self.group.tab_type = tab_type.parse::<TabType>()?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.new_tab_label.trim().is_empty() {
            return Err(CoreError::Config(
                "new_tab_label cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            group: GroupConfig::default(),
            addable: false,
            activate_on_add: true,
            new_tab_label: "New Tab".to_string(),
            max_closed_tabs: 20,
        }
    }
}
