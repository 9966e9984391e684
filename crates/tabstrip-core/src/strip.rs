//! Tab Strip
//!
//! Owner of the ordered tab list. Units raise intents on the group; the strip
//! consumes them and decides what adding, overflowing and closing mean.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tabstrip_group::{GroupEvent, GroupEvents, TabGroup, TabId};
use tabstrip_tab::TabUnit;

use crate::config::StripConfig;
use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabEntry {
    pub id: TabId,
    /// Display label, the identity is shown when missing
    pub label: Option<String>,
    pub disabled: bool,
    /// Overrides the strip's closable default
    pub closable: Option<bool>,
}

impl TabEntry {
    pub fn new(id: impl Into<TabId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            disabled: false,
            closable: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = Some(closable);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ClosedTab {
    pub entry: TabEntry,
    /// Position the tab had when it was closed
    pub index: usize,
    pub closed_at: DateTime<Utc>,
}

pub struct TabStrip {
    config: StripConfig,
    group: TabGroup,
    events: GroupEvents,
    tabs: Vec<TabEntry>,
    recently_closed: Vec<ClosedTab>,
    /// Set by the renderer when not every tab fits
    overflowing: bool,
    overflow_open: bool,
}

impl TabStrip {
    pub fn new(config: StripConfig) -> Self {
        let (group, events) = TabGroup::new(config.group.clone());

        Self {
            config,
            group,
            events,
            tabs: Vec::new(),
            recently_closed: Vec::new(),
            overflowing: false,
            overflow_open: false,
        }
    }

    pub fn with_tabs(config: StripConfig, tabs: impl IntoIterator<Item = TabEntry>) -> Result<Self> {
        let mut strip = Self::new(config);
        for entry in tabs {
            strip.add_tab(entry)?;
        }
        Ok(strip)
    }

    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    pub fn group(&self) -> &TabGroup {
        &self.group
    }

    pub fn tabs(&self) -> &[TabEntry] {
        &self.tabs
    }

    pub fn get_tab(&self, id: &TabId) -> Result<&TabEntry> {
        self.tabs
            .iter()
            .find(|t| &t.id == id)
            .ok_or_else(|| CoreError::TabNotFound(id.clone()))
    }

    pub fn active(&self) -> Option<TabId> {
        self.group.active()
    }

    /// Append a tab
    pub fn add_tab(&mut self, entry: TabEntry) -> Result<()> {
        let index = self.tabs.len();
        self.insert_tab(index, entry)
    }

    /// Insert a tab at `index`, clamped to the end of the list
    pub fn insert_tab(&mut self, index: usize, entry: TabEntry) -> Result<()> {
        if self.position(&entry.id).is_some() {
            return Err(CoreError::DuplicateTab(entry.id));
        }

        let index = index.min(self.tabs.len());
        tracing::debug!(tab_id = %entry.id, index, "Inserted tab");
        self.tabs.insert(index, entry);
        Ok(())
    }

    /// Make a tab active on behalf of the owner, bypassing the guard
    pub fn select(&self, id: &TabId) -> Result<()> {
        self.get_tab(id)?;
        self.group.select(id.clone());
        Ok(())
    }

    pub fn set_overflowing(&mut self, overflowing: bool) {
        self.overflowing = overflowing;
        if !overflowing {
            self.overflow_open = false;
        }
    }

    pub fn is_overflow_open(&self) -> bool {
        self.overflow_open
    }

    pub fn recently_closed(&self) -> &[ClosedTab] {
        &self.recently_closed
    }

    /// Units to render, in order: content tabs, the add control, then the
    /// overflow control while tabs overflow.
    pub fn units(&self) -> Vec<TabUnit> {
        let mut units: Vec<TabUnit> = self
            .tabs
            .iter()
            .map(|entry| {
                let unit = TabUnit::content(self.group.clone(), entry.id.clone())
                    .with_disabled(entry.disabled)
                    .with_closable(entry.closable);
                match &entry.label {
                    Some(label) => unit.with_label(label.clone()),
                    None => unit,
                }
            })
            .collect();

        if self.config.addable {
            units.push(TabUnit::add_control(self.group.clone()));
        }
        if self.overflowing {
            units.push(TabUnit::overflow_control(self.group.clone()));
        }

        units
    }

    /// Apply every intent queued so far. Returns how many were handled.
    ///
    /// An intent that cannot be applied (e.g. a close for a tab that is
    /// already gone) is logged and skipped.
    pub fn pump(&mut self) -> usize {
        let events = self.events.drain();
        let count = events.len();

        for event in events {
            if let Err(e) = self.handle_event(event) {
                tracing::warn!(error = %e, "Failed to apply tab intent");
            }
        }

        count
    }

    /// Wait for the next intent and apply it
    pub async fn process_next(&mut self) -> Option<Result<GroupEvent>> {
        let event = self.events.recv().await?;
        Some(self.handle_event(event.clone()).map(|()| event))
    }

    pub fn handle_event(&mut self, event: GroupEvent) -> Result<()> {
        match event {
            GroupEvent::Activated { id, previous } => {
                tracing::debug!(tab_id = %id, previous = ?previous, "Tab activated");
                Ok(())
            }
            GroupEvent::Cleared { previous } => {
                tracing::debug!(previous = %previous, "No tab active");
                Ok(())
            }
            GroupEvent::AddRequested => self.add_new_tab().map(|_| ()),
            GroupEvent::OverflowRequested => {
                self.overflow_open = !self.overflow_open;
                tracing::debug!(open = self.overflow_open, "Toggled tab overflow");
                Ok(())
            }
            GroupEvent::CloseRequested(id) => self.close_tab(&id).map(|_| ()),
        }
    }

    /// Append a fresh tab and select it when configured to
    pub fn add_new_tab(&mut self) -> Result<TabId> {
        let id = TabId::from(Uuid::new_v4().to_string());
        self.add_tab(TabEntry::new(id.clone()).with_label(self.config.new_tab_label.clone()))?;

        if self.config.activate_on_add {
            self.group.select(id.clone());
        }

        tracing::info!(tab_id = %id, "Created new tab");

        Ok(id)
    }

    /// Remove a tab.
    ///
    /// Pending guarded activations are discarded first, whichever tab they
    /// target. When the closed tab was active the nearest enabled tab to its
    /// right, else to its left, becomes active.
    pub fn close_tab(&mut self, id: &TabId) -> Result<TabEntry> {
        let index = self
            .position(id)
            .ok_or_else(|| CoreError::TabNotFound(id.clone()))?;

        self.group.invalidate_pending();

        let entry = self.tabs.remove(index);
        if self.group.is_active(&entry.id) {
            match self.neighbour(index) {
                Some(next) => self.group.select(next),
                None => self.group.clear(),
            }
        }

        self.recently_closed.push(ClosedTab {
            entry: entry.clone(),
            index,
            closed_at: Utc::now(),
        });
        if self.recently_closed.len() > self.config.max_closed_tabs {
            let overflow = self.recently_closed.len() - self.config.max_closed_tabs;
            self.recently_closed.drain(0..overflow);
        }

        tracing::info!(tab_id = %entry.id, "Closed tab");

        Ok(entry)
    }

    /// Restore the most recently closed tab at its old position and select
    /// it, unless it is disabled
    pub fn reopen_closed(&mut self) -> Result<TabId> {
        let closed = self.recently_closed.pop().ok_or(CoreError::NothingToReopen)?;
        let id = closed.entry.id.clone();

        if let Err(e) = self.insert_tab(closed.index, closed.entry.clone()) {
            self.recently_closed.push(closed);
            return Err(e);
        }
        if !closed.entry.disabled {
            self.group.select(id.clone());
        }

        tracing::info!(tab_id = %id, "Reopened closed tab");

        Ok(id)
    }

    fn position(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == id)
    }

    /// Tab to activate after the tab at `index` was removed
    fn neighbour(&self, index: usize) -> Option<TabId> {
        let right = self.tabs[index.min(self.tabs.len())..].iter();
        let left = self.tabs[..index.min(self.tabs.len())].iter().rev();

        right
            .chain(left)
            .find(|t| !t.disabled)
            .map(|t| t.id.clone())
    }
}
