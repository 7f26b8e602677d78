use std::collections::BTreeSet;

use crate::features::reports::models::Report;

/// Report ids ticked in the admin table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSelection {
    ids: BTreeSet<u32>,
}

impl ReportSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` if absent, remove it otherwise. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, id: u32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Select every visible report, or clear the selection when all of them
    /// are already selected
    pub fn select_all(&mut self, visible: &[Report]) {
        if !visible.is_empty() && self.all_selected(visible) {
            self.clear();
        } else {
            self.ids = visible.iter().map(|r| r.id).collect();
        }
    }

    pub fn all_selected(&self, visible: &[Report]) -> bool {
        self.ids.len() == visible.len() && visible.iter().all(|r| self.ids.contains(&r.id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop ids that no longer exist, e.g. after a delete
    pub fn retain_existing(&mut self, reports: &[Report]) {
        self.ids.retain(|id| reports.iter().any(|r| r.id == *id));
    }
}
