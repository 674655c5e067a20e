//! Section selection step with capacity validation.
//!
//! Manages a multi-select set of sections and enforces the room-capacity
//! ceiling before allowing progression. The aggregate enrolled count is
//! recomputed from the catalog on every query rather than maintained
//! incrementally; the catalog is small and a stale cached count would be a
//! correctness bug.

use std::collections::HashSet;

use crate::catalog::Catalog;

use super::{StepSink, WizardConfig};

/// Outcome of comparing the current selection against the capacity ceiling.
///
/// Exactly one state applies to any selection set: the three variants are
/// mutually exclusive and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityStatus {
    /// Nothing selected. Progression disabled; nothing to report.
    Empty,
    /// Selection fits within the ceiling. Progression enabled.
    Within { sections: usize, students: u32 },
    /// Selection exceeds the ceiling. Progression disabled; the advisory
    /// names both the aggregate and the ceiling.
    Exceeded { students: u32, capacity: u32 },
}

/// Step controller for the section-selection screen.
#[derive(Debug, Clone, Default)]
pub struct SectionCapacityValidator {
    selected: HashSet<String>,
}

impl SectionCapacityValidator {
    /// New validator with an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the selection from an already-committed configuration.
    pub fn from_config(config: &WizardConfig) -> Self {
        let selected = config
            .sections
            .as_deref()
            .unwrap_or_default()
            .iter()
            .cloned()
            .collect();
        Self { selected }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Toggle a section in or out of the selection. Two toggles of the same
    /// id cancel out.
    pub fn toggle(&mut self, id: &str) {
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
    }

    /// Replace the selection with the full catalog, regardless of the
    /// current state.
    pub fn select_all(&mut self, catalog: &Catalog) {
        self.selected = catalog.sections.iter().map(|s| s.id.clone()).collect();
    }

    /// Clear the selection unconditionally.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Aggregate enrolled-student count over the selected sections.
    ///
    /// Pure O(n) sum over the catalog; zero for the empty selection.
    pub fn aggregate(&self, catalog: &Catalog) -> u32 {
        catalog
            .sections
            .iter()
            .filter(|s| self.selected.contains(&s.id))
            .map(|s| s.enrolled_count)
            .sum()
    }

    /// Classify the current selection against the capacity ceiling.
    pub fn status(&self, catalog: &Catalog) -> CapacityStatus {
        if self.selected.is_empty() {
            return CapacityStatus::Empty;
        }

        let students = self.aggregate(catalog);
        if students > catalog.room_capacity {
            CapacityStatus::Exceeded {
                students,
                capacity: catalog.room_capacity,
            }
        } else {
            CapacityStatus::Within {
                sections: self.selected.len(),
                students,
            }
        }
    }

    /// Gate condition: selection non-empty and within capacity.
    pub fn can_continue(&self, catalog: &Catalog) -> bool {
        matches!(self.status(catalog), CapacityStatus::Within { .. })
    }

    /// The selected ids in catalog (display) order.
    pub fn selection_in_catalog_order(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .sections
            .iter()
            .filter(|s| self.selected.contains(&s.id))
            .map(|s| s.id.clone())
            .collect()
    }

    /// Commit the step: extend `config` with the selected sections, hand the
    /// merged configuration to the sink, then advance.
    ///
    /// No side effects when the gate is false; returns whether the commit
    /// happened.
    pub fn commit<S: StepSink>(
        &self,
        catalog: &Catalog,
        config: &WizardConfig,
        sink: &mut S,
    ) -> bool {
        if !self.can_continue(catalog) {
            return false;
        }

        let mut merged = config.clone();
        merged.sections = Some(self.selection_in_catalog_order(catalog));
        sink.update(&merged);
        sink.next();
        true
    }
}
