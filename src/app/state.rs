//! Application state definitions
//!
//! Contains the top-level AppState plus the flattened list of focusable
//! items on the exam-path screen, shared between key handling and rendering.

use crate::catalog::Catalog;
use crate::ui::file_picker::FilePickerState;
use crate::wizard::{ExamPathSelector, ExamType, SectionCapacityValidator, WizardConfig, WizardStep};

/// A focusable item on the exam-path screen.
///
/// The screen reveals items progressively: exam types first, then the
/// active branch's choices. Key handling and rendering both derive the
/// visible list from [`AppState::exam_path_items`] so they can never
/// disagree about what the cursor points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamPathItem {
    /// Choose the exam type (regular or resit).
    Type(ExamType),
    /// Select a program by id (regular branch).
    Program(String),
    /// Select an academic year by id (regular branch).
    Year(String),
    /// Open the roster file picker (resit branch).
    PickRoster,
    /// Unbind the current roster file (resit branch).
    ClearRoster,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current wizard step
    pub step: WizardStep,
    /// Injected reference catalog (read-only)
    pub catalog: Catalog,
    /// Accumulated configuration, extended by each committed step
    pub config: WizardConfig,
    /// Exam-path step controller (step-local selection state)
    pub exam_path: ExamPathSelector,
    /// Section-selection step controller (step-local selection state)
    pub sections: SectionCapacityValidator,
    /// Cursor position within the active screen's item list
    pub cursor: usize,
    /// Status message for user feedback
    pub status_message: String,
    /// Roster file picker overlay, when open
    pub file_picker: Option<FilePickerState>,
    /// Set when the user asks to leave the wizard
    pub should_quit: bool,
    /// Set when the wizard ran to completion (summary confirmed)
    pub completed: bool,
}

impl AppState {
    /// Create the initial state for a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            step: WizardStep::default(),
            catalog,
            config: WizardConfig::default(),
            exam_path: ExamPathSelector::new(),
            sections: SectionCapacityValidator::new(),
            cursor: 0,
            status_message: "Welcome to the exam sitting wizard".to_string(),
            file_picker: None,
            should_quit: false,
            completed: false,
        }
    }

    /// The items currently visible on the exam-path screen, in display order.
    pub fn exam_path_items(&self) -> Vec<ExamPathItem> {
        let mut items = vec![
            ExamPathItem::Type(ExamType::Regular),
            ExamPathItem::Type(ExamType::Resit),
        ];

        match self.exam_path.exam_type() {
            Some(ExamType::Regular) => {
                items.extend(
                    self.catalog
                        .programs
                        .iter()
                        .map(|p| ExamPathItem::Program(p.id.clone())),
                );
                if self.exam_path.selected_program().is_some() {
                    items.extend(
                        self.catalog
                            .years
                            .iter()
                            .map(|y| ExamPathItem::Year(y.id.clone())),
                    );
                }
            }
            Some(ExamType::Resit) => {
                items.push(ExamPathItem::PickRoster);
                if self.exam_path.bound_roster().is_some() {
                    items.push(ExamPathItem::ClearRoster);
                }
            }
            None => {}
        }

        items
    }

    /// Number of cursor positions on the active screen.
    pub fn item_count(&self) -> usize {
        match self.step {
            WizardStep::ExamPath => self.exam_path_items().len(),
            WizardStep::Sections => self.catalog.sections.len(),
            WizardStep::Summary => 0,
        }
    }

    /// Keep the cursor within the active screen's item list after the list
    /// shrinks (e.g. switching exam type hides branch items).
    pub fn clamp_cursor(&mut self) {
        let count = self.item_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    /// Gate condition of the active step.
    pub fn can_continue(&self) -> bool {
        match self.step {
            WizardStep::ExamPath => self.exam_path.can_continue(),
            WizardStep::Sections => self.sections.can_continue(&self.catalog),
            WizardStep::Summary => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::RosterFile;

    #[test]
    fn test_initial_state() {
        let state = AppState::new(Catalog::default());
        assert_eq!(state.step, WizardStep::ExamPath);
        assert_eq!(state.cursor, 0);
        assert!(!state.should_quit);
        assert!(!state.completed);
        assert!(state.file_picker.is_none());
    }

    #[test]
    fn test_exam_path_items_start_with_types_only() {
        let state = AppState::new(Catalog::default());
        assert_eq!(
            state.exam_path_items(),
            vec![
                ExamPathItem::Type(ExamType::Regular),
                ExamPathItem::Type(ExamType::Resit),
            ]
        );
    }

    #[test]
    fn test_exam_path_items_reveal_programs_then_years() {
        let mut state = AppState::new(Catalog::default());
        state.exam_path.choose(ExamType::Regular);

        let items = state.exam_path_items();
        assert_eq!(items.len(), 2 + 2); // types + programs, years hidden
        assert!(items.contains(&ExamPathItem::Program("bit".to_string())));

        state.exam_path.select_program("bit");
        let items = state.exam_path_items();
        assert_eq!(items.len(), 2 + 2 + 3); // years revealed
        assert!(items.contains(&ExamPathItem::Year("3".to_string())));
    }

    #[test]
    fn test_exam_path_items_resit_branch() {
        let mut state = AppState::new(Catalog::default());
        state.exam_path.choose(ExamType::Resit);

        let items = state.exam_path_items();
        assert!(items.contains(&ExamPathItem::PickRoster));
        assert!(!items.contains(&ExamPathItem::ClearRoster));

        state.exam_path.bind_roster(RosterFile::new("/tmp/resit.csv"));
        assert!(state.exam_path_items().contains(&ExamPathItem::ClearRoster));
    }

    #[test]
    fn test_empty_catalog_leaves_gate_closed() {
        let mut state = AppState::new(Catalog::empty());
        state.exam_path.choose(ExamType::Regular);
        // No programs to select: only the two type rows are visible and the
        // gate can never open.
        assert_eq!(state.exam_path_items().len(), 2);
        assert!(!state.can_continue());
    }

    #[test]
    fn test_clamp_cursor_after_list_shrinks() {
        let mut state = AppState::new(Catalog::default());
        state.exam_path.choose(ExamType::Regular);
        state.exam_path.select_program("bit");
        state.cursor = state.item_count() - 1;

        state.exam_path.choose(ExamType::Resit);
        state.clamp_cursor();
        assert!(state.cursor < state.item_count());
    }
}
