//! Exam path selection step.
//!
//! Resolves a branching choice (regular sitting with program + year, or
//! resit sitting with an uploaded roster) into a normalized [`ExamPath`] and
//! decides when the step may commit. The two branches are mutually
//! exclusive: switching exam type discards the other branch's sub-state, so
//! a stale program selection can never leak into a resit configuration and
//! vice versa.

use tracing::debug;

use super::{ExamPath, ExamType, RosterFile, StepSink, WizardConfig};

/// In-progress branch state. Sub-selections live inside the active variant,
/// making "program and roster both set" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum PathSelection {
    #[default]
    Unset,
    Regular {
        program: Option<String>,
        year: Option<String>,
    },
    Resit {
        roster: Option<RosterFile>,
    },
}

/// Step controller for the exam-path screen.
///
/// Pure, single-threaded state: every operation is an immediate
/// recomputation triggered by a discrete user action.
#[derive(Debug, Clone, Default)]
pub struct ExamPathSelector {
    selection: PathSelection,
}

impl ExamPathSelector {
    /// New selector with no exam type chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild in-progress state from an already-committed configuration,
    /// for when the user navigates back into this step.
    pub fn from_config(config: &WizardConfig) -> Self {
        let selection = match &config.exam_path {
            None => PathSelection::Unset,
            Some(ExamPath::Regular { program, year }) => PathSelection::Regular {
                program: Some(program.clone()),
                year: Some(year.clone()),
            },
            Some(ExamPath::Resit { roster }) => PathSelection::Resit {
                roster: Some(roster.clone()),
            },
        };
        Self { selection }
    }

    /// The currently chosen exam type, if any.
    pub fn exam_type(&self) -> Option<ExamType> {
        match &self.selection {
            PathSelection::Unset => None,
            PathSelection::Regular { .. } => Some(ExamType::Regular),
            PathSelection::Resit { .. } => Some(ExamType::Resit),
        }
    }

    /// Choose the exam type.
    ///
    /// Switching to a different type discards the previous branch's
    /// sub-state. Re-choosing the already-active type keeps it.
    pub fn choose(&mut self, exam_type: ExamType) {
        if self.exam_type() == Some(exam_type) {
            return;
        }
        debug!(%exam_type, "exam type switched, discarding branch state");
        self.selection = match exam_type {
            ExamType::Regular => PathSelection::Regular {
                program: None,
                year: None,
            },
            ExamType::Resit => PathSelection::Resit { roster: None },
        };
    }

    /// Select a program (regular branch only; otherwise unreachable and
    /// ignored).
    pub fn select_program(&mut self, id: impl Into<String>) {
        if let PathSelection::Regular { program, .. } = &mut self.selection {
            *program = Some(id.into());
        }
    }

    /// Select an academic year (regular branch only).
    pub fn select_year(&mut self, id: impl Into<String>) {
        if let PathSelection::Regular { year, .. } = &mut self.selection {
            *year = Some(id.into());
        }
    }

    pub fn selected_program(&self) -> Option<&str> {
        match &self.selection {
            PathSelection::Regular { program, .. } => program.as_deref(),
            _ => None,
        }
    }

    pub fn selected_year(&self) -> Option<&str> {
        match &self.selection {
            PathSelection::Regular { year, .. } => year.as_deref(),
            _ => None,
        }
    }

    /// Bind a roster file (resit branch only). Rebinding replaces the
    /// previous file.
    pub fn bind_roster(&mut self, file: RosterFile) {
        if let PathSelection::Resit { roster } = &mut self.selection {
            debug!(file = %file.file_name(), "roster bound");
            *roster = Some(file);
        }
    }

    /// Unbind the roster file, if any.
    pub fn clear_roster(&mut self) {
        if let PathSelection::Resit { roster } = &mut self.selection {
            *roster = None;
        }
    }

    pub fn bound_roster(&self) -> Option<&RosterFile> {
        match &self.selection {
            PathSelection::Resit { roster } => roster.as_ref(),
            _ => None,
        }
    }

    /// Gate condition for progression.
    ///
    /// True iff (regular AND program set AND year set) OR
    /// (resit AND roster bound). False whenever the exam type is unset.
    pub fn can_continue(&self) -> bool {
        self.build_path().is_some()
    }

    /// The normalized exam path, if the gate condition holds.
    fn build_path(&self) -> Option<ExamPath> {
        match &self.selection {
            PathSelection::Unset => None,
            PathSelection::Regular { program, year } => Some(ExamPath::Regular {
                program: program.clone()?,
                year: year.clone()?,
            }),
            PathSelection::Resit { roster } => Some(ExamPath::Resit {
                roster: roster.clone()?,
            }),
        }
    }

    /// Commit the step: extend `config` with the exam path, hand the merged
    /// configuration to the sink, then advance, in that order, synchronously.
    ///
    /// If the gate condition is false, nothing is emitted and the sink is
    /// not touched; returns whether the commit happened.
    pub fn commit<S: StepSink>(&self, config: &WizardConfig, sink: &mut S) -> bool {
        let Some(path) = self.build_path() else {
            return false;
        };

        let mut merged = config.clone();
        merged.exam_path = Some(path);
        sink.update(&merged);
        sink.next();
        true
    }
}
