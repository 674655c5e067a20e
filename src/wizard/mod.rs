//! Wizard state machine for exam-sitting configuration.
//!
//! The wizard runs as a linear sequence of steps. Each step owns its
//! ephemeral selection state and a gate condition; only when the gate holds
//! can the step commit, which extends the accumulated [`WizardConfig`] and
//! advances the wizard. Data flows strictly forward: configuration is only
//! ever extended, never mutated backwards.
//!
//! # Step Flow
//!
//! ```text
//! ExamPath -> Sections -> Summary
//! ```
//!
//! # Invariants
//!
//! - Exactly one of the regular branch (program + year) or the resit branch
//!   (roster file) is present in a committed configuration, enforced by the
//!   [`ExamPath`] sum type.
//! - A step calls [`StepSink::update`] with the fully-merged configuration
//!   before [`StepSink::next`], or calls neither.

pub mod exam_path;
pub mod sections;

pub use exam_path::ExamPathSelector;
pub use sections::{CapacityStatus, SectionCapacityValidator};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum::{Display, EnumIter, EnumString};

/// Exam sitting type chosen on the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ExamType {
    /// Standard examination for enrolled students.
    Regular,
    /// Supplementary sitting for students retaking an exam.
    Resit,
}

/// Opaque handle to an uploaded resit roster file.
///
/// The wizard only binds the file; parsing and format validation belong to a
/// downstream collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Branch-specific exam-path configuration.
///
/// Modeled as a tagged variant so the regular fields (program, year) and the
/// resit field (roster) can never coexist. Serialization carries exactly the
/// active branch's fields; the other branch's fields are absent, not null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "examType", rename_all = "lowercase")]
pub enum ExamPath {
    Regular {
        program: String,
        year: String,
    },
    Resit {
        #[serde(rename = "uploadedFile")]
        roster: RosterFile,
    },
}

impl ExamPath {
    pub fn exam_type(&self) -> ExamType {
        match self {
            Self::Regular { .. } => ExamType::Regular,
            Self::Resit { .. } => ExamType::Resit,
        }
    }
}

/// Accumulating wizard configuration.
///
/// Built incrementally across steps: each commit extends it with that step's
/// fields and leaves everything already committed untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardConfig {
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub exam_path: Option<ExamPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
}

impl WizardConfig {
    /// The committed exam type, if the exam-path step has committed.
    pub fn exam_type(&self) -> Option<ExamType> {
        self.exam_path.as_ref().map(ExamPath::exam_type)
    }
}

/// Collaborators a step invokes when its gate allows progression.
///
/// `update` receives the fully-merged configuration and must be called
/// before `next`. `previous` carries no precondition and never discards
/// committed configuration.
pub trait StepSink {
    fn update(&mut self, config: &WizardConfig);
    fn next(&mut self);
    fn previous(&mut self);
}

/// The wizard's step sequence.
///
/// Steps progress linearly. Going back is always allowed and only returns
/// focus to the prior step; committed configuration is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Exam type plus program/year or roster selection.
    #[default]
    ExamPath,
    /// Section multi-select under the room-capacity ceiling.
    Sections,
    /// Review of the accumulated configuration.
    Summary,
}

impl WizardStep {
    /// Get the next step in the wizard sequence.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::ExamPath => Some(Self::Sections),
            Self::Sections => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    /// Get the previous step in the wizard sequence.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::ExamPath => None,
            Self::Sections => Some(Self::ExamPath),
            Self::Summary => Some(Self::Sections),
        }
    }

    /// Check if the current step allows going back.
    pub fn can_go_back(&self) -> bool {
        self.previous().is_some()
    }

    /// Display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExamPath => "Select Program and Year",
            Self::Sections => "Select Sections",
            Self::Summary => "Configuration Summary",
        }
    }

    /// Step number (1-indexed for display).
    pub fn step_number(&self) -> usize {
        match self {
            Self::ExamPath => 1,
            Self::Sections => 2,
            Self::Summary => 3,
        }
    }

    /// Total number of steps.
    pub const TOTAL_STEPS: usize = 3;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_step_transitions() {
        assert_eq!(WizardStep::ExamPath.next(), Some(WizardStep::Sections));
        assert_eq!(WizardStep::Sections.next(), Some(WizardStep::Summary));
        assert_eq!(WizardStep::Summary.next(), None);

        assert_eq!(WizardStep::ExamPath.previous(), None);
        assert_eq!(WizardStep::Summary.previous(), Some(WizardStep::Sections));
        assert!(!WizardStep::ExamPath.can_go_back());
        assert!(WizardStep::Sections.can_go_back());
    }

    #[test]
    fn test_exam_type_parsing() {
        assert_eq!(ExamType::from_str("regular").unwrap(), ExamType::Regular);
        assert_eq!(ExamType::from_str("resit").unwrap(), ExamType::Resit);
        assert_eq!(ExamType::Regular.to_string(), "regular");
    }

    #[test]
    fn test_regular_config_serialization_omits_roster() {
        let config = WizardConfig {
            exam_path: Some(ExamPath::Regular {
                program: "bit".to_string(),
                year: "1".to_string(),
            }),
            sections: None,
        };

        let value = serde_json::to_value(&config).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["examType"], "regular");
        assert_eq!(obj["program"], "bit");
        assert_eq!(obj["year"], "1");
        assert!(!obj.contains_key("uploadedFile"));
        assert!(!obj.contains_key("sections"));
    }

    #[test]
    fn test_resit_config_serialization_omits_program() {
        let config = WizardConfig {
            exam_path: Some(ExamPath::Resit {
                roster: RosterFile::new("/tmp/resit.csv"),
            }),
            sections: None,
        };

        let value = serde_json::to_value(&config).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["examType"], "resit");
        assert_eq!(obj["uploadedFile"], "/tmp/resit.csv");
        assert!(!obj.contains_key("program"));
        assert!(!obj.contains_key("year"));
    }

    #[test]
    fn test_empty_config_serializes_to_empty_object() {
        let config = WizardConfig::default();
        let value = serde_json::to_value(&config).unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = WizardConfig {
            exam_path: Some(ExamPath::Regular {
                program: "bba".to_string(),
                year: "3".to_string(),
            }),
            sections: Some(vec!["C1".to_string(), "C2".to_string()]),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: WizardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_roster_file_name() {
        let roster = RosterFile::new("/data/rosters/resit_2026.xlsx");
        assert_eq!(roster.file_name(), "resit_2026.xlsx");
    }
}
