//! examplan library
//!
//! Core functionality for the exam-logistics configuration wizard: the
//! selection-and-capacity state machine in [`wizard`], the injected
//! reference data in [`catalog`], and the ratatui shell in [`app`]/[`ui`].

pub mod app;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod theme;
pub mod ui;
pub mod wizard;

// Re-export main types for convenience
pub use catalog::{AcademicYear, Catalog, Program, Section};
pub use error::ExamPlanError;
pub use wizard::{
    CapacityStatus, ExamPath, ExamPathSelector, ExamType, RosterFile, SectionCapacityValidator,
    StepSink, WizardConfig, WizardStep,
};
