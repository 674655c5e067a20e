//! Terminal UI composition.
//!
//! The renderer owns no wizard state; it draws whatever the [`AppState`]
//! holds. Layout is a fixed three-row split: header, active step screen,
//! navigation bar. The roster file picker, when open, is drawn last as a
//! centered overlay.

pub mod file_picker;
mod header;
mod screens;

pub use header::HeaderRenderer;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::AppState;
use crate::wizard::WizardStep;

/// Top-level renderer, one instance per [`crate::app::App`].
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Draw a full frame for the current application state.
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title + step indicator
                Constraint::Min(1),    // Step screen
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        self.header.render_title(f, chunks[0], state);

        match state.step {
            WizardStep::ExamPath => screens::render_exam_path_screen(f, chunks[1], state),
            WizardStep::Sections => screens::render_sections_screen(f, chunks[1], state),
            WizardStep::Summary => screens::render_summary_screen(f, chunks[1], state),
        }

        header::render_nav_bar(f, state, chunks[2]);

        if let Some(picker) = &state.file_picker {
            file_picker::render_file_picker(f, picker);
        }
    }
}
