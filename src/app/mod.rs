//! Application module
//!
//! Contains the main application struct, the event loop, and key dispatch.
//! The step controllers in [`crate::wizard`] make all progression decisions;
//! this module only routes discrete user actions to them and applies the
//! transitions they emit through the [`StepSink`] contract.

mod state;

// Re-export state types for external use
pub use state::{AppState, ExamPathItem};

use crate::catalog::Catalog;
use crate::ui::UiRenderer;
use crate::ui::file_picker::FilePickerState;
use crate::wizard::{
    ExamPathSelector, RosterFile, SectionCapacityValidator, StepSink, WizardConfig, WizardStep,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::Backend};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Buffered step transition.
///
/// Step controllers call the sink synchronously during `commit`; the
/// recorded configuration and navigation are applied to the app state once
/// the controller returns, keeping the controllers free of any app
/// knowledge.
#[derive(Debug, Default)]
struct PendingTransition {
    config: Option<WizardConfig>,
    advance: bool,
    retreat: bool,
}

impl StepSink for PendingTransition {
    fn update(&mut self, config: &WizardConfig) {
        self.config = Some(config.clone());
    }

    fn next(&mut self) {
        self.advance = true;
    }

    fn previous(&mut self) {
        self.retreat = true;
    }
}

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
}

impl App {
    /// Create a new application instance for the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::new(catalog),
            ui_renderer: UiRenderer::new(),
        }
    }

    /// Run the main event loop until the user quits or finishes the wizard.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting wizard event loop");

        loop {
            terminal.draw(|f| self.ui_renderer.render(f, &self.state))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key);
            }

            if self.state.should_quit {
                break;
            }
        }

        info!(completed = self.state.completed, "Wizard event loop ended");
        Ok(())
    }

    /// The final configuration, if the wizard ran to completion.
    pub fn completed_config(&self) -> Option<&WizardConfig> {
        self.state.completed.then_some(&self.state.config)
    }

    /// Read-only view of the application state (for tests).
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.should_quit = true;
            return;
        }

        if self.state.file_picker.is_some() {
            self.handle_picker_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.state.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => {
                if self.state.cursor > 0 {
                    self.state.cursor -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.state.item_count();
                if count > 0 && self.state.cursor < count - 1 {
                    self.state.cursor += 1;
                }
            }
            KeyCode::Left | KeyCode::Char('p') => self.go_previous(),
            KeyCode::Right | KeyCode::Char('n') => self.try_continue(),
            _ => match self.state.step {
                WizardStep::ExamPath => self.handle_exam_path_key(key),
                WizardStep::Sections => self.handle_sections_key(key),
                WizardStep::Summary => self.handle_summary_key(key),
            },
        }
    }

    /// Keys routed to the roster file picker overlay.
    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.state.file_picker = None;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(picker) = self.state.file_picker.as_mut() {
                    picker.select_previous();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(picker) = self.state.file_picker.as_mut() {
                    picker.select_next();
                }
            }
            KeyCode::Enter => {
                let picked = self.state.file_picker.as_mut().and_then(|p| p.activate());
                if let Some(path) = picked {
                    self.bind_roster(path);
                }
            }
            _ => {}
        }
    }

    fn bind_roster(&mut self, path: PathBuf) {
        let roster = RosterFile::new(path);
        self.state.status_message = format!("Roster bound: {}", roster.file_name());
        self.state.exam_path.bind_roster(roster);
        self.state.file_picker = None;
        self.state.clamp_cursor();
    }

    fn handle_exam_path_key(&mut self, key: KeyEvent) {
        if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            return;
        }

        let items = self.state.exam_path_items();
        let Some(item) = items.get(self.state.cursor).cloned() else {
            return;
        };

        match item {
            ExamPathItem::Type(exam_type) => {
                debug!(%exam_type, "exam type chosen");
                self.state.exam_path.choose(exam_type);
                self.state.clamp_cursor();
            }
            ExamPathItem::Program(id) => self.state.exam_path.select_program(id),
            ExamPathItem::Year(id) => self.state.exam_path.select_year(id),
            ExamPathItem::PickRoster => {
                let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                self.state.file_picker = Some(FilePickerState::new(dir));
            }
            ExamPathItem::ClearRoster => {
                self.state.exam_path.clear_roster();
                self.state.clamp_cursor();
            }
        }
    }

    fn handle_sections_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(section) = self.state.catalog.sections.get(self.state.cursor) {
                    let id = section.id.clone();
                    self.state.sections.toggle(&id);
                }
            }
            KeyCode::Char('a') => {
                let catalog = self.state.catalog.clone();
                self.state.sections.select_all(&catalog);
            }
            KeyCode::Char('d') => self.state.sections.deselect_all(),
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.finish();
        }
    }

    /// Ask the active step to commit. The step's gate decides; a closed gate
    /// means nothing happens (silently disabled, not an error).
    fn try_continue(&mut self) {
        let mut transition = PendingTransition::default();
        let committed = match self.state.step {
            WizardStep::ExamPath => self
                .state
                .exam_path
                .commit(&self.state.config, &mut transition),
            WizardStep::Sections => {
                self.state
                    .sections
                    .commit(&self.state.catalog, &self.state.config, &mut transition)
            }
            WizardStep::Summary => {
                self.finish();
                return;
            }
        };

        if committed {
            self.apply_transition(transition);
        }
    }

    /// Navigate back. No precondition; committed configuration is preserved.
    fn go_previous(&mut self) {
        let mut transition = PendingTransition::default();
        transition.previous();
        self.apply_transition(transition);
    }

    /// Apply a buffered transition: configuration update first, then
    /// navigation, matching the order the step controller emitted them.
    fn apply_transition(&mut self, transition: PendingTransition) {
        if let Some(config) = transition.config {
            self.state.config = config;
        }

        if transition.advance {
            match self.state.step.next() {
                Some(next) => self.enter_step(next),
                None => self.finish(),
            }
        } else if transition.retreat
            && let Some(prev) = self.state.step.previous()
        {
            self.enter_step(prev);
        }
    }

    /// Enter a step: rehydrate its controller from the committed
    /// configuration and reset the cursor.
    fn enter_step(&mut self, step: WizardStep) {
        info!(step = step.title(), "entering wizard step");
        self.state.step = step;
        match step {
            WizardStep::ExamPath => {
                self.state.exam_path = ExamPathSelector::from_config(&self.state.config);
            }
            WizardStep::Sections => {
                self.state.sections = SectionCapacityValidator::from_config(&self.state.config);
            }
            WizardStep::Summary => {}
        }
        self.state.cursor = 0;
    }

    fn finish(&mut self) {
        info!("Wizard finished");
        self.state.completed = true;
        self.state.should_quit = true;
    }
}
