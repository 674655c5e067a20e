//! Header and navigation bar rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::AppState;
use crate::theme::{Colors, Styles};
use crate::wizard::WizardStep;

/// Renders the wizard title and step indicator.
pub struct HeaderRenderer;

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the title line with the step indicator.
    pub fn render_title(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let title = Line::from(vec![
            Span::styled("Exam Sitting Wizard", Styles::title()),
            Span::raw("  "),
            Span::styled(
                format!(
                    "Step {} of {}: {}",
                    state.step.step_number(),
                    WizardStep::TOTAL_STEPS,
                    state.step.title()
                ),
                Style::default().fg(Colors::FG_SECONDARY),
            ),
        ]);

        let header = Paragraph::new(title)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        f.render_widget(header, area);
    }
}

/// Render the bottom navigation bar with contextual key hints.
///
/// The Continue hint is dimmed whenever the active step's gate is closed;
/// the key itself is a no-op in that case.
pub fn render_nav_bar(f: &mut Frame, state: &AppState, area: Rect) {
    let mut spans = vec![
        Span::styled(" [j/k] ", Styles::key_hint()),
        Span::raw("Navigate  "),
        Span::styled(" [Enter] ", Styles::key_hint()),
        Span::raw("Select  "),
    ];

    if state.step == WizardStep::Sections {
        spans.push(Span::styled(" [a] ", Styles::key_hint()));
        spans.push(Span::raw("All  "));
        spans.push(Span::styled(" [d] ", Styles::key_hint()));
        spans.push(Span::raw("None  "));
    }

    let back_style = if state.step.can_go_back() {
        Styles::key_hint()
    } else {
        Styles::key_hint_disabled()
    };
    spans.push(Span::styled(" [←] ", back_style));
    spans.push(Span::raw("Previous  "));

    let (continue_label, continue_style) = match state.step {
        WizardStep::Summary => ("Finish", Styles::key_hint()),
        _ if state.can_continue() => ("Continue", Styles::key_hint()),
        _ => ("Continue", Styles::key_hint_disabled()),
    };
    spans.push(Span::styled(
        if state.step == WizardStep::Summary {
            " [Enter] "
        } else {
            " [→] "
        },
        continue_style,
    ));
    spans.push(Span::raw(format!("{}  ", continue_label)));

    spans.push(Span::styled(" [q] ", Styles::key_hint()));
    spans.push(Span::raw("Quit"));

    let bar = Paragraph::new(Line::from(spans)).style(
        Style::default()
            .fg(Colors::FG_SECONDARY)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(bar, area);
}
